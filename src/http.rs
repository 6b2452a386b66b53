use url::Url;

use crate::feed::FeedError;

pub(crate) fn http_client() -> anyhow::Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .user_agent(format!("rss_reader/{}", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {}", e))
}

/// Fetches the feed body as text. Rejects malformed URLs before any network
/// I/O; a non-success status counts as a fetch failure.
pub(crate) fn fetch_feed(
    client: &reqwest::blocking::Client,
    source: &str,
) -> Result<String, FeedError> {
    let url = Url::parse(source)
        .map_err(|e| FeedError::Fetch(format!("invalid URL {:?}: {}", source, e)))?;
    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| FeedError::Fetch(e.to_string()))?;
    response.text().map_err(|e| FeedError::Fetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_a_fetch_error() {
        let client = http_client().unwrap();

        let err = fetch_feed(&client, "not a url").unwrap_err();

        let diagnostic = err.to_string();
        assert!(diagnostic.starts_with("An error occurred while requesting the URL:"));
        assert!(diagnostic.contains("not a url"));
    }
}
