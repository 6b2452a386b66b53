use rss::{Channel, Item};

use super::{FeedError, FeedRecord, ItemRecord};

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn map_rss_error(err: rss::Error) -> FeedError {
    match err {
        rss::Error::Utf8(e) => FeedError::Unexpected(e.to_string()),
        other => FeedError::Parse(other.to_string()),
    }
}

/// All distinct `<category>` texts under the channel, including the ones
/// nested in items, in document order. First occurrence wins; empty text
/// counts as absent.
fn collect_categories(channel: &Channel) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    let channel_level = channel.categories().iter();
    let item_level = channel.items().iter().flat_map(|item| item.categories());
    for category in channel_level.chain(item_level) {
        let Some(name) = non_empty(category.name()) else {
            continue;
        };
        if !categories.contains(&name) {
            categories.push(name);
        }
    }
    categories
}

fn item_record(item: &Item) -> ItemRecord {
    ItemRecord {
        title: item.title().and_then(non_empty),
        author: item.author().and_then(non_empty),
        pub_date: item.pub_date().and_then(non_empty),
        link: item.link().and_then(non_empty),
        category: item
            .categories()
            .first()
            .and_then(|c| non_empty(c.name())),
        description: item.description().and_then(non_empty),
    }
}

/// Parses an RSS 2.0 document into a [`FeedRecord`].
///
/// Items with no recognized field at all are dropped and do not count
/// toward `limit`. The function never panics on bad input; malformed XML
/// comes back as a [`FeedError::Parse`] diagnostic.
pub fn parse(xml: &str, limit: Option<usize>) -> Result<FeedRecord, FeedError> {
    let channel = Channel::read_from(xml.as_bytes()).map_err(map_rss_error)?;

    let items: Vec<ItemRecord> = channel
        .items()
        .iter()
        .map(item_record)
        .filter(|item| !item.is_blank())
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    Ok(FeedRecord {
        title: non_empty(channel.title()),
        link: non_empty(channel.link()),
        last_build_date: channel.last_build_date().and_then(non_empty),
        pub_date: channel.pub_date().and_then(non_empty),
        language: channel.language().and_then(non_empty),
        categories: collect_categories(&channel),
        managing_editor: channel.managing_editor().and_then(non_empty),
        description: non_empty(channel.description()),
        items,
    })
}
