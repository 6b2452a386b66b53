mod feed;
mod http;
mod render;

use anyhow::Context;
use clap::Parser;

/// A command-line RSS reader
#[derive(Parser)]
#[command(name = "rss_reader")]
struct Args {
    /// RSS feed URL
    source: String,
    /// Print the feed as JSON
    #[arg(long)]
    json: bool,
    /// Limit the number of items; zero or negative means no limit
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,
}

fn effective_limit(limit: Option<i64>) -> Option<usize> {
    limit.filter(|&n| n > 0).map(|n| n as usize)
}

/// Runs the fetch/parse/render pipeline. Fetch and parse failures come back
/// as `Ok` with their diagnostic line as the output, so the program still
/// prints something and exits cleanly; only a rendering fault is an `Err`.
fn run(args: &Args) -> anyhow::Result<String> {
    let client = http::http_client()?;

    let xml = match http::fetch_feed(&client, &args.source) {
        Ok(xml) => xml,
        Err(e) => return Ok(e.to_string()),
    };

    let record = match feed::rss::parse(&xml, effective_limit(args.limit)) {
        Ok(record) => record,
        Err(e) => return Ok(e.to_string()),
    };

    let lines = render::render(&record, args.json)
        .context("unhandled exception while rendering output")?;
    Ok(lines.join("\n"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let output = run(&args)?;
    println!("{}", output);
    Ok(())
}
