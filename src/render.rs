use anyhow::Context;

use crate::feed::FeedRecord;

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        lines.push(format!("{}: {}", label, value));
    }
}

fn render_text(record: &FeedRecord) -> Vec<String> {
    let mut lines = Vec::new();

    push_field(&mut lines, "Feed", record.title.as_deref());
    push_field(&mut lines, "Link", record.link.as_deref());
    push_field(
        &mut lines,
        "Last Build Date",
        record.last_build_date.as_deref(),
    );
    push_field(&mut lines, "Publish Date", record.pub_date.as_deref());
    push_field(&mut lines, "Language", record.language.as_deref());
    if !record.categories.is_empty() {
        lines.push(format!("Categories: {}", record.categories.join(" ")));
    }
    push_field(&mut lines, "Editor", record.managing_editor.as_deref());
    push_field(&mut lines, "Description", record.description.as_deref());
    lines.push(String::new());

    for item in &record.items {
        push_field(&mut lines, "Title", item.title.as_deref());
        push_field(&mut lines, "Author", item.author.as_deref());
        push_field(&mut lines, "Published", item.pub_date.as_deref());
        push_field(&mut lines, "Link", item.link.as_deref());
        push_field(&mut lines, "Category", item.category.as_deref());
        lines.push(String::new());
        if let Some(description) = &item.description {
            lines.push(description.clone());
            lines.push(String::new());
        }
    }

    lines
}

/// Turns a record into the ordered output lines: one pretty-printed JSON
/// blob in JSON mode, a labeled listing otherwise. Only present fields are
/// rendered.
pub fn render(record: &FeedRecord, as_json: bool) -> anyhow::Result<Vec<String>> {
    if as_json {
        let json = serde_json::to_string_pretty(record)
            .context("failed to serialize the feed as JSON")?;
        Ok(vec![json])
    } else {
        Ok(render_text(record))
    }
}
