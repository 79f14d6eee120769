use crate::directory::models::directory_record::DirectoryRecord;

pub const NOT_FOUND_TEXT: &str = "Not found!";

// LINE rejects text messages longer than this
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Reply text for a lookup: the names of every match joined with ", ",
/// or `NOT_FOUND_TEXT` when nothing matched.
pub fn format_reply_text(records: &[DirectoryRecord]) -> String {
    if records.is_empty() {
        return NOT_FOUND_TEXT.to_string();
    }

    let text = records
        .iter()
        .map(|record| record.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ");

    truncate_chars(text, MAX_TEXT_LENGTH)
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => text[..index].to_string(),
        None => text,
    }
}
