use crate::app::models::api_error::ApiError;

use super::{models::directory_record::DirectoryRecord, source::DirectorySource};

/// Re-fetches the whole directory and keeps the records whose category equals
/// `key`, ignoring case and surrounding whitespace. An empty key matches
/// nothing.
pub async fn find_records_by_category(
    source: &dyn DirectorySource,
    key: &str,
) -> Result<Vec<DirectoryRecord>, ApiError> {
    let key = key.trim();
    if key.is_empty() {
        return Ok(Vec::new());
    }

    let records = source.fetch_records().await?;
    tracing::debug!("fetched {} directory record(s)", records.len());

    let key = key.to_lowercase();

    Ok(records
        .into_iter()
        .filter(|record| record.category.to_lowercase() == key)
        .collect())
}
