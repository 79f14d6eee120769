use async_trait::async_trait;

use crate::app::models::api_error::ApiError;

use super::models::directory_record::DirectoryRecord;

/// A tabular data source holding name/category rows.
///
/// Implementations fetch the full range on every call; nothing is cached.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<DirectoryRecord>, ApiError>;
}
