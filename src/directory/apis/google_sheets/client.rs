use async_trait::async_trait;
use reqwest::Url;

use crate::{
    app::models::api_error::ApiError,
    directory::{
        errors::DirectoryApiError, models::directory_record::DirectoryRecord,
        source::DirectorySource,
    },
};

use super::structs::values_response::ValuesResponse;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: String,
    pub spreadsheet_id: String,
    pub range: String,
}

#[derive(Debug, Clone)]
pub struct GoogleSheetsClient {
    pub config: Config,
    pub http_client: reqwest::Client,
}

impl GoogleSheetsClient {
    pub fn new(config: Config, http_client: reqwest::Client) -> GoogleSheetsClient {
        GoogleSheetsClient {
            config,
            http_client,
        }
    }

    fn values_url(&self) -> Result<Url, ApiError> {
        let Ok(mut url) = Url::parse(&self.config.api_url) else {
            tracing::error!("invalid sheets api url: {}", self.config.api_url);
            return Err(DirectoryApiError::UpstreamUnreachable.value());
        };

        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().extend(&[
                    "v4",
                    "spreadsheets",
                    self.config.spreadsheet_id.as_str(),
                    "values",
                    self.config.range.as_str(),
                ]);
            }
            Err(_) => {
                tracing::error!("sheets api url cannot be a base: {}", self.config.api_url);
                return Err(DirectoryApiError::UpstreamUnreachable.value());
            }
        }

        Ok(url)
    }

    pub async fn get_values(&self) -> Result<ValuesResponse, ApiError> {
        let url = self.values_url()?;

        let result = self
            .http_client
            .get(url)
            .query(&[("key", &self.config.api_key)])
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::error!(%e, "sheets request failed");
                return Err(DirectoryApiError::UpstreamUnreachable.value());
            }
        };

        if !res.status().is_success() {
            let status = res.status();
            tracing::error!("sheets responded with {}: {:?}", status, res.text().await);
            return Err(DirectoryApiError::UpstreamStatus(status).value());
        }

        match res.text().await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(values_response) => Ok(values_response),
                Err(e) => {
                    tracing::error!(%e, %text, "unexpected sheets response");
                    Err(DirectoryApiError::MalformedResponse.value())
                }
            },
            Err(e) => {
                tracing::error!(%e, "failed to read sheets response");
                Err(DirectoryApiError::UpstreamUnreachable.value())
            }
        }
    }
}

#[async_trait]
impl DirectorySource for GoogleSheetsClient {
    async fn fetch_records(&self) -> Result<Vec<DirectoryRecord>, ApiError> {
        let values_response = self.get_values().await?;

        if values_response.values.is_empty() {
            tracing::info!(
                "no data found in {}",
                values_response.range.as_deref().unwrap_or(&self.config.range)
            );
        }

        Ok(values_response
            .values
            .iter()
            .filter_map(|row| DirectoryRecord::from_row(row))
            .collect())
    }
}
