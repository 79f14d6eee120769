use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub google_api_key: String,
    #[serde(default = "default_spreadsheet_id")]
    pub spreadsheet_id: String,
    #[serde(default = "default_spreadsheet_range")]
    pub spreadsheet_range: String,
    #[serde(default = "default_sheets_api_url")]
    pub sheets_api_url: String,

    // an unset secret rejects every webhook instead of failing startup
    pub line_channel_secret: Option<String>,
    pub line_channel_access_token: String,
    #[serde(default = "default_line_api_url")]
    pub line_api_url: String,

    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_spreadsheet_id() -> String {
    "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms".to_string()
}

fn default_spreadsheet_range() -> String {
    "Class Data!A2:E".to_string()
}

fn default_sheets_api_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_line_api_url() -> String {
    "https://api.line.me".to_string()
}

fn default_upstream_timeout_secs() -> u64 {
    5
}
