use serde::Deserialize;

// https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values
#[derive(Debug, Deserialize)]
pub struct ValuesResponse {
    #[serde(rename(deserialize = "range"))]
    pub range: Option<String>,
    // omitted by the API when the range is empty
    #[serde(rename(deserialize = "values"), default)]
    pub values: Vec<Vec<String>>,
}
