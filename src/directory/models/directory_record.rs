pub const NAME_COLUMN: usize = 0;
pub const CATEGORY_COLUMN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub name: String,
    pub category: String,
}

impl DirectoryRecord {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        DirectoryRecord {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Builds a record from a sheet row. Trailing empty cells are omitted by
    /// the Sheets API, so a short row gets an empty category. Rows without a
    /// name are skipped.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let name = row.get(NAME_COLUMN)?.trim();
        if name.is_empty() {
            return None;
        }

        let category = row
            .get(CATEGORY_COLUMN)
            .map(|c| c.trim())
            .unwrap_or_default();

        Some(DirectoryRecord::new(name, category))
    }
}
