/// Query parameters for the search endpoint
#[derive(Debug, Default)]
pub struct SearchQuery {
    /// Case-insensitive substring of the project name.
    /// Absent is the same as empty, which matches every project.
    pub keyword: Option<String>,
}

impl SearchQuery {
    /// Build from decoded query pairs. When `keyword` repeats, the first
    /// value wins and the rest are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let keyword = pairs
            .into_iter()
            .find(|(name, _)| name == "keyword")
            .map(|(_, value)| value);

        Self { keyword }
    }

    pub fn keyword(&self) -> &str {
        self.keyword.as_deref().unwrap_or_default()
    }
}
