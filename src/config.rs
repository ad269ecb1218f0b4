//! Application Configuration

use log::LevelFilter;

use crate::api::DEFAULT_API_BASE;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Host the JSON endpoints are fetched from
    pub api_base: String,
    /// Host that post permalinks and description links resolve against
    pub link_base: String,
    /// Console log threshold
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            link_base: DEFAULT_API_BASE.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}
