use std::env;
use std::path::PathBuf;

/// Journal settings from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalConfig {
    pub path: Option<PathBuf>,
}

impl JournalConfig {
    /// Reads `BLOCKFALL_JOURNAL_PATH`; blank means disabled
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = lookup("BLOCKFALL_JOURNAL_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });
        Self { path }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some()
    }
}
