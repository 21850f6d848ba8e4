use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct LogRecord {
    pub timestamp: i64,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}
