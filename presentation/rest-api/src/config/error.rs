/// Startup configuration errors. Any of them aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing: {0}")]
    Missing(&'static str),
    #[error("config.invalid: {0}")]
    Invalid(&'static str),
}
