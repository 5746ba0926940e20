use thiserror::Error;

/// Parse failures raised while reading page markup, storage, or config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FolioError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
    #[error("invalid skill level `{0}`")]
    InvalidSkillLevel(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Persistence failure from a [`crate::PreferenceStore`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
}
