use thiserror::Error;

/// Problems found while building a [`MotionConfig`](crate::MotionConfig)
/// from markup attributes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("missing required attribute `{0}`")]
    Missing(&'static str),
    #[error("attribute `{name}` is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("attribute `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    #[error("attribute `{name}` is not a boolean: {value:?}")]
    NotABool { name: &'static str, value: String },
}
