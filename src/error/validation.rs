use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported URL scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Invalid status code {status}. Expected 100-999.")]
    InvalidStatusCode { status: u16 },
    #[cfg(test)]
    #[error("{0}")]
    TestExpectation(String),
}

#[cfg(test)]
impl From<&str> for ValidationError {
    fn from(value: &str) -> Self {
        ValidationError::TestExpectation(value.to_owned())
    }
}

#[cfg(test)]
impl From<String> for ValidationError {
    fn from(value: String) -> Self {
        ValidationError::TestExpectation(value)
    }
}
