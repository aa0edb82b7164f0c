use thiserror::Error;

/// Errors from strict parsing of option names and values.
///
/// Building and querying an [`OutputProfile`](crate::OutputProfile) never
/// fails; these only come up when a caller asks for strict parsing through
/// [`FromStr`](std::str::FromStr).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The value isn't one of the names the option accepts.
    #[error("unknown {option} value: {value:?}")]
    UnknownOptionValue { option: &'static str, value: String },
    /// There is no option by this name.
    #[error("unknown option: {0:?}")]
    UnknownOption(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::UnknownOptionValue {
            option: "self-closing style",
            value: "sgml".to_string(),
        };
        assert_eq!(err.to_string(), r#"unknown self-closing style value: "sgml""#);
        assert_eq!(
            Error::UnknownOption("tabs".to_string()).to_string(),
            r#"unknown option: "tabs""#
        );
    }
}
