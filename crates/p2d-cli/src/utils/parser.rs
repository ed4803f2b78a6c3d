use poscar2data::engine::project::ProjectionFrame;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    MissingSeparator(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected 'true' or 'false'.")]
    InvalidBool { key: String, value: String },

    #[error("Invalid integer value for {key}: '{value}'.")]
    InvalidInteger { key: String, value: String },

    #[error("Invalid frame for {key}: '{value}'. Expected 'basis' or 'box'.")]
    InvalidFrame { key: String, value: String },
}

/// Splits a `KEY=VALUE` override at the first `=`. The value may itself
/// contain `=` and may be empty.
pub fn split_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::MissingSeparator(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value))
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

pub fn parse_usize(key: &str, value: &str) -> Result<usize, ParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger {
            key: key.to_string(),
            value: value.to_string(),
        })
}

pub fn parse_frame(key: &str, value: &str) -> Result<ProjectionFrame, ParseError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "basis" => Ok(ProjectionFrame::Basis),
        "box" => Ok(ProjectionFrame::Box),
        _ => Err(ParseError::InvalidFrame {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_key_value_splits_at_first_equals() {
        assert_eq!(
            split_key_value("output.header=a=b").unwrap(),
            ("output.header", "a=b")
        );
        assert_eq!(
            split_key_value(" discovery.suffix =-POSCAR").unwrap(),
            ("discovery.suffix", "-POSCAR")
        );
        assert_eq!(split_key_value("output.header=").unwrap(), ("output.header", ""));
    }

    #[test]
    fn split_key_value_rejects_malformed_pairs() {
        assert_eq!(
            split_key_value("output.precision"),
            Err(ParseError::MissingSeparator("output.precision".to_string()))
        );
        assert_eq!(
            split_key_value("=12"),
            Err(ParseError::EmptyKey("=12".to_string()))
        );
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("k", "true"), Ok(true));
        assert_eq!(parse_bool("k", "No"), Ok(false));
        assert_eq!(parse_bool("k", "1"), Ok(true));
        assert!(matches!(
            parse_bool("batch.parallel", "maybe"),
            Err(ParseError::InvalidBool { .. })
        ));
    }

    #[test]
    fn parse_usize_and_frame() {
        assert_eq!(parse_usize("output.precision", " 8 "), Ok(8));
        assert!(parse_usize("output.precision", "-1").is_err());
        assert_eq!(parse_frame("projection.frame", "BOX"), Ok(ProjectionFrame::Box));
        assert_eq!(
            parse_frame("projection.frame", "basis"),
            Ok(ProjectionFrame::Basis)
        );
        assert!(parse_frame("projection.frame", "lab").is_err());
    }
}
