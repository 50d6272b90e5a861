use thiserror::Error;

/// Errors from the layers around the tree.
///
/// The tree operations themselves are total; these cover turning user input
/// and configuration into trees and rendering the results.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid value {input:?}: {reason}")]
    InvalidValue { input: String, reason: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("render failed: {0}")]
    Render(String),
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Parses command-line tokens into tree payloads.
pub fn parse_values(inputs: &[String]) -> TreeResult<Vec<i64>> {
    inputs
        .iter()
        .map(|input| {
            input.trim().parse::<i64>().map_err(|e| TreeError::InvalidValue {
                input: input.clone(),
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let inputs = vec!["1".to_string(), " -2 ".to_string(), "30".to_string()];
        assert_eq!(parse_values(&inputs).unwrap(), vec![1, -2, 30]);
    }

    #[test]
    fn test_parse_values_rejects_garbage() {
        let inputs = vec!["1".to_string(), "x".to_string()];
        let err = parse_values(&inputs).unwrap_err();
        assert!(matches!(err, TreeError::InvalidValue { ref input, .. } if input == "x"));
        assert!(err.to_string().contains("\"x\""));
    }
}
