use crate::errors::{Result, SimError};

/// Typed parsing of configuration values, reporting the offending line on failure.
pub trait ValueExt {
    fn parse_float(&self) -> Result<f64>;
    fn parse_count(&self) -> Result<usize>;
    fn parse_seed(&self) -> Result<u64>;
    fn parse_flag(&self, line: usize) -> Result<bool>;
}

impl ValueExt for str {
    fn parse_float(&self) -> Result<f64> {
        self.parse().map_err(|e| SimError::FloatParseError {
            string: self.to_string(),
            source: e,
        })
    }

    fn parse_count(&self) -> Result<usize> {
        self.parse().map_err(|e| SimError::IntParseError {
            string: self.to_string(),
            source: e,
        })
    }

    fn parse_seed(&self) -> Result<u64> {
        self.parse().map_err(|e| SimError::IntParseError {
            string: self.to_string(),
            source: e,
        })
    }

    fn parse_flag(&self, line: usize) -> Result<bool> {
        match self.to_ascii_lowercase().as_str() {
            "yes" | "true" | "on" | "1" => Ok(true),
            "no" | "false" | "off" | "0" => Ok(false),
            _ => Err(SimError::BoolParseError {
                value: self.to_string(),
                line,
            }),
        }
    }
}

/// Parses a whitespace separated run of floats, as found inside a data array.
pub trait FloatRunExt {
    fn parse_floats(&self) -> Result<Vec<f64>>;
}

impl FloatRunExt for [&str] {
    fn parse_floats(&self) -> Result<Vec<f64>> {
        self.iter().map(|token| token.parse_float()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!("YES".parse_flag(1).unwrap());
        assert!("on".parse_flag(1).unwrap());
        assert!(!"False".parse_flag(1).unwrap());
        assert!(matches!(
            "maybe".parse_flag(7),
            Err(SimError::BoolParseError { line: 7, .. })
        ));
    }

    #[test]
    fn numbers_report_the_bad_token() {
        assert_eq!("2.5".parse_float().unwrap(), 2.5);
        assert_eq!("12".parse_count().unwrap(), 12);
        match "1.2.3".parse_float() {
            Err(SimError::FloatParseError { string, .. }) => assert_eq!(string, "1.2.3"),
            other => panic!("unexpected {other:?}"),
        }
        let tokens = ["1", "x"];
        assert!(tokens[..].parse_floats().is_err());
    }
}
