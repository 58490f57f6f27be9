//! Text encodings of the value types stored in environment variables.

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::duration::{Duration, DurationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid boolean {0:?}")]
    Bool(String),

    #[error(transparent)]
    Duration(#[from] DurationError),

    #[error("invalid float {input:?}: {source}")]
    Float {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("float {0:?} is out of range")]
    FloatRange(String),

    #[error("invalid integer {input:?}: {source}")]
    Int {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("unsigned integer {0:?} must not carry a sign")]
    Sign(String),
}

/// A type that can be stored in an environment variable.
///
/// `to_env` produces the canonical text and `parse_env` must accept it
/// back unchanged.
pub trait EnvValue: Sized {
    /// Name used in error messages, e.g. `"duration"`.
    const KIND: &'static str;

    /// What a lookup yields when the variable is absent. `None` makes the
    /// absence an error for required lookups.
    const ABSENT: Option<Self> = None;

    /// Whether a failed parse should be logged by optional lookups.
    const LOG_PARSE_FAILURE: bool = true;

    fn parse_env(raw: &str) -> Result<Self, ParseError>;

    fn to_env(&self) -> String;
}

impl EnvValue for String {
    const KIND: &'static str = "string";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_string())
    }

    fn to_env(&self) -> String {
        self.clone()
    }
}

/// An absent variable reads as `false` and whitespace-only text reads as
/// `true`, so a bare `FEATURE=` switches a flag on.
impl EnvValue for bool {
    const KIND: &'static str = "boolean";
    const ABSENT: Option<Self> = Some(false);
    const LOG_PARSE_FAILURE: bool = false;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "y" | "true" | "yes" | "on" | "" => Ok(true),
            "0" | "n" | "false" | "no" | "off" => Ok(false),
            _ => Err(ParseError::Bool(raw.to_string())),
        }
    }

    fn to_env(&self) -> String {
        self.to_string()
    }
}

impl EnvValue for Duration {
    const KIND: &'static str = "duration";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.parse()?)
    }

    fn to_env(&self) -> String {
        self.to_string()
    }
}

impl EnvValue for f64 {
    const KIND: &'static str = "float64";

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        let value: f64 = raw.parse().map_err(|source| ParseError::Float {
            input: raw.to_string(),
            source,
        })?;
        // `f64::from_str` rounds out-of-range literals to infinity.
        if value.is_infinite() && !raw.to_ascii_lowercase().contains("inf") {
            return Err(ParseError::FloatRange(raw.to_string()));
        }
        Ok(value)
    }

    /// Shortest text that parses back to the same value, never in
    /// exponent notation.
    fn to_env(&self) -> String {
        self.to_string()
    }
}

macro_rules! signed_env_value {
    ($ty:ty, $kind:literal) => {
        impl EnvValue for $ty {
            const KIND: &'static str = $kind;

            fn parse_env(raw: &str) -> Result<Self, ParseError> {
                raw.parse().map_err(|source| ParseError::Int {
                    input: raw.to_string(),
                    source,
                })
            }

            fn to_env(&self) -> String {
                self.to_string()
            }
        }
    };
}

macro_rules! unsigned_env_value {
    ($ty:ty, $kind:literal) => {
        impl EnvValue for $ty {
            const KIND: &'static str = $kind;

            fn parse_env(raw: &str) -> Result<Self, ParseError> {
                // `from_str` accepts a leading `+`; unsigned values take no sign.
                if raw.starts_with('+') {
                    return Err(ParseError::Sign(raw.to_string()));
                }
                raw.parse().map_err(|source| ParseError::Int {
                    input: raw.to_string(),
                    source,
                })
            }

            fn to_env(&self) -> String {
                self.to_string()
            }
        }
    };
}

signed_env_value!(i32, "int");
signed_env_value!(i64, "int64");
unsigned_env_value!(u32, "uint");
unsigned_env_value!(u64, "uint64");
