// halalscreen-core/src/domain/compliance/zero_guard.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a ratio standard does when its denominator is missing or zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ZeroGuard {
    /// Divide by 1 instead: the ratio is reported as `numerator * 100`.
    #[default]
    SubstituteOne,
    /// Report the standard as undefined and compliant.
    UndefinedCompliant,
    /// Report the standard as undefined and non-compliant.
    UndefinedNonCompliant,
}

/// Resolved denominator for one ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Denominator {
    Value(f64),
    Undefined { compliant: bool },
}

impl ZeroGuard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubstituteOne => "substitute_one",
            Self::UndefinedCompliant => "undefined_compliant",
            Self::UndefinedNonCompliant => "undefined_non_compliant",
        }
    }

    pub fn resolve(&self, raw: Option<f64>) -> Denominator {
        match raw {
            Some(v) if v != 0.0 => Denominator::Value(v),
            _ => match self {
                Self::SubstituteOne => Denominator::Value(1.0),
                Self::UndefinedCompliant => Denominator::Undefined { compliant: true },
                Self::UndefinedNonCompliant => Denominator::Undefined { compliant: false },
            },
        }
    }
}

impl fmt::Display for ZeroGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ZeroGuard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "substitute_one" => Ok(Self::SubstituteOne),
            "undefined_compliant" => Ok(Self::UndefinedCompliant),
            "undefined_non_compliant" => Ok(Self::UndefinedNonCompliant),
            _ => Err(format!("Unknown zero-guard policy: {}", s)),
        }
    }
}
