// halalscreen-core/src/domain/market/stock.rs

use crate::domain::compliance::{ComplianceFinding, FinancialProfile, all_compliant};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use validator::Validate;

#[allow(clippy::expect_used)]
static STOCK_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9.\-]{1,12}$").expect("stock code pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShariaStatus {
    Halal,
    Haram,
}

impl ShariaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Halal => "Halal",
            Self::Haram => "Haram",
        }
    }

    /// Halal only when every standard passes.
    pub fn from_findings(findings: &[ComplianceFinding]) -> Self {
        if all_compliant(findings) {
            Self::Halal
        } else {
            Self::Haram
        }
    }
}

impl fmt::Display for ShariaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShariaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "halal" => Ok(Self::Halal),
            "haram" => Ok(Self::Haram),
            _ => Err(format!("Unknown sharia status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    #[validate(length(min = 1, message = "Stock id cannot be empty"))]
    pub id: String,
    #[validate(regex(path = *STOCK_CODE, message = "Stock code must be 1-12 uppercase letters, digits, '.' or '-'"))]
    pub code: String,
    #[validate(length(min = 1, message = "Stock name cannot be empty"))]
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
    pub category: String,
    pub sharia_status: ShariaStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dividend: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(flatten)]
    pub financials: FinancialProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct News {
    #[validate(length(min = 1, message = "News id cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "News title cannot be empty"))]
    pub title: String,
    pub content: String,
    pub source: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub image_url: String,
    pub sharia_status: ShariaStatus,
    #[serde(default)]
    pub related_stocks: Vec<String>,
}

impl News {
    pub fn mentions(&self, stock_id: &str) -> bool {
        self.related_stocks.iter().any(|id| id == stock_id)
    }
}
