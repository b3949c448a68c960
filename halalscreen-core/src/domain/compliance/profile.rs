// halalscreen-core/src/domain/compliance/profile.rs

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reported financials of a single company.
///
/// Every field is optional: source data is sparse and a missing value is not an error.
/// Numerators treat `None` as zero; denominators go through the zero-guard policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_debt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_and_cash_equivalents: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accounts_receivable: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_plant_equipment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_liabilities: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_operating_income_net_other: Option<f64>,
}

impl FinancialProfile {
    pub fn get(&self, field: FinancialField) -> Option<f64> {
        match field {
            FinancialField::TotalAssets => self.total_assets,
            FinancialField::TotalDebt => self.total_debt,
            FinancialField::CashAndCashEquivalents => self.cash_and_cash_equivalents,
            FinancialField::AccountsReceivable => self.accounts_receivable,
            FinancialField::Inventory => self.inventory,
            FinancialField::PropertyPlantEquipment => self.property_plant_equipment,
            FinancialField::TotalLiabilities => self.total_liabilities,
            FinancialField::TotalRevenue => self.total_revenue,
            FinancialField::InterestIncome => self.interest_income,
            FinancialField::NonOperatingIncomeNetOther => self.non_operating_income_net_other,
        }
    }

    /// Rejects NaN and infinite amounts instead of letting them flow into the ratios.
    pub fn check_finite(&self) -> Result<(), DomainError> {
        for field in FinancialField::ALL {
            match self.get(field) {
                Some(v) if !v.is_finite() => {
                    return Err(DomainError::InvalidInput {
                        field: field.key().to_string(),
                        reason: format!("expected a finite number, got {}", v),
                    });
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        FinancialField::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

/// Strict JSON decoding: a non-numeric value is an `InvalidInput`, never coerced to zero.
impl FromStr for FinancialProfile {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let profile: FinancialProfile =
            serde_json::from_str(s).map_err(|e| DomainError::InvalidInput {
                field: "financial profile".to_string(),
                reason: e.to_string(),
            })?;
        profile.check_finite()?;
        Ok(profile)
    }
}

/// Selector over the fields of a [`FinancialProfile`], used by ratio rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialField {
    TotalAssets,
    TotalDebt,
    CashAndCashEquivalents,
    AccountsReceivable,
    Inventory,
    PropertyPlantEquipment,
    TotalLiabilities,
    TotalRevenue,
    InterestIncome,
    NonOperatingIncomeNetOther,
}

impl FinancialField {
    pub const ALL: [FinancialField; 10] = [
        Self::TotalAssets,
        Self::TotalDebt,
        Self::CashAndCashEquivalents,
        Self::AccountsReceivable,
        Self::Inventory,
        Self::PropertyPlantEquipment,
        Self::TotalLiabilities,
        Self::TotalRevenue,
        Self::InterestIncome,
        Self::NonOperatingIncomeNetOther,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::TotalAssets => "total_assets",
            Self::TotalDebt => "total_debt",
            Self::CashAndCashEquivalents => "cash_and_cash_equivalents",
            Self::AccountsReceivable => "accounts_receivable",
            Self::Inventory => "inventory",
            Self::PropertyPlantEquipment => "property_plant_equipment",
            Self::TotalLiabilities => "total_liabilities",
            Self::TotalRevenue => "total_revenue",
            Self::InterestIncome => "interest_income",
            Self::NonOperatingIncomeNetOther => "non_operating_income_net_other",
        }
    }

    /// Human label used in finding details.
    pub fn label(&self) -> &'static str {
        match self {
            Self::TotalAssets => "Total Assets",
            Self::TotalDebt => "Total Debt",
            Self::CashAndCashEquivalents => "Cash & Equivalents",
            Self::AccountsReceivable => "Accounts Receivable",
            Self::Inventory => "Inventory",
            Self::PropertyPlantEquipment => "Property, Plant & Equipment",
            Self::TotalLiabilities => "Total Liabilities",
            Self::TotalRevenue => "Total Revenue",
            Self::InterestIncome => "Interest Income",
            Self::NonOperatingIncomeNetOther => "Other Non-Operating Income",
        }
    }
}

impl fmt::Display for FinancialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_camel_case_record() -> Result<()> {
        let profile: FinancialProfile =
            r#"{"totalAssets": 1000, "totalDebt": 300.5, "interestIncome": null}"#.parse()?;
        assert_eq!(profile.total_assets, Some(1000.0));
        assert_eq!(profile.total_debt, Some(300.5));
        assert_eq!(profile.interest_income, None);
        assert_eq!(profile.get(FinancialField::TotalDebt), Some(300.5));
        Ok(())
    }

    #[test]
    fn test_non_numeric_field_is_invalid_input() {
        let res: Result<FinancialProfile, _> = r#"{"totalAssets": "lots"}"#.parse();
        assert!(matches!(res, Err(DomainError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        let profile = FinancialProfile {
            total_debt: Some(f64::NAN),
            ..Default::default()
        };
        match profile.check_finite() {
            Err(DomainError::InvalidInput { field, .. }) => assert_eq!(field, "total_debt"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_profile() {
        assert!(FinancialProfile::default().is_empty());
        let profile = FinancialProfile {
            inventory: Some(0.0),
            ..Default::default()
        };
        assert!(!profile.is_empty());
    }
}
