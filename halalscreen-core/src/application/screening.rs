// halalscreen-core/src/application/screening.rs
//
// USE CASE: screen one stock or a whole catalog against the compliance standards.

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::domain::compliance::{ComplianceEvaluator, ComplianceFinding};
use crate::domain::error::DomainError;
use crate::domain::market::{News, ShariaStatus, Stock, StockQuery};
use crate::error::HalalScreenError;
use crate::ports::market_data::MarketDataSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockScreening {
    pub stock: Stock,
    pub findings: Vec<ComplianceFinding>,
    pub computed_status: ShariaStatus,
    pub declared_status: ShariaStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub news: Vec<News>,
}

impl StockScreening {
    fn new(stock: Stock, findings: Vec<ComplianceFinding>, news: Vec<News>) -> Self {
        Self {
            computed_status: ShariaStatus::from_findings(&findings),
            declared_status: stock.sharia_status,
            stock,
            findings,
            news,
        }
    }

    pub fn matches_declaration(&self) -> bool {
        self.computed_status == self.declared_status
    }

    pub fn failed_standards(&self) -> impl Iterator<Item = &ComplianceFinding> {
        self.findings.iter().filter(|f| !f.is_compliant)
    }
}

/// Screens a single stock (by id or code) and attaches its related news.
#[instrument(skip(source, evaluator))]
pub async fn screen_stock(
    source: &dyn MarketDataSource,
    evaluator: &ComplianceEvaluator,
    key: &str,
) -> Result<StockScreening, HalalScreenError> {
    let stock = source
        .find_stock(key)
        .await?
        .ok_or_else(|| DomainError::StockNotFound(key.to_string()))?;

    let findings = evaluator.evaluate(&stock.financials)?;
    let news = source.news_for_stock(&stock.id).await?;
    let screening = StockScreening::new(stock, findings, news);

    info!(
        code = %screening.stock.code,
        computed = %screening.computed_status,
        declared = %screening.declared_status,
        "Stock screened"
    );
    Ok(screening)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub screenings: Vec<StockScreening>,
}

impl CatalogReport {
    pub fn halal_count(&self) -> usize {
        self.screenings
            .iter()
            .filter(|s| s.computed_status == ShariaStatus::Halal)
            .count()
    }

    /// Stocks whose declared label disagrees with the computed one.
    pub fn mismatches(&self) -> Vec<&StockScreening> {
        self.screenings
            .iter()
            .filter(|s| !s.matches_declaration())
            .collect()
    }
}

/// Screens every stock matching `query`. News are not attached.
#[instrument(skip(source, evaluator))]
pub async fn screen_catalog(
    source: &dyn MarketDataSource,
    evaluator: &ComplianceEvaluator,
    query: &StockQuery,
) -> Result<CatalogReport, HalalScreenError> {
    let stocks = source.search_stocks(query).await?;
    debug!(count = stocks.len(), "Screening catalog");

    let mut screenings = Vec::with_capacity(stocks.len());
    for stock in stocks {
        let findings = evaluator.evaluate(&stock.financials)?;
        screenings.push(StockScreening::new(stock, findings, Vec::new()));
    }

    let report = CatalogReport { screenings };
    let mismatches = report.mismatches().len();
    if mismatches > 0 {
        warn!(mismatches, "Declared status differs from computed status");
    }
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::compliance::ZeroGuard;
    use crate::domain::market::catalog::tests::sample_catalog;
    use crate::infrastructure::adapters::InMemoryMarketData;
    use anyhow::Result;

    #[tokio::test]
    async fn test_screen_stock_by_code() -> Result<()> {
        let source = InMemoryMarketData::new(sample_catalog());
        let screening = screen_stock(&source, &ComplianceEvaluator::default(), "ADNOC").await?;

        // 20% debt, 20% liquid, 1% interest, 55% illiquid
        assert_eq!(screening.findings.len(), 5);
        assert_eq!(screening.computed_status, ShariaStatus::Halal);
        assert!(screening.matches_declaration());
        assert_eq!(screening.failed_standards().count(), 0);
        assert_eq!(screening.news.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_stock() -> Result<()> {
        let source = InMemoryMarketData::new(sample_catalog());
        let res = screen_stock(&source, &ComplianceEvaluator::default(), "TSLA").await;
        assert!(matches!(
            res,
            Err(HalalScreenError::Domain(DomainError::StockNotFound(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_catalog_report_flags_mismatches() -> Result<()> {
        let source = InMemoryMarketData::new(sample_catalog());
        let report =
            screen_catalog(&source, &ComplianceEvaluator::default(), &StockQuery::default())
                .await?;
        assert_eq!(report.screenings.len(), 4);

        // Stocks without financials fail the illiquid-assets minimum, so SABIC
        // (declared Halal) is the only disagreement.
        let mismatches: Vec<_> = report
            .mismatches()
            .iter()
            .map(|s| s.stock.code.clone())
            .collect();
        assert_eq!(mismatches, vec!["SABIC"]);
        assert_eq!(report.halal_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_guard_policy_flows_through() -> Result<()> {
        let source = InMemoryMarketData::new(sample_catalog());
        let lenient = ComplianceEvaluator::default().with_zero_guard(ZeroGuard::UndefinedCompliant);
        let screening = screen_stock(&source, &lenient, "SABIC").await?;
        assert_eq!(screening.computed_status, ShariaStatus::Halal);
        Ok(())
    }
}
