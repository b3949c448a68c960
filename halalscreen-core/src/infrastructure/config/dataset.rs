// halalscreen-core/src/infrastructure/config/dataset.rs

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::market::{Catalog, Holding, MarketDataset};
use crate::error::HalalScreenError;
use crate::infrastructure::config::project::load_fragment;
use crate::infrastructure::error::InfrastructureError;

/// Loads and validates the market data file.
#[instrument]
pub fn load_catalog(path: &Path) -> Result<Catalog, HalalScreenError> {
    let dataset: MarketDataset = load_fragment(path)?;
    let catalog = Catalog::new(dataset)?;
    info!(
        stocks = catalog.stocks().len(),
        news = catalog.news().len(),
        "Market dataset loaded"
    );
    Ok(catalog)
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PortfolioFile {
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

/// Loads the holdings file. A missing file is an empty portfolio.
#[instrument]
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>, HalalScreenError> {
    if !path.exists() {
        info!("No portfolio file, starting empty");
        return Ok(Vec::new());
    }

    let file: PortfolioFile = load_fragment(path)?;
    for holding in &file.holdings {
        holding
            .validate()
            .map_err(|source| InfrastructureError::Validation {
                context: format!("holding '{}'", holding.stock_id),
                source,
            })?;
    }
    Ok(file.holdings)
}
