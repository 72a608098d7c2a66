use std::sync::RwLock;

use super::money_model::ExchangeRate;
use crate::errors::{Error, Result};

/// Trait defining the contract for exchange-rate providers.
///
/// The rate is fetched and refreshed by an external collaborator; this
/// seam exists so the localization pipeline can be tested with a fixed
/// rate and so no process-wide singleton is needed.
pub trait RateProviderTrait: Send + Sync {
    /// Latest known USD/VND rate, or `None` when no rate has loaded yet.
    fn latest_rate(&self) -> Result<Option<ExchangeRate>>;
}

/// Rate provider holding a single rate refreshed externally.
#[derive(Default)]
pub struct StaticRateProvider {
    rate: RwLock<Option<ExchangeRate>>,
}

impl StaticRateProvider {
    pub fn new(rate: Option<ExchangeRate>) -> Self {
        Self {
            rate: RwLock::new(rate),
        }
    }

    pub fn set_rate(&self, rate: ExchangeRate) {
        if let Ok(mut current) = self.rate.write() {
            *current = Some(rate);
        }
    }
}

impl RateProviderTrait for StaticRateProvider {
    fn latest_rate(&self) -> Result<Option<ExchangeRate>> {
        let rate = self
            .rate
            .read()
            .map_err(|e| Error::Unexpected(e.to_string()))?;
        Ok(rate.clone())
    }
}
