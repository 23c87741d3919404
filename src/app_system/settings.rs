use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::PricingRates;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    pub pricing: PricingRates,
    pub checkout: CheckoutSettings,
    pub actors: ActorSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckoutSettings {
    /// Simulated network delay between submission and order placement.
    pub redirect_delay_ms: u64,
    pub promo_code: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ActorSettings {
    pub buffer_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pricing: PricingRates::default(),
            checkout: CheckoutSettings {
                redirect_delay_ms: 3000,
                promo_code: "SAVE10".to_string(),
            },
            actors: ActorSettings { buffer_size: 32 },
        }
    }
}

impl Settings {
    /// Defaults, then `config/food_order.*` if present, then `FOOD_ORDER__*` env vars
    /// (e.g. `FOOD_ORDER__PRICING__TAX_RATE=0.1`).
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let settings: Settings = Config::builder()
            .set_default("pricing.delivery_fee", defaults.pricing.delivery_fee)?
            .set_default("pricing.tax_rate", defaults.pricing.tax_rate)?
            .set_default("checkout.redirect_delay_ms", defaults.checkout.redirect_delay_ms)?
            .set_default("checkout.promo_code", defaults.checkout.promo_code)?
            .set_default("actors.buffer_size", defaults.actors.buffer_size as u64)?
            .add_source(File::with_name("config/food_order").required(false))
            .add_source(
                Environment::with_prefix("FOOD_ORDER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()
    }

    /// Rejects values the actors cannot run with.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.actors.buffer_size == 0 {
            return Err(ConfigError::Message("actors.buffer_size must be at least 1".to_string()));
        }
        Ok(self)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.checkout.redirect_delay_ms)
    }
}
