//! Upgrade shop configuration.
//!
//! Each shop entry carries a `cost` and the per-second `rate` it adds to
//! passive income. The shop is read once at startup; anything malformed
//! aborts setup instead of leaving a half-working button behind.

use serde::Deserialize;

use crate::error::ClickerError;

/// Shop bundled into the binary.
const DEFAULT_SHOP: &str = include_str!("shop.json");

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShopConfig {
    /// Passive income periods per second. Income per period is `rate / update_speed`.
    #[serde(default = "default_update_speed")]
    pub update_speed: u32,
    pub upgrades: Vec<UpgradeConfig>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpgradeConfig {
    pub name: String,
    pub cost: u64,
    /// Score per second added by each purchase. Shop markup names it `clicks`.
    #[serde(alias = "clicks")]
    pub rate: u64,
    /// Price factor applied after every purchase. 1.0 keeps the price fixed.
    #[serde(default = "default_cost_growth")]
    pub cost_growth: f64,
}

fn default_update_speed() -> u32 {
    1
}

fn default_cost_growth() -> f64 {
    1.0
}

impl ShopConfig {
    /// Parse and validate a shop from JSON.
    pub fn from_json(json: &str) -> Result<Self, ClickerError> {
        let config: ShopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The shop bundled with the game.
    pub fn bundled() -> Result<Self, ClickerError> {
        Self::from_json(DEFAULT_SHOP)
    }

    pub fn validate(&self) -> Result<(), ClickerError> {
        if self.update_speed == 0 {
            return Err(ClickerError::ZeroUpdateSpeed);
        }
        for upgrade in &self.upgrades {
            upgrade.validate()?;
        }
        Ok(())
    }
}

impl UpgradeConfig {
    fn validate(&self) -> Result<(), ClickerError> {
        if self.name.trim().is_empty() {
            return Err(ClickerError::EmptyName);
        }
        if self.cost == 0 {
            return Err(ClickerError::ZeroCost {
                name: self.name.clone(),
            });
        }
        if self.rate == 0 {
            return Err(ClickerError::ZeroRate {
                name: self.name.clone(),
            });
        }
        if !self.cost_growth.is_finite() || self.cost_growth < 1.0 {
            return Err(ClickerError::InvalidGrowth {
                name: self.name.clone(),
                growth: self.cost_growth,
            });
        }
        Ok(())
    }
}
