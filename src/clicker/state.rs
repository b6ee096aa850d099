//! Clicker game state definitions.

use crate::error::ClickerError;

use super::bonus::Bonus;
use super::config::{ShopConfig, UpgradeConfig};

/// Score gained from the secondary click button.
pub const SECONDARY_CLICK_AMOUNT: u64 = 2;

/// Click-power upgrade price per point of current click power.
pub const CLICK_POWER_BASE_COST: u64 = 100;

/// Price of one timed bonus.
pub const BONUS_COST: u64 = 100;
/// Activations granted by one timed bonus.
pub const BONUS_DURATION: u32 = 10;
/// Score granted per activation.
pub const BONUS_VALUE: u64 = 10;
/// Frames between activations (one second at 60fps).
pub const BONUS_INTERVAL: u32 = 60;

/// Maximum number of entries kept in the message log.
const LOG_CAPACITY: usize = 50;

/// A shop entry that adds passive income.
#[derive(Clone, Debug)]
pub struct Upgrade {
    pub name: String,
    pub base_cost: u64,
    /// Score per second added by each purchase.
    pub rate: u64,
    pub cost_growth: f64,
    /// How many times this upgrade has been bought.
    pub purchased: u32,
}

impl Upgrade {
    pub fn from_config(config: &UpgradeConfig) -> Self {
        Self {
            name: config.name.clone(),
            base_cost: config.cost,
            rate: config.rate,
            cost_growth: config.cost_growth,
            purchased: 0,
        }
    }

    /// Current price of the next purchase.
    pub fn cost(&self) -> u64 {
        if self.purchased == 0 || self.cost_growth == 1.0 {
            return self.base_cost;
        }
        let scaled = self.base_cost as f64 * self.cost_growth.powi(self.purchased as i32);
        if scaled >= u64::MAX as f64 {
            u64::MAX
        } else {
            scaled.round() as u64
        }
    }

    /// Total passive income contributed by this upgrade.
    pub fn total_rate(&self) -> u64 {
        self.rate.saturating_mul(u64::from(self.purchased))
    }
}

#[derive(Clone, Debug)]
pub struct LogEntry {
    pub text: String,
    pub is_important: bool,
}

/// Full state of a clicker session.
pub struct ClickerState {
    /// Spendable score.
    pub score: u64,
    /// Frames elapsed since the session started.
    pub frame: u64,
    /// Timed bonuses in activation order. Duplicates are allowed.
    pub active_bonuses: Vec<Bonus>,
    /// Score added by one press of the main click button.
    pub click_power: u64,
    /// Passive income in score per second.
    pub rate: u64,
    /// Passive income periods per second.
    pub update_speed: u32,
    /// Income owed but not yet paid because `rate` did not divide evenly.
    pub income_carry: u64,
    pub upgrades: Vec<Upgrade>,
    /// Template copied for every timed bonus purchase.
    pub bonus_offer: Bonus,
    /// Manual presses of either click button.
    pub total_clicks: u64,
    pub log: Vec<LogEntry>,
}

impl ClickerState {
    pub fn new(shop: &ShopConfig) -> Result<Self, ClickerError> {
        shop.validate()?;
        let bonus_offer = Bonus::new(BONUS_DURATION, BONUS_VALUE, BONUS_INTERVAL)?;
        Ok(Self {
            score: 0,
            frame: 0,
            active_bonuses: Vec::new(),
            click_power: 1,
            rate: 0,
            update_speed: shop.update_speed,
            income_carry: 0,
            upgrades: shop.upgrades.iter().map(Upgrade::from_config).collect(),
            bonus_offer,
            total_clicks: 0,
            log: vec![LogEntry {
                text: "Start clicking!".into(),
                is_important: true,
            }],
        })
    }

    /// Add `amount` to the score.
    pub fn record_click(&mut self, amount: u64) {
        self.score = self.score.saturating_add(amount);
    }

    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Price of the next click-power upgrade.
    pub fn click_power_cost(&self) -> u64 {
        CLICK_POWER_BASE_COST.saturating_mul(self.click_power)
    }

    /// Score still to be granted by every active bonus combined.
    pub fn pending_bonus_score(&self) -> u64 {
        self.active_bonuses
            .iter()
            .map(|b| b.value().saturating_mul(u64::from(b.remaining())))
            .sum()
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(LogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopConfig {
        ShopConfig::from_json(
            r#"{ "upgrades": [
                { "name": "flat", "cost": 10, "rate": 1 },
                { "name": "growing", "cost": 100, "rate": 5, "cost_growth": 1.15 }
            ] }"#,
        )
        .unwrap()
    }

    #[test]
    fn new_state_is_empty() {
        let state = ClickerState::new(&shop()).unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.frame, 0);
        assert!(state.active_bonuses.is_empty());
        assert_eq!(state.click_power, 1);
        assert_eq!(state.rate, 0);
        assert_eq!(state.upgrades.len(), 2);
    }

    #[test]
    fn bonus_offer_matches_constants() {
        let state = ClickerState::new(&shop()).unwrap();
        assert_eq!(state.bonus_offer.remaining(), 10);
        assert_eq!(state.bonus_offer.value(), 10);
        assert_eq!(state.bonus_offer.interval(), 60);
    }

    #[test]
    fn record_click_accumulates() {
        let mut state = ClickerState::new(&shop()).unwrap();
        state.record_click(1);
        state.record_click(2);
        state.record_click(0);
        assert_eq!(state.score, 3);
    }

    #[test]
    fn record_click_saturates() {
        let mut state = ClickerState::new(&shop()).unwrap();
        state.score = u64::MAX - 1;
        state.record_click(5);
        assert_eq!(state.score, u64::MAX);
    }

    #[test]
    fn advance_frame_increments_by_one() {
        let mut state = ClickerState::new(&shop()).unwrap();
        state.advance_frame();
        state.advance_frame();
        assert_eq!(state.frame, 2);
    }

    #[test]
    fn flat_upgrade_cost_never_changes() {
        let mut up = Upgrade::from_config(&shop().upgrades[0]);
        assert_eq!(up.cost(), 10);
        up.purchased = 7;
        assert_eq!(up.cost(), 10);
        assert_eq!(up.total_rate(), 7);
    }

    #[test]
    fn growing_upgrade_cost_scales() {
        let mut up = Upgrade::from_config(&shop().upgrades[1]);
        assert_eq!(up.cost(), 100);
        up.purchased = 1;
        assert_eq!(up.cost(), 115);
        up.purchased = 2;
        assert_eq!(up.cost(), 132); // 132.25
    }

    #[test]
    fn click_power_cost_scales_with_power() {
        let mut state = ClickerState::new(&shop()).unwrap();
        assert_eq!(state.click_power_cost(), 100);
        state.click_power = 4;
        assert_eq!(state.click_power_cost(), 400);
    }

    #[test]
    fn pending_bonus_score_sums_active() {
        let mut state = ClickerState::new(&shop()).unwrap();
        state.active_bonuses.push(state.bonus_offer.clone());
        state.active_bonuses.push(Bonus::new(3, 5, 10).unwrap());
        assert_eq!(state.pending_bonus_score(), 100 + 15);
    }

    #[test]
    fn log_truncation() {
        let mut state = ClickerState::new(&shop()).unwrap();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert!(state.log.len() <= 50);
        assert_eq!(state.log.last().unwrap().text, "msg 59");
    }
}
