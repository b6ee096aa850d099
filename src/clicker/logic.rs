//! Clicker game logic — pure functions, fully testable.

use super::state::{ClickerState, BONUS_COST, SECONDARY_CLICK_AMOUNT};

/// Advance the session by one frame: fire due bonuses, then drop spent ones.
///
/// Returns the score granted by bonuses this frame.
pub fn tick(state: &mut ClickerState) -> u64 {
    state.advance_frame();
    let frame = state.frame;

    let mut granted = 0u64;
    for bonus in &mut state.active_bonuses {
        if bonus.try_fire(frame) {
            granted = granted.saturating_add(bonus.value());
        }
    }
    state.record_click(granted);

    let before = state.active_bonuses.len();
    state.active_bonuses.retain(|b| !b.is_expired());
    let expired = before - state.active_bonuses.len();
    if expired > 0 {
        state.add_log(&format!("  Bonus finished (x{})", expired), false);
    }

    granted
}

/// Pay passive income for `periods` elapsed timer periods.
///
/// Each period is worth `rate / update_speed`; the remainder is carried so
/// that a full second always pays exactly `rate`.
pub fn pay_income(state: &mut ClickerState, periods: u32) -> u64 {
    if periods == 0 || state.rate == 0 {
        return 0;
    }
    let owed = state
        .rate
        .saturating_mul(u64::from(periods))
        .saturating_add(state.income_carry);
    let speed = u64::from(state.update_speed.max(1));
    let paid = owed / speed;
    state.income_carry = owed % speed;
    state.record_click(paid);
    paid
}

/// Main click button: add the current click power.
pub fn click(state: &mut ClickerState) {
    let power = state.click_power;
    state.record_click(power);
    state.total_clicks += 1;
}

/// Secondary click button: always worth a fixed amount.
pub fn click_secondary(state: &mut ClickerState) {
    state.record_click(SECONDARY_CLICK_AMOUNT);
    state.total_clicks += 1;
}

/// Try to double click power. Returns true if successful.
pub fn buy_click_power(state: &mut ClickerState) -> bool {
    let cost = state.click_power_cost();
    if state.score < cost {
        return false;
    }
    state.score -= cost;
    state.click_power = state.click_power.saturating_mul(2);
    state.add_log(
        &format!("Click power upgraded to {}", format_number(state.click_power)),
        false,
    );
    true
}

/// Try to buy a timed bonus. Returns true if successful.
pub fn buy_bonus(state: &mut ClickerState) -> bool {
    if state.score < BONUS_COST {
        return false;
    }
    state.score -= BONUS_COST;
    let bonus = state.bonus_offer.clone();
    state.add_log(
        &format!(
            "Bonus active: +{} every {} frames, {} times",
            bonus.value(),
            bonus.interval(),
            bonus.remaining()
        ),
        true,
    );
    state.active_bonuses.push(bonus);
    true
}

/// Try to buy a passive-income upgrade by index. Returns true if successful.
pub fn buy_upgrade(state: &mut ClickerState, index: usize) -> bool {
    let Some(upgrade) = state.upgrades.get(index) else {
        return false;
    };
    let cost = upgrade.cost();
    if state.score < cost {
        return false;
    }
    state.score -= cost;

    let upgrade = &mut state.upgrades[index];
    upgrade.purchased += 1;
    let (name, count, gained) = (upgrade.name.clone(), upgrade.purchased, upgrade.rate);
    state.rate = state.rate.saturating_add(gained);
    state.add_log(
        &format!("{} bought ({}) +{}/s", name, count, format_number(gained)),
        false,
    );
    true
}

/// Score label shown on the display surface.
pub fn score_text(state: &ClickerState) -> String {
    format!("Score: {}", format_number(state.score))
}

/// Passive income label.
pub fn rate_text(state: &ClickerState) -> String {
    format!("{}/s", format_number(state.rate))
}

/// Format a number with commas (e.g. 1234567 → "1,234,567").
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
