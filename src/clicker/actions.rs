//! Semantic action IDs for clicker click targets.
//!
//! These IDs are registered during render and dispatched via `InputEvent::Click`.

// ── Click buttons ───────────────────────────────────────────────
pub const CLICK: u16 = 0;
pub const CLICK_SECONDARY: u16 = 1;

// ── One-off purchases ───────────────────────────────────────────
pub const BUY_CLICK_POWER: u16 = 10;
pub const BUY_BONUS: u16 = 11;

// ── Passive-income upgrades (base + shop index) ─────────────────
pub const BUY_UPGRADE_BASE: u16 = 100;
