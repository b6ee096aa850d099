//! Error taxonomy for setup-time failures.
//!
//! Runtime purchases never error: an unaffordable purchase is a silent no-op
//! and the handler just returns `false`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClickerError {
    /// A bonus must fire every `interval` frames, so zero is meaningless.
    #[error("bonus interval must be at least one frame")]
    ZeroInterval,

    #[error("bonus duration must be at least one activation")]
    ZeroDuration,

    #[error("upgrade shop configuration is malformed: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("upgrade has an empty name")]
    EmptyName,

    #[error("upgrade `{name}` has zero cost")]
    ZeroCost { name: String },

    #[error("upgrade `{name}` grants zero income")]
    ZeroRate { name: String },

    #[error("upgrade `{name}` has cost growth {growth}, expected a finite value >= 1.0")]
    InvalidGrowth { name: String, growth: f64 },

    #[error("update speed must be at least one period per second")]
    ZeroUpdateSpeed,
}
