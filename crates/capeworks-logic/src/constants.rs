//! Tunable costs and bounds for the hero energy economy.
//!
//! Plain `const` values with no runtime configuration. Both the logic
//! modules and the headless simtest read these.

/// Stat bounds shared by health and energy.
pub mod stats {
    pub const MIN: u32 = 0;
    pub const MAX: u32 = 100;
    /// Starting health and energy for every new hero.
    pub const STARTING: u32 = MAX;
}

/// Energy and health deltas for hero actions.
pub mod costs {
    /// Energy spent per power use.
    pub const POWER_ENERGY: u32 = 10;
    /// Energy spent to take flight.
    pub const FLIGHT_ENERGY: u32 = 15;
    /// Energy lost per completed mission.
    pub const MISSION_ENERGY: u32 = 20;
    /// Health lost per completed mission.
    pub const MISSION_HEALTH: u32 = 10;
    /// Energy regained by resting.
    pub const REST_ENERGY: u32 = 30;
    /// Health regained by resting.
    pub const REST_HEALTH: u32 = 20;
}

/// Minimum leader energy required to start a mission.
pub const LEAD_MISSION_MIN_ENERGY: u32 = 30;

/// Add `amount` to `value`, capped at [`stats::MAX`].
pub fn clamp_add(value: u32, amount: u32) -> u32 {
    value.saturating_add(amount).min(stats::MAX)
}

/// Subtract `amount` from `value`, floored at [`stats::MIN`] (zero).
pub fn clamp_sub(value: u32, amount: u32) -> u32 {
    value.saturating_sub(amount)
}
