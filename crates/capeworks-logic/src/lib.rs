//! Pure entity logic for Capeworks.
//!
//! Two small, independent entity groups: heroes with an energy/health
//! economy, and vehicles with movement state. Every operation is a
//! constant-time check-and-update that returns an
//! [`ActionResult`](outcome::ActionResult); unmet preconditions are soft
//! failures that leave the entity untouched.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constants`] | Energy/health costs, stat bounds, leading threshold |
//! | [`outcome`] | Action results and the soft-failure taxonomy |
//! | [`power`] | Immutable power descriptors |
//! | [`hero`] | Hero base state and the shared hero capability trait |
//! | [`flying`] | Altitude-bounded flying heroes |
//! | [`team`] | Team leaders, shared rosters, mission leading |
//! | [`vehicle`] | Vehicle base state and the shared vehicle capability trait |
//! | [`car`] | Engine-gated cars |
//! | [`plane`] | Planes with take-off, landing, and altitude |
//! | [`boat`] | Anchor-gated boats |
//! | [`snapshot`] | Serializable views of entity state |
//! | [`validation`] | Construction-time range checks |
//!
//! ```
//! use capeworks_logic::flying::FlyingHero;
//! use capeworks_logic::hero::HeroCapability;
//! use capeworks_logic::power::Power;
//!
//! let mut superman = FlyingHero::new(
//!     "Superman",
//!     "Clark Kent",
//!     vec![
//!         Power::new("Flight", "Ability to fly", 8),
//!         Power::new("Super Strength", "Enhanced physical strength", 9),
//!     ],
//!     10000.0,
//! );
//! assert!(superman.fly(5000.0).is_success());
//! assert!(superman.use_power("super strength").is_success());
//! assert_eq!(superman.energy(), 75);
//! ```

pub mod boat;
pub mod car;
pub mod constants;
pub mod flying;
pub mod hero;
pub mod outcome;
pub mod plane;
pub mod power;
pub mod snapshot;
pub mod team;
pub mod validation;
pub mod vehicle;

mod sealed {
    /// Restricts the capability traits to the entity types in this crate.
    pub trait Sealed {}
}
