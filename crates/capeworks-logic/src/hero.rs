//! Hero base state and the shared hero capability set.
//!
//! Every hero variant embeds a [`Superhero`] and implements
//! [`HeroCapability`], which provides power use, resting, and read access
//! to the clamped energy/health economy. Mission costs are applied only
//! through the crate-internal [`Superhero::complete_mission`], so the only
//! public way to spend them is leading a mission.
//!
//! # Energy Economy
//!
//! | Action | Energy | Health |
//! |--------|--------|--------|
//! | Use power | −10 (requires ≥ 10) | — |
//! | Fly | −15 (requires ≥ 15) | — |
//! | Rest | +30 (cap 100) | +20 (cap 100) |
//! | Complete mission | −20 (floor 0) | −10 (floor 0) |
//!
//! ```
//! use capeworks_logic::hero::{HeroCapability, Superhero};
//! use capeworks_logic::power::Power;
//!
//! let mut hero = Superhero::new("Storm", "Ororo Munroe", vec![Power::new("Weather", "Control weather", 8)]);
//! assert!(hero.use_power("weather").is_success());
//! assert_eq!(hero.energy(), 90);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::constants::{clamp_add, clamp_sub, costs, stats};
use crate::outcome::{ActionResult, FailureReason};
use crate::power::Power;
use crate::sealed::Sealed;
use crate::snapshot::{HeroSnapshot, HeroVariantState};
use crate::team::HeroHandle;

static NEXT_HERO_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique hero identity, used for team membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HeroId(u64);

impl HeroId {
    fn next() -> Self {
        Self(NEXT_HERO_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero#{}", self.0)
    }
}

/// Base hero state: identity, powers, and the energy/health economy.
pub struct Superhero {
    id: HeroId,
    name: String,
    // Write-once; never exposed.
    #[allow(dead_code)]
    secret_identity: String,
    powers: Vec<Power>,
    health: u32,
    energy: u32,
    mission_count: u32,
}

impl Superhero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<Power>,
    ) -> Self {
        Self {
            id: HeroId::next(),
            name: name.into(),
            secret_identity: secret_identity.into(),
            powers,
            health: stats::STARTING,
            energy: stats::STARTING,
            mission_count: 0,
        }
    }

    /// Apply the cost of a finished mission. Always applies, even at zero.
    pub(crate) fn complete_mission(&mut self) {
        self.mission_count += 1;
        self.energy = clamp_sub(self.energy, costs::MISSION_ENERGY);
        self.health = clamp_sub(self.health, costs::MISSION_HEALTH);
        log::debug!(
            "{} completed mission #{} (energy={}, health={})",
            self.name,
            self.mission_count,
            self.energy,
            self.health
        );
    }

    /// Spend `amount` energy if available. Returns false (and spends
    /// nothing) when the hero has less than `amount`.
    pub(crate) fn try_spend_energy(&mut self, amount: u32) -> bool {
        if self.energy < amount {
            return false;
        }
        self.energy -= amount;
        true
    }

    #[cfg(test)]
    pub(crate) fn set_stats(&mut self, energy: u32, health: u32) {
        self.energy = energy.min(stats::MAX);
        self.health = health.min(stats::MAX);
    }
}

impl fmt::Debug for Superhero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Superhero")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret_identity", &"<redacted>")
            .field("powers", &self.powers)
            .field("health", &self.health)
            .field("energy", &self.energy)
            .field("mission_count", &self.mission_count)
            .finish()
    }
}

/// Operations shared by every hero variant.
///
/// Implementors only provide access to their embedded [`Superhero`] and
/// their variant-specific snapshot state; everything else is shared.
pub trait HeroCapability: Sealed {
    fn hero(&self) -> &Superhero;
    fn hero_mut(&mut self) -> &mut Superhero;
    fn variant_state(&self) -> HeroVariantState;

    /// Handles this hero holds to other heroes. Empty unless the hero
    /// leads a team.
    fn team_handles(&self) -> Vec<HeroHandle> {
        Vec::new()
    }

    fn id(&self) -> HeroId {
        self.hero().id
    }

    fn name(&self) -> &str {
        &self.hero().name
    }

    fn health(&self) -> u32 {
        self.hero().health
    }

    fn energy(&self) -> u32 {
        self.hero().energy
    }

    fn mission_count(&self) -> u32 {
        self.hero().mission_count
    }

    fn powers(&self) -> &[Power] {
        &self.hero().powers
    }

    /// Sum of all owned power levels, recomputed on every call.
    fn total_power_level(&self) -> i32 {
        self.hero().powers.iter().map(Power::power_level).sum()
    }

    /// Use a power by (case-insensitive) name if there is enough energy.
    fn use_power(&mut self, power_name: &str) -> ActionResult {
        let hero = self.hero_mut();
        let Some(idx) = hero.powers.iter().position(|p| p.matches(power_name)) else {
            return ActionResult::failed(
                FailureReason::PowerNotFound,
                format!("{} doesn't have the power: {}", hero.name, power_name),
            );
        };
        if !hero.try_spend_energy(costs::POWER_ENERGY) {
            return ActionResult::failed(
                FailureReason::TooTired,
                format!(
                    "{} is too tired to use {}...",
                    hero.name,
                    hero.powers[idx].name()
                ),
            );
        }
        log::debug!(
            "{} used {} (energy={})",
            hero.name,
            hero.powers[idx].name(),
            hero.energy
        );
        ActionResult::success(format!("{} uses {}!", hero.name, hero.powers[idx].name()))
    }

    /// Recover energy and health, capped at the stat maximum.
    fn rest(&mut self) -> ActionResult {
        let hero = self.hero_mut();
        hero.energy = clamp_add(hero.energy, costs::REST_ENERGY);
        hero.health = clamp_add(hero.health, costs::REST_HEALTH);
        ActionResult::success(format!(
            "{} has recovered! Energy: {}, Health: {}",
            hero.name, hero.energy, hero.health
        ))
    }

    fn snapshot(&self) -> HeroSnapshot {
        let hero = self.hero();
        HeroSnapshot {
            id: hero.id,
            name: hero.name.clone(),
            health: hero.health,
            energy: hero.energy,
            mission_count: hero.mission_count,
            total_power_level: self.total_power_level(),
            powers: hero.powers.iter().map(ToString::to_string).collect(),
            variant: self.variant_state(),
        }
    }
}

impl Sealed for Superhero {}

impl HeroCapability for Superhero {
    fn hero(&self) -> &Superhero {
        self
    }

    fn hero_mut(&mut self) -> &mut Superhero {
        self
    }

    fn variant_state(&self) -> HeroVariantState {
        HeroVariantState::Basic
    }
}
