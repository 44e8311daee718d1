//! Heroes that can take to the air, up to a fixed ceiling.

use crate::constants::costs;
use crate::hero::{HeroCapability, Superhero};
use crate::outcome::{ActionResult, FailureReason};
use crate::power::Power;
use crate::sealed::Sealed;
use crate::snapshot::HeroVariantState;

/// A hero with altitude-bounded flight.
#[derive(Debug)]
pub struct FlyingHero {
    hero: Superhero,
    max_altitude: f64,
    is_flying: bool,
    altitude: f64,
}

impl FlyingHero {
    pub fn new(
        name: impl Into<String>,
        secret_identity: impl Into<String>,
        powers: Vec<Power>,
        max_altitude: f64,
    ) -> Self {
        Self {
            hero: Superhero::new(name, secret_identity, powers),
            max_altitude,
            is_flying: false,
            altitude: 0.0,
        }
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn is_flying(&self) -> bool {
        self.is_flying
    }

    /// Current altitude in meters (0 on the ground).
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Take off (or change altitude) if within the ceiling and rested enough.
    ///
    /// Each call costs flight energy, including altitude changes while
    /// already airborne. Only the ceiling bounds the altitude, so values
    /// below zero are accepted as given.
    pub fn fly(&mut self, altitude: f64) -> ActionResult {
        if altitude.is_nan() {
            return ActionResult::failed(
                FailureReason::AltitudeOutOfRange,
                format!("{} cannot fly to an altitude that is not a number!", self.name()),
            );
        }
        if altitude > self.max_altitude {
            return ActionResult::failed(
                FailureReason::AltitudeOutOfRange,
                format!(
                    "{} cannot fly that high! Maximum altitude: {}m",
                    self.name(),
                    self.max_altitude
                ),
            );
        }

        if !self.hero.try_spend_energy(costs::FLIGHT_ENERGY) {
            return ActionResult::failed(
                FailureReason::TooTired,
                format!("{} is too tired to fly...", self.name()),
            );
        }

        self.is_flying = true;
        self.altitude = altitude;
        log::debug!(
            "{} took flight at {}m (energy={})",
            self.name(),
            altitude,
            self.energy()
        );
        ActionResult::success(format!("{} is now flying at {}m!", self.name(), altitude))
    }

    pub fn land(&mut self) -> ActionResult {
        if !self.is_flying {
            return ActionResult::failed(
                FailureReason::AlreadyGrounded,
                format!("{} is already on the ground.", self.name()),
            );
        }
        self.is_flying = false;
        self.altitude = 0.0;
        ActionResult::success(format!("{} has landed safely.", self.name()))
    }
}

impl Sealed for FlyingHero {}

impl HeroCapability for FlyingHero {
    fn hero(&self) -> &Superhero {
        &self.hero
    }

    fn hero_mut(&mut self) -> &mut Superhero {
        &mut self.hero
    }

    fn variant_state(&self) -> HeroVariantState {
        HeroVariantState::Flying {
            max_altitude: self.max_altitude,
            is_flying: self.is_flying,
            altitude: self.altitude,
        }
    }
}
