//! Planes: take off to move, and cannot stop while airborne.
//!
//! Landing clears the airborne flag and altitude but leaves the plane
//! moving (taxiing); a separate [`stop`](VehicleCapability::stop) on the
//! ground brings it to rest.

use crate::outcome::{ActionResult, FailureReason};
use crate::sealed::Sealed;
use crate::snapshot::VehicleVariantState;
use crate::vehicle::{Vehicle, VehicleCapability};

#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    vehicle: Vehicle,
    max_altitude: f64,
    current_altitude: f64,
    is_airborne: bool,
}

impl Plane {
    pub fn new(name: impl Into<String>, max_speed: f64, max_altitude: f64) -> Self {
        Self {
            vehicle: Vehicle::new(name, max_speed),
            max_altitude,
            current_altitude: 0.0,
            is_airborne: false,
        }
    }

    pub fn max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn current_altitude(&self) -> f64 {
        self.current_altitude
    }

    pub fn is_airborne(&self) -> bool {
        self.is_airborne
    }

    pub fn take_off(&mut self) -> ActionResult {
        if self.is_airborne {
            return ActionResult::failed(
                FailureReason::AlreadyAirborne,
                format!("{} is already in the air!", self.name()),
            );
        }
        self.is_airborne = true;
        self.vehicle.set_moving(true);
        log::debug!("{} took off", self.name());
        ActionResult::success(format!("{} takes off into the sky!", self.name()))
    }

    pub fn land(&mut self) -> ActionResult {
        if !self.is_airborne {
            return ActionResult::failed(
                FailureReason::AlreadyGrounded,
                format!("{} is already on the ground.", self.name()),
            );
        }
        self.is_airborne = false;
        self.current_altitude = 0.0;
        log::debug!("{} landed", self.name());
        ActionResult::success(format!("{} has landed safely.", self.name()))
    }

    /// Change cruising altitude. Only possible in the air, up to the ceiling.
    pub fn climb(&mut self, altitude: f64) -> ActionResult {
        if !self.is_airborne {
            return ActionResult::failed(
                FailureReason::NotAirborne,
                format!("{} must take off before climbing.", self.name()),
            );
        }
        if altitude < 0.0 {
            return ActionResult::failed(
                FailureReason::BelowGround,
                format!("{} cannot descend below ground level!", self.name()),
            );
        }
        if altitude.is_nan() || altitude > self.max_altitude {
            return ActionResult::failed(
                FailureReason::AltitudeOutOfRange,
                format!(
                    "{} cannot fly that high! Maximum altitude: {}m",
                    self.name(),
                    self.max_altitude
                ),
            );
        }
        self.current_altitude = altitude;
        ActionResult::success(format!("{} is cruising at {}m.", self.name(), altitude))
    }
}

impl Sealed for Plane {}

impl VehicleCapability for Plane {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn variant_state(&self) -> VehicleVariantState {
        VehicleVariantState::Plane {
            max_altitude: self.max_altitude,
            current_altitude: self.current_altitude,
            is_airborne: self.is_airborne,
        }
    }

    fn start_moving(&mut self) -> ActionResult {
        if !self.is_airborne {
            return self.take_off();
        }
        ActionResult::success(format!("{} is soaring through the sky.", self.name()))
    }

    fn stop(&mut self) -> ActionResult {
        if self.is_airborne {
            return ActionResult::failed(
                FailureReason::Airborne,
                format!("{} cannot stop while airborne!", self.name()),
            );
        }
        self.vehicle.halt();
        ActionResult::success(format!("{} has come to a stop on the runway.", self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jet() -> Plane {
        Plane::new("Jet", 900.0, 12000.0)
    }

    #[test]
    fn test_move_takes_off() {
        let mut p = jet();
        let res = p.start_moving();
        assert!(res.is_success());
        assert_eq!(res.message, "Jet takes off into the sky!");
        assert!(p.is_airborne());
        assert!(p.is_moving());
    }

    #[test]
    fn test_move_while_airborne_is_cruise() {
        let mut p = jet();
        p.start_moving();
        p.accelerate(500.0);
        let before = p.snapshot();

        let res = p.start_moving();
        assert!(res.is_success());
        assert_eq!(res.message, "Jet is soaring through the sky.");
        assert_eq!(p.snapshot(), before);
    }

    #[test]
    fn test_cannot_stop_while_airborne() {
        let mut p = jet();
        p.take_off();
        p.accelerate(400.0);
        let res = p.stop();
        assert_eq!(res.failure(), Some(FailureReason::Airborne));
        assert_eq!(res.message, "Jet cannot stop while airborne!");
        assert_eq!(p.current_speed(), 400.0);
        assert!(p.is_moving());
    }

    #[test]
    fn test_take_off_twice() {
        let mut p = jet();
        assert!(p.take_off().is_success());
        assert_eq!(p.take_off().failure(), Some(FailureReason::AlreadyAirborne));
    }

    #[test]
    fn test_land_keeps_moving_until_stopped() {
        let mut p = jet();
        p.take_off();
        p.climb(8000.0);
        p.accelerate(250.0);

        let res = p.land();
        assert!(res.is_success());
        assert!(!p.is_airborne());
        assert_eq!(p.current_altitude(), 0.0);
        // Landing does not clear motion; the plane taxis.
        assert!(p.is_moving());
        assert_eq!(p.current_speed(), 250.0);

        assert!(p.stop().is_success());
        assert!(!p.is_moving());
        assert_eq!(p.current_speed(), 0.0);
    }

    #[test]
    fn test_land_on_ground() {
        let mut p = jet();
        let res = p.land();
        assert_eq!(res.failure(), Some(FailureReason::AlreadyGrounded));
        assert_eq!(res.message, "Jet is already on the ground.");
    }

    #[test]
    fn test_climb_requires_flight_and_ceiling() {
        let mut p = jet();
        assert_eq!(p.climb(1000.0).failure(), Some(FailureReason::NotAirborne));
        p.take_off();
        assert_eq!(
            p.climb(12000.1).failure(),
            Some(FailureReason::AltitudeOutOfRange)
        );
        assert_eq!(p.current_altitude(), 0.0);
        assert!(p.climb(12000.0).is_success());
        assert_eq!(p.current_altitude(), 12000.0);
    }

    #[test]
    fn test_climb_below_ground_is_refused() {
        let mut p = jet();
        p.take_off();
        p.climb(3000.0);

        let res = p.climb(-10.0);
        assert_eq!(res.failure(), Some(FailureReason::BelowGround));
        assert_eq!(res.message, "Jet cannot descend below ground level!");
        assert_eq!(p.current_altitude(), 3000.0);

        let high = p.climb(12000.1);
        assert_eq!(
            high.message,
            "Jet cannot fly that high! Maximum altitude: 12000m"
        );
    }
}
