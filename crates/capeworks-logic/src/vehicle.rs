//! Vehicle base state and the shared vehicle capability set.
//!
//! Every concrete vehicle embeds a [`Vehicle`] and implements
//! [`VehicleCapability`]. Acceleration is shared and capped at the
//! vehicle's top speed; starting and stopping are defined per vehicle
//! type, each with its own precondition.
//!
//! | Vehicle | Can start moving when | Can stop when |
//! |---------|-----------------------|---------------|
//! | [`Car`](crate::car::Car) | engine started | always |
//! | [`Plane`](crate::plane::Plane) | always (takes off if grounded) | on the ground |
//! | [`Boat`](crate::boat::Boat) | anchor raised | always |

use crate::outcome::{ActionResult, FailureReason};
use crate::sealed::Sealed;
use crate::snapshot::{VehicleSnapshot, VehicleVariantState};

/// Base vehicle state: name and speed.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    name: String,
    max_speed: f64,
    current_speed: f64,
    is_moving: bool,
}

impl Vehicle {
    pub fn new(name: impl Into<String>, max_speed: f64) -> Self {
        Self {
            name: name.into(),
            max_speed,
            current_speed: 0.0,
            is_moving: false,
        }
    }

    pub(crate) fn set_moving(&mut self, moving: bool) {
        self.is_moving = moving;
    }

    /// Come to a full stop: not moving, zero speed.
    pub(crate) fn halt(&mut self) {
        self.is_moving = false;
        self.current_speed = 0.0;
        log::debug!("{} halted", self.name);
    }
}

/// Operations shared by every vehicle type.
pub trait VehicleCapability: Sealed {
    fn vehicle(&self) -> &Vehicle;
    fn vehicle_mut(&mut self) -> &mut Vehicle;
    fn variant_state(&self) -> VehicleVariantState;

    /// Begin moving, subject to this vehicle type's precondition.
    fn start_moving(&mut self) -> ActionResult;

    /// Stop moving, subject to this vehicle type's precondition.
    fn stop(&mut self) -> ActionResult;

    fn name(&self) -> &str {
        &self.vehicle().name
    }

    fn max_speed(&self) -> f64 {
        self.vehicle().max_speed
    }

    fn current_speed(&self) -> f64 {
        self.vehicle().current_speed
    }

    fn is_moving(&self) -> bool {
        self.vehicle().is_moving
    }

    /// Change speed by `delta` km/h, refused if the result would leave
    /// `0..=max_speed`.
    fn accelerate(&mut self, delta: f64) -> ActionResult {
        let vehicle = self.vehicle_mut();
        let new_speed = vehicle.current_speed + delta;

        if new_speed < 0.0 {
            return ActionResult::failed(
                FailureReason::SpeedOutOfRange,
                format!("{} cannot slow below 0 km/h!", vehicle.name),
            );
        }
        if new_speed.is_nan() || new_speed > vehicle.max_speed {
            return ActionResult::failed(
                FailureReason::SpeedOutOfRange,
                format!(
                    "{} cannot exceed {} km/h! Current speed: {} km/h",
                    vehicle.name, vehicle.max_speed, vehicle.current_speed
                ),
            );
        }

        vehicle.current_speed = new_speed;
        log::debug!("{} speed -> {} km/h", vehicle.name, new_speed);
        ActionResult::success(format!("{} accelerates to {} km/h.", vehicle.name, new_speed))
    }

    fn snapshot(&self) -> VehicleSnapshot {
        let vehicle = self.vehicle();
        VehicleSnapshot {
            name: vehicle.name.clone(),
            max_speed: vehicle.max_speed,
            current_speed: vehicle.current_speed,
            is_moving: vehicle.is_moving,
            variant: self.variant_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::Car;

    fn sedan() -> Car {
        Car::new("Sedan", 180.0, "petrol")
    }

    #[test]
    fn test_accelerate_within_cap() {
        let mut car = sedan();
        let res = car.accelerate(60.0);
        assert!(res.is_success());
        assert_eq!(res.message, "Sedan accelerates to 60 km/h.");
        assert_eq!(car.current_speed(), 60.0);
    }

    #[test]
    fn test_accelerate_to_exact_cap() {
        let mut car = sedan();
        assert!(car.accelerate(180.0).is_success());
        assert_eq!(car.current_speed(), 180.0);
    }

    #[test]
    fn test_accelerate_over_cap_is_refused() {
        let mut car = sedan();
        car.accelerate(150.0);
        let res = car.accelerate(40.0);
        assert_eq!(res.failure(), Some(FailureReason::SpeedOutOfRange));
        assert_eq!(
            res.message,
            "Sedan cannot exceed 180 km/h! Current speed: 150 km/h"
        );
        assert_eq!(car.current_speed(), 150.0);
    }

    #[test]
    fn test_decelerate_below_zero_is_refused() {
        let mut car = sedan();
        car.accelerate(20.0);
        assert!(car.accelerate(-20.0).is_success());
        let res = car.accelerate(-1.0);
        assert_eq!(res.failure(), Some(FailureReason::SpeedOutOfRange));
        assert_eq!(res.message, "Sedan cannot slow below 0 km/h!");
        assert_eq!(car.current_speed(), 0.0);
    }

    #[test]
    fn test_accelerate_nan_is_refused() {
        let mut car = sedan();
        assert!(!car.accelerate(f64::NAN).is_success());
        assert_eq!(car.current_speed(), 0.0);
    }

    #[test]
    fn test_new_vehicle_is_parked() {
        let car = sedan();
        assert!(!car.is_moving());
        assert_eq!(car.current_speed(), 0.0);
        assert_eq!(car.max_speed(), 180.0);
        assert_eq!(car.name(), "Sedan");
    }
}
