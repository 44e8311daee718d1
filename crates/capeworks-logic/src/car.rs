//! Cars: must start the engine before moving.

use crate::outcome::{ActionResult, FailureReason};
use crate::sealed::Sealed;
use crate::snapshot::VehicleVariantState;
use crate::vehicle::{Vehicle, VehicleCapability};

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    vehicle: Vehicle,
    fuel_type: String,
    engine_started: bool,
}

impl Car {
    pub fn new(name: impl Into<String>, max_speed: f64, fuel_type: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(name, max_speed),
            fuel_type: fuel_type.into(),
            engine_started: false,
        }
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn engine_started(&self) -> bool {
        self.engine_started
    }

    /// Start the engine. Idempotent.
    pub fn start_engine(&mut self) -> ActionResult {
        self.engine_started = true;
        ActionResult::success(format!(
            "{}'s {} engine roars to life!",
            self.name(),
            self.fuel_type
        ))
    }
}

impl Sealed for Car {}

impl VehicleCapability for Car {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn variant_state(&self) -> VehicleVariantState {
        VehicleVariantState::Car {
            fuel_type: self.fuel_type.clone(),
            engine_started: self.engine_started,
        }
    }

    fn start_moving(&mut self) -> ActionResult {
        if !self.engine_started {
            return ActionResult::failed(
                FailureReason::EngineOff,
                format!("{} cannot move: the engine is off!", self.name()),
            );
        }
        self.vehicle.set_moving(true);
        ActionResult::success(format!("{} is driving down the road.", self.name()))
    }

    fn stop(&mut self) -> ActionResult {
        self.vehicle.halt();
        ActionResult::success(format!("{} has come to a stop.", self.name()))
    }
}
