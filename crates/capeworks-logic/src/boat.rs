//! Boats: anchored by default, must raise anchor to move.

use crate::outcome::{ActionResult, FailureReason};
use crate::sealed::Sealed;
use crate::snapshot::VehicleVariantState;
use crate::vehicle::{Vehicle, VehicleCapability};

#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    vehicle: Vehicle,
    boat_type: String,
    anchor_dropped: bool,
}

impl Boat {
    pub fn new(name: impl Into<String>, max_speed: f64, boat_type: impl Into<String>) -> Self {
        Self {
            vehicle: Vehicle::new(name, max_speed),
            boat_type: boat_type.into(),
            anchor_dropped: true,
        }
    }

    pub fn boat_type(&self) -> &str {
        &self.boat_type
    }

    pub fn anchor_dropped(&self) -> bool {
        self.anchor_dropped
    }

    pub fn raise_anchor(&mut self) -> ActionResult {
        self.anchor_dropped = false;
        ActionResult::success(format!("{} raises its anchor.", self.name()))
    }

    pub fn drop_anchor(&mut self) -> ActionResult {
        self.anchor_dropped = true;
        ActionResult::success(format!("{} drops its anchor.", self.name()))
    }
}

impl Sealed for Boat {}

impl VehicleCapability for Boat {
    fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    fn variant_state(&self) -> VehicleVariantState {
        VehicleVariantState::Boat {
            boat_type: self.boat_type.clone(),
            anchor_dropped: self.anchor_dropped,
        }
    }

    fn start_moving(&mut self) -> ActionResult {
        if self.anchor_dropped {
            return ActionResult::failed(
                FailureReason::AnchorDropped,
                format!("{} cannot sail with the anchor down!", self.name()),
            );
        }
        self.vehicle.set_moving(true);
        ActionResult::success(format!(
            "{} the {} is sailing across the water.",
            self.name(),
            self.boat_type
        ))
    }

    fn stop(&mut self) -> ActionResult {
        self.vehicle.halt();
        ActionResult::success(format!("{} has come to a stop.", self.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ferry() -> Boat {
        Boat::new("Nautilus", 40.0, "ferry")
    }

    #[test]
    fn test_anchored_by_default() {
        let mut b = ferry();
        assert!(b.anchor_dropped());
        let res = b.start_moving();
        assert_eq!(res.failure(), Some(FailureReason::AnchorDropped));
        assert_eq!(res.message, "Nautilus cannot sail with the anchor down!");
        assert!(!b.is_moving());
    }

    #[test]
    fn test_sail_after_raising_anchor() {
        let mut b = ferry();
        assert!(b.raise_anchor().is_success());
        let res = b.start_moving();
        assert!(res.is_success());
        assert_eq!(res.message, "Nautilus the ferry is sailing across the water.");
        assert!(b.is_moving());
    }

    #[test]
    fn test_anchor_toggles_are_unconditional() {
        let mut b = ferry();
        assert!(b.drop_anchor().is_success());
        assert!(b.anchor_dropped());
        assert!(b.raise_anchor().is_success());
        assert!(b.raise_anchor().is_success());
        assert!(!b.anchor_dropped());
    }

    #[test]
    fn test_stop_resets_motion() {
        let mut b = ferry();
        b.raise_anchor();
        b.start_moving();
        b.accelerate(25.0);
        assert!(b.stop().is_success());
        assert!(!b.is_moving());
        assert_eq!(b.current_speed(), 0.0);
    }

    #[test]
    fn test_dropping_anchor_does_not_stop() {
        let mut b = ferry();
        b.raise_anchor();
        b.start_moving();
        b.drop_anchor();
        assert!(b.is_moving());
        assert_eq!(b.start_moving().failure(), Some(FailureReason::AnchorDropped));
    }
}
