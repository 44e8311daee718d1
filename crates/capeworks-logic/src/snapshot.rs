//! Serializable point-in-time views of entity state.
//!
//! Snapshots are what the harness dumps with `--json` and what tests compare
//! before/after a refused operation. They never include a hero's secret
//! identity.

use serde::{Deserialize, Serialize};

use crate::hero::HeroId;

/// Hero state common to every variant plus variant-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub id: HeroId,
    pub name: String,
    pub health: u32,
    pub energy: u32,
    pub mission_count: u32,
    pub total_power_level: i32,
    /// Display form of each power, in owned order.
    pub powers: Vec<String>,
    pub variant: HeroVariantState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeroVariantState {
    Basic,
    Flying {
        max_altitude: f64,
        is_flying: bool,
        altitude: f64,
    },
    Leader {
        member_ids: Vec<HeroId>,
        missions_completed: u32,
    },
}

/// Vehicle state common to every variant plus variant-specific extras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub name: String,
    pub max_speed: f64,
    pub current_speed: f64,
    pub is_moving: bool,
    pub variant: VehicleVariantState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VehicleVariantState {
    Car {
        fuel_type: String,
        engine_started: bool,
    },
    Plane {
        max_altitude: f64,
        current_altitude: f64,
        is_airborne: bool,
    },
    Boat {
        boat_type: String,
        anchor_dropped: bool,
    },
}
