//! Construction-time range checks.
//!
//! Constructors are infallible; callers that take entity parameters from
//! outside (the harness, a future loader) run these first and report every
//! problem at once.
//!
//! ```
//! use capeworks_logic::power::Power;
//! use capeworks_logic::validation::{validate_hero, validate_vehicle, EntityError};
//!
//! assert!(validate_hero("Superman", &[Power::new("Flight", "Ability to fly", 8)], Some(10000.0)).is_empty());
//! assert_eq!(validate_vehicle("", 120.0), vec![EntityError::EmptyName]);
//! ```

use std::fmt;

use crate::power::Power;

/// Entity parameter error.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    /// Name empty or whitespace only.
    EmptyName,
    /// Power with a negative level.
    NegativePowerLevel { power: String, level: i32 },
    /// Flight or flying-vehicle ceiling not a positive finite number.
    InvalidMaxAltitude(f64),
    /// Top speed not a positive finite number.
    InvalidMaxSpeed(f64),
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NegativePowerLevel { power, level } => {
                write!(f, "power '{}' has negative level {}", power, level)
            }
            Self::InvalidMaxAltitude(v) => write!(f, "max altitude must be positive, got {}", v),
            Self::InvalidMaxSpeed(v) => write!(f, "max speed must be positive, got {}", v),
        }
    }
}

impl std::error::Error for EntityError {}

fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Validate hero parameters, returning all errors found.
///
/// `max_altitude` is only checked for flying heroes (`Some`).
pub fn validate_hero(name: &str, powers: &[Power], max_altitude: Option<f64>) -> Vec<EntityError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(EntityError::EmptyName);
    }
    for p in powers.iter().filter(|p| p.power_level() < 0) {
        errors.push(EntityError::NegativePowerLevel {
            power: p.name().to_string(),
            level: p.power_level(),
        });
    }
    if let Some(alt) = max_altitude {
        if !is_positive_finite(alt) {
            errors.push(EntityError::InvalidMaxAltitude(alt));
        }
    }

    errors
}

/// Validate common vehicle parameters, returning all errors found.
pub fn validate_vehicle(name: &str, max_speed: f64) -> Vec<EntityError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(EntityError::EmptyName);
    }
    if !is_positive_finite(max_speed) {
        errors.push(EntityError::InvalidMaxSpeed(max_speed));
    }

    errors
}

/// Validate plane parameters (vehicle checks plus the altitude ceiling).
pub fn validate_plane(name: &str, max_speed: f64, max_altitude: f64) -> Vec<EntityError> {
    let mut errors = validate_vehicle(name, max_speed);
    if !is_positive_finite(max_altitude) {
        errors.push(EntityError::InvalidMaxAltitude(max_altitude));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hero() {
        let powers = vec![Power::new("Telepathy", "Read and control minds", 7)];
        assert!(validate_hero("Professor X", &powers, None).is_empty());
    }

    #[test]
    fn test_hero_collects_all_errors() {
        let powers = vec![
            Power::new("Bad Luck", "Negative aura", -3),
            Power::new("Flight", "Ability to fly", 8),
        ];
        let errors = validate_hero("   ", &powers, Some(0.0));
        assert_eq!(
            errors,
            vec![
                EntityError::EmptyName,
                EntityError::NegativePowerLevel {
                    power: "Bad Luck".into(),
                    level: -3
                },
                EntityError::InvalidMaxAltitude(0.0),
            ]
        );
    }

    #[test]
    fn test_vehicle_speed_must_be_positive_finite() {
        assert_eq!(
            validate_vehicle("Rowboat", -1.0),
            vec![EntityError::InvalidMaxSpeed(-1.0)]
        );
        assert_eq!(validate_vehicle("Rowboat", f64::INFINITY).len(), 1);
        assert!(validate_vehicle("Rowboat", 8.0).is_empty());
    }

    #[test]
    fn test_plane_checks_ceiling() {
        assert!(validate_plane("Glider", 120.0, 3000.0).is_empty());
        assert_eq!(
            validate_plane("Glider", 120.0, f64::NAN).len(),
            1
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            EntityError::InvalidMaxSpeed(0.0).to_string(),
            "max speed must be positive, got 0"
        );
    }
}
