//! Soft-failure results returned by every entity operation.
//!
//! Operations never panic and never return `Err`. An unmet precondition is
//! reported as [`Outcome::Failed`] with a [`FailureReason`], and the entity
//! is left untouched. The message is the human-readable rendering of the
//! outcome and is what the harness prints.
//!
//! ```
//! use capeworks_logic::outcome::{ActionResult, FailureCategory, FailureReason, Outcome};
//!
//! let res = ActionResult::failed(FailureReason::TooTired, "Robin is too tired to fly...");
//! assert!(!res.is_success());
//! assert_eq!(res.failure().map(|r| r.category()), Some(FailureCategory::InsufficientEnergy));
//! assert_eq!(res.outcome, Outcome::Failed(FailureReason::TooTired));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// Not enough energy for the requested action.
    TooTired,
    /// The hero has no power with the requested name.
    PowerNotFound,
    /// Requested altitude is above the ceiling or not a number.
    AltitudeOutOfRange,
    /// Requested cruising altitude is below ground level.
    BelowGround,
    /// Landing requested while already on the ground.
    AlreadyGrounded,
    /// Hero is already on this leader's team.
    AlreadyMember,
    /// Leader tried to add themselves to their own team.
    SelfMembership,
    /// Recruit already leads the recruiting leader, directly or through
    /// other teams.
    CircularTeam,
    /// Mission requested with an empty roster.
    NoTeamMembers,
    /// A hero handle is borrowed elsewhere and cannot be reached.
    MemberUnavailable,
    /// Speed change would leave the 0..=max_speed range.
    SpeedOutOfRange,
    /// Car asked to move before the engine was started.
    EngineOff,
    /// Take-off requested while already in the air.
    AlreadyAirborne,
    /// Altitude change requested while on the ground.
    NotAirborne,
    /// Stop requested while in the air.
    Airborne,
    /// Boat asked to move with the anchor down.
    AnchorDropped,
}

/// Coarse grouping of [`FailureReason`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureCategory {
    InsufficientEnergy,
    OutOfRange,
    NotFound,
    PreconditionUnmet,
}

impl FailureReason {
    pub fn category(self) -> FailureCategory {
        match self {
            Self::TooTired => FailureCategory::InsufficientEnergy,
            Self::AltitudeOutOfRange | Self::BelowGround | Self::SpeedOutOfRange => {
                FailureCategory::OutOfRange
            }
            Self::PowerNotFound => FailureCategory::NotFound,
            Self::AlreadyGrounded
            | Self::AlreadyMember
            | Self::SelfMembership
            | Self::CircularTeam
            | Self::NoTeamMembers
            | Self::MemberUnavailable
            | Self::EngineOff
            | Self::AlreadyAirborne
            | Self::NotAirborne
            | Self::Airborne
            | Self::AnchorDropped => FailureCategory::PreconditionUnmet,
        }
    }
}

/// Whether an operation applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    Failed(FailureReason),
}

/// Result of a hero or vehicle operation.
///
/// Carries the outcome and its status line only. The entity's updated
/// state is read back with `snapshot()` on the entity itself, which is
/// valid right after the call returns whether it succeeded or not.
///
/// ```
/// use capeworks_logic::flying::FlyingHero;
/// use capeworks_logic::hero::HeroCapability;
/// use capeworks_logic::snapshot::HeroVariantState;
///
/// let mut sam = FlyingHero::new("Falcon", "Sam Wilson", Vec::new(), 2000.0);
/// let res = sam.fly(1500.0);
/// let after = sam.snapshot();
/// assert!(res.is_success());
/// assert_eq!(after.energy, 85);
/// assert!(matches!(after.variant, HeroVariantState::Flying { is_flying: true, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub outcome: Outcome,
    /// Human-readable status line.
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            message: message.into(),
        }
    }

    pub fn failed(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Failed(reason),
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success)
    }

    /// The failure reason, if the operation was refused.
    pub fn failure(&self) -> Option<FailureReason> {
        match self.outcome {
            Outcome::Success => None,
            Outcome::Failed(reason) => Some(reason),
        }
    }
}

impl fmt::Display for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
