//! Power descriptors owned by heroes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable named ability with a strength level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Power {
    name: String,
    description: String,
    power_level: i32,
}

impl Power {
    pub fn new(name: impl Into<String>, description: impl Into<String>, power_level: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            power_level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn power_level(&self) -> i32 {
        self.power_level
    }

    /// Case-insensitive name comparison used for power lookup.
    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Level {})", self.name, self.power_level)
    }
}
