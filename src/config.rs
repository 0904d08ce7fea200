
//! Configuration of the unit algebra engine.

use crate::units::exponent::DEFAULT_MAX_DENOMINATOR;

use serde::{Serialize, Deserialize};

/// Settings shared by every definition made against one registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
  /// The largest denominator a unit's exponents may have.
  pub max_denominator: i64,
  /// What to do when a prefixed variant of a new unit collides with a
  /// different unit that is already registered.
  pub prefix_conflicts: PrefixConflictPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixConflictPolicy {
  /// Leave the colliding name out and log a warning.
  #[default]
  Skip,
  /// Fail the whole definition.
  Fail,
}

impl EngineConfig {
  pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(input)
  }

  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      max_denominator: DEFAULT_MAX_DENOMINATOR,
      prefix_conflicts: PrefixConflictPolicy::default(),
    }
  }
}
