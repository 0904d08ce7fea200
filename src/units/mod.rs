
//! Unit algebra: dimensions, unit expressions, metric prefixes, and
//! registries of named units.

pub mod base;
pub mod definition;
pub mod dimension;
pub mod exponent;
pub mod expr;
pub mod named;
pub mod prefix;
pub mod registry;
pub mod scale;
pub mod system;
pub mod unit_with_power;

#[cfg(test)]
pub(crate) mod test_utils;

pub use base::BaseUnit;
pub use definition::{def_unit, DefOptions, NamespaceScope};
pub use dimension::{Dimension, BaseDimension};
pub use exponent::Exponent;
pub use expr::UnitExpr;
pub use named::NamedUnit;
pub use prefix::{MetricPrefix, Prefixes, PrefixTable};
pub use registry::UnitRegistry;
pub use scale::Scale;
pub use system::{UnitSystem, Decomposition};
pub use unit_with_power::UnitWithPower;
