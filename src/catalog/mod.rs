
//! The built-in catalogs of named units.

pub mod cgs;
pub mod si;

use crate::config::EngineConfig;
use crate::error::Error;
use crate::units::registry::UnitRegistry;

use once_cell::sync::Lazy;

static BUILTIN: Lazy<UnitRegistry> = Lazy::new(|| {
  populate().expect("built-in unit catalogs should define without conflicts")
});

/// The registry of built-in units, in namespaces [`si::NAMESPACE`]
/// and [`cgs::NAMESPACE`]. Built on first use and never modified
/// afterward.
pub fn builtin() -> &'static UnitRegistry {
  &BUILTIN
}

/// Builds a fresh registry containing the built-in units.
pub fn populate() -> Result<UnitRegistry, Error> {
  populate_with_config(EngineConfig::default())
}

pub fn populate_with_config(config: EngineConfig) -> Result<UnitRegistry, Error> {
  let mut registry = UnitRegistry::with_config(config);
  si::define(&mut registry)?;
  cgs::define(&mut registry)?;
  tracing::debug!(
    si = registry.all_in_namespace(si::NAMESPACE).len(),
    cgs = registry.all_in_namespace(cgs::NAMESPACE).len(),
    "populated unit catalogs"
  );
  Ok(registry)
}
