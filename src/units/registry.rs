
//! Registries of named units, partitioned into namespaces.

use super::base::BaseUnit;
use super::expr::UnitExpr;
use super::named::NamedUnit;
use crate::config::EngineConfig;

use thiserror::Error;

use std::collections::HashMap;
use std::sync::Arc;

/// A store of named units, grouped into namespaces (such as `"si"`
/// and `"cgs"`). Within one namespace, every name refers to exactly
/// one unit.
///
/// Registries are ordinary values and are passed explicitly to the
/// operations that read or populate them, so independent registries
/// never interfere with one another.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
  config: EngineConfig,
  // Namespaces in the order in which they were first populated.
  namespaces: Vec<Namespace>,
}

/// The units registered under one namespace.
#[derive(Debug, Clone)]
pub struct Namespace {
  name: String,
  units: Vec<Arc<NamedUnit>>,
  by_name: HashMap<String, Arc<NamedUnit>>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Name '{name}' in namespace '{namespace}' already refers to a different unit '{existing}'")]
pub struct ConflictingDefinitionError {
  pub namespace: String,
  pub name: String,
  /// Canonical name of the unit `name` is currently bound to.
  pub existing: String,
  _priv: (),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No unit named '{name}' in namespace '{namespace}'")]
pub struct NotFoundError {
  pub namespace: String,
  pub name: String,
  _priv: (),
}

impl UnitRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_config(config: EngineConfig) -> Self {
    Self { config, namespaces: Vec::new() }
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  pub fn namespace(&self, name: &str) -> Option<&Namespace> {
    self.namespaces.iter().find(|ns| ns.name == name)
  }

  /// All namespaces, in the order in which they were first populated.
  pub fn namespaces(&self) -> &[Namespace] {
    &self.namespaces
  }

  fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
    let index = match self.namespaces.iter().position(|ns| ns.name == name) {
      Some(index) => index,
      None => {
        self.namespaces.push(Namespace::new(name));
        self.namespaces.len() - 1
      }
    };
    &mut self.namespaces[index]
  }

  /// Checks whether `name` can be bound to `expr` in `namespace`.
  /// Returns `Ok(None)` if the name is free, or `Ok(Some(unit))` if
  /// it is already bound to a unit with an equal expression.
  pub fn check_binding(
    &self,
    namespace: &str,
    name: &str,
    expr: &UnitExpr,
  ) -> Result<Option<&Arc<NamedUnit>>, ConflictingDefinitionError> {
    let Some(existing) = self.namespace(namespace).and_then(|ns| ns.get(name)) else {
      return Ok(None);
    };
    if existing.expr() == expr {
      Ok(Some(existing))
    } else {
      Err(ConflictingDefinitionError::new(namespace, name, existing.name()))
    }
  }

  /// Registers every name of `unit` in `namespace`.
  ///
  /// Names already bound to an equal expression are left alone. If
  /// any name is already bound that way, the remaining names become
  /// aliases of that existing unit, which is returned. If any name is
  /// bound to a different expression, nothing is registered.
  pub fn register(&mut self, namespace: &str, unit: NamedUnit) -> Result<Arc<NamedUnit>, ConflictingDefinitionError> {
    let mut new_names = Vec::new();
    let mut existing = None;
    for name in unit.names() {
      match self.check_binding(namespace, name, unit.expr())? {
        None => new_names.push(name.clone()),
        Some(bound) => {
          existing.get_or_insert_with(|| Arc::clone(bound));
        }
      }
    }
    match existing {
      Some(existing) => {
        tracing::trace!(namespace, unit = %existing, aliases = new_names.len(), "unit already registered");
        for name in new_names {
          self.alias(namespace, name, &existing);
        }
        Ok(existing)
      }
      None => Ok(self.commit(namespace, unit, new_names)),
    }
  }

  /// Binds each of `names` to `unit`, without any further checks.
  /// Callers must have checked each name with
  /// [`UnitRegistry::check_binding`] first.
  pub(crate) fn commit(&mut self, namespace: &str, unit: NamedUnit, names: Vec<String>) -> Arc<NamedUnit> {
    let unit = Arc::new(unit);
    tracing::debug!(namespace, unit = %unit, expr = %unit.expr(), "registering unit");
    let ns = self.namespace_mut(namespace);
    for name in names {
      ns.by_name.insert(name, Arc::clone(&unit));
    }
    ns.units.push(Arc::clone(&unit));
    unit
  }

  /// Binds `name` to an already registered unit, without any further
  /// checks. The unit is listed in `namespace` at most once.
  pub(crate) fn alias(&mut self, namespace: &str, name: String, unit: &Arc<NamedUnit>) {
    let ns = self.namespace_mut(namespace);
    ns.by_name.insert(name, Arc::clone(unit));
    if !ns.units.iter().any(|u| Arc::ptr_eq(u, unit)) {
      ns.units.push(Arc::clone(unit));
    }
  }

  /// Makes the unit named `name` in namespace `from` available under
  /// that same name in namespace `into`.
  pub fn import(&mut self, from: &str, name: &str, into: &str) -> Result<Arc<NamedUnit>, crate::error::Error> {
    let unit = Arc::clone(self.lookup(from, name)?);
    if self.check_binding(into, name, unit.expr())?.is_none() {
      tracing::debug!(from, into, unit = %unit, "importing unit");
      self.alias(into, name.to_owned(), &unit);
    }
    Ok(unit)
  }

  pub fn lookup(&self, namespace: &str, name: &str) -> Result<&Arc<NamedUnit>, NotFoundError> {
    self.namespace(namespace)
      .and_then(|ns| ns.get(name))
      .ok_or_else(|| NotFoundError::new(namespace, name))
  }

  /// Looks `name` up in every namespace, in the order in which the
  /// namespaces were first populated.
  pub fn find(&self, name: &str) -> Option<&Arc<NamedUnit>> {
    self.namespaces.iter().find_map(|ns| ns.get(name))
  }

  /// Finds a base unit named `name` in the expression of any
  /// registered unit. Returns the namespace and unit it was found in,
  /// along with the base unit itself.
  pub fn find_base_unit(&self, name: &str) -> Option<(&str, &Arc<NamedUnit>, &BaseUnit)> {
    self.namespaces.iter().find_map(|ns| {
      ns.units.iter().find_map(|unit| {
        unit.expr().iter()
          .find(|elem| elem.unit.name() == name)
          .map(|elem| (ns.name(), unit, &elem.unit))
      })
    })
  }

  /// The distinct units available in `namespace`, in registration
  /// order. Empty if no such namespace exists.
  pub fn all_in_namespace(&self, namespace: &str) -> &[Arc<NamedUnit>] {
    self.namespace(namespace).map(Namespace::units).unwrap_or_default()
  }

  /// Removes every registered unit, keeping the configuration.
  pub fn reset(&mut self) {
    self.namespaces.clear();
  }
}

impl Namespace {
  fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), units: Vec::new(), by_name: HashMap::new() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn get(&self, name: &str) -> Option<&Arc<NamedUnit>> {
    self.by_name.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.by_name.contains_key(name)
  }

  pub fn units(&self) -> &[Arc<NamedUnit>] {
    &self.units
  }

  /// Every name bound in this namespace, in no particular order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.by_name.keys().map(String::as_str)
  }
}

impl ConflictingDefinitionError {
  pub fn new(namespace: impl Into<String>, name: impl Into<String>, existing: impl Into<String>) -> Self {
    Self {
      namespace: namespace.into(),
      name: name.into(),
      existing: existing.into(),
      _priv: (),
    }
  }
}

impl NotFoundError {
  pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
    Self { namespace: namespace.into(), name: name.into(), _priv: () }
  }
}
