
//! Defining named units and committing them, along with their
//! prefixed variants, to a registry.

use super::base::BaseUnit;
use super::dimension::Dimension;
use super::expr::UnitExpr;
use super::named::NamedUnit;
use super::prefix::{Prefixes, PrefixTable};
use super::registry::{UnitRegistry, ConflictingDefinitionError, NotFoundError};
use crate::config::PrefixConflictPolicy;
use crate::error::Error;
use crate::util::regexes::UNIT_NAME_RE;

use thiserror::Error;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid unit name '{name}'")]
pub struct InvalidNameError {
  pub name: String,
  _priv: (),
}

/// Options for [`def_unit`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefOptions {
  /// Whether to commit the unit to the registry. An unregistered unit
  /// is returned to the caller and nothing else.
  pub register: bool,
  /// Which prefixed variants of the unit to register alongside it.
  /// Ignored for unregistered units.
  pub prefixes: Prefixes,
  /// Short or long prefix names never to expand for this unit.
  pub exclude_prefixes: BTreeSet<String>,
  /// Documentation attached to the unit.
  pub doc: Option<String>,
  /// The dimension of a new irreducible unit. Only consulted when no
  /// expression is given.
  pub dimension: Dimension,
}

/// A registry together with the namespace currently being populated.
pub struct NamespaceScope<'a> {
  registry: &'a mut UnitRegistry,
  namespace: String,
}

/// A unit that new names can be bound to during a definition.
#[derive(Clone)]
enum Target {
  Registered(Arc<NamedUnit>),
  /// Index into [`PendingDefinition::entries`].
  Pending(usize),
}

/// Whether a name can be bound during a definition.
enum Binding {
  Free,
  /// Already bound to a unit with an equal expression.
  Bound(Target),
}

/// The units a single definition will commit, checked against the
/// registry but not yet written to it.
struct PendingDefinition<'a> {
  namespace: &'a str,
  entries: Vec<(NamedUnit, Vec<String>)>,
  /// New names for units which are already registered.
  aliases: Vec<(String, Arc<NamedUnit>)>,
  /// The unit each new name will be bound to.
  claimed: HashMap<String, Target>,
}

impl DefOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn registered(mut self) -> Self {
    self.register = true;
    self
  }

  pub fn with_prefixes(mut self, prefixes: impl Into<Prefixes>) -> Self {
    self.prefixes = prefixes.into();
    self
  }

  pub fn excluding_prefixes<S: Into<String>>(mut self, prefixes: impl IntoIterator<Item = S>) -> Self {
    self.exclude_prefixes.extend(prefixes.into_iter().map(Into::into));
    self
  }

  pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
    self.doc = Some(doc.into());
    self
  }

  pub fn with_dimension(mut self, dimension: impl Into<Dimension>) -> Self {
    self.dimension = dimension.into();
    self
  }
}

impl InvalidNameError {
  fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), _priv: () }
  }
}

/// Defines a named unit in `namespace`.
///
/// `names` lists the unit's names, canonical short name first. If
/// `expr` is `None`, the unit is a new irreducible unit of dimension
/// `options.dimension`, whose only base unit is itself.
///
/// If `options.register` is set, the unit and every selected prefixed
/// variant of it are registered. Prefixes only take effect together
/// with `register`. Definition is atomic: either every name is
/// committed, or (on error) none is. A name already bound to an equal
/// expression is left as it is, so repeating a definition is
/// harmless, and any further names become aliases of that existing
/// unit. A prefixed name already bound to a different unit is skipped
/// or fatal according to the registry's [`PrefixConflictPolicy`]; any
/// other conflict is fatal.
///
/// A base unit's identity is its name, so a base unit may not share
/// its name with a different base unit in any namespace of the
/// registry. The total scale of the unit must be finite and nonzero.
pub fn def_unit<S: Into<String>>(
  registry: &mut UnitRegistry,
  namespace: &str,
  names: impl IntoIterator<Item = S>,
  expr: Option<UnitExpr>,
  options: &DefOptions,
) -> Result<Arc<NamedUnit>, Error> {
  let names = validate_names(names)?;
  let expr = match expr {
    Some(expr) => expr,
    None => UnitExpr::from(BaseUnit::new(names[0].clone(), options.dimension)),
  };
  expr.check_exponents(registry.config().max_denominator)?;
  expr.check_scale()?;
  for elem in expr.iter() {
    check_base_unit(registry, &elem.unit)?;
  }
  let unit = NamedUnit::new(names, expr, namespace, options.doc.clone());
  if !options.register {
    return Ok(Arc::new(unit));
  }

  let prefixed = PrefixTable::si().expand(&unit, &options.prefixes, &options.exclude_prefixes);
  let mut pending = PendingDefinition::new(namespace);
  let existing = pending.add_unit(registry, unit)?;
  let policy = registry.config().prefix_conflicts;
  for candidate in prefixed {
    pending.add_prefixed_unit(registry, candidate, policy)?;
  }
  // If the unit itself was new, it is always the first committed.
  let committed = pending.commit(registry);
  Ok(existing.unwrap_or_else(|| Arc::clone(&committed[0])))
}

/// Fails if `registry` already uses a different base unit with the
/// same name as `base`.
fn check_base_unit(registry: &UnitRegistry, base: &BaseUnit) -> Result<(), ConflictingDefinitionError> {
  match registry.find_base_unit(base.name()) {
    Some((namespace, user, existing)) if existing != base => {
      Err(ConflictingDefinitionError::new(namespace, base.name(), user.name()))
    }
    _ => Ok(()),
  }
}

fn validate_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Vec<String>, InvalidNameError> {
  let names: Vec<String> = names.into_iter().map(Into::into).collect();
  if names.is_empty() {
    return Err(InvalidNameError::new(""));
  }
  if let Some(invalid) = names.iter().find(|name| !UNIT_NAME_RE.is_match(name)) {
    return Err(InvalidNameError::new(invalid.as_str()));
  }
  Ok(names)
}

impl<'a> PendingDefinition<'a> {
  fn new(namespace: &'a str) -> Self {
    Self { namespace, entries: Vec::new(), aliases: Vec::new(), claimed: HashMap::new() }
  }

  fn check(&self, registry: &UnitRegistry, name: &str, expr: &UnitExpr) -> Result<Binding, ConflictingDefinitionError> {
    if let Some(target) = self.claimed.get(name) {
      let claimant = match target {
        Target::Registered(unit) => unit.as_ref(),
        Target::Pending(index) => &self.entries[*index].0,
      };
      return if claimant.expr() == expr {
        Ok(Binding::Bound(target.clone()))
      } else {
        Err(ConflictingDefinitionError::new(self.namespace, name, claimant.name()))
      };
    }
    match registry.check_binding(self.namespace, name, expr)? {
      None => Ok(Binding::Free),
      Some(unit) => Ok(Binding::Bound(Target::Registered(Arc::clone(unit)))),
    }
  }

  /// Adds the unit being defined. Every name conflict is fatal. If
  /// any name is already bound to an equal unit, the other names
  /// become aliases of it and it is returned.
  fn add_unit(&mut self, registry: &UnitRegistry, unit: NamedUnit) -> Result<Option<Arc<NamedUnit>>, ConflictingDefinitionError> {
    let mut new_names = Vec::new();
    let mut existing = None;
    for name in unit.names() {
      match self.check(registry, name, unit.expr())? {
        Binding::Free => new_names.push(name.clone()),
        Binding::Bound(Target::Registered(bound)) => {
          existing.get_or_insert(bound);
        }
        Binding::Bound(Target::Pending(_)) => {}
      }
    }
    match existing {
      Some(existing) => {
        self.bind(new_names, Target::Registered(Arc::clone(&existing)));
        Ok(Some(existing))
      }
      None => {
        self.push(unit, new_names);
        Ok(None)
      }
    }
  }

  /// Adds a prefixed variant of the unit being defined, leaving out
  /// any names that are already in use if the policy allows it.
  fn add_prefixed_unit(
    &mut self,
    registry: &UnitRegistry,
    unit: NamedUnit,
    policy: PrefixConflictPolicy,
  ) -> Result<(), ConflictingDefinitionError> {
    let mut new_names = Vec::new();
    let mut target = None;
    for name in unit.names() {
      match self.check(registry, name, unit.expr()) {
        Ok(Binding::Free) => new_names.push(name.clone()),
        Ok(Binding::Bound(bound)) => {
          target.get_or_insert(bound);
        }
        Err(err) => match policy {
          PrefixConflictPolicy::Fail => return Err(err),
          PrefixConflictPolicy::Skip => {
            tracing::warn!(
              namespace = self.namespace,
              name = %name,
              existing = %err.existing,
              "skipping prefixed unit name which is already in use"
            );
          }
        },
      }
    }
    if new_names.is_empty() {
      return Ok(());
    }
    match target {
      Some(target) => self.bind(new_names, target),
      None => {
        let doc = unit.doc().map(str::to_owned);
        let unit = NamedUnit::new(new_names.clone(), unit.to_expr(), self.namespace, doc);
        self.push(unit, new_names);
      }
    }
    Ok(())
  }

  fn push(&mut self, unit: NamedUnit, new_names: Vec<String>) {
    let index = self.entries.len();
    self.entries.push((unit, Vec::new()));
    self.bind(new_names, Target::Pending(index));
  }

  fn bind(&mut self, names: Vec<String>, target: Target) {
    for name in names {
      self.claimed.insert(name.clone(), target.clone());
      match &target {
        Target::Registered(unit) => self.aliases.push((name, Arc::clone(unit))),
        Target::Pending(index) => self.entries[*index].1.push(name),
      }
    }
  }

  fn commit(self, registry: &mut UnitRegistry) -> Vec<Arc<NamedUnit>> {
    let namespace = self.namespace;
    let committed = self.entries.into_iter()
      .map(|(unit, names)| registry.commit(namespace, unit, names))
      .collect();
    for (name, unit) in self.aliases {
      registry.alias(namespace, name, &unit);
    }
    committed
  }
}

impl UnitRegistry {
  /// A handle for defining units in `namespace`.
  pub fn scope(&mut self, namespace: impl Into<String>) -> NamespaceScope<'_> {
    NamespaceScope { registry: self, namespace: namespace.into() }
  }
}

impl<'a> NamespaceScope<'a> {
  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  pub fn registry(&self) -> &UnitRegistry {
    self.registry
  }

  /// [`def_unit`] in the current namespace.
  pub fn def_unit<S: Into<String>>(
    &mut self,
    names: impl IntoIterator<Item = S>,
    expr: Option<UnitExpr>,
    options: &DefOptions,
  ) -> Result<Arc<NamedUnit>, Error> {
    def_unit(self.registry, &self.namespace, names, expr, options)
  }

  /// Makes the unit `name` of namespace `from` available in the
  /// current namespace.
  pub fn import(&mut self, from: &str, name: &str) -> Result<Arc<NamedUnit>, Error> {
    self.registry.import(from, name, &self.namespace)
  }

  pub fn lookup(&self, name: &str) -> Result<&Arc<NamedUnit>, NotFoundError> {
    self.registry.lookup(&self.namespace, name)
  }

  /// The expression of the unit `name` in namespace `namespace`.
  pub fn expr_of(&self, namespace: &str, name: &str) -> Result<UnitExpr, NotFoundError> {
    self.registry.lookup(namespace, name).map(|unit| unit.to_expr())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::EngineConfig;
  use crate::units::dimension::BaseDimension;
  use crate::units::exponent::ratio;
  use crate::units::scale::Scale;
  use crate::util::TryPow;

  use num::pow::Pow;
  use approx::assert_relative_eq;

  /// A registry with a handful of SI units in namespace `si`.
  fn si_registry(config: EngineConfig) -> UnitRegistry {
    let mut registry = UnitRegistry::with_config(config);
    let mut si = registry.scope("si");
    let base = DefOptions::new().registered().with_prefixes(true);
    si.def_unit(["m", "meter"], None, &base.clone().with_dimension(BaseDimension::Length)).unwrap();
    si.def_unit(["s", "second"], None, &base.clone().with_dimension(BaseDimension::Time)).unwrap();
    si.def_unit(["kg", "kilogram"], None, &DefOptions::new().registered().with_dimension(BaseDimension::Mass)).unwrap();
    si.def_unit(["A", "ampere"], None, &base.clone().with_dimension(BaseDimension::Current)).unwrap();
    let kg = si.expr_of("si", "kg").unwrap();
    si.def_unit(["g", "gram"], Some(Scale::ratio(1, 1000) * kg), &base.clone().excluding_prefixes(["k"])).unwrap();
    let t = si.expr_of("si", "kg").unwrap()
      / (si.expr_of("si", "A").unwrap() * si.expr_of("si", "s").unwrap().pow(2));
    si.def_unit(["T", "Tesla", "tesla"], Some(t), &base).unwrap();
    registry
  }

  fn expr(registry: &UnitRegistry, namespace: &str, name: &str) -> UnitExpr {
    registry.lookup(namespace, name).unwrap().to_expr()
  }

  #[test]
  fn test_def_unit_base_unit() {
    let registry = si_registry(EngineConfig::default());
    let m = registry.lookup("si", "m").unwrap();
    assert_eq!(m.expr().dimension(), Dimension::singleton(BaseDimension::Length));
    assert_eq!(m.expr().units().len(), 1);
    assert_eq!(m.expr().units()[0].unit.name(), "m");
    assert_eq!(m.names(), &["m".to_owned(), "meter".to_owned()]);
  }

  #[test]
  fn test_def_unit_prefix_expansion() {
    let registry = si_registry(EngineConfig::default());
    let km = registry.lookup("si", "km").unwrap();
    let m = expr(&registry, "si", "m");
    assert_eq!(km.expr(), &(Scale::from(1000) * m.clone()));
    assert_eq!(km.expr().scale(), &(&Scale::from(1000) * m.scale()));
    assert!(Arc::ptr_eq(km, registry.lookup("si", "kilometer").unwrap()));
    assert!(registry.lookup("si", "cm").is_ok());
    assert!(registry.lookup("si", "μs").is_ok());
  }

  #[test]
  fn test_def_unit_excluded_prefix() {
    let registry = si_registry(EngineConfig::default());
    // "kg" is still the irreducible kilogram, not a prefixed gram.
    let kg = registry.lookup("si", "kg").unwrap();
    assert_eq!(kg.names(), &["kg".to_owned(), "kilogram".to_owned()]);
    assert!(registry.lookup("si", "kilogram").is_ok());
    assert_eq!(expr(&registry, "si", "mg").scale(), &Scale::ratio(1, 1_000_000));
  }

  #[test]
  fn test_def_unit_conflict() {
    let mut registry = si_registry(EngineConfig::default());
    let m = expr(&registry, "si", "m");
    let s = expr(&registry, "si", "s");
    let options = DefOptions::new().registered();
    def_unit(&mut registry, "test", ["x"], Some(m.clone()), &options).unwrap();
    let err = def_unit(&mut registry, "test", ["x"], Some(s), &options).unwrap_err();
    assert_eq!(err, Error::ConflictingDefinition(ConflictingDefinitionError::new("test", "x", "x")));
    let again = def_unit(&mut registry, "test", ["x"], Some(m.clone()), &options).unwrap();
    assert_eq!(again.expr(), &m);
    assert_eq!(registry.all_in_namespace("test").len(), 1);
  }

  #[test]
  fn test_def_unit_repeated_with_prefixes_is_noop() {
    let mut registry = si_registry(EngineConfig::default());
    let before = registry.all_in_namespace("si").len();
    let m = registry.lookup("si", "m").unwrap().clone();
    let options = DefOptions::new().registered().with_prefixes(true).with_dimension(BaseDimension::Length);
    let again = def_unit(&mut registry, "si", ["m", "meter"], None, &options).unwrap();
    assert!(Arc::ptr_eq(&m, &again));
    assert_eq!(registry.all_in_namespace("si").len(), before);
  }

  #[test]
  fn test_def_unit_new_alias_joins_existing_unit() {
    let mut registry = si_registry(EngineConfig::default());
    let before = registry.all_in_namespace("si").len();
    let m = registry.lookup("si", "m").unwrap().clone();
    let options = DefOptions::new().registered().with_prefixes(true).with_dimension(BaseDimension::Length);
    let again = def_unit(&mut registry, "si", ["m", "meter", "metre"], None, &options).unwrap();
    assert!(Arc::ptr_eq(&m, &again));
    assert!(Arc::ptr_eq(registry.lookup("si", "metre").unwrap(), &m));
    let km = registry.lookup("si", "km").unwrap();
    assert!(Arc::ptr_eq(registry.lookup("si", "kilometre").unwrap(), km));
    assert_eq!(registry.all_in_namespace("si").iter().filter(|unit| Arc::ptr_eq(unit, &m)).count(), 1);
    assert_eq!(registry.all_in_namespace("si").len(), before);
  }

  #[test]
  fn test_def_unit_base_unit_name_in_other_namespace() {
    let mut registry = si_registry(EngineConfig::default());
    let options = DefOptions::new().registered().with_dimension(BaseDimension::Mass);
    let err = def_unit(&mut registry, "other", ["s"], None, &options).unwrap_err();
    assert_eq!(err, Error::ConflictingDefinition(ConflictingDefinitionError::new("si", "s", "s")));
    let foreign_m = UnitExpr::from(BaseUnit::new("m", BaseDimension::Time));
    let err = def_unit(&mut registry, "other", ["t"], Some(foreign_m), &options).unwrap_err();
    assert_eq!(err, Error::ConflictingDefinition(ConflictingDefinitionError::new("si", "m", "m")));
    assert!(registry.namespace("other").is_none());

    // The same base unit can be defined in any namespace.
    let options = DefOptions::new().registered().with_dimension(BaseDimension::Time);
    let s = def_unit(&mut registry, "other", ["s"], None, &options).unwrap();
    assert_eq!(s.expr(), &expr(&registry, "si", "s"));
    assert!((&expr(&registry, "si", "s") / s.expr()).is_dimensionless());
  }

  #[test]
  fn test_def_unit_invalid_scale() {
    let mut registry = si_registry(EngineConfig::default());
    let m = expr(&registry, "si", "m");
    let options = DefOptions::new().registered().with_prefixes(true);
    for scale in [Scale::from(0), Scale::from(0.0), Scale::from(f64::NAN), Scale::from(f64::INFINITY)] {
      let err = def_unit(&mut registry, "test", ["z"], Some(scale * m.clone()), &options).unwrap_err();
      assert!(matches!(err, Error::InvalidScale(_)));
    }
    assert!(registry.lookup("test", "z").is_err());
    assert!(registry.lookup("test", "kz").is_err());
    let err = def_unit(&mut registry, "test", ["z"], Some(Scale::from(0) * m), &DefOptions::new()).unwrap_err();
    assert_eq!(err.to_string(), "Unit scale 0 is not a finite nonzero number");
  }

  #[test]
  fn test_def_unit_gal() {
    let mut registry = si_registry(EngineConfig::default());
    let cm = expr(&registry, "si", "cm");
    let s2 = expr(&registry, "si", "s").pow(2);
    let options = DefOptions::new().registered().with_prefixes(true).with_doc("Gal: CGS unit of acceleration");
    let gal = def_unit(&mut registry, "cgs", ["Gal", "gal"], Some(&cm / &s2), &options).unwrap();
    let m_per_s2 = expr(&registry, "si", "m") / s2;
    assert_eq!(gal.expr().scale_factor_to(&m_per_s2).unwrap(), Scale::ratio(1, 100));
    assert_eq!(gal.doc(), Some("Gal: CGS unit of acceleration"));
    let kgal = registry.lookup("cgs", "kGal").unwrap();
    assert_eq!(kgal.expr().scale_factor_to(&m_per_s2).unwrap(), Scale::from(10));
    assert_relative_eq!(kgal.expr().scale_factor_to(&m_per_s2).unwrap().to_f64(), 10.0);
    assert!(registry.lookup("cgs", "kilogal").is_ok());
    assert!(registry.lookup("cgs", "mGal").is_ok());
  }

  #[test]
  fn test_def_unit_gauss() {
    let mut registry = si_registry(EngineConfig::default());
    let t = expr(&registry, "si", "T");
    let options = DefOptions::new().registered().with_prefixes(true);
    let gauss = def_unit(&mut registry, "cgs", ["G", "Gauss", "gauss"], Some(Scale::from(1e-4) * t.clone()), &options).unwrap();
    assert_relative_eq!(gauss.expr().scale_factor_to(&t).unwrap().to_f64(), 1e-4);
    assert!(Arc::ptr_eq(registry.lookup("cgs", "Gauss").unwrap(), &gauss));
  }

  #[test]
  fn test_def_unit_franklin() {
    let mut registry = si_registry(EngineConfig::default());
    let g = expr(&registry, "si", "g");
    let cm = expr(&registry, "si", "cm");
    let s = expr(&registry, "si", "s");
    let fr_expr = g.try_pow(ratio(1, 2)).unwrap() * cm.try_pow(ratio(3, 2)).unwrap() * s.pow(-1);
    let options = DefOptions::new().registered();
    let fr = def_unit(&mut registry, "cgs", ["Fr", "Franklin", "statcoulomb", "statC", "esu"], Some(fr_expr), &options).unwrap();
    assert_eq!(fr.expr().dimension().get(BaseDimension::Mass), ratio(1, 2));
    assert_eq!(fr.expr().dimension().get(BaseDimension::Length), ratio(3, 2));
    assert!(registry.lookup("cgs", "statC").is_ok());
  }

  #[test]
  fn test_def_unit_invalid_exponent() {
    let config = EngineConfig { max_denominator: 2, ..EngineConfig::default() };
    let mut registry = si_registry(config);
    let m = expr(&registry, "si", "m");
    let weird = m.pow_bounded(ratio(1, 3), 10).unwrap();
    let err = def_unit(&mut registry, "test", ["weird"], Some(weird), &DefOptions::new().registered()).unwrap_err();
    assert!(matches!(err, Error::InvalidExponent(_)));
    assert!(registry.lookup("test", "weird").is_err());
  }

  #[test]
  fn test_def_unit_prefix_conflict_skipped() {
    let mut registry = si_registry(EngineConfig::default());
    let m = expr(&registry, "si", "m");
    let s = expr(&registry, "si", "s");
    let options = DefOptions::new().registered();
    def_unit(&mut registry, "test", ["kx"], Some(s), &options).unwrap();
    let options = DefOptions::new().registered().with_prefixes(Prefixes::only(["k", "M"]));
    def_unit(&mut registry, "test", ["x"], Some(m.clone()), &options).unwrap();
    // "kx" keeps its earlier meaning, but "Mx" was still registered.
    assert_eq!(registry.lookup("test", "kx").unwrap().expr(), &expr(&registry, "si", "s"));
    assert_eq!(registry.lookup("test", "Mx").unwrap().expr(), &(Scale::from(1_000_000) * m));
  }

  #[test]
  fn test_def_unit_prefix_conflict_fails_atomically() {
    let config = EngineConfig { prefix_conflicts: PrefixConflictPolicy::Fail, ..EngineConfig::default() };
    let mut registry = si_registry(config);
    let m = expr(&registry, "si", "m");
    let s = expr(&registry, "si", "s");
    let options = DefOptions::new().registered();
    def_unit(&mut registry, "test", ["kx"], Some(s), &options).unwrap();
    let options = DefOptions::new().registered().with_prefixes(true);
    let err = def_unit(&mut registry, "test", ["x"], Some(m), &options).unwrap_err();
    assert_eq!(err, Error::ConflictingDefinition(ConflictingDefinitionError::new("test", "kx", "kx")));
    assert!(registry.lookup("test", "x").is_err());
    assert!(registry.lookup("test", "Mx").is_err());
    assert_eq!(registry.all_in_namespace("test").len(), 1);
  }

  #[test]
  fn test_def_unit_prefix_conflict_within_definition() {
    // The prefixed name "ck" would collide with the unit's own alias.
    let mut registry = UnitRegistry::new();
    let options = DefOptions::new().registered().with_prefixes(Prefixes::only(["c"])).with_dimension(BaseDimension::Length);
    let unit = def_unit(&mut registry, "test", ["k", "ck"], None, &options).unwrap();
    assert!(Arc::ptr_eq(registry.lookup("test", "ck").unwrap(), &unit));
    // The long-prefixed name is unaffected.
    let centi = registry.lookup("test", "centick").unwrap();
    assert_eq!(centi.names(), &["centick".to_owned()]);
  }

  #[test]
  fn test_def_unit_unregistered() {
    let mut registry = si_registry(EngineConfig::default());
    let before = registry.all_in_namespace("si").len();
    let m = expr(&registry, "si", "m");
    let options = DefOptions::new().with_prefixes(true);
    let unit = def_unit(&mut registry, "si", ["furlong"], Some(Scale::ratio(201_168, 1000) * m), &options).unwrap();
    assert_eq!(unit.name(), "furlong");
    assert!(registry.lookup("si", "furlong").is_err());
    assert!(registry.lookup("si", "kfurlong").is_err());
    assert_eq!(registry.all_in_namespace("si").len(), before);
  }

  #[test]
  fn test_def_unit_invalid_names() {
    let mut registry = UnitRegistry::new();
    let options = DefOptions::new().registered();
    let err = def_unit(&mut registry, "test", Vec::<String>::new(), None, &options).unwrap_err();
    assert!(matches!(err, Error::InvalidName(_)));
    let err = def_unit(&mut registry, "test", [""], None, &options).unwrap_err();
    assert!(matches!(err, Error::InvalidName(_)));
    let err = def_unit(&mut registry, "test", ["ok", "not ok"], None, &options).unwrap_err();
    assert_eq!(err.to_string(), "Invalid unit name 'not ok'");
    assert!(registry.namespaces().is_empty());
  }

  #[test]
  fn test_scope() {
    let mut registry = si_registry(EngineConfig::default());
    let mut cgs = registry.scope("cgs");
    assert_eq!(cgs.namespace(), "cgs");
    let s = cgs.import("si", "s").unwrap();
    assert!(Arc::ptr_eq(cgs.lookup("s").unwrap(), &s));
    let cm = cgs.expr_of("si", "cm").unwrap();
    cgs.def_unit(["St", "stokes"], Some(cm.pow(2) / s.to_expr()), &DefOptions::new().registered()).unwrap();
    assert!(cgs.registry().lookup("cgs", "stokes").is_ok());
  }
}
