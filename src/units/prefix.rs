
//! Metric prefixes, and the expansion of a named unit into its
//! prefixed variants.

use super::named::NamedUnit;
use super::scale::Scale;

use once_cell::sync::Lazy;

use std::collections::BTreeSet;

/// A power-of-ten prefix. Short prefix symbols (`"k"`) attach to a
/// unit's short name, and long prefix names (`"kilo"`) attach to each
/// of its long names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricPrefix {
  pub short_names: Vec<&'static str>,
  pub long_names: Vec<&'static str>,
  pub exponent: i32,
}

/// Which prefixes a unit definition should expand through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Prefixes {
  #[default]
  None,
  /// Every prefix in the table.
  All,
  /// Only the prefixes having one of these short or long names.
  Only(BTreeSet<String>),
}

/// The immutable table of prefixes that unit definitions expand
/// through.
#[derive(Clone, Debug)]
pub struct PrefixTable {
  prefixes: Vec<MetricPrefix>,
}

static SI_PREFIX_TABLE: Lazy<PrefixTable> = Lazy::new(|| PrefixTable::new(MetricPrefix::si_prefixes()));

impl MetricPrefix {
  pub fn new(short_names: &[&'static str], long_names: &[&'static str], exponent: i32) -> MetricPrefix {
    MetricPrefix {
      short_names: short_names.to_vec(),
      long_names: long_names.to_vec(),
      exponent,
    }
  }

  /// The factor this prefix multiplies a unit's scale by.
  pub fn multiplier(&self) -> Scale {
    Scale::power_of_ten(self.exponent)
  }

  /// Whether `symbol` is one of the short or long names of this
  /// prefix.
  pub fn is_named(&self, symbol: &str) -> bool {
    self.short_names.iter().chain(&self.long_names).any(|name| *name == symbol)
  }

  /// The names the prefixed variant of `unit` goes by: every short
  /// prefix on the unit's short name, followed by every long prefix
  /// on each of the unit's long names. Prefix symbols in `exclude` are
  /// left out.
  pub fn prefixed_names(&self, unit: &NamedUnit, exclude: &BTreeSet<String>) -> Vec<String> {
    let short = self.short_names.iter()
      .filter(|p| !exclude.contains(**p))
      .map(|p| format!("{}{}", p, unit.name()));
    let long = self.long_names.iter()
      .filter(|p| !exclude.contains(**p))
      .flat_map(|p| unit.long_names().iter().map(move |name| format!("{}{}", p, name)));
    short.chain(long).collect()
  }

  /// Applies this prefix to the unit, or returns `None` if every name
  /// for the result is excluded.
  pub fn apply(&self, unit: &NamedUnit, exclude: &BTreeSet<String>) -> Option<NamedUnit> {
    let names = self.prefixed_names(unit, exclude);
    if names.is_empty() {
      return None;
    }
    let expr = self.multiplier() * unit.expr().clone();
    Some(NamedUnit::new(names, expr, unit.namespace(), None))
  }

  pub fn si_prefixes() -> Vec<MetricPrefix> {
    vec![
      MetricPrefix::new(&["Q"], &["quetta"], 30),
      MetricPrefix::new(&["R"], &["ronna"], 27),
      MetricPrefix::new(&["Y"], &["yotta"], 24),
      MetricPrefix::new(&["Z"], &["zetta"], 21),
      MetricPrefix::new(&["E"], &["exa"], 18),
      MetricPrefix::new(&["P"], &["peta"], 15),
      MetricPrefix::new(&["T"], &["tera"], 12),
      MetricPrefix::new(&["G"], &["giga"], 9),
      MetricPrefix::new(&["M"], &["mega"], 6),
      MetricPrefix::new(&["k"], &["kilo"], 3),
      MetricPrefix::new(&["h"], &["hecto"], 2),
      MetricPrefix::new(&["da"], &["deka", "deca"], 1),
      MetricPrefix::new(&["d"], &["deci"], -1),
      MetricPrefix::new(&["c"], &["centi"], -2),
      MetricPrefix::new(&["m"], &["milli"], -3),
      // Note: We accept both "u" and "μ" for micro.
      MetricPrefix::new(&["u", "μ"], &["micro"], -6),
      MetricPrefix::new(&["n"], &["nano"], -9),
      MetricPrefix::new(&["p"], &["pico"], -12),
      MetricPrefix::new(&["f"], &["femto"], -15),
      MetricPrefix::new(&["a"], &["atto"], -18),
      MetricPrefix::new(&["z"], &["zepto"], -21),
      MetricPrefix::new(&["y"], &["yocto"], -24),
      MetricPrefix::new(&["r"], &["ronto"], -27),
      MetricPrefix::new(&["q"], &["quecto"], -30),
    ]
  }
}

impl Prefixes {
  /// Restricts expansion to the named prefixes.
  pub fn only<S: Into<String>>(symbols: impl IntoIterator<Item = S>) -> Self {
    Prefixes::Only(symbols.into_iter().map(Into::into).collect())
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Prefixes::None)
  }

  pub fn selects(&self, prefix: &MetricPrefix) -> bool {
    match self {
      Prefixes::None => false,
      Prefixes::All => true,
      Prefixes::Only(symbols) => symbols.iter().any(|s| prefix.is_named(s)),
    }
  }
}

impl From<bool> for Prefixes {
  fn from(all: bool) -> Self {
    if all { Prefixes::All } else { Prefixes::None }
  }
}

impl PrefixTable {
  pub fn new(prefixes: Vec<MetricPrefix>) -> Self {
    Self { prefixes }
  }

  /// The standard SI prefixes, built once per process.
  pub fn si() -> &'static PrefixTable {
    &SI_PREFIX_TABLE
  }

  pub fn prefixes(&self) -> &[MetricPrefix] {
    &self.prefixes
  }

  /// Produces the prefixed variants of `unit` for every selected
  /// prefix, in table order. This only builds candidates; whether
  /// they can be registered is up to the caller.
  pub fn expand(&self, unit: &NamedUnit, selection: &Prefixes, exclude: &BTreeSet<String>) -> Vec<NamedUnit> {
    self.prefixes.iter()
      .filter(|prefix| selection.selects(prefix))
      .filter_map(|prefix| prefix.apply(unit, exclude))
      .collect()
  }
}
