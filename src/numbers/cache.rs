use std::hash::BuildHasherDefault;
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use rustc_hash::FxHasher;

type FxDashMap<K, V> = DashMap<K, V, BuildHasherDefault<FxHasher>>;

// Process-wide canonical instance tables. Entries are never mutated or
// evicted; numeric literal cardinality is bounded by session size.
static INTEGERS: OnceLock<FxDashMap<rug::Integer, Arc<rug::Integer>>> = OnceLock::new();
static RATIONALS: OnceLock<FxDashMap<rug::Rational, Arc<rug::Rational>>> = OnceLock::new();
static SYMBOLS: OnceLock<FxDashMap<Box<str>, Arc<str>>> = OnceLock::new();

/// Insert-if-absent: at most one instance per value is ever published.
/// A losing concurrent writer drops its freshly built allocation.
pub(crate) fn intern_integer(value: rug::Integer) -> Arc<rug::Integer> {
    let table = INTEGERS.get_or_init(FxDashMap::default);
    if let Some(hit) = table.get(&value) {
        return Arc::clone(&hit);
    }
    let entry = table
        .entry(value.clone())
        .or_insert_with(|| Arc::new(value));
    Arc::clone(&entry)
}

pub(crate) fn intern_rational(value: rug::Rational) -> Arc<rug::Rational> {
    let table = RATIONALS.get_or_init(FxDashMap::default);
    if let Some(hit) = table.get(&value) {
        return Arc::clone(&hit);
    }
    let entry = table
        .entry(value.clone())
        .or_insert_with(|| Arc::new(value));
    Arc::clone(&entry)
}

pub(crate) fn intern_symbol(name: &str) -> Arc<str> {
    let table = SYMBOLS.get_or_init(FxDashMap::default);
    if let Some(hit) = table.get(name) {
        return Arc::clone(&hit);
    }
    let entry = table
        .entry(Box::from(name))
        .or_insert_with(|| Arc::from(name));
    Arc::clone(&entry)
}
