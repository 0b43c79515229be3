//! Global interning of variadic signatures.
//!
//! Structurally equal signatures built at different declaration sites map to
//! one shared allocation, so a resolver can compare them with
//! [`Variadic::ptr_eq`]. The first signature seen for a given element set is
//! the canonical one and keeps its declared name.
//!
//! Interning is optional: equality and hashing are structural either way.

use std::sync::OnceLock;

use papaya::HashMap;

use crate::variadic::Variadic;

static INTERNED: OnceLock<HashMap<Variadic, Variadic>> = OnceLock::new();

fn interned() -> &'static HashMap<Variadic, Variadic> {
    INTERNED.get_or_init(HashMap::new)
}

/// Canonical instance of `variadic`.
///
/// Thread-safe: concurrent calls with equal signatures all receive the
/// instance that was inserted first.
pub fn intern(variadic: &Variadic) -> Variadic {
    let map = interned();
    let guard = map.guard();

    if let Some(canonical) = map.get(variadic, &guard) {
        return canonical.clone();
    }

    let canonical = map.get_or_insert(variadic.clone(), variadic.clone(), &guard).clone();
    if canonical.ptr_eq(variadic) {
        tracing::debug!(variadic = %variadic, "variadic signature interned");
    }
    canonical
}

/// Number of interned signatures.
pub fn interned_count() -> usize {
    interned().len()
}

/// Drop every interned signature.
///
/// Mostly useful for test isolation.
pub fn clear_interned() {
    let guard = interned().guard();
    interned().clear(&guard);
}
