//! Process-wide registry of built domain metadata, keyed by type identity.

use std::any::{Any, TypeId, type_name};
use std::sync::OnceLock;
use std::time::Instant;

use fxhash::FxHashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::meta::{DomainMeta, Enumerable};

type AnyMeta = &'static (dyn Any + Send + Sync);

static REGISTRY: OnceLock<RwLock<FxHashMap<TypeId, AnyMeta>>> = OnceLock::new();

fn registry() -> &'static RwLock<FxHashMap<TypeId, AnyMeta>> {
    REGISTRY.get_or_init(|| RwLock::new(FxHashMap::default()))
}

/// Resolves the metadata for `T`, building it at most once.
///
/// Failed builds are not cached: the build is deterministic, so every
/// retry fails with the same configuration error.
pub(crate) fn resolve<T: Enumerable>() -> Result<&'static DomainMeta<T>> {
    let registry = registry();
    let key = TypeId::of::<T>();

    if let Some(&meta) = registry.read().get(&key) {
        return Ok(downcast::<T>(meta));
    }

    // Racing builders re-check under the write lock so each domain is
    // built exactly once.
    let mut guard = registry.write();
    if let Some(&meta) = guard.get(&key) {
        return Ok(downcast::<T>(meta));
    }

    let started = Instant::now();
    let built: &'static DomainMeta<T> = Box::leak(Box::new(DomainMeta::<T>::build()?));
    tracing::debug!(
        domain = type_name::<T>(),
        members = built.len(),
        elapsed = ?started.elapsed(),
        "enumerable metadata built"
    );
    guard.insert(key, built);
    Ok(built)
}

fn downcast<T: Enumerable>(meta: AnyMeta) -> &'static DomainMeta<T> {
    // Entries are keyed by `TypeId::of::<T>`, so the stored metadata is
    // always a `DomainMeta<T>`.
    match meta.downcast_ref::<DomainMeta<T>>() {
        Some(meta) => meta,
        None => unreachable!("registry entry stored under foreign type id"),
    }
}
