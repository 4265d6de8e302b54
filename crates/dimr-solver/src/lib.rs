//! Interface flattening and implementation resolution.
//!
//! This crate answers the core query of the resolver: which member
//! implements a given interface member for a given type. It provides:
//! - `InterfaceFlattening`: memoized, ordered interface lists per type
//! - `LevelTables`: per-type member indexes used by the inheritance walk
//! - `ImplementationResolver`: explicit, implicit and default-body lookup
//! - The default-body fallback and runtime-support diagnostics
//!
//! All caches are `DashMap`s, so a single `ResolverCaches` can serve
//! concurrent queries over an immutable `SymbolArena`.

pub mod default_body;
pub mod flatten;
pub mod levels;
pub mod resolver;

pub use default_body::{
    DefaultBody, declaration_site_diagnostic, resolve_default_body, use_site_diagnostic,
};
pub use flatten::InterfaceFlattening;
pub use levels::{LevelTable, LevelTables, NameShape};
pub use resolver::{
    CloseMismatch, Implementation, ImplementationResolver, ImplementationSource, MismatchReason,
    Resolution, ResolverCaches,
};

#[cfg(test)]
#[path = "../tests/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/concurrency_tests.rs"]
mod concurrency_tests;
