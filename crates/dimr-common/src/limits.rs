//! Centralized limits and thresholds for the resolver.
//!
//! The binder rejects cyclic inheritance before any query runs, so these only
//! matter for malformed symbol tables handed in by another producer. They keep
//! every walk finite instead of trusting the input.

/// Maximum number of base-type links followed when walking an inheritance chain.
///
/// Chains deeper than this are truncated; lookups past the limit behave as if
/// the chain ended there.
pub const MAX_INHERITANCE_DEPTH: usize = 256;

/// Maximum number of interfaces collected for a single type.
///
/// Flattening stops adding interfaces past this point.
pub const MAX_FLATTENED_INTERFACES: usize = 4096;

/// Initial capacity for per-type member tables.
pub const MEMBER_TABLE_CAPACITY: usize = 16;
