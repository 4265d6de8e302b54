//! Compilation and diagnostic pass for the dimr interface implementation
//! resolver.
//!
//! This crate provides:
//! - `Compilation`: a source assembly bound against referenced compilations,
//!   with the resolution query API on top
//! - The diagnostic pass: unimplemented interface members, rejected
//!   candidates, runtime support for default bodies, member hiding
//! - Cooperative cancellation between types
//! - The implementation map consumed by the CLI

pub mod cancellation;
pub mod compilation;
pub mod implementation_map;
pub mod state;
mod state_declarations;
mod state_implementations;

pub use cancellation::{CancellationToken, Cancelled};
pub use compilation::{Compilation, CompilationOptions};
pub use implementation_map::{ImplementationEntry, implementation_map};
pub use state::{CheckerState, check_compilation};
