//! Symbol model and binder for the dimr interface implementation resolver.
//!
//! This crate provides:
//! - The symbol arena (`SymbolArena`) holding assemblies, types and members
//! - Modifier bitsets with declared and normalized forms
//! - The declaration input format consumed by the binder
//! - Member signature matching
//! - Binding of declarations into symbols, including modifier legality,
//!   the language-version gate and explicit implementation targets
//! - Metadata export and re-import across arenas

pub mod arena;
pub mod assembly;
pub mod declarations;
pub mod metadata;
pub mod modifiers;
pub mod signature;
pub mod state;
mod state_explicit;
mod state_heritage;
mod state_members;
pub mod symbols;

pub use arena::{BaseChain, SymbolArena};
pub use assembly::{AssemblySymbol, CoreLibrary, DEFAULT_IMPLEMENTATIONS_OF_INTERFACES};
pub use declarations::{
    AccessorDecl, AssemblyDecl, EventDecl, MemberDecl, MethodDecl, ParameterDecl, PropertyDecl,
    TypeDecl,
};
pub use metadata::{MemberKey, export_assembly, import_assembly};
pub use modifiers::{Accessibility, Modifier, Modifiers};
pub use signature::{
    MemberKindKey, SignatureKey, matches_explicit_target, matches_for_implementation,
    return_types_match,
};
pub use state::{BindMode, BindResult, BinderOptions, BinderState, bind_assembly};
pub use symbols::{
    AccessorKind, AssemblyId, ExplicitTarget, MemberId, MemberKind, MemberSymbol, Parameter,
    RefKind, Signature, TypeId, TypeKind, TypeRef, TypeSymbol,
};
