//! Shared helpers for building bound assemblies in solver tests.

use dimr_binder::{
    AccessorKind, AssemblyDecl, AssemblyId, BinderOptions, CoreLibrary, MemberId, SymbolArena,
    TypeId, bind_assembly,
};
use dimr_common::LanguageVersion;

pub(crate) struct Fixture {
    pub arena: SymbolArena,
    pub assembly: AssemblyId,
}

impl Fixture {
    /// Bind `decl` as source and require it to be free of errors. An
    /// assembly without a core library gets the latest one.
    pub fn bind(mut decl: AssemblyDecl) -> Self {
        decl.core_library.get_or_insert_with(CoreLibrary::latest);
        let mut arena = SymbolArena::new();
        let result = bind_assembly(
            &mut arena,
            &decl,
            &[],
            BinderOptions::source(LanguageVersion::Latest),
        );
        let errors: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| d.render().message_text)
            .collect();
        assert!(errors.is_empty(), "fixture has errors: {errors:#?}");
        Self {
            arena,
            assembly: result.assembly,
        }
    }

    pub fn ty(&self, name: &str) -> TypeId {
        self.arena
            .lookup_type_in(self.assembly, name)
            .unwrap_or_else(|| panic!("type {name} not found"))
    }

    /// First member of `ty` named `name`, explicit implementations included.
    pub fn member(&self, ty: &str, name: &str) -> MemberId {
        let owner = self.ty(ty);
        self.arena
            .lookup_member(owner, name)
            .unwrap_or_else(|| panic!("member {ty}.{name} not found"))
    }

    pub fn accessor(&self, ty: &str, name: &str, kind: AccessorKind) -> MemberId {
        let parent = self.member(ty, name);
        self.arena
            .member(parent)
            .accessor(kind)
            .unwrap_or_else(|| panic!("{ty}.{name} has no {kind:?} accessor"))
    }

    pub fn display(&self, member: Option<MemberId>) -> Option<String> {
        member.map(|m| self.arena.member_display(m))
    }
}
