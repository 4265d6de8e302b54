//! Implementation map: the answer of every resolution query a type raises.

use dimr_binder::{MemberId, TypeId};
use serde::Serialize;

use crate::compilation::Compilation;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationEntry {
    #[serde(rename = "type")]
    pub type_name: String,
    pub interface_member: String,
    pub implementation: Option<String>,
    /// `explicit`, `implicit` or `default`.
    pub source: Option<&'static str>,
}

/// One entry per (source class or struct, implementable interface member)
/// pair, accessors included, in declaration order.
pub fn implementation_map(compilation: &Compilation) -> Vec<ImplementationEntry> {
    let arena = compilation.arena();
    let resolver = compilation.resolver();
    let mut entries = Vec::new();

    for &ty in compilation.types() {
        if arena.type_symbol(ty).is_interface() {
            continue;
        }
        let interfaces = resolver.flattened_interfaces(ty);
        for &interface in interfaces.iter() {
            for &member in &arena.type_symbol(interface).members {
                let accessors = arena.member(member).accessors();
                for queried in std::iter::once(member).chain(accessors) {
                    if arena.is_implementable_interface_member(queried) {
                        entries.push(entry(compilation, ty, queried));
                    }
                }
            }
        }
    }
    entries
}

fn entry(compilation: &Compilation, ty: TypeId, interface_member: MemberId) -> ImplementationEntry {
    let arena = compilation.arena();
    let resolution = compilation.find_implementation_with_details(ty, interface_member);
    ImplementationEntry {
        type_name: arena.type_display(ty),
        interface_member: arena.member_display(interface_member),
        implementation: resolution.member().map(|m| arena.member_display(m)),
        source: resolution.source().map(|s| s.as_str()),
    }
}
