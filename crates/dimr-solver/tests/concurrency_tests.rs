//! Shared caches under concurrent queries.

use crate::ResolverCaches;
use crate::fixtures::Fixture;
use dimr_binder::{AssemblyDecl, MemberId, MethodDecl, Modifiers, TypeDecl, TypeId};
use rayon::prelude::*;
use std::sync::Arc;

const INTERFACES: usize = 6;
const CLASSES: usize = 40;

/// `I{i} : I{i-1}` with one default and one abstract method each, and a
/// chain of classes implementing them at different depths.
fn wide_assembly() -> AssemblyDecl {
    let mut decl = AssemblyDecl::new("Wide");
    for i in 0..INTERFACES {
        let mut ty = TypeDecl::interface(format!("I{i}"))
            .with_member(MethodDecl::new(format!("Default{i}")).with_body())
            .with_member(MethodDecl::new(format!("Required{i}")));
        if i > 0 {
            ty = ty.with_interfaces(&[format!("I{}", i - 1).as_str()]);
        }
        decl = decl.with_type(ty);
    }
    for c in 0..CLASSES {
        let iface = c % INTERFACES;
        let mut ty =
            TypeDecl::class(format!("C{c}")).with_interfaces(&[format!("I{iface}").as_str()]);
        if c > 0 {
            ty = ty.with_base(format!("C{}", c - 1));
        }
        for i in 0..=iface {
            let name = format!("Required{i}");
            ty = if c % 3 == 0 {
                ty.with_member(MethodDecl::new(name).explicit(format!("I{i}")).with_body())
            } else {
                ty.with_member(
                    MethodDecl::new(name)
                        .with_modifiers(Modifiers::PUBLIC | Modifiers::NEW)
                        .with_body(),
                )
            };
        }
        decl = decl.with_type(ty);
    }
    decl
}

fn queries(fixture: &Fixture) -> Vec<(TypeId, MemberId)> {
    let arena = &fixture.arena;
    let types = arena.types_of_assembly(fixture.assembly);
    let interface_members: Vec<MemberId> = types
        .iter()
        .filter(|&&ty| arena.type_symbol(ty).is_interface())
        .flat_map(|&ty| arena.type_symbol(ty).members.iter().copied())
        .collect();
    types
        .iter()
        .flat_map(|&ty| interface_members.iter().map(move |&m| (ty, m)))
        .collect()
}

#[test]
fn test_parallel_resolution_matches_sequential() {
    let fixture = Fixture::bind(wide_assembly());
    let queries = queries(&fixture);

    let sequential_caches = ResolverCaches::new();
    let sequential = sequential_caches.resolver(&fixture.arena);
    let expected: Vec<_> = queries
        .iter()
        .map(|&(ty, m)| sequential.find_implementation_with_details(ty, m))
        .collect();

    let shared = ResolverCaches::new();
    let resolver = shared.resolver(&fixture.arena);
    let actual: Vec<_> = queries
        .par_iter()
        .map(|&(ty, m)| resolver.find_implementation_with_details(ty, m))
        .collect();

    assert_eq!(actual, expected);
    assert!(expected.iter().any(|r| r.member().is_some()));
    assert_eq!(shared.interfaces.len(), sequential_caches.interfaces.len());
}

#[test]
fn test_every_thread_sees_the_same_flattened_list() {
    let fixture = Fixture::bind(wide_assembly());
    let caches = ResolverCaches::new();
    let resolver = caches.resolver(&fixture.arena);
    let last = fixture.ty(&format!("C{}", CLASSES - 1));

    let lists: Vec<Arc<[TypeId]>> = (0..64)
        .into_par_iter()
        .map(|_| resolver.flattened_interfaces(last))
        .collect();
    let first = &lists[0];
    assert_eq!(first.len(), INTERFACES);
    assert!(lists.iter().all(|list| Arc::ptr_eq(list, first)));
}
