use multidispatch_types::{TypeHierarchy, registry};

use crate::variadic::{TypeSpec, Variadic};

/// Whether `candidate` fits `signature`, using the global type registry for
/// class relationships.
///
/// See [`is_subtype_of_in`].
pub fn is_subtype_of(candidate: &TypeSpec, signature: &Variadic) -> bool {
    is_subtype_of_in(registry(), candidate, signature)
}

/// Whether `candidate` fits `signature`.
///
/// A plain type fits when it derives from at least one element type of
/// `signature`. A variadic candidate fits when every one of its element types
/// does. A signature always fits itself.
pub fn is_subtype_of_in<H>(hierarchy: &H, candidate: &TypeSpec, signature: &Variadic) -> bool
where
    H: TypeHierarchy + ?Sized,
{
    if let TypeSpec::Variadic(variadic) = candidate
        && variadic == signature
    {
        return true;
    }

    let elements = signature.element_set();
    let matched = candidate
        .members()
        .iter()
        .all(|member| elements.iter().any(|element| member_is_subclass(hierarchy, member, element)));

    tracing::trace!(candidate = %candidate, signature = %signature, matched, "variadic subtype check");
    matched
}

impl TypeSpec {
    /// Subclass relation between arbitrary type-like values.
    ///
    /// Against a variadic `other` this is [`is_subtype_of_in`]. A variadic
    /// value only derives from the concrete type `object`.
    pub fn is_subclass_of<H>(&self, hierarchy: &H, other: &TypeSpec) -> bool
    where
        H: TypeHierarchy + ?Sized,
    {
        member_is_subclass(hierarchy, self, other)
    }
}

fn member_is_subclass<H>(hierarchy: &H, member: &TypeSpec, element: &TypeSpec) -> bool
where
    H: TypeHierarchy + ?Sized,
{
    match (member, element) {
        (TypeSpec::Concrete(member), TypeSpec::Concrete(element)) => hierarchy.is_subclass(member, element),
        (_, TypeSpec::Variadic(element)) => is_subtype_of_in(hierarchy, member, element),
        (TypeSpec::Variadic(_), TypeSpec::Concrete(element)) => element.is_object(),
    }
}
