use proptest::prelude::*;

use super::generators::{base_type, builtin, numeric_type};
use crate::{BaseType, Builtins, Type, TypeHierarchy};

/// A type and an ancestor of one of its ancestors.
fn ancestor_chain() -> impl Strategy<Value = (BaseType, BaseType)> {
    base_type()
        .prop_flat_map(|a| (Just(a), proptest::sample::select(a.ancestors().iter().collect::<Vec<_>>())))
        .prop_flat_map(|(a, b)| (Just(a), proptest::sample::select(b.ancestors().iter().collect::<Vec<_>>())))
}

proptest! {
    #[test]
    fn subclass_is_reflexive(ty in builtin()) {
        prop_assert!(Builtins.is_subclass(&ty, &ty));
    }

    #[test]
    fn everything_derives_from_object(ty in builtin()) {
        prop_assert!(Builtins.is_subclass(&ty, &Type::Object));
    }

    #[test]
    fn subclass_is_antisymmetric(lhs in base_type(), rhs in base_type()) {
        prop_assume!(lhs != rhs);
        prop_assert!(!(lhs.is_subclass(rhs) && rhs.is_subclass(lhs)));
    }

    #[test]
    fn subclass_is_transitive((a, c) in ancestor_chain()) {
        prop_assert!(a.is_subclass(c));
    }

    #[test]
    fn numeric_types_are_numbers(ty in numeric_type()) {
        prop_assert!(ty.is_subclass(BaseType::Number));
        prop_assert!(ty.is_numeric());
    }

    // Bases are declared before their subclasses, so discriminants never increase upwards.
    #[test]
    fn ancestors_precede_descendants(ty in base_type()) {
        prop_assert!(ty.ancestors().iter().all(|base| base <= ty));
    }
}
