use super::*;
use enumset::EnumSet;
use smallvec::SmallVec;
use std::sync::Arc;

impl BaseType {
    const fn direct_bases(self) -> &'static [Self] {
        use BaseType::*;
        match self {
            Object => &[],
            Number => &[Object],
            Complex => &[Number],
            Real => &[Complex],
            Int | Float => &[Real],
            Bool => &[Int],
            Str | Bytes | NoneType | Sequence | Tensor => &[Object],
            Tuple | List => &[Sequence],
            Parameter => &[Tensor],
        }
    }

    /// The type itself together with every builtin it transitively derives from.
    pub fn ancestors(self) -> EnumSet<Self> {
        self.direct_bases().iter().fold(EnumSet::only(self), |types, &base| types.union(base.ancestors()))
    }

    pub fn is_subclass(self, of: Self) -> bool {
        self.ancestors().contains(of)
    }
}

/// Source of truth for the subclass relation between [`Type`]s.
///
/// Builtins are fixed; implementors only describe the direct bases of classes.
pub trait TypeHierarchy {
    /// Direct bases of `class`. Classes the hierarchy does not know have none.
    fn direct_bases(&self, class: &ClassType) -> SmallVec<[Type; 2]>;

    /// Whether `sub` is `sup` or derives from it.
    ///
    /// Every type derives from `object`. Builtins never derive from classes.
    fn is_subclass(&self, sub: &Type, sup: &Type) -> bool {
        if sub == sup || sup.is_object() {
            return true;
        }

        match (sub, sup) {
            (Type::Base(sub), Type::Base(sup)) => sub.is_subclass(*sup),
            (Type::Base(_), Type::Class(_)) => false,
            (Type::Class(class), _) => self.direct_bases(class).iter().any(|base| self.is_subclass(base, sup)),
        }
    }

    /// Whether `sub` derives from at least one of `sups`.
    fn is_subclass_of_any(&self, sub: &Type, sups: &[Type]) -> bool {
        sups.iter().any(|sup| self.is_subclass(sub, sup))
    }
}

impl<H: TypeHierarchy + ?Sized> TypeHierarchy for &H {
    fn direct_bases(&self, class: &ClassType) -> SmallVec<[Type; 2]> {
        (**self).direct_bases(class)
    }
}

impl<H: TypeHierarchy + ?Sized> TypeHierarchy for Arc<H> {
    fn direct_bases(&self, class: &ClassType) -> SmallVec<[Type; 2]> {
        (**self).direct_bases(class)
    }
}

/// Hierarchy with builtins only; every class is a direct child of `object`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Builtins;

impl TypeHierarchy for Builtins {
    fn direct_bases(&self, _class: &ClassType) -> SmallVec<[Type; 2]> {
        SmallVec::new()
    }
}
