use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub mod error;
pub mod ext;
pub mod hierarchy;
pub mod registry;


pub use error::{Error, Result};
pub use hierarchy::{Builtins, TypeHierarchy};
pub use registry::{TypeRegistry, register_class, registry, resolve};

/// Builtin types known to every dispatch table.
///
/// The discriminant order is the declaration order of the lattice: abstract
/// roots first, concrete leaves after their bases.
#[derive(Debug, Hash, PartialOrd, Ord)]
#[derive(strum::EnumCount, strum::EnumIter, strum::VariantArray, strum::FromRepr)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[derive(enumset::EnumSetType)]
#[cfg_attr(feature = "proptest", derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[enumset(repr = "u32")]
pub enum BaseType {
    /// Root of every hierarchy.
    #[strum(serialize = "object")]
    Object = 0,

    #[strum(serialize = "Number")]
    Number = 1,
    #[strum(serialize = "Complex")]
    Complex = 2,
    #[strum(serialize = "Real")]
    Real = 3,
    #[strum(serialize = "int")]
    Int = 4,
    #[strum(serialize = "float")]
    Float = 5,
    #[strum(serialize = "bool")]
    Bool = 6,

    #[strum(serialize = "str")]
    Str = 7,
    #[strum(serialize = "bytes")]
    Bytes = 8,
    #[strum(serialize = "NoneType")]
    NoneType = 9,

    #[strum(serialize = "Sequence")]
    Sequence = 10,
    #[strum(serialize = "tuple")]
    Tuple = 11,
    #[strum(serialize = "list")]
    List = 12,

    #[strum(serialize = "Tensor")]
    Tensor = 13,
    /// Trainable tensor.
    #[strum(serialize = "Parameter")]
    Parameter = 14,
}

impl BaseType {
    /// Canonical name, as written in signatures.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Abstract builtins have no values of their own and only appear as bases.
    pub const fn is_abstract(&self) -> bool {
        matches!(self, Self::Object | Self::Number | Self::Complex | Self::Real | Self::Sequence)
    }

    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number | Self::Complex | Self::Real | Self::Int | Self::Float | Self::Bool)
    }
}

/// A user-declared class.
///
/// Ids come from a process-wide counter, so classes registered in different
/// registries never compare equal. Equality, ordering and hashing use the id
/// only; the name is carried for display.
#[derive(Debug, Clone)]
pub struct ClassType {
    id: u64,
    name: Arc<str>,
}

impl ClassType {
    pub(crate) fn new(id: u64, name: Arc<str>) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for ClassType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ClassType {}

impl Hash for ClassType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for ClassType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ClassType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

/// Identity of a concrete argument type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Type {
    /// Builtin type.
    Base(BaseType),

    /// Class declared through a [`TypeRegistry`].
    Class(ClassType),
}

impl Type {
    pub fn name(&self) -> &str {
        match self {
            Self::Base(base) => base.name(),
            Self::Class(class) => class.name(),
        }
    }

    pub fn base(&self) -> Option<BaseType> {
        match self {
            Self::Base(base) => Some(*base),
            Self::Class(_) => None,
        }
    }

    pub fn class(&self) -> Option<&ClassType> {
        match self {
            Self::Base(_) => None,
            Self::Class(class) => Some(class),
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Base(BaseType::Object))
    }
}

impl From<BaseType> for Type {
    fn from(base: BaseType) -> Self {
        Self::Base(base)
    }
}

impl From<ClassType> for Type {
    fn from(class: ClassType) -> Self {
        Self::Class(class)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(non_upper_case_globals)]
impl Type {
    pub const Object: Self = Self::Base(BaseType::Object);
    pub const Number: Self = Self::Base(BaseType::Number);
    pub const Complex: Self = Self::Base(BaseType::Complex);
    pub const Real: Self = Self::Base(BaseType::Real);
    pub const Int: Self = Self::Base(BaseType::Int);
    pub const Float: Self = Self::Base(BaseType::Float);
    pub const Bool: Self = Self::Base(BaseType::Bool);
    pub const Str: Self = Self::Base(BaseType::Str);
    pub const Bytes: Self = Self::Base(BaseType::Bytes);
    pub const NoneType: Self = Self::Base(BaseType::NoneType);
    pub const Sequence: Self = Self::Base(BaseType::Sequence);
    pub const Tuple: Self = Self::Base(BaseType::Tuple);
    pub const List: Self = Self::Base(BaseType::List);
    pub const Tensor: Self = Self::Base(BaseType::Tensor);
    pub const Parameter: Self = Self::Base(BaseType::Parameter);
}
