use std::fmt;
use std::str::FromStr;

use multidispatch_types::{BaseType, ClassType, Type, registry};

use crate::error::Error;
use crate::variadic::{TypeSpec, Variadic};

/// Non-type value showing up where a type was expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Str(value) => write!(f, "'{value}'"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::None => f.write_str("None"),
        }
    }
}

/// Argument of a variadic declaration, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeArg {
    Type(Type),
    Variadic(Variadic),
    Tuple(Vec<TypeArg>),
    Literal(Literal),
}

impl fmt::Display for TypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => ty.fmt(f),
            Self::Variadic(variadic) => variadic.fmt(f),
            Self::Tuple(items) if items.len() == 1 => write!(f, "({},)", items[0]),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str(")")
            }
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

/// Parses signature text against the global registry.
impl FromStr for TypeArg {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, registry())
    }
}

impl From<Type> for TypeArg {
    fn from(ty: Type) -> Self {
        Self::Type(ty)
    }
}

impl From<BaseType> for TypeArg {
    fn from(base: BaseType) -> Self {
        Self::Type(Type::Base(base))
    }
}

impl From<ClassType> for TypeArg {
    fn from(class: ClassType) -> Self {
        Self::Type(Type::Class(class))
    }
}

impl From<Variadic> for TypeArg {
    fn from(variadic: Variadic) -> Self {
        Self::Variadic(variadic)
    }
}

impl From<TypeSpec> for TypeArg {
    fn from(spec: TypeSpec) -> Self {
        match spec {
            TypeSpec::Concrete(ty) => Self::Type(ty),
            TypeSpec::Variadic(variadic) => Self::Variadic(variadic),
        }
    }
}

impl From<Literal> for TypeArg {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl<T: Into<TypeArg>> From<Vec<T>> for TypeArg {
    fn from(items: Vec<T>) -> Self {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TypeArg>, const N: usize> From<[T; N]> for TypeArg {
    fn from(items: [T; N]) -> Self {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_literal_arg {
    ($($ty:ty => |$value:ident| $literal:expr),* $(,)?) => {
        $(impl From<$ty> for TypeArg {
            fn from($value: $ty) -> Self { Self::Literal($literal) }
        })*
    };
}

impl_literal_arg! {
    i32 => |value| Literal::Int(value.into()),
    i64 => |value| Literal::Int(value),
    f32 => |value| Literal::Float(value.into()),
    f64 => |value| Literal::Float(value),
    bool => |value| Literal::Bool(value),
    &str => |value| Literal::Str(value.to_string()),
    String => |value| Literal::Str(value),
    () => |_value| Literal::None,
}

macro_rules! impl_tuple_arg {
    ($($name:ident),+) => {
        impl<$($name: Into<TypeArg>),+> From<($($name,)+)> for TypeArg {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Self::Tuple(vec![$($name.into()),+])
            }
        }
    };
}

impl_tuple_arg!(A);
impl_tuple_arg!(A, B);
impl_tuple_arg!(A, B, C);
impl_tuple_arg!(A, B, C, D);
impl_tuple_arg!(A, B, C, D, E);
impl_tuple_arg!(A, B, C, D, E, F);
