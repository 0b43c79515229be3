use super::*;

/// Dispatch type of a Rust value type.
pub trait HasType {
    const TYPE: Type;
}

macro_rules! impl_type_ext {
    ($($ty:ty => $type:expr),* $(,)?) => {
        $(impl HasType for $ty { const TYPE: Type = $type; })*
    };
}

impl_type_ext! {
    bool => Type::Bool,
    i8 => Type::Int, i16 => Type::Int, i32 => Type::Int, i64 => Type::Int, isize => Type::Int,
    u8 => Type::Int, u16 => Type::Int, u32 => Type::Int, u64 => Type::Int, usize => Type::Int,
    f32 => Type::Float, f64 => Type::Float,
    String => Type::Str, &str => Type::Str,
    Vec<u8> => Type::Bytes,
    () => Type::NoneType,
}

/// Dispatch type of a value, for building argument-type tuples.
pub fn type_of<T: HasType>(_: &T) -> Type {
    T::TYPE
}
