use crate::Type;
use crate::ext::{HasType, type_of};

#[test]
fn test_rust_types() {
    assert_eq!(bool::TYPE, Type::Bool);
    assert_eq!(i32::TYPE, Type::Int);
    assert_eq!(u64::TYPE, Type::Int);
    assert_eq!(f32::TYPE, Type::Float);
    assert_eq!(<() as HasType>::TYPE, Type::NoneType);
}

#[test]
fn test_type_of() {
    let args = (1i64, 2.5f64, "x", String::from("y"));
    let types = [type_of(&args.0), type_of(&args.1), type_of(&args.2), type_of(&args.3)];
    assert_eq!(types, [Type::Int, Type::Float, Type::Str, Type::Str]);
}
