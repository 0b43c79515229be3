use multidispatch_types::{Type, TypeRegistry, registry};
use test_case::test_case;

use crate::{Error, Literal, TypeArg, TypeSpec, Variadic, make_variadic};

#[test]
fn test_parse_variadic() {
    let parsed = TypeArg::parse("Variadic[(int, float)]", registry()).unwrap();
    let expected = make_variadic((Type::Int, Type::Float)).unwrap();
    assert_eq!(parsed, TypeArg::Variadic(expected));
}

#[test_case("int", TypeArg::Type(Type::Int); "name")]
#[test_case(" ( int ,float, ) ", TypeArg::from((Type::Int, Type::Float)); "tuple_with_trailing_comma")]
#[test_case("(str,)", TypeArg::from((Type::Str,)); "one_tuple")]
#[test_case("()", TypeArg::Tuple(vec![]); "empty_tuple")]
#[test_case("42", TypeArg::Literal(Literal::Int(42)); "integer")]
#[test_case("-7", TypeArg::Literal(Literal::Int(-7)); "negative_integer")]
#[test_case("2.5", TypeArg::Literal(Literal::Float(2.5)); "float")]
#[test_case("'int'", TypeArg::Literal(Literal::Str("int".into())); "single_quoted")]
#[test_case("\"x y\"", TypeArg::Literal(Literal::Str("x y".into())); "double_quoted")]
#[test_case("True", TypeArg::Literal(Literal::Bool(true)); "true")]
#[test_case("None", TypeArg::Literal(Literal::None); "none")]
fn test_parse(text: &str, expected: TypeArg) {
    assert_eq!(TypeArg::parse(text, registry()).unwrap(), expected);
}

#[test]
fn test_parse_nested() {
    let parsed: TypeArg = "Variadic[(Tensor, Variadic[int])]".parse().unwrap();
    let ints = make_variadic(Type::Int).unwrap();
    let expected = make_variadic((Type::Tensor, ints)).unwrap();
    assert_eq!(parsed, TypeArg::Variadic(expected));
}

#[test]
fn test_display_round_trip() {
    let ints = make_variadic(Type::Int).unwrap();
    let spec = make_variadic((Type::Float, ints, Type::Parameter)).unwrap();
    let parsed: TypeArg = spec.to_string().parse().unwrap();
    match parsed {
        TypeArg::Variadic(parsed) => {
            assert_eq!(parsed, spec);
            assert_eq!(parsed.name(), spec.name());
        }
        other => panic!("expected a variadic signature, got {other:?}"),
    }
}

#[test]
fn test_variadic_from_str() {
    let numbers: Variadic = "(int, float)".parse().unwrap();
    assert_eq!(numbers, make_variadic((Type::Int, Type::Float)).unwrap());

    let ints: Variadic = "int".parse().unwrap();
    assert_eq!(ints.element_types(), &[TypeSpec::Concrete(Type::Int)]);
}

#[test]
fn test_parse_resolves_classes() {
    let registry = TypeRegistry::new();
    let image = registry.register_class("Image", &[Type::Tensor]).unwrap();

    let parsed = TypeArg::parse("Variadic[(Image, int)]", &registry).unwrap();
    assert_eq!(parsed, TypeArg::Variadic(make_variadic((image, Type::Int)).unwrap()));

    let err = TypeArg::parse("Image", multidispatch_types::registry()).unwrap_err();
    assert!(matches!(err, Error::UnknownType { name } if name == "Image"));
}

#[test_case("Variadic[42]", "42"; "integer")]
#[test_case("Variadic['int']", "'int'"; "string")]
#[test_case("Variadic[()]", "()"; "empty_tuple")]
#[test_case("Variadic[(int, None)]", "None"; "literal_in_tuple")]
#[test_case("Variadic[((int, float), str)]", "(int, float)"; "nested_tuple")]
fn test_parse_invalid_spec(text: &str, found: &str) {
    match TypeArg::parse(text, registry()) {
        Err(Error::InvalidSpec { found: actual }) => assert_eq!(actual, found),
        other => panic!("expected InvalidSpec, got {other:?}"),
    }
}

#[test]
fn test_variadic_from_str_rejects_literals() {
    assert!(matches!("42".parse::<Variadic>(), Err(Error::InvalidSpec { .. })));
}

#[test_case("Variadic[int"; "unclosed_bracket")]
#[test_case("(int float)"; "missing_comma")]
#[test_case(""; "empty")]
#[test_case("int int"; "trailing_input")]
fn test_parse_syntax_error(text: &str) {
    assert!(matches!(TypeArg::parse(text, registry()), Err(Error::Parse { .. })));
}

#[test]
fn test_parse_error_position() {
    match TypeArg::parse("(int,\n  @)", registry()) {
        Err(Error::Parse { line, column, .. }) => assert_eq!((line, column), (2, 3)),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_unknown_type() {
    let err = TypeArg::parse("Variadic[(int, Missing)]", registry()).unwrap_err();
    assert_eq!(err.to_string(), "unknown type 'Missing'");
}
