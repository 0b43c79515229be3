//! Signature text parsing.
//!
//! Names resolve through a [`TypeRegistry`]; `Variadic[...]` builds its
//! signature with [`make_variadic`], so the same validation applies to text
//! and to programmatic declarations.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use multidispatch_types::TypeRegistry;
use snafu::OptionExt;

use crate::arg::{Literal, TypeArg};
use crate::error::{Error, Result, UnknownTypeSnafu};
use crate::variadic::make_variadic;

#[derive(Parser)]
#[grammar = "grammar.pest"]
pub(crate) struct SignatureParser;

impl TypeArg {
    /// Parse signature text, resolving names against `registry`.
    ///
    /// # Errors
    ///
    /// [`Error::Parse`] on malformed text, [`Error::UnknownType`] on
    /// unresolved names and [`Error::InvalidSpec`] on an invalid nested
    /// `Variadic[...]`.
    pub fn parse(text: &str, registry: &TypeRegistry) -> Result<Self> {
        let signature = SignatureParser::parse(Rule::signature, text)
            .map_err(Error::from_pest_error)?
            .next()
            .ok_or_else(|| malformed(1, 1, "empty signature"))?;

        let arg = first_inner(signature)?;
        build(arg, registry)
    }
}

fn build(pair: Pair<'_, Rule>, registry: &TypeRegistry) -> Result<TypeArg> {
    let text = pair.as_str();
    match pair.as_rule() {
        Rule::variadic => {
            let inner = first_inner(pair)?;
            make_variadic(build(inner, registry)?).map(TypeArg::Variadic)
        }
        Rule::tuple => pair.into_inner().map(|item| build(item, registry)).collect::<Result<_>>().map(TypeArg::Tuple),
        Rule::integer => match text.parse() {
            Ok(value) => Ok(TypeArg::Literal(Literal::Int(value))),
            Err(_) => Err(at(&pair, "integer literal out of range")),
        },
        Rule::float => match text.parse() {
            Ok(value) => Ok(TypeArg::Literal(Literal::Float(value))),
            Err(_) => Err(at(&pair, "invalid float literal")),
        },
        Rule::string => Ok(TypeArg::Literal(Literal::Str(text[1..text.len() - 1].to_string()))),
        Rule::boolean => Ok(TypeArg::Literal(Literal::Bool(text == "True"))),
        Rule::none => Ok(TypeArg::Literal(Literal::None)),
        Rule::name => registry.resolve(text).map(TypeArg::Type).context(UnknownTypeSnafu { name: text }),
        rule => Err(at(&pair, &format!("unexpected {rule:?}"))),
    }
}

fn first_inner(pair: Pair<'_, Rule>) -> Result<Pair<'_, Rule>> {
    let (line, column) = pair.line_col();
    pair.into_inner()
        .find(|inner| inner.as_rule() != Rule::EOI)
        .ok_or_else(|| malformed(line, column, "missing type"))
}

fn at(pair: &Pair<'_, Rule>, message: &str) -> Error {
    let (line, column) = pair.line_col();
    malformed(line, column, message)
}

fn malformed(line: usize, column: usize, message: &str) -> Error {
    Error::Parse { line, column, message: message.to_string() }
}
