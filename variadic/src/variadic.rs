use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use multidispatch_types::{BaseType, Type, registry};
use smallvec::SmallVec;
use snafu::ensure;

use crate::arg::TypeArg;
use crate::error::{Error, InvalidSpecSnafu, Result};

/// A type-like value: a concrete type or a variadic signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeSpec {
    Concrete(Type),
    Variadic(Variadic),
}

impl TypeSpec {
    pub fn is_variadic(&self) -> bool {
        matches!(self, Self::Variadic(_))
    }

    pub fn as_variadic(&self) -> Option<&Variadic> {
        match self {
            Self::Variadic(variadic) => Some(variadic),
            Self::Concrete(_) => None,
        }
    }

    /// Types this value stands for when matched against a variadic signature:
    /// its element types if variadic, otherwise the value itself.
    pub fn members(&self) -> &[TypeSpec] {
        match self {
            Self::Variadic(variadic) => variadic.element_types(),
            Self::Concrete(_) => std::slice::from_ref(self),
        }
    }
}

impl From<Type> for TypeSpec {
    fn from(ty: Type) -> Self {
        Self::Concrete(ty)
    }
}

impl From<BaseType> for TypeSpec {
    fn from(base: BaseType) -> Self {
        Self::Concrete(Type::Base(base))
    }
}

impl From<Variadic> for TypeSpec {
    fn from(variadic: Variadic) -> Self {
        Self::Variadic(variadic)
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(ty) => ty.fmt(f),
            Self::Variadic(variadic) => variadic.fmt(f),
        }
    }
}

struct VariadicInner {
    /// Elements as declared; order and duplicates only affect the name.
    declared: SmallVec<[TypeSpec; 4]>,
    /// Elements as a set; drives equality, ordering and hashing.
    members: BTreeSet<TypeSpec>,
    name: String,
}

/// Signature slot matching any number of arguments, each of one of the
/// element types.
///
/// Immutable and cheap to clone. Two signatures are equal when their element
/// type sets are equal, regardless of declaration order or repetition, and
/// hash accordingly.
#[derive(Clone)]
pub struct Variadic(Arc<VariadicInner>);

impl Variadic {
    fn from_elements(declared: SmallVec<[TypeSpec; 4]>) -> Self {
        let members = declared.iter().cloned().collect();
        let name = format!("Variadic[{}]", typename(&declared));
        Self(Arc::new(VariadicInner { declared, members, name }))
    }

    /// Element types in declaration order.
    pub fn element_types(&self) -> &[TypeSpec] {
        &self.0.declared
    }

    /// Distinct element types.
    pub fn element_set(&self) -> &BTreeSet<TypeSpec> {
        &self.0.members
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Whether both handles share one allocation, e.g. after interning.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Variadic {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.members == other.0.members
    }
}

impl Eq for Variadic {}

impl Hash for Variadic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.members.hash(state);
    }
}

impl PartialOrd for Variadic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variadic {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.0.members.cmp(&other.0.members)
    }
}

impl fmt::Display for Variadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for Variadic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses the bracket contents of a variadic signature, `int` or
/// `(int, float)`, resolving names against the global registry.
impl FromStr for Variadic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        make_variadic(TypeArg::parse(s, registry())?)
    }
}

fn typename(elements: &[TypeSpec]) -> String {
    match elements {
        [single] => single.to_string(),
        _ => format!("({})", elements.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")),
    }
}

/// Build the variadic signature over `arg`.
///
/// A bare type becomes a one-element signature; a tuple contributes each of
/// its entries, which must themselves be types or variadic signatures.
///
/// # Errors
///
/// [`Error::InvalidSpec`] for literals, empty tuples and tuples holding
/// anything but types.
///
/// # Examples
///
/// ```
/// # use multidispatch_types::Type;
/// # use multidispatch_variadic::make_variadic;
/// let numbers = make_variadic((Type::Int, Type::Float)).unwrap();
/// assert_eq!(numbers.to_string(), "Variadic[(int, float)]");
/// assert!(make_variadic(42).is_err());
/// ```
pub fn make_variadic(arg: impl Into<TypeArg>) -> Result<Variadic> {
    let declared: SmallVec<[TypeSpec; 4]> = match arg.into() {
        TypeArg::Type(ty) => smallvec::smallvec![TypeSpec::Concrete(ty)],
        TypeArg::Variadic(variadic) => smallvec::smallvec![TypeSpec::Variadic(variadic)],
        TypeArg::Tuple(items) => {
            ensure!(!items.is_empty(), InvalidSpecSnafu { found: "()" });
            items.into_iter().map(element).collect::<Result<_>>()?
        }
        literal @ TypeArg::Literal(_) => return InvalidSpecSnafu { found: literal.to_string() }.fail(),
    };

    let variadic = Variadic::from_elements(declared);
    tracing::trace!(variadic = %variadic, "variadic signature created");
    Ok(variadic)
}

fn element(arg: TypeArg) -> Result<TypeSpec> {
    match arg {
        TypeArg::Type(ty) => Ok(TypeSpec::Concrete(ty)),
        TypeArg::Variadic(variadic) => Ok(TypeSpec::Variadic(variadic)),
        other => InvalidSpecSnafu { found: other.to_string() }.fail(),
    }
}

/// Whether `spec` is a variadic signature rather than a plain type.
pub fn is_variadic(spec: &TypeSpec) -> bool {
    spec.is_variadic()
}
