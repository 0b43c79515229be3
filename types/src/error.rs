use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("class name must not be empty"))]
    EmptyName,

    /// Class names must be identifiers so they can appear in signature text.
    #[snafu(display("invalid class name '{name}': expected an identifier"))]
    InvalidName { name: String },

    /// Name already taken by a builtin or a registered class.
    #[snafu(display("type '{name}' is already defined"))]
    DuplicateType { name: String },

    /// Base class was not registered in this registry.
    #[snafu(display("unknown base class '{name}'"))]
    UnknownBase { name: String },
}
