use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

#[derive(Debug, Eq, PartialEq)]
pub enum MasonError {
    /// A malformed caller argument: an empty or non-bare action name, an
    /// empty condition key, or the wrong number of resource identifiers.
    InvalidArgument(String),

    /// A duplicate or inconsistent entry in a static service table.
    DataIntegrity(String),

    /// A condition operator name outside the closed operator vocabulary.
    UnknownOperator(String),

    /// A resource type name with no template in the service table.
    UnknownResourceType(String),

    /// A template placeholder survived resolution.
    UnresolvedPlaceholder(String),
}

impl Display for MasonError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
            Self::DataIntegrity(message) => write!(f, "Data integrity: {}", message),
            Self::UnknownOperator(operator) => write!(f, "Unknown condition operator: {}", operator),
            Self::UnknownResourceType(resource_type) => write!(f, "Unknown resource type: {}", resource_type),
            Self::UnresolvedPlaceholder(placeholder) => write!(f, "Unresolved placeholder: {}", placeholder),
        }
    }
}

impl Error for MasonError {}
