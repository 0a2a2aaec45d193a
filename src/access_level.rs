use {
    serde::{Deserialize, Serialize},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The access-level bucket a service assigns to an action.
///
/// Every action in a [ServiceTable](crate::ServiceTable) belongs to exactly
/// one bucket. The buckets mirror the groupings in the AWS service
/// authorization reference and drive least-privilege helpers such as
/// [Statement::all_actions_with_level](crate::Statement::all_actions_with_level).
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AccessLevel {
    List,

    Read,

    Tagging,

    Write,

    #[serde(rename = "Permissions management")]
    PermissionsManagement,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::List => f.write_str("List"),
            Self::Read => f.write_str("Read"),
            Self::Tagging => f.write_str("Tagging"),
            Self::Write => f.write_str("Write"),
            Self::PermissionsManagement => f.write_str("Permissions management"),
        }
    }
}
