use {
    crate::{AccessLevel, ActionEntry, MasonError, ServiceTable, Statement},
    std::ops::{Deref, DerefMut},
};

/// The `ssm-guiconnect` service catalog. The service defines no
/// addressable resource types; its statements apply to all resources.
pub static SSM_GUICONNECT: ServiceTable = ServiceTable {
    prefix: "ssm-guiconnect",
    actions: &[
        ActionEntry {
            name: "CancelConnection",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "GetConnection",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "StartConnection",
            access_level: AccessLevel::Write,
        },
    ],
    resource_types: &[],
};

/// Statement provider for the `ssm-guiconnect` service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SsmGuiconnect {
    statement: Statement,
}

impl SsmGuiconnect {
    pub fn new() -> Self {
        Self {
            statement: Statement::new(&SSM_GUICONNECT),
        }
    }

    pub fn with_sid(sid: impl Into<String>) -> Self {
        Self {
            statement: Statement::with_sid(&SSM_GUICONNECT, sid),
        }
    }

    pub fn into_statement(self) -> Statement {
        self.statement
    }

    /// Grants permission to cancel a GUI Connect connection. Access level: Write.
    pub fn to_cancel_connection(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CancelConnection")
    }

    /// Grants permission to get a GUI Connect connection. Access level: Read.
    pub fn to_get_connection(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("GetConnection")
    }

    /// Grants permission to start a GUI Connect connection. Access level: Write.
    pub fn to_start_connection(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("StartConnection")
    }
}

impl Default for SsmGuiconnect {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for SsmGuiconnect {
    type Target = Statement;

    fn deref(&self) -> &Statement {
        &self.statement
    }
}

impl DerefMut for SsmGuiconnect {
    fn deref_mut(&mut self) -> &mut Statement {
        &mut self.statement
    }
}

impl From<SsmGuiconnect> for Statement {
    fn from(provider: SsmGuiconnect) -> Statement {
        provider.into_statement()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{services::SsmGuiconnect, AccessLevel},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_no_resource_types() {
        let mut stmt = SsmGuiconnect::new();
        stmt.to_start_connection().unwrap();
        stmt.to_get_connection().unwrap();

        assert_eq!(
            stmt.to_string(),
            indoc! { r#"
                {
                    "Effect": "Allow",
                    "Action": [
                        "ssm-guiconnect:StartConnection",
                        "ssm-guiconnect:GetConnection"
                    ],
                    "Resource": "*"
                }"# }
        );
    }

    #[test_log::test]
    fn test_access_levels() {
        let mut stmt = SsmGuiconnect::with_sid("guiconnect-writes");
        stmt.all_actions_with_level(AccessLevel::Write);

        assert_eq!(stmt.actions(), &["ssm-guiconnect:CancelConnection", "ssm-guiconnect:StartConnection"]);
        assert_eq!(stmt.sid(), Some("guiconnect-writes"));
    }
}
