use {
    crate::{AccessLevel, MasonError, ResourceTemplate},
    std::collections::BTreeMap,
};

/// One action row of a service table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ActionEntry {
    /// Bare action name, unique within the table.
    pub name: &'static str,

    /// The single access-level bucket the action belongs to.
    pub access_level: AccessLevel,
}

/// The static catalog data for one service: its prefix, its actions with
/// their access levels, and its resource-type templates.
///
/// Tables are compiled into the crate and never mutated at runtime, so
/// concurrent reads need no synchronization. Integrity is checked when a
/// table is registered, not on every call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ServiceTable {
    /// Service prefix, e.g. `redshift` or `ssm-guiconnect`.
    pub prefix: &'static str,

    pub actions: &'static [ActionEntry],

    pub resource_types: &'static [ResourceTemplate],
}

impl ServiceTable {
    pub fn action(&self, name: &str) -> Option<&'static ActionEntry> {
        self.actions.iter().find(|entry| entry.name == name)
    }

    /// The bucket the table assigns to `name`, if the action exists.
    pub fn access_level(&self, name: &str) -> Option<AccessLevel> {
        self.action(name).map(|entry| entry.access_level)
    }

    /// All action names grouped by bucket. Buckets with no actions are
    /// absent from the result.
    pub fn access_levels(&self) -> BTreeMap<AccessLevel, Vec<&'static str>> {
        let mut result: BTreeMap<AccessLevel, Vec<&'static str>> = BTreeMap::new();
        for entry in self.actions {
            result.entry(entry.access_level).or_default().push(entry.name);
        }
        result
    }

    /// The action names in `level`, in table order.
    pub fn actions_with_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.iter().filter(move |entry| entry.access_level == level).map(|entry| entry.name)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTemplate> {
        self.resource_types.iter().find(|template| template.name == name)
    }

    /// Checks the table's internal consistency: no duplicate action or
    /// resource-type names, and each template's placeholders limited to
    /// `Partition`/`Region`/`Account` plus its declared identifiers, all of
    /// which must appear.
    pub(crate) fn validate(&self) -> Result<(), MasonError> {
        for (i, entry) in self.actions.iter().enumerate() {
            if self.actions[..i].iter().any(|other| other.name == entry.name) {
                return Err(MasonError::DataIntegrity(format!(
                    "service '{}' lists action '{}' more than once",
                    self.prefix, entry.name
                )));
            }
        }

        for (i, template) in self.resource_types.iter().enumerate() {
            if self.resource_types[..i].iter().any(|other| other.name == template.name) {
                return Err(MasonError::DataIntegrity(format!(
                    "service '{}' lists resource type '{}' more than once",
                    self.prefix, template.name
                )));
            }

            let placeholders = template.placeholders();
            for name in template.identifiers {
                if !placeholders.contains(name) {
                    return Err(MasonError::DataIntegrity(format!(
                        "resource type '{}:{}' declares identifier '{}' missing from its template",
                        self.prefix, template.name, name
                    )));
                }
            }

            for name in placeholders {
                if !matches!(name, "Partition" | "Region" | "Account") && !template.identifiers.contains(&name) {
                    return Err(MasonError::DataIntegrity(format!(
                        "resource type '{}:{}' uses undeclared placeholder '{}'",
                        self.prefix, template.name, name
                    )));
                }
            }
        }

        Ok(())
    }
}
