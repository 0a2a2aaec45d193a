use {
    crate::{services, AccessLevel, MasonError, ServiceTable},
    lazy_static::lazy_static,
    std::collections::BTreeMap,
};

lazy_static! {
    static ref BUILTIN: Registry =
        Registry::new(services::ALL).expect("builtin service tables failed integrity validation");
}

/// A read-only index of service tables, keyed by service prefix.
///
/// Building a registry validates every table (duplicate actions, duplicate
/// resource types, template placeholder mismatches, duplicate prefixes),
/// so integrity defects surface at load time rather than mid-construction.
#[derive(Clone, Debug)]
pub struct Registry {
    services: BTreeMap<&'static str, &'static ServiceTable>,
}

impl Registry {
    pub fn new(tables: &[&'static ServiceTable]) -> Result<Self, MasonError> {
        let mut services = BTreeMap::new();
        for table in tables {
            table.validate()?;
            if services.insert(table.prefix, *table).is_some() {
                return Err(MasonError::DataIntegrity(format!("duplicate service prefix '{}'", table.prefix)));
            }
        }

        Ok(Self {
            services,
        })
    }

    /// The registry over the service tables compiled into this crate.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn service(&self, prefix: &str) -> Option<&'static ServiceTable> {
        self.services.get(prefix).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ServiceTable> + '_ {
        self.services.values().copied()
    }

    /// All of a service's action names grouped by access-level bucket.
    pub fn access_levels(&self, prefix: &str) -> Option<BTreeMap<AccessLevel, Vec<&'static str>>> {
        self.service(prefix).map(ServiceTable::access_levels)
    }

    /// The bucket a service assigns to an action.
    pub fn access_level(&self, prefix: &str, action: &str) -> Option<AccessLevel> {
        self.service(prefix)?.access_level(action)
    }
}
