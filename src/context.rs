use {
    derive_builder::Builder,
    lazy_static::lazy_static,
    std::sync::{PoisonError, RwLock},
};

lazy_static! {
    static ref GLOBAL: RwLock<Defaults> = RwLock::new(Defaults::default());
}

/// Ambient partition/region/account values substituted into resource
/// locators when a call supplies no override.
///
/// The hosting environment installs one set of defaults per process, before
/// any resolution takes place. An unset field resolves to a literal `*`
/// wildcard. Every field remains overridable per `on_*` call for
/// cross-account or cross-region resource references.
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
pub struct Defaults {
    #[builder(setter(into, strip_option), default)]
    partition: Option<String>,

    #[builder(setter(into, strip_option), default)]
    region: Option<String>,

    #[builder(setter(into, strip_option), default)]
    account: Option<String>,
}

impl Defaults {
    pub fn builder() -> DefaultsBuilder {
        DefaultsBuilder::default()
    }

    #[inline]
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    #[inline]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[inline]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Makes this the process-wide default set read by all subsequent
    /// resolutions that carry no statement-local defaults.
    pub fn install(self) {
        *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = self;
    }

    /// The currently installed process-wide defaults.
    pub fn global() -> Defaults {
        GLOBAL.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}
