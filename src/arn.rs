use {
    crate::{Defaults, MasonError},
    lazy_static::lazy_static,
    log::debug,
    regex::Regex,
};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z0-9]+)\}").unwrap();
}

/// A resource type's locator template, static per-service data.
///
/// The `arn` string carries `${Partition}`, `${Region}`, and `${Account}`
/// placeholders plus one placeholder per entry of `identifiers`, in the
/// punctuation layout fixed for the resource type, e.g.
/// `arn:${Partition}:redshift:${Region}:${Account}:dbgroup:${ClusterName}/${DbGroup}`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceTemplate {
    /// Resource type name, unique within its service table.
    pub name: &'static str,

    /// The locator template.
    pub arn: &'static str,

    /// Identifier placeholder names, in the order callers supply values.
    pub identifiers: &'static [&'static str],
}

impl ResourceTemplate {
    /// Resolves this template against the process-wide [Defaults].
    pub fn resolve(
        &self,
        identifiers: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<String, MasonError> {
        self.resolve_with(identifiers, account, region, partition, &Defaults::global())
    }

    /// Resolves this template against an explicit default set.
    ///
    /// Each of partition, region, and account is taken from the per-call
    /// override if given, else from `defaults`, else replaced with a literal
    /// `*` wildcard. Identifier values are substituted positionally and must
    /// match the declared identifier count exactly; an empty string is a
    /// literal empty segment, not an omission.
    pub fn resolve_with(
        &self,
        identifiers: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
        defaults: &Defaults,
    ) -> Result<String, MasonError> {
        if identifiers.len() != self.identifiers.len() {
            debug!(
                "Resource type '{}' takes {} identifier(s), got {}.",
                self.name,
                self.identifiers.len(),
                identifiers.len()
            );
            return Err(MasonError::InvalidArgument(format!(
                "resource type '{}' takes {} identifier(s), got {}",
                self.name,
                self.identifiers.len(),
                identifiers.len()
            )));
        }

        let mut arn = self.arn.to_string();
        arn = arn.replace("${Partition}", partition.or_else(|| defaults.partition()).unwrap_or("*"));
        arn = arn.replace("${Region}", region.or_else(|| defaults.region()).unwrap_or("*"));
        arn = arn.replace("${Account}", account.or_else(|| defaults.account()).unwrap_or("*"));

        for (name, value) in self.identifiers.iter().zip(identifiers) {
            arn = arn.replace(&format!("${{{}}}", name), value);
        }

        if let Some(m) = PLACEHOLDER.find(&arn) {
            debug!("Resource type '{}' left '{}' unresolved in '{}'.", self.name, m.as_str(), arn);
            return Err(MasonError::UnresolvedPlaceholder(m.as_str().to_string()));
        }

        Ok(arn)
    }

    /// The placeholder names appearing in the template, in template order.
    pub(crate) fn placeholders(&self) -> Vec<&str> {
        PLACEHOLDER.captures_iter(self.arn).map(|c| c.get(1).unwrap().as_str()).collect()
    }
}
