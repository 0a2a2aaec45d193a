use {
    crate::{
        display_json, AccessLevel, Condition, ConditionValues, Defaults, IntoOperator, MasonError, ServiceTable,
    },
    log::debug,
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Whether a statement grants or denies the access it describes.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum Effect {
    #[default]
    Allow,
    Deny,
}

impl Display for Effect {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Allow => f.write_str("Allow"),
            Self::Deny => f.write_str("Deny"),
        }
    }
}

/// An access-control statement under construction.
///
/// A statement is bound to one service table for its whole lifetime and
/// grows through its accumulator methods: [to](Self::to) appends a
/// service-prefixed action, [on_resource](Self::on_resource) resolves and
/// appends a resource locator, and [if_condition](Self::if_condition)
/// merges a condition clause. All three mutate in place and return the
/// statement itself, so calls chain; nothing is ever removed, and
/// serialization always reflects the current state.
///
/// A failing call leaves previously accumulated state untouched; there are
/// no multi-call transactions to roll back.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Statement {
    sid: Option<String>,
    effect: Effect,
    service: &'static ServiceTable,
    actions: Vec<String>,
    resources: Vec<String>,
    condition: Condition,
    defaults: Option<Defaults>,
}

impl Statement {
    pub fn new(service: &'static ServiceTable) -> Self {
        Self {
            sid: None,
            effect: Effect::Allow,
            service,
            actions: Vec::new(),
            resources: Vec::new(),
            condition: Condition::new(),
            defaults: None,
        }
    }

    pub fn with_sid(service: &'static ServiceTable, sid: impl Into<String>) -> Self {
        let mut statement = Self::new(service);
        statement.sid = Some(sid.into());
        statement
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    #[inline]
    pub fn service(&self) -> &'static ServiceTable {
        self.service
    }

    #[inline]
    pub fn service_prefix(&self) -> &'static str {
        self.service.prefix
    }

    #[inline]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[inline]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    pub fn allow(&mut self) -> &mut Self {
        self.effect = Effect::Allow;
        self
    }

    pub fn deny(&mut self) -> &mut Self {
        self.effect = Effect::Deny;
        self
    }

    /// Statement-local resolution defaults, taking precedence over the
    /// process-wide [Defaults] for this statement's `on_*` calls.
    pub fn with_defaults(&mut self, defaults: Defaults) -> &mut Self {
        self.defaults = Some(defaults);
        self
    }

    fn defaults(&self) -> Defaults {
        self.defaults.clone().unwrap_or_else(Defaults::global)
    }

    /// Appends an action to the statement.
    ///
    /// `action` is the bare action name; it is namespaced with this
    /// statement's service prefix, so an action belonging to another
    /// service cannot be smuggled in. Appending an action that is already
    /// present is a no-op (case-sensitive comparison). The returned handle
    /// accepts further chained calls; conditions attached through it are
    /// statement-scoped, not per-action.
    pub fn to(&mut self, action: &str) -> Result<&mut Self, MasonError> {
        if action.is_empty() {
            debug!("Action for service '{}' is empty.", self.service.prefix);
            return Err(MasonError::InvalidArgument("action name is empty".to_string()));
        }

        if !action.is_ascii() {
            debug!("Action '{}' is not ASCII.", action);
            return Err(MasonError::InvalidArgument(format!("action name '{}' is not ASCII", action)));
        }

        for (i, c) in action.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && c != b'*' && !(i > 0 && i < action.len() - 1 && (c == b'-' || c == b'_'))
            {
                debug!("Action '{}' contains an invalid character.", action);
                return Err(MasonError::InvalidArgument(format!(
                    "action name '{}' must be a bare action name",
                    action
                )));
            }
        }

        self.push_action(format!("{}:{}", self.service.prefix, action));
        Ok(self)
    }

    /// Appends the service-wide wildcard action (`<prefix>:*`).
    pub fn all_actions(&mut self) -> &mut Self {
        self.push_action(format!("{}:*", self.service.prefix));
        self
    }

    /// Appends every action the service table assigns to `level`, in table
    /// order. The least-privilege bulk helper: e.g. every `Read` action.
    pub fn all_actions_with_level(&mut self, level: AccessLevel) -> &mut Self {
        let qualified: Vec<String> =
            self.service.actions_with_level(level).map(|name| format!("{}:{}", self.service.prefix, name)).collect();
        for action in qualified {
            self.push_action(action);
        }
        self
    }

    fn push_action(&mut self, qualified: String) {
        if !self.actions.contains(&qualified) {
            self.actions.push(qualified);
        }
    }

    /// Appends a pre-resolved resource locator verbatim.
    pub fn on(&mut self, locator: impl Into<String>) -> &mut Self {
        self.resources.push(locator.into());
        self
    }

    /// Resolves a resource type's template and appends the locator.
    ///
    /// `identifiers` must match the template's declared identifier count
    /// exactly. Partition, region, and account come from the per-call
    /// overrides, then this statement's [Defaults], then a `*` wildcard.
    pub fn on_resource(
        &mut self,
        resource_type: &str,
        identifiers: &[&str],
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Self, MasonError> {
        let template = self.service.resource_type(resource_type).ok_or_else(|| {
            debug!("Service '{}' has no resource type '{}'.", self.service.prefix, resource_type);
            MasonError::UnknownResourceType(format!("{}:{}", self.service.prefix, resource_type))
        })?;

        let arn = template.resolve_with(identifiers, account, region, partition, &self.defaults())?;
        Ok(self.on(arn))
    }

    /// Merges a condition clause into the statement.
    ///
    /// A key without a `:` namespace is prefixed with this statement's
    /// service prefix. The operator may be a typed [ConditionOp] or an
    /// operator name string, validated against the operator vocabulary.
    /// Merge semantics are documented on [Condition::put].
    ///
    /// [ConditionOp]: crate::ConditionOp
    pub fn if_condition(
        &mut self,
        key: &str,
        value: impl Into<ConditionValues>,
        operator: impl IntoOperator,
    ) -> Result<&mut Self, MasonError> {
        if key.is_empty() {
            debug!("Condition key for service '{}' is empty.", self.service.prefix);
            return Err(MasonError::InvalidArgument("condition key is empty".to_string()));
        }

        let op = operator.into_operator()?;

        let values = value.into();
        if values.is_empty() {
            debug!("Condition '{}' has no values.", key);
            return Err(MasonError::InvalidArgument(format!("condition '{}' has no values", key)));
        }

        let key = if key.contains(':') {
            key.to_string()
        } else {
            format!("{}:{}", self.service.prefix, key)
        };

        self.condition.put(op, key, values);
        Ok(self)
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        !self.condition.is_empty()
    }
}

impl Serialize for Statement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 3;
        if self.sid.is_some() {
            len += 1;
        }
        if self.has_conditions() {
            len += 1;
        }

        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(sid) = &self.sid {
            map.serialize_entry("Sid", sid)?;
        }
        map.serialize_entry("Effect", &self.effect)?;
        map.serialize_entry("Action", &self.actions)?;
        if self.resources.is_empty() {
            // No locators means the statement applies to every resource.
            map.serialize_entry("Resource", "*")?;
        } else {
            map.serialize_entry("Resource", &self.resources)?;
        }
        if self.has_conditions() {
            map.serialize_entry("Condition", &self.condition)?;
        }
        map.end()
    }
}

display_json!(Statement);

#[cfg(test)]
mod tests {
    use {
        crate::{condop, AccessLevel, ActionEntry, Defaults, Effect, MasonError, ResourceTemplate, ServiceTable, Statement},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    static TABLE: ServiceTable = ServiceTable {
        prefix: "mock",
        actions: &[
            ActionEntry {
                name: "CreateWidget",
                access_level: AccessLevel::Write,
            },
            ActionEntry {
                name: "DescribeWidget",
                access_level: AccessLevel::Read,
            },
            ActionEntry {
                name: "ListWidgets",
                access_level: AccessLevel::List,
            },
            ActionEntry {
                name: "TagWidget",
                access_level: AccessLevel::Tagging,
            },
        ],
        resource_types: &[ResourceTemplate {
            name: "widget",
            arn: "arn:${Partition}:mock:${Region}:${Account}:widget/${WidgetId}",
            identifiers: &["WidgetId"],
        }],
    };

    fn defaults() -> Defaults {
        Defaults::builder().partition("aws").region("us-east-1").account("111122223333").build().unwrap()
    }

    #[test_log::test]
    fn test_to_prefixes_and_dedups() {
        let mut stmt = Statement::new(&TABLE);
        stmt.to("CreateWidget").unwrap().to("DescribeWidget").unwrap().to("CreateWidget").unwrap();

        assert_eq!(stmt.actions(), &["mock:CreateWidget", "mock:DescribeWidget"]);
        assert_eq!(stmt.service_prefix(), "mock");
    }

    #[test_log::test]
    fn test_to_rejects_malformed_names() {
        let mut stmt = Statement::new(&TABLE);

        let e = stmt.to("").unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("action name is empty".to_string()));

        let e = stmt.to("mock:CreateWidget").unwrap_err();
        assert_eq!(
            e,
            MasonError::InvalidArgument("action name 'mock:CreateWidget' must be a bare action name".to_string())
        );

        let e = stmt.to("Crëate").unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("action name 'Crëate' is not ASCII".to_string()));

        let e = stmt.to("-Create").unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("action name '-Create' must be a bare action name".to_string()));

        // Failures do not disturb accumulated state.
        assert!(stmt.actions().is_empty());
        stmt.to("Get*").unwrap();
        assert_eq!(stmt.actions(), &["mock:Get*"]);
    }

    #[test_log::test]
    fn test_all_actions() {
        let mut stmt = Statement::new(&TABLE);
        stmt.all_actions();
        assert_eq!(stmt.actions(), &["mock:*"]);
    }

    #[test_log::test]
    fn test_all_actions_with_level() {
        let mut stmt = Statement::new(&TABLE);
        stmt.all_actions_with_level(AccessLevel::Read).all_actions_with_level(AccessLevel::List);
        assert_eq!(stmt.actions(), &["mock:DescribeWidget", "mock:ListWidgets"]);

        // Repeating a level does not duplicate entries.
        stmt.all_actions_with_level(AccessLevel::Read);
        assert_eq!(stmt.actions(), &["mock:DescribeWidget", "mock:ListWidgets"]);
    }

    #[test_log::test]
    fn test_on_resource() {
        let mut stmt = Statement::new(&TABLE);
        stmt.with_defaults(defaults());
        stmt.on_resource("widget", &["w-123"], None, None, None).unwrap();
        stmt.on_resource("widget", &["w-456"], Some("444455556666"), None, None).unwrap();
        stmt.on("arn:aws:mock:us-east-1:111122223333:widget/pre-resolved");

        assert_eq!(
            stmt.resources(),
            &[
                "arn:aws:mock:us-east-1:111122223333:widget/w-123",
                "arn:aws:mock:us-east-1:444455556666:widget/w-456",
                "arn:aws:mock:us-east-1:111122223333:widget/pre-resolved",
            ]
        );
    }

    #[test_log::test]
    fn test_on_resource_failures_keep_state() {
        let mut stmt = Statement::new(&TABLE);
        stmt.with_defaults(defaults());
        stmt.to("CreateWidget").unwrap().on_resource("widget", &["w-123"], None, None, None).unwrap();

        let e = stmt.on_resource("gadget", &["g-1"], None, None, None).unwrap_err();
        assert_eq!(e, MasonError::UnknownResourceType("mock:gadget".to_string()));

        let e = stmt.on_resource("widget", &[], None, None, None).unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("resource type 'widget' takes 1 identifier(s), got 0".to_string()));

        assert_eq!(stmt.actions(), &["mock:CreateWidget"]);
        assert_eq!(stmt.resources(), &["arn:aws:mock:us-east-1:111122223333:widget/w-123"]);
    }

    #[test_log::test]
    fn test_if_condition() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_condition("aws:RequestedRegion", "us-east-1", condop::StringEquals).unwrap();
        stmt.if_condition("WidgetClass", "premium", condop::StringEquals).unwrap();

        let map = stmt.condition().get(&condop::StringEquals).unwrap();
        assert!(map.contains_key("aws:RequestedRegion"));
        // A bare key picks up the service namespace.
        assert!(map.contains_key("mock:WidgetClass"));

        let e = stmt.if_condition("", "x", condop::StringEquals).unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("condition key is empty".to_string()));

        let e = stmt.if_condition("aws:TagKeys", Vec::<String>::new(), condop::StringEquals).unwrap_err();
        assert_eq!(e, MasonError::InvalidArgument("condition 'aws:TagKeys' has no values".to_string()));
    }

    #[test_log::test]
    fn test_if_condition_operator_strings() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_condition("aws:RequestedRegion", "us-*", "StringLike").unwrap();

        let e = stmt.if_condition("aws:RequestedRegion", "us-*", "NotARealOperator").unwrap_err();
        assert_eq!(e, MasonError::UnknownOperator("NotARealOperator".to_string()));
        assert_eq!(stmt.condition().len(), 1);
    }

    #[test_log::test]
    fn test_condition_merge_idempotence() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_condition("aws:PrincipalTag/Team", "payments", condop::StringEquals).unwrap();
        stmt.if_condition("aws:PrincipalTag/Team", "billing", condop::StringEquals).unwrap();

        assert_eq!(stmt.condition().len(), 1);
        let map = stmt.condition().get(&condop::StringEquals).unwrap();
        assert_eq!(map["aws:PrincipalTag/Team"].iter().collect::<Vec<_>>(), vec!["payments", "billing"]);
    }

    #[test_log::test]
    fn test_effect() {
        let mut stmt = Statement::new(&TABLE);
        assert_eq!(stmt.effect(), Effect::Allow);
        stmt.deny();
        assert_eq!(stmt.effect(), Effect::Deny);
        stmt.allow();
        assert_eq!(stmt.effect(), Effect::Allow);
        assert_eq!(format!("{}", Effect::Deny), "Deny");
    }

    #[test_log::test]
    fn test_serialize() {
        let mut stmt = Statement::with_sid(&TABLE, "widgets-ro");
        stmt.with_defaults(defaults());
        stmt.to("DescribeWidget")
            .unwrap()
            .on_resource("widget", &["w-123"], None, None, None)
            .unwrap()
            .if_condition("aws:ResourceTag/Team", "payments", condop::StringLike)
            .unwrap();

        assert_eq!(
            stmt.to_string(),
            indoc! { r#"
                {
                    "Sid": "widgets-ro",
                    "Effect": "Allow",
                    "Action": [
                        "mock:DescribeWidget"
                    ],
                    "Resource": [
                        "arn:aws:mock:us-east-1:111122223333:widget/w-123"
                    ],
                    "Condition": {
                        "StringLike": {
                            "aws:ResourceTag/Team": "payments"
                        }
                    }
                }"# }
        );
    }

    #[test_log::test]
    fn test_serialize_empty_resources_as_wildcard() {
        let mut stmt = Statement::new(&TABLE);
        stmt.to("ListWidgets").unwrap();

        assert_eq!(
            stmt.to_string(),
            indoc! { r#"
                {
                    "Effect": "Allow",
                    "Action": [
                        "mock:ListWidgets"
                    ],
                    "Resource": "*"
                }"# }
        );
    }

    #[test_log::test]
    fn test_reserialization_reflects_later_mutation() {
        let mut stmt = Statement::new(&TABLE);
        stmt.to("ListWidgets").unwrap();
        let first = serde_json::to_value(&stmt).unwrap();
        assert_eq!(first["Action"], serde_json::json!(["mock:ListWidgets"]));

        stmt.deny().to("DescribeWidget").unwrap();
        let second = serde_json::to_value(&stmt).unwrap();
        assert_eq!(second["Effect"], serde_json::json!("Deny"));
        assert_eq!(second["Action"], serde_json::json!(["mock:ListWidgets", "mock:DescribeWidget"]));
    }
}
