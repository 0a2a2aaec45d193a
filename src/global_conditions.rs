//! Condition helpers for the global `aws:*` condition keys, available on
//! every statement regardless of service.

use {
    crate::{condop, ConditionOp, ConditionValues, MasonError, Statement},
    chrono::{DateTime, Utc},
};

impl Statement {
    /// Compare the services that made requests on the principal's behalf
    /// with the given value(s). Default: `ForAnyValue:StringEquals`.
    pub fn if_aws_called_via(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:CalledVia", value, operator.unwrap_or(condop::StringEquals.for_any_value()))
    }

    /// Compare the first service that made a request on the principal's
    /// behalf with the given value(s). Default: `StringLike`.
    pub fn if_aws_called_via_first(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:CalledViaFirst", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the last service that made a request on the principal's
    /// behalf with the given value(s). Default: `StringLike`.
    pub fn if_aws_called_via_last(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:CalledViaLast", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the date and time of the request with the given instant.
    /// Default: `DateLessThanEquals`.
    pub fn if_aws_current_time(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:CurrentTime", value, operator.unwrap_or(condop::DateLessThanEquals))
    }

    /// Compare the date and time of the request in epoch time. Accepts
    /// either epoch seconds or a timestamp. Default: `DateLessThanEquals`.
    pub fn if_aws_epoch_time(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:EpochTime", value, operator.unwrap_or(condop::DateLessThanEquals))
    }

    /// Compare the number of seconds since the principal authenticated with
    /// MFA. Default: `NumericLessThan`.
    pub fn if_aws_multi_factor_auth_age(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:MultiFactorAuthAge", value, operator.unwrap_or(condop::NumericLessThan))
    }

    /// Check whether MFA was used to validate the temporary credentials
    /// making the request. The key is absent for long-term credentials, so
    /// consider the `BoolIfExists` operator.
    pub fn if_aws_multi_factor_auth_present(&mut self, value: bool) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:MultiFactorAuthPresent", value, condop::Bool)
    }

    /// Compare the account the requesting principal belongs to with the
    /// given account id(s). Default: `StringLike`.
    pub fn if_aws_principal_account(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:PrincipalAccount", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the ARN of the requesting principal with the given ARN(s).
    /// Default: `ArnLike`.
    pub fn if_aws_principal_arn(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:PrincipalArn", value, operator.unwrap_or(condop::ArnLike))
    }

    /// Compare the organization id of the requesting principal with the
    /// given id(s), e.g. `o-xxxxxxxxxxx`. Default: `StringLike`.
    pub fn if_aws_principal_org_id(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:PrincipalOrgID", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the organizations path of the requesting principal with the
    /// given path(s). A multivalued key; combine with the set qualifiers.
    /// Default: `StringEquals`.
    pub fn if_aws_principal_org_paths(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:PrincipalOrgPaths", value, operator.unwrap_or(condop::StringEquals))
    }

    /// Compare the tag attached to the requesting principal under `key`
    /// with the given value(s). Default: `StringLike`.
    pub fn if_aws_principal_tag(
        &mut self,
        key: &str,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition(&format!("aws:PrincipalTag/{}", key), value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the type of the requesting principal: any of `Account`,
    /// `User`, `FederatedUser`, `AssumedRole`, `Anonymous`.
    /// Default: `StringEquals`.
    pub fn if_aws_principal_type(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:PrincipalType", value, operator.unwrap_or(condop::StringEquals))
    }

    /// Compare the HTTP referer header with the given value(s). Provided by
    /// the caller, so never rely on it to keep unauthorized parties out.
    /// Default: `StringLike`.
    pub fn if_aws_referer(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:Referer", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the region the request was made to with the given region(s).
    /// Default: `StringEquals`.
    pub fn if_aws_requested_region(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:RequestedRegion", value, operator.unwrap_or(condop::StringEquals))
    }

    /// Compare the tag key-value pair passed in the request under `key`
    /// with the given value(s). Default: `StringLike`.
    pub fn if_aws_request_tag(
        &mut self,
        key: &str,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition(&format!("aws:RequestTag/{}", key), value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the tag attached to the target resource under `key` with the
    /// given value(s). Default: `StringLike`.
    pub fn if_aws_resource_tag(
        &mut self,
        key: &str,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition(&format!("aws:ResourceTag/{}", key), value, operator.unwrap_or(condop::StringLike))
    }

    /// Check whether the request was sent using SSL.
    pub fn if_aws_secure_transport(&mut self, value: bool) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SecureTransport", value, condop::Bool)
    }

    /// Compare the account id of the resource making a service-to-service
    /// request with the given account id(s). Default: `StringLike`.
    pub fn if_aws_source_account(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SourceAccount", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the ARN of the resource making a service-to-service request
    /// with the given ARN(s). Default: `ArnLike`.
    pub fn if_aws_source_arn(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SourceArn", value, operator.unwrap_or(condop::ArnLike))
    }

    /// Compare the requester's IP address with the given address(es) or
    /// CIDR range(s). Default: `IpAddress`.
    pub fn if_aws_source_ip(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SourceIp", value, operator.unwrap_or(condop::IpAddress))
    }

    /// Compare the VPC the request came through with the given VPC id(s).
    /// Default: `StringEquals`.
    pub fn if_aws_source_vpc(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SourceVpc", value, operator.unwrap_or(condop::StringEquals))
    }

    /// Compare the VPC endpoint the request came through with the given
    /// endpoint id(s). Default: `StringLike`.
    pub fn if_aws_source_vpce(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:SourceVpce", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the tag keys in the request with the given key(s). A
    /// multivalued key; combine with the set qualifiers.
    /// Default: `StringLike`.
    pub fn if_aws_tag_keys(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:TagKeys", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the instant the temporary credentials were issued with the
    /// given instant. Default: `DateGreaterThanEquals`.
    pub fn if_aws_token_issue_time(
        &mut self,
        value: DateTime<Utc>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:TokenIssueTime", value, operator.unwrap_or(condop::DateGreaterThanEquals))
    }

    /// Compare the requester's user-agent string with the given value(s).
    /// Provided by the caller, so never rely on it for access control.
    /// Default: `StringLike`.
    pub fn if_aws_user_agent(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:UserAgent", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the requester's principal identifier with the given id(s).
    /// Default: `StringLike`.
    pub fn if_aws_userid(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:userid", value, operator.unwrap_or(condop::StringLike))
    }

    /// Compare the requester's user name with the given name(s).
    /// Default: `StringLike`.
    pub fn if_aws_username(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:username", value, operator.unwrap_or(condop::StringLike))
    }

    /// Check whether an AWS service makes the request to another service on
    /// the principal's behalf.
    pub fn if_aws_via_aws_service(&mut self, value: bool) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:ViaAWSService", value, condop::Bool)
    }

    /// Compare the requester's IP address, for requests made through a VPC
    /// endpoint, with the given address(es). Default: `IpAddress`.
    pub fn if_aws_vpc_source_ip(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Self, MasonError> {
        self.if_condition("aws:VpcSourceIp", value, operator.unwrap_or(condop::IpAddress))
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{condop, AccessLevel, ActionEntry, ServiceTable, Statement},
        chrono::{TimeZone, Utc},
        pretty_assertions::assert_eq,
    };

    static TABLE: ServiceTable = ServiceTable {
        prefix: "mock",
        actions: &[ActionEntry {
            name: "CreateWidget",
            access_level: AccessLevel::Write,
        }],
        resource_types: &[],
    };

    #[test_log::test]
    fn test_resource_tag_default_operator() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_aws_resource_tag("Team", "payments", None).unwrap();

        let map = stmt.condition().get(&condop::StringLike).unwrap();
        assert_eq!(map["aws:ResourceTag/Team"].iter().collect::<Vec<_>>(), vec!["payments"]);
    }

    #[test_log::test]
    fn test_operator_overrides() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_aws_resource_tag("Team", "payments", Some(condop::StringEquals)).unwrap();
        stmt.if_aws_requested_region("us-*", Some(condop::StringLike)).unwrap();

        assert!(stmt.condition().get(&condop::StringEquals).is_some());
        let map = stmt.condition().get(&condop::StringLike).unwrap();
        assert!(map.contains_key("aws:RequestedRegion"));
    }

    #[test_log::test]
    fn test_called_via_default_is_qualified() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_aws_called_via(["athena.amazonaws.com"], None).unwrap();

        let map = stmt.condition().get(&condop::StringEquals.for_any_value()).unwrap();
        assert_eq!(map["aws:CalledVia"].iter().collect::<Vec<_>>(), vec!["athena.amazonaws.com"]);
    }

    #[test_log::test]
    fn test_bool_helpers() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_aws_secure_transport(true).unwrap();
        stmt.if_aws_multi_factor_auth_present(true).unwrap();
        stmt.if_aws_via_aws_service(false).unwrap();

        let map = stmt.condition().get(&condop::Bool).unwrap();
        assert_eq!(map["aws:SecureTransport"].iter().collect::<Vec<_>>(), vec!["true"]);
        assert_eq!(map["aws:MultiFactorAuthPresent"].iter().collect::<Vec<_>>(), vec!["true"]);
        assert_eq!(map["aws:ViaAWSService"].iter().collect::<Vec<_>>(), vec!["false"]);
    }

    #[test_log::test]
    fn test_date_helpers() {
        let mut stmt = Statement::new(&TABLE);
        let date = Utc.with_ymd_and_hms(2020, 4, 1, 0, 0, 0).unwrap();
        stmt.if_aws_current_time(date, None).unwrap();
        stmt.if_aws_token_issue_time(date, None).unwrap();
        stmt.if_aws_epoch_time(1585699200_u64, None).unwrap();

        let map = stmt.condition().get(&condop::DateLessThanEquals).unwrap();
        assert_eq!(map["aws:CurrentTime"].iter().collect::<Vec<_>>(), vec!["2020-04-01T00:00:00.000Z"]);
        assert_eq!(map["aws:EpochTime"].iter().collect::<Vec<_>>(), vec!["1585699200"]);

        let map = stmt.condition().get(&condop::DateGreaterThanEquals).unwrap();
        assert_eq!(map["aws:TokenIssueTime"].iter().collect::<Vec<_>>(), vec!["2020-04-01T00:00:00.000Z"]);
    }

    #[test_log::test]
    fn test_numeric_and_ip_helpers() {
        let mut stmt = Statement::new(&TABLE);
        stmt.if_aws_multi_factor_auth_age(3600_i64, None).unwrap();
        stmt.if_aws_source_ip("203.0.113.0/24", None).unwrap();

        let map = stmt.condition().get(&condop::NumericLessThan).unwrap();
        assert_eq!(map["aws:MultiFactorAuthAge"].iter().collect::<Vec<_>>(), vec!["3600"]);

        let map = stmt.condition().get(&condop::IpAddress).unwrap();
        assert_eq!(map["aws:SourceIp"].iter().collect::<Vec<_>>(), vec!["203.0.113.0/24"]);
    }
}
