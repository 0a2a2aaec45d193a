use {
    crate::{condop, AccessLevel, ActionEntry, ConditionOp, ConditionValues, MasonError, ResourceTemplate,
        ServiceTable, Statement},
    std::ops::{Deref, DerefMut},
};

/// The `redshift` service catalog.
pub static REDSHIFT: ServiceTable = ServiceTable {
    prefix: "redshift",
    actions: &[
        ActionEntry {
            name: "AcceptReservedNodeExchange",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "AuthorizeClusterSecurityGroupIngress",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "AuthorizeSnapshotAccess",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "CancelResize",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CopyClusterSnapshot",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CreateCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CreateClusterParameterGroup",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CreateClusterSnapshot",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CreateClusterUser",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "CreateEventSubscription",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "CreateTags",
            access_level: AccessLevel::Tagging,
        },
        ActionEntry {
            name: "DeleteCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "DeleteClusterSnapshot",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "DeleteTags",
            access_level: AccessLevel::Tagging,
        },
        ActionEntry {
            name: "DescribeClusterParameters",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "DescribeClusterSnapshots",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "DescribeClusters",
            access_level: AccessLevel::List,
        },
        ActionEntry {
            name: "DescribeEvents",
            access_level: AccessLevel::List,
        },
        ActionEntry {
            name: "DescribeLoggingStatus",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "DescribeResize",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "DescribeTags",
            access_level: AccessLevel::Read,
        },
        ActionEntry {
            name: "GetClusterCredentials",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "JoinGroup",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "ListDatabases",
            access_level: AccessLevel::List,
        },
        ActionEntry {
            name: "ListSchemas",
            access_level: AccessLevel::List,
        },
        ActionEntry {
            name: "ListTables",
            access_level: AccessLevel::List,
        },
        ActionEntry {
            name: "ModifyCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "ModifyClusterIamRoles",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "PauseCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "RebootCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "ResizeCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "RestoreFromClusterSnapshot",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "ResumeCluster",
            access_level: AccessLevel::Write,
        },
        ActionEntry {
            name: "RevokeSnapshotAccess",
            access_level: AccessLevel::PermissionsManagement,
        },
        ActionEntry {
            name: "RotateEncryptionKey",
            access_level: AccessLevel::PermissionsManagement,
        },
    ],
    resource_types: &[
        ResourceTemplate {
            name: "cluster",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:cluster:${ClusterName}",
            identifiers: &["ClusterName"],
        },
        ResourceTemplate {
            name: "dbgroup",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:dbgroup:${ClusterName}/${DbGroup}",
            identifiers: &["ClusterName", "DbGroup"],
        },
        ResourceTemplate {
            name: "dbname",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:dbname:${ClusterName}/${DbName}",
            identifiers: &["ClusterName", "DbName"],
        },
        ResourceTemplate {
            name: "dbuser",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:dbuser:${ClusterName}/${DbUser}",
            identifiers: &["ClusterName", "DbUser"],
        },
        ResourceTemplate {
            name: "eventsubscription",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:eventsubscription:${EventSubscriptionName}",
            identifiers: &["EventSubscriptionName"],
        },
        ResourceTemplate {
            name: "parametergroup",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:parametergroup:${ParameterGroupName}",
            identifiers: &["ParameterGroupName"],
        },
        ResourceTemplate {
            name: "securitygroup",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:securitygroup:${SecurityGroupName}/ec2securitygroup/${Owner}/${Ec2SecurityGroupId}",
            identifiers: &["SecurityGroupName", "Owner", "Ec2SecurityGroupId"],
        },
        ResourceTemplate {
            name: "snapshot",
            arn: "arn:${Partition}:redshift:${Region}:${Account}:snapshot:${ClusterName}/${SnapshotName}",
            identifiers: &["ClusterName", "SnapshotName"],
        },
    ],
};

/// Statement provider for the `redshift` service.
///
/// Dereferences to its [Statement], so the shared accumulator methods and
/// the global `aws:*` condition helpers chain through it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Redshift {
    statement: Statement,
}

impl Redshift {
    pub fn new() -> Self {
        Self {
            statement: Statement::new(&REDSHIFT),
        }
    }

    pub fn with_sid(sid: impl Into<String>) -> Self {
        Self {
            statement: Statement::with_sid(&REDSHIFT, sid),
        }
    }

    pub fn into_statement(self) -> Statement {
        self.statement
    }

    /// Grants permission to exchange a DC1 reserved node for a DC2 reserved node. Access level: Write.
    pub fn to_accept_reserved_node_exchange(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("AcceptReservedNodeExchange")
    }

    /// Grants permission to add an inbound rule to a cluster security group. Access level: Permissions management.
    pub fn to_authorize_cluster_security_group_ingress(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("AuthorizeClusterSecurityGroupIngress")
    }

    /// Grants permission to let another account restore a snapshot. Access level: Permissions management.
    pub fn to_authorize_snapshot_access(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("AuthorizeSnapshotAccess")
    }

    /// Grants permission to cancel a resize operation. Access level: Write.
    pub fn to_cancel_resize(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CancelResize")
    }

    /// Grants permission to copy a cluster snapshot. Access level: Write.
    pub fn to_copy_cluster_snapshot(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CopyClusterSnapshot")
    }

    /// Grants permission to create a cluster. Access level: Write.
    pub fn to_create_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateCluster")
    }

    /// Grants permission to create a cluster parameter group. Access level: Write.
    pub fn to_create_cluster_parameter_group(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateClusterParameterGroup")
    }

    /// Grants permission to create a manual cluster snapshot. Access level: Write.
    pub fn to_create_cluster_snapshot(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateClusterSnapshot")
    }

    /// Grants permission to create a database user. Access level: Permissions management.
    pub fn to_create_cluster_user(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateClusterUser")
    }

    /// Grants permission to create an event notification subscription. Access level: Write.
    pub fn to_create_event_subscription(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateEventSubscription")
    }

    /// Grants permission to add tags to a resource. Access level: Tagging.
    pub fn to_create_tags(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("CreateTags")
    }

    /// Grants permission to delete a cluster. Access level: Write.
    pub fn to_delete_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DeleteCluster")
    }

    /// Grants permission to delete a manual cluster snapshot. Access level: Write.
    pub fn to_delete_cluster_snapshot(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DeleteClusterSnapshot")
    }

    /// Grants permission to delete tags from a resource. Access level: Tagging.
    pub fn to_delete_tags(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DeleteTags")
    }

    /// Grants permission to describe cluster parameter group parameters. Access level: Read.
    pub fn to_describe_cluster_parameters(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeClusterParameters")
    }

    /// Grants permission to describe cluster snapshots. Access level: Read.
    pub fn to_describe_cluster_snapshots(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeClusterSnapshots")
    }

    /// Grants permission to describe clusters. Access level: List.
    pub fn to_describe_clusters(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeClusters")
    }

    /// Grants permission to describe events. Access level: List.
    pub fn to_describe_events(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeEvents")
    }

    /// Grants permission to describe the logging status of a cluster. Access level: Read.
    pub fn to_describe_logging_status(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeLoggingStatus")
    }

    /// Grants permission to describe a resize operation. Access level: Read.
    pub fn to_describe_resize(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeResize")
    }

    /// Grants permission to describe tags. Access level: Read.
    pub fn to_describe_tags(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("DescribeTags")
    }

    /// Grants permission to get temporary database credentials. Access level: Write.
    ///
    /// Possible conditions: [if_db_name](Self::if_db_name),
    /// [if_duration_seconds](Self::if_duration_seconds).
    pub fn to_get_cluster_credentials(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("GetClusterCredentials")
    }

    /// Grants permission to join a database group. Access level: Permissions management.
    pub fn to_join_group(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("JoinGroup")
    }

    /// Grants permission to list databases. Access level: List.
    pub fn to_list_databases(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ListDatabases")
    }

    /// Grants permission to list schemas. Access level: List.
    pub fn to_list_schemas(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ListSchemas")
    }

    /// Grants permission to list tables. Access level: List.
    pub fn to_list_tables(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ListTables")
    }

    /// Grants permission to modify a cluster. Access level: Write.
    pub fn to_modify_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ModifyCluster")
    }

    /// Grants permission to modify the IAM roles of a cluster. Access level: Permissions management.
    pub fn to_modify_cluster_iam_roles(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ModifyClusterIamRoles")
    }

    /// Grants permission to pause a cluster. Access level: Write.
    pub fn to_pause_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("PauseCluster")
    }

    /// Grants permission to reboot a cluster. Access level: Write.
    pub fn to_reboot_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("RebootCluster")
    }

    /// Grants permission to resize a cluster. Access level: Write.
    pub fn to_resize_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ResizeCluster")
    }

    /// Grants permission to restore a cluster from a snapshot. Access level: Write.
    pub fn to_restore_from_cluster_snapshot(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("RestoreFromClusterSnapshot")
    }

    /// Grants permission to resume a paused cluster. Access level: Write.
    pub fn to_resume_cluster(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("ResumeCluster")
    }

    /// Grants permission to revoke another account's snapshot access. Access level: Permissions management.
    pub fn to_revoke_snapshot_access(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("RevokeSnapshotAccess")
    }

    /// Grants permission to rotate a cluster's encryption key. Access level: Permissions management.
    pub fn to_rotate_encryption_key(&mut self) -> Result<&mut Statement, MasonError> {
        self.statement.to("RotateEncryptionKey")
    }

    /// Adds a resource of type `cluster` to the statement.
    pub fn on_cluster(
        &mut self,
        cluster_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("cluster", &[cluster_name], account, region, partition)
    }

    /// Adds a resource of type `dbgroup` to the statement.
    pub fn on_dbgroup(
        &mut self,
        cluster_name: &str,
        db_group: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("dbgroup", &[cluster_name, db_group], account, region, partition)
    }

    /// Adds a resource of type `dbname` to the statement.
    pub fn on_dbname(
        &mut self,
        cluster_name: &str,
        db_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("dbname", &[cluster_name, db_name], account, region, partition)
    }

    /// Adds a resource of type `dbuser` to the statement.
    pub fn on_dbuser(
        &mut self,
        cluster_name: &str,
        db_user: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("dbuser", &[cluster_name, db_user], account, region, partition)
    }

    /// Adds a resource of type `eventsubscription` to the statement.
    pub fn on_eventsubscription(
        &mut self,
        event_subscription_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("eventsubscription", &[event_subscription_name], account, region, partition)
    }

    /// Adds a resource of type `parametergroup` to the statement.
    pub fn on_parametergroup(
        &mut self,
        parameter_group_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("parametergroup", &[parameter_group_name], account, region, partition)
    }

    /// Adds a resource of type `securitygroup` to the statement.
    pub fn on_securitygroup(
        &mut self,
        security_group_name: &str,
        owner: &str,
        ec2_security_group_id: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource(
            "securitygroup",
            &[security_group_name, owner, ec2_security_group_id],
            account,
            region,
            partition,
        )
    }

    /// Adds a resource of type `snapshot` to the statement.
    pub fn on_snapshot(
        &mut self,
        cluster_name: &str,
        snapshot_name: &str,
        account: Option<&str>,
        region: Option<&str>,
        partition: Option<&str>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.on_resource("snapshot", &[cluster_name, snapshot_name], account, region, partition)
    }

    /// Compare the database name a request asks credentials for with the
    /// given name(s). Default: `StringEquals`.
    pub fn if_db_name(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.if_condition("DbName", value, operator.unwrap_or(condop::StringEquals))
    }

    /// Compare the credential lifetime a request asks for, in seconds, with
    /// the given value(s). Default: `NumericEquals`.
    pub fn if_duration_seconds(
        &mut self,
        value: impl Into<ConditionValues>,
        operator: Option<ConditionOp>,
    ) -> Result<&mut Statement, MasonError> {
        self.statement.if_condition("DurationSeconds", value, operator.unwrap_or(condop::NumericEquals))
    }
}

impl Default for Redshift {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Redshift {
    type Target = Statement;

    fn deref(&self) -> &Statement {
        &self.statement
    }
}

impl DerefMut for Redshift {
    fn deref_mut(&mut self) -> &mut Statement {
        &mut self.statement
    }
}

impl From<Redshift> for Statement {
    fn from(provider: Redshift) -> Statement {
        provider.into_statement()
    }
}
