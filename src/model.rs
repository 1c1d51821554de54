//! Ranger wire data model.
//!
//! Field names match the Ranger REST API JSON exactly (camelCase keys,
//! all-lowercase resource-kind keys). Optional fields are omitted from
//! serialized output when unset and defaulted when absent on decode,
//! mirroring the server's sparse representations. The client performs no
//! semantic validation of these records — that is the server's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One allowed (or denied) action within a policy item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Access {
    /// Action name, e.g. "read", "write", "publish".
    #[serde(rename = "type")]
    pub access_type: String,
    #[serde(rename = "isAllowed")]
    pub is_allowed: bool,
}

/// One grant entry within a policy: principals paired with accesses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolicyItem {
    pub accesses: Vec<Access>,
    pub users: Vec<String>,
    pub groups: Vec<String>,
    pub delegate_admin: bool,
}

/// The set of string values a rule applies to for one resource kind.
///
/// `values` is non-empty whenever the kind is present at all; `is_recursive`
/// only applies to hierarchical resources (e.g. Hive databases).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceType {
    pub values: Vec<String>,
    pub is_excludes: bool,
    pub is_recursive: bool,
}

/// Sparse mapping of resource-kind to [`ResourceType`].
///
/// Only the kinds relevant to the target service type are populated; the
/// wire format does not enforce mutual exclusivity between service types,
/// so neither do we.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    // Kafka kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<ResourceType>,
    #[serde(rename = "consumergroup", skip_serializing_if = "Option::is_none")]
    pub consumer_group: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<ResourceType>,
    #[serde(rename = "transactionalid", skip_serializing_if = "Option::is_none")]
    pub transactional_id: Option<ResourceType>,
    #[serde(rename = "delegationtoken", skip_serializing_if = "Option::is_none")]
    pub delegation_token: Option<ResourceType>,

    // Hive kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<ResourceType>,
    #[serde(rename = "hiveservice", skip_serializing_if = "Option::is_none")]
    pub hive_service: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udf: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<ResourceType>,
}

/// An access-control rule scoped to exactly one service (by name).
///
/// The server assigns `id`, `guid` and `version`; leave them unset when
/// creating.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    pub is_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    pub service: String,
    pub name: String,
    pub policy_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_audit_enabled: bool,
    pub resources: Resources,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub policy_items: Vec<PolicyItem>,
    pub service_type: String,
    pub is_deny_all_else: bool,
}

/// A registered resource-manager integration (e.g. a Kafka cluster) that
/// policies attach to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
    pub is_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_service: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub configs: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_update_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_version: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_update_time: Option<i64>,
}
