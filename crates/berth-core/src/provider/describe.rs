//! Group listing: tag-scoped list filters and container-to-description projection.
use std::collections::BTreeMap;

use berth_model::{EndpointSettings, InstanceDescription, InstanceId, LogicalId, Tags};

use crate::{
    runtime::{ContainerRecord, ContainerStatus, ListFilter},
    tags::merge_tags,
};

/// Build the list filter selecting the live members of a group.
///
/// Only `created` and `running` containers match. Namespace tags are merged after the group tags
/// and so win on collision; each merged tag becomes an exact-match label clause, in key order.
pub fn describe_group_request(namespace_tags: &Tags, group_tags: &Tags) -> ListFilter {
    let tags = merge_tags([group_tags, namespace_tags]);

    let filter = ContainerStatus::ALIVE
        .into_iter()
        .fold(ListFilter::new(), ListFilter::with_status);

    tags.iter()
        .fold(filter, |filter, (key, value)| filter.with_label(key, value))
}

/// Project a listed container into an instance description.
pub fn describe_container(record: ContainerRecord) -> InstanceDescription {
    let logical_id = record.networks.as_ref().and_then(select_logical_id);

    InstanceDescription {
        id: InstanceId::new(record.id),
        logical_id,
        tags: record.labels.unwrap_or_default(),
    }
}

/// Address of the lexicographically first network name whose endpoint has one.
///
/// Endpoints with an empty address are skipped; when none is addressed there is no logical id.
fn select_logical_id(networks: &BTreeMap<String, EndpointSettings>) -> Option<LogicalId> {
    networks
        .values()
        .map(|endpoint| endpoint.ip_address.as_str())
        .find(|address| !address.is_empty())
        .map(LogicalId::from)
}
