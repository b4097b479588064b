use std::{collections::BTreeMap, fmt};

/// Engine-reported container lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerStatus {
    Created,
    Restarting,
    Running,
    Removing,
    Paused,
    Exited,
    Dead,
}

impl ContainerStatus {
    /// States counted as alive for inventory purposes.
    pub const ALIVE: [ContainerStatus; 2] = [ContainerStatus::Created, ContainerStatus::Running];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerStatus::Created => "created",
            ContainerStatus::Restarting => "restarting",
            ContainerStatus::Running => "running",
            ContainerStatus::Removing => "removing",
            ContainerStatus::Paused => "paused",
            ContainerStatus::Exited => "exited",
            ContainerStatus::Dead => "dead",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match label clause, rendered as `key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSelector {
    pub key: String,
    pub value: String,
}

impl LabelSelector {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Predicate for a container list call.
///
/// A container matches when its status is any of `statuses` (or `statuses` is empty)
/// and it carries every label in `labels`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub statuses: Vec<ContainerStatus>,
    pub labels: Vec<LabelSelector>,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: ContainerStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.push(LabelSelector::new(key, value));
        self
    }

    /// Render in the engine's query form: `{"label": ["k=v", ..], "status": [..]}`.
    pub fn to_query(&self) -> BTreeMap<String, Vec<String>> {
        let mut query = BTreeMap::new();
        if !self.statuses.is_empty() {
            query.insert(
                "status".to_string(),
                self.statuses.iter().map(ToString::to_string).collect(),
            );
        }
        if !self.labels.is_empty() {
            query.insert(
                "label".to_string(),
                self.labels.iter().map(ToString::to_string).collect(),
            );
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_query_groups_clauses_by_key() {
        let filter = ListFilter::new()
            .with_status(ContainerStatus::Created)
            .with_status(ContainerStatus::Running)
            .with_label("env", "prod")
            .with_label("team", "x");

        let query = filter.to_query();
        assert_eq!(query["status"], ["created", "running"]);
        assert_eq!(query["label"], ["env=prod", "team=x"]);
    }

    #[test]
    fn empty_filter_renders_nothing() {
        assert!(ListFilter::new().to_query().is_empty());
    }

    #[test]
    fn label_values_may_contain_equals() {
        let sel = LabelSelector::new("expr", "a=b");
        assert_eq!(sel.to_string(), "expr=a=b");
    }
}
