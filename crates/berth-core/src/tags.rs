//! Tag reconciliation.
//!
//! Several tag sources feed every instance: tags from the caller, tags from the provider
//! payload and the namespace tags fixed at construction. [`merge_tags`] folds them into one set
//! with last-source-wins semantics and a sorted key list for deterministic output.
use tracing::warn;

use berth_model::Tags;

/// Result of merging several tag sources.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    keys: Vec<String>,
    merged: Tags,
    overrides: Vec<String>,
}

impl TagSet {
    /// All merged keys in ascending lexicographic order, without duplicates.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Merged key–value view.
    pub fn merged(&self) -> &Tags {
        &self.merged
    }

    /// Keys whose value was overwritten by a later source, once per overwrite.
    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys
            .iter()
            .filter_map(|k| self.merged.get(k).map(|v| (k.as_str(), v)))
    }

    pub fn into_tags(self) -> Tags {
        self.merged
    }
}

/// Merge tag sources in order; a later source overwrites an earlier one on key collision.
///
/// An overwrite is tolerated but reported as a `warn` event and recorded in
/// [`TagSet::overrides`]. Empty sources contribute nothing.
pub fn merge_tags<'a, I>(sources: I) -> TagSet
where
    I: IntoIterator<Item = &'a Tags>,
{
    let mut keys = Vec::new();
    let mut merged = Tags::new();
    let mut overrides = Vec::new();

    for source in sources {
        for (key, value) in source.iter() {
            match merged.insert(key, value) {
                Some(previous) => {
                    warn!(key, previous = %previous, value, "overwriting tag value");
                    overrides.push(key.to_string());
                }
                None => keys.push(key.to_string()),
            }
        }
    }
    keys.sort();

    TagSet {
        keys,
        merged,
        overrides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs.iter().copied().collect()
    }

    #[test]
    fn keys_are_sorted_and_unique() {
        let a = tags(&[("zeta", "1"), ("alpha", "1")]);
        let b = tags(&[("mid", "2"), ("alpha", "2")]);
        let c = tags(&[("beta", "3"), ("zeta", "3")]);

        let set = merge_tags([&a, &b, &c]);
        assert_eq!(set.keys(), ["alpha", "beta", "mid", "zeta"]);
    }

    #[test]
    fn last_source_wins() {
        let a = tags(&[("env", "prod"), ("team", "a")]);
        let b = tags(&[("env", "dev")]);

        let set = merge_tags([&a, &b]);
        assert_eq!(set.merged().get("env"), Some("dev"));
        assert_eq!(set.merged().get("team"), Some("a"));

        let reversed = merge_tags([&b, &a]);
        assert_eq!(reversed.merged().get("env"), Some("prod"));
    }

    #[test]
    fn every_overwrite_is_reported_once() {
        let a = tags(&[("env", "1"), ("x", "1")]);
        let b = tags(&[("env", "2"), ("y", "2")]);
        let c = tags(&[("env", "3"), ("x", "3")]);

        let set = merge_tags([&a, &b, &c]);
        assert_eq!(set.overrides(), ["env", "env", "x"]);
        assert_eq!(set.merged().get("env"), Some("3"));
    }

    #[test]
    fn identical_value_still_counts_as_overwrite() {
        let a = tags(&[("k", "v")]);
        let set = merge_tags([&a, &a]);
        assert_eq!(set.overrides(), ["k"]);
        assert_eq!(set.keys(), ["k"]);
    }

    #[test]
    fn empty_sources_contribute_nothing() {
        let empty = Tags::new();
        let a = tags(&[("k", "v")]);

        let set = merge_tags([&empty, &a, &empty]);
        assert_eq!(set.keys(), ["k"]);
        assert!(set.overrides().is_empty());

        let none = merge_tags(std::iter::empty::<&Tags>());
        assert!(none.keys().is_empty());
        assert!(none.merged().is_empty());
    }

    #[test]
    fn iter_follows_sorted_keys() {
        let a = tags(&[("b", "2"), ("a", "1")]);
        let set = merge_tags([&a]);
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "2")]);
    }
}
