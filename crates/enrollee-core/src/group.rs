//! Grouping engine for partitioning records into keyed buckets

use std::collections::BTreeMap;

/// Partition records into buckets by a key function.
///
/// Buckets are created lazily on first key encounter and preserve the
/// insertion order of their records. Every record lands in exactly one
/// bucket. Using BTreeMap for deterministic bucket iteration.
pub fn group_by<T, K, F>(records: impl IntoIterator<Item = T>, mut key: F) -> BTreeMap<K, Vec<T>>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();

    for record in records {
        groups.entry(key(&record)).or_default().push(record);
    }

    groups
}
