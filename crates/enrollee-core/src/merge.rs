//! Merge engine for collapsing records that share a key

use crate::record::Enrollee;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Collapse records sharing a key into one record per distinct key.
///
/// The first record seen for a key seeds the current winner; each later
/// record with the same key is passed to `resolve(incoming, existing)`
/// and the returned record replaces the holder. The output keeps the
/// order in which keys were first encountered.
pub fn merge_by<T, K, F, R>(
    records: impl IntoIterator<Item = T>,
    mut key: F,
    mut resolve: R,
) -> Vec<T>
where
    K: Hash + Eq,
    F: FnMut(&T) -> K,
    R: FnMut(T, T) -> T,
{
    // Winners in first-encounter order; the map points each key at its slot.
    let mut winners: Vec<Option<T>> = Vec::new();
    let mut slots: HashMap<K, usize> = HashMap::new();

    for incoming in records {
        match slots.entry(key(&incoming)) {
            Entry::Occupied(slot) => {
                let slot = *slot.get();
                if let Some(existing) = winners[slot].take() {
                    winners[slot] = Some(resolve(incoming, existing));
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(winners.len());
                winners.push(Some(incoming));
            }
        }
    }

    winners.into_iter().flatten().collect()
}

/// Duplicate resolver that keeps the record with the higher version.
///
/// Only a strictly greater incoming version replaces the current winner,
/// so ties keep the record that was seen first.
pub fn prefer_higher_version(incoming: Enrollee, existing: Enrollee) -> Enrollee {
    if incoming.version > existing.version {
        incoming
    } else {
        existing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollee(user_id: i64, first: &str, version: i64) -> Enrollee {
        Enrollee {
            user_id,
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            version,
            insurance: "A".to_string(),
        }
    }

    #[test]
    fn test_merge_singleton_is_identity() {
        let record = enrollee(1, "Jane", 1);
        let merged = merge_by(vec![record.clone()], |e| e.user_id, prefer_higher_version);
        assert_eq!(merged, vec![record]);
    }

    #[test]
    fn test_merge_higher_version_wins() {
        let old = enrollee(1, "old", 1);
        let new = enrollee(1, "new", 2);

        let merged = merge_by(
            vec![old.clone(), new.clone()],
            |e| e.user_id,
            prefer_higher_version,
        );
        assert_eq!(merged, vec![new.clone()]);

        // Arrival order must not matter for a strictly higher version
        let merged = merge_by(vec![new.clone(), old], |e| e.user_id, prefer_higher_version);
        assert_eq!(merged, vec![new]);
    }

    #[test]
    fn test_merge_tie_keeps_earlier_record() {
        let first = enrollee(1, "first", 2);
        let second = enrollee(1, "second", 2);

        let merged = merge_by(
            vec![first.clone(), second],
            |e| e.user_id,
            prefer_higher_version,
        );
        assert_eq!(merged, vec![first]);
    }

    #[test]
    fn test_merge_output_in_first_encounter_order() {
        let records = vec![
            enrollee(3, "c", 1),
            enrollee(1, "a", 1),
            enrollee(3, "c2", 2),
            enrollee(2, "b", 1),
            enrollee(1, "a2", 1),
        ];

        let merged = merge_by(records, |e| e.user_id, prefer_higher_version);
        let ids: Vec<i64> = merged.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_merge_one_record_per_key() {
        let records = vec![
            enrollee(1, "a", 1),
            enrollee(1, "b", 3),
            enrollee(1, "c", 2),
            enrollee(2, "d", 1),
        ];

        let merged = merge_by(records, |e| e.user_id, prefer_higher_version);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].first_name, "b");
        assert_eq!(merged[1].first_name, "d");
    }

    #[test]
    fn test_merge_empty_input() {
        let merged = merge_by(Vec::<Enrollee>::new(), |e| e.user_id, prefer_higher_version);
        assert!(merged.is_empty());
    }
}
