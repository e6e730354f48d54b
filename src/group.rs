use crate::name::infer_template;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Filenames that share one inferred template, keyed by the canonical
/// template string. Names with no inferable template form singleton-keyed
/// sets under their own name, contributing a `None` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    /// Canonical template string, or the bare filename.
    key: String,
    /// One entry per contributing filename, in input order.
    indices: Vec<Option<u64>>,
}

impl ImageSet {
    /// The group key: a canonical template string like `a_###.img`, or the
    /// filename itself when no template was inferred.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The matched indices in input order; `None` marks a name that carried
    /// no template.
    pub fn indices(&self) -> &[Option<u64>] {
        &self.indices
    }

    /// Number of filenames in the set.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Partition filenames into imagesets by their inferred template.
///
/// Every input name lands in exactly one set; sets come back in the order
/// their key was first seen, and indices within a set keep input order,
/// unsorted and undeduplicated.
pub fn group_by_template<I, S>(names: I) -> Vec<ImageSet>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sets: Vec<ImageSet> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for name in names {
        let name = name.as_ref();
        let (key, index) = match infer_template(name) {
            Some((template, index)) => (template.to_string(), Some(index)),
            None => (name.to_string(), None),
        };
        match slots.get(&key) {
            Some(&slot) => sets[slot].indices.push(index),
            None => {
                slots.insert(key.clone(), sets.len());
                sets.push(ImageSet {
                    key,
                    indices: vec![index],
                });
            }
        }
    }

    tracing::debug!(sets = sets.len(), "grouped filenames by template");
    sets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_shared_template() {
        let sets = group_by_template(["a_001.img", "a_002.img", "b.dat"]);
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].key(), "a_###.img");
        assert_eq!(sets[0].indices(), [Some(1), Some(2)]);
        assert_eq!(sets[1].key(), "b.dat");
        assert_eq!(sets[1].indices(), [None]);
    }

    #[test]
    fn every_name_lands_exactly_once() {
        let names = [
            "a_001.img",
            "a_003.img",
            "b_001.img",
            "notes.txt",
            "a_002.img",
            "image.0001",
        ];
        let sets = group_by_template(names);
        let total: usize = sets.iter().map(ImageSet::len).sum();
        assert_eq!(total, names.len());
    }

    #[test]
    fn keys_keep_first_seen_order() {
        let sets = group_by_template(["b_001.img", "a_001.img", "b_002.img"]);
        let keys: Vec<_> = sets.iter().map(ImageSet::key).collect();
        assert_eq!(keys, ["b_###.img", "a_###.img"]);
    }

    #[test]
    fn indices_keep_input_order() {
        let sets = group_by_template(["a_003.img", "a_001.img", "a_002.img"]);
        assert_eq!(sets[0].indices(), [Some(3), Some(1), Some(2)]);
    }

    #[test]
    fn repeated_plain_names_accumulate() {
        let sets = group_by_template(["README", "README"]);
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].indices(), [None, None]);
    }

    #[test]
    fn empty_input_yields_no_sets() {
        let sets = group_by_template(Vec::<String>::new());
        assert!(sets.is_empty());
    }
}
