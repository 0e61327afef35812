use std::{collections::HashMap, hash::Hash};

/// Frequency table that remembers the order in which keys were first seen.
pub struct Counter<K> {
    idx_map: HashMap<K, usize>,
    cnt_vec: Vec<(K, usize)>,
}

impl<K: Hash + Eq + Clone> Counter<K> {
    pub fn new() -> Self {
        Self {
            idx_map: HashMap::new(),
            cnt_vec: Vec::new(),
        }
    }

    /// Count `key`. The first-seen form of equal keys is the one kept.
    pub fn add(&mut self, key: K) {
        match self.idx_map.get(&key) {
            Some(&idx) => self.cnt_vec[idx].1 += 1,
            None => {
                self.idx_map.insert(key.clone(), self.cnt_vec.len());
                self.cnt_vec.push((key, 1));
            }
        }
    }

    pub fn max_count(&self) -> usize {
        self.cnt_vec.iter().map(|&(_, cnt)| cnt).max().unwrap_or(0)
    }

    /// Iterate over `(key, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.cnt_vec.iter().map(|(key, cnt)| (key, *cnt))
    }
}

impl<K: Hash + Eq + Clone> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
