//! Separate-chaining hash table with load-factor-triggered growth.

use log::debug;

use crate::error::{ChainspellError, Result};
use crate::hash::function::HashKind;

/// Growth trigger: an insert that would push `len / capacity` to this
/// value or beyond doubles the table first.
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// One entry in a collision chain.
#[derive(Debug)]
struct Link {
    key: String,
    value: i32,
    next: Option<Box<Link>>,
}

impl Link {
    fn new(key: &str, value: i32, next: Option<Box<Link>>) -> Box<Self> {
        Box::new(Link {
            key: key.to_string(),
            value,
            next,
        })
    }
}

/// A string-keyed hash table (`&str` → `i32`) using separate chaining.
///
/// Buckets hold singly linked chains of owned entries; new entries go in
/// at the chain head, so chain order is most-recent-first. Keys are
/// unique across the whole table. Lookup and removal walk one chain, so
/// their cost tracks chain length; keeping the load factor under
/// [`MAX_LOAD_FACTOR`] keeps chains short.
#[derive(Debug)]
pub struct ChainMap {
    buckets: Vec<Option<Box<Link>>>,
    len: usize,
    kind: HashKind,
}

impl ChainMap {
    /// Create a table with the given number of buckets and the default
    /// hash function.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hash(capacity, HashKind::default())
    }

    /// Create a table with the given number of buckets and hash function.
    ///
    /// Fails with a [`ChainspellError::Table`] error if `capacity` is zero.
    pub fn with_hash(capacity: usize, kind: HashKind) -> Result<Self> {
        if capacity == 0 {
            return Err(ChainspellError::table(
                "capacity must be greater than zero",
            ));
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Ok(ChainMap {
            buckets,
            len: 0,
            kind,
        })
    }

    /// The hash function this table was built with.
    pub fn hash_kind(&self) -> HashKind {
        self.kind
    }

    fn bucket_of(&self, key: &str) -> usize {
        self.kind.bucket_index(key, self.buckets.len())
    }

    /// Insert or overwrite a key-value pair.
    ///
    /// An existing key has its value overwritten in place, without
    /// allocation. A new key may first trigger growth: the bucket index
    /// is computed only after the growth check, since growing changes
    /// the key's target bucket.
    pub fn put(&mut self, key: &str, value: i32) {
        if let Some(slot) = self.get_mut(key) {
            *slot = value;
            return;
        }

        if (self.len + 1) as f64 / self.buckets.len() as f64 >= MAX_LOAD_FACTOR {
            self.grow();
        }

        let idx = self.bucket_of(key);
        let next = self.buckets[idx].take();
        self.buckets[idx] = Some(Link::new(key, value, next));
        self.len += 1;
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&i32> {
        let idx = self.bucket_of(key);
        let mut cur = self.buckets[idx].as_deref();
        while let Some(link) = cur {
            if link.key == key {
                return Some(&link.value);
            }
            cur = link.next.as_deref();
        }
        None
    }

    /// Look up a mutable handle to the value for a key.
    ///
    /// Callers can mutate the value in place through the returned
    /// reference; an absent key yields `None`, never an error.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let idx = self.bucket_of(key);
        let mut cur = self.buckets[idx].as_deref_mut();
        while let Some(link) = cur {
            if link.key == key {
                return Some(&mut link.value);
            }
            cur = link.next.as_deref_mut();
        }
        None
    }

    /// Remove a key, returning its value if it was present.
    ///
    /// Unlinking rewrites exactly one predecessor link: the bucket head
    /// when the entry is first in its chain, the prior node's `next`
    /// otherwise. A missing key is a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let idx = self.bucket_of(key);
        let chain = self.buckets[idx].take();
        let (chain, removed) = Self::unlink(chain, key);
        self.buckets[idx] = chain;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Unlink the first node matching `key` from a chain, returning the
    /// rebuilt chain and the removed value.
    fn unlink(chain: Option<Box<Link>>, key: &str) -> (Option<Box<Link>>, Option<i32>) {
        match chain {
            None => (None, None),
            Some(mut link) if link.key == key => {
                let next = link.next.take();
                (next, Some(link.value))
            }
            Some(mut link) => {
                let (rest, removed) = Self::unlink(link.next.take(), key);
                link.next = rest;
                (Some(link), removed)
            }
        }
    }

    /// Whether the table contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries across all chains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket, as real division.
    ///
    /// Chains make this say nothing about how many buckets are empty;
    /// see [`ChainMap::empty_buckets`] for that.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Number of buckets with no entries.
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_none()).count()
    }

    /// Rehash the table into `new_capacity` buckets.
    ///
    /// Every entry is relocated to its bucket under the new capacity.
    /// The fresh bucket array is fully populated before it becomes the
    /// table's storage, so no entry is lost or duplicated. Chain order
    /// within the new buckets is not specified. Fails if `new_capacity`
    /// is zero.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity == 0 {
            return Err(ChainspellError::table(
                "resize capacity must be greater than zero",
            ));
        }
        self.rehash_into(new_capacity);
        Ok(())
    }

    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        debug!(
            "growing table: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_capacity,
            self.len
        );
        self.rehash_into(new_capacity);
    }

    fn rehash_into(&mut self, new_capacity: usize) {
        let mut next = Vec::with_capacity(new_capacity);
        next.resize_with(new_capacity, || None);
        let old = std::mem::replace(&mut self.buckets, next);

        for mut head in old {
            while let Some(mut link) = head {
                head = link.next.take();
                let idx = self.bucket_of(&link.key);
                link.next = self.buckets[idx].take();
                self.buckets[idx] = Some(link);
            }
        }
    }

    /// Iterate over `(key, value)` pairs in table order: bucket index
    /// ascending, then chain head-to-tail.
    ///
    /// The order depends on the hash function and the insertion history;
    /// callers must not assume it is sorted.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: &self.buckets,
            bucket_idx: 0,
            current: None,
        }
    }
}

/// Borrowing iterator over a [`ChainMap`], bucket by bucket.
pub struct Iter<'a> {
    buckets: &'a [Option<Box<Link>>],
    bucket_idx: usize,
    current: Option<&'a Link>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(link) = self.current.take() {
                self.current = link.next.as_deref();
                return Some((link.key.as_str(), link.value));
            }

            if self.bucket_idx >= self.buckets.len() {
                return None;
            }

            self.current = self.buckets[self.bucket_idx].as_deref();
            self.bucket_idx += 1;
        }
    }
}

impl<'a> IntoIterator for &'a ChainMap {
    type Item = (&'a str, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(map: &ChainMap) -> Vec<(String, i32)> {
        let mut out: Vec<(String, i32)> = map.iter().map(|(k, v)| (k.to_string(), v)).collect();
        out.sort();
        out
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(ChainMap::new(0).is_err());
        assert!(ChainMap::with_hash(0, HashKind::CharSum).is_err());
    }

    #[test]
    fn test_put_and_get() {
        let mut map = ChainMap::new(8).unwrap();
        map.put("cat", 1);
        map.put("dog", 2);

        assert_eq!(map.get("cat"), Some(&1));
        assert_eq!(map.get("dog"), Some(&2));
        assert_eq!(map.get("bird"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_put_overwrites_existing_key() {
        let mut map = ChainMap::new(8).unwrap();
        map.put("cat", 1);
        map.put("cat", 42);

        assert_eq!(map.get("cat"), Some(&42));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_len_counts_distinct_keys() {
        let mut map = ChainMap::new(4).unwrap();
        let words = ["a", "b", "c", "d", "e", "a", "b", "f"];
        for (i, w) in words.iter().enumerate() {
            map.put(w, i as i32);
        }
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut map = ChainMap::new(8).unwrap();
        map.put("cat", -1);

        *map.get_mut("cat").unwrap() = 3;
        assert_eq!(map.get("cat"), Some(&3));
        assert_eq!(map.get_mut("missing"), None);
    }

    #[test]
    fn test_remove_head_of_chain() {
        // "ab" and "ba" share a char-sum bucket; the most recent insert
        // is the chain head
        let mut map = ChainMap::with_hash(16, HashKind::CharSum).unwrap();
        map.put("ab", 1);
        map.put("ba", 2);

        assert_eq!(map.remove("ba"), Some(2));
        assert!(!map.contains_key("ba"));
        assert_eq!(map.get("ab"), Some(&1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_mid_chain() {
        let mut map = ChainMap::with_hash(16, HashKind::CharSum).unwrap();
        // "ab" and "ba" collide under the char-sum hash
        map.put("ab", 1);
        map.put("ba", 2);

        assert_eq!(map.remove("ab"), Some(1));
        assert_eq!(map.get("ba"), Some(&2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut map = ChainMap::new(4).unwrap();
        map.put("cat", 1);

        assert_eq!(map.remove("dog"), None);
        assert_eq!(map.len(), 1);

        // empty chain: must not misbehave on a bucket with no head
        assert_eq!(map.remove("bird"), None);
    }

    #[test]
    fn test_contains_key() {
        let mut map = ChainMap::new(4).unwrap();
        map.put("cat", 1);

        assert!(map.contains_key("cat"));
        assert!(!map.contains_key("cot"));
    }

    #[test]
    fn test_load_factor_bounded_after_every_put() {
        let mut map = ChainMap::new(2).unwrap();
        for i in 0..200 {
            map.put(&format!("word{i}"), i);
            assert!(
                map.load_factor() < MAX_LOAD_FACTOR,
                "load factor {} at {} entries / {} buckets",
                map.load_factor(),
                map.len(),
                map.capacity()
            );
        }
        assert_eq!(map.len(), 200);
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut map = ChainMap::new(8).unwrap();
        for i in 0..5 {
            map.put(&format!("w{i}"), i);
        }
        let before = pairs(&map);
        let capacity_before = map.capacity();
        assert_eq!(capacity_before, 8);

        // a sixth entry would land at 6/8 = 0.75 load, over the threshold
        map.put("trigger", 99);

        assert!(map.capacity() > capacity_before);
        let mut expected = before;
        expected.push(("trigger".to_string(), 99));
        expected.sort();
        assert_eq!(pairs(&map), expected);
    }

    #[test]
    fn test_explicit_resize_preserves_entries() {
        let mut map = ChainMap::new(64).unwrap();
        for i in 0..32 {
            map.put(&format!("word{i}"), i * 10);
        }
        let before = pairs(&map);

        map.resize(128).unwrap();
        assert_eq!(map.capacity(), 128);
        assert_eq!(map.len(), 32);
        assert_eq!(pairs(&map), before);

        // shrinking rehashes too
        map.resize(8).unwrap();
        assert_eq!(map.capacity(), 8);
        assert_eq!(pairs(&map), before);
    }

    #[test]
    fn test_resize_zero_rejected() {
        let mut map = ChainMap::new(4).unwrap();
        map.put("cat", 1);
        assert!(map.resize(0).is_err());
        // the failed resize leaves the table untouched
        assert_eq!(map.capacity(), 4);
        assert_eq!(map.get("cat"), Some(&1));
    }

    #[test]
    fn test_three_inserts_into_capacity_four() {
        let mut map = ChainMap::new(4).unwrap();
        map.put("cat", -1);
        map.put("dog", -1);
        map.put("bird", -1);

        assert_eq!(map.len(), 3);
        // the third insert would land at 3/4 = 0.75 load, so the table
        // doubles before it goes in
        assert_eq!(map.capacity(), 8);
        assert!(map.load_factor() < MAX_LOAD_FACTOR);
    }

    #[test]
    fn test_empty_buckets() {
        let mut map = ChainMap::new(8).unwrap();
        assert_eq!(map.empty_buckets(), 8);

        map.put("cat", 1);
        assert_eq!(map.empty_buckets(), 7);

        map.remove("cat");
        assert_eq!(map.empty_buckets(), 8);
    }

    #[test]
    fn test_load_factor_is_real_division() {
        let mut map = ChainMap::new(8).unwrap();
        map.put("cat", 1);
        map.put("dog", 2);
        assert!((map.load_factor() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_iter_visits_every_entry_once() {
        let mut map = ChainMap::new(4).unwrap();
        for i in 0..50 {
            map.put(&format!("key{i}"), i);
        }

        let seen = pairs(&map);
        assert_eq!(seen.len(), 50);
        for i in 0..50 {
            assert!(seen.contains(&(format!("key{i}"), i)));
        }
    }

    #[test]
    fn test_iter_empty_table() {
        let map = ChainMap::new(4).unwrap();
        assert_eq!(map.iter().next(), None);
    }

    #[test]
    fn test_chain_order_is_head_first() {
        // "ac", "bb", and "ca" all have char sum 196, so they share one
        // chain and no growth fires at three entries in 16 buckets
        let mut map = ChainMap::with_hash(16, HashKind::CharSum).unwrap();
        map.put("ac", 1);
        map.put("bb", 2);
        map.put("ca", 3);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["ca", "bb", "ac"]);
    }

    #[test]
    fn test_hash_kinds_both_work() {
        for kind in [HashKind::CharSum, HashKind::PositionWeighted] {
            let mut map = ChainMap::with_hash(4, kind).unwrap();
            for i in 0..100 {
                map.put(&format!("entry{i}"), i);
            }
            for i in 0..100 {
                assert_eq!(map.get(&format!("entry{i}")), Some(&i));
            }
            assert_eq!(map.len(), 100);
        }
    }
}
