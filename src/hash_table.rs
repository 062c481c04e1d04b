//! Chained hash table keyed by record name
//!
//! The bucket count is fixed at build time from [`MAX_LOAD_FACTOR`]; buckets
//! grow without bound and the table never rehashes.

use crate::search::SearchResult;
use crate::{Record, MAX_LOAD_FACTOR};

/// Multiplier of the polynomial rolling hash
pub const HASH_MULTIPLIER: u64 = 115_249;

/// Bucket of `name` in a table with `bucket_count` buckets.
///
/// Rolling hash seeded with 1: `h = (c + h * 115249) mod bucket_count` for
/// each char, left to right. An empty name lands in bucket 0.
pub fn bucket_index(name: &str, bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    let modulus = bucket_count as u128;
    let mut prev: u128 = 1;
    let mut hash: u128 = 0;
    for c in name.chars() {
        hash = (c as u128 + prev * HASH_MULTIPLIER as u128) % modulus;
        prev = hash;
    }
    hash as usize
}

/// Number of buckets for `len` records, at least one
pub fn bucket_count_for(len: usize) -> usize {
    ((len as f64 * MAX_LOAD_FACTOR) as usize).max(1)
}

#[derive(Debug, Clone)]
pub struct HashTable {
    buckets: Vec<Vec<Record>>,
    bucket_count: usize,
}

impl HashTable {
    /// Build a table sized for `records`, appending each to its bucket
    pub fn build(records: Vec<Record>) -> Self {
        let bucket_count = bucket_count_for(records.len());
        let mut buckets: Vec<Vec<Record>> = vec![Vec::new(); bucket_count];
        for record in records {
            let idx = bucket_index(&record.name, bucket_count);
            buckets[idx].push(record);
        }
        Self {
            buckets,
            bucket_count,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn buckets(&self) -> &[Vec<Record>] {
        &self.buckets
    }

    /// Total records stored
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// First record named `name`, scanning only its bucket
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.buckets[bucket_index(name, self.bucket_count)]
            .iter()
            .find(|r| r.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Count the queries present in the table
    pub fn search(&self, queries: &[String]) -> SearchResult {
        let mut result = SearchResult::default();
        for query in queries {
            result.record(query, self.contains(query));
        }
        result
    }
}
