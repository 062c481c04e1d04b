//! Phone Book Search Benchmark
//!
//! Compares four ways of answering "is this name in the phone book" for a
//! batch of queries: an unsorted linear scan, bubble sort + jump search,
//! quicksort + binary search, and a chained hash table.

pub mod data;
pub mod error;
pub mod hash_table;
pub mod loader;
pub mod orchestrator;
pub mod report;
pub mod search;
pub mod sorting;
pub mod timer;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};
pub use hash_table::HashTable;
pub use orchestrator::{Benchmark, BenchmarkConfig};
pub use report::{BenchmarkReport, Phase, Strategy, StrategyReport};
pub use search::{BinarySearch, JumpSearch, LinearSearch, SearchResult};
pub use sorting::{bubble_sort, quick_sort, SortOutcome};
pub use timer::{Clock, ManualClock, SystemClock, Timed};

/// Target ratio of records to buckets when building a [`HashTable`]
pub const MAX_LOAD_FACTOR: f64 = 0.7;

/// A single phone book entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: u64,
}

impl Record {
    pub fn new(name: impl Into<String>, phone: u64) -> Self {
        Self {
            name: name.into(),
            phone,
        }
    }
}

/// Trait for lookups over a slice of records
pub trait Searcher {
    /// Name of this search method
    fn name(&self) -> &'static str;

    /// Whether `query` occurs in `records`
    fn contains(&self, records: &[Record], query: &str) -> bool;

    /// Count the queries that occur in `records`.
    ///
    /// Each query is counted at most once, no matter how many records carry
    /// the name. Duplicate queries are counted independently.
    fn search(&self, records: &[Record], queries: &[String]) -> SearchResult {
        let mut result = SearchResult::default();
        for query in queries {
            result.record(query, self.contains(records, query));
        }
        result
    }
}

/// Check that records are in non-decreasing name order
pub fn is_sorted_by_name(records: &[Record]) -> bool {
    records.windows(2).all(|w| w[0].name <= w[1].name)
}
