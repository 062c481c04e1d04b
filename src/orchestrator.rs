//! Runs the four strategies in order and collects their reports.
//!
//! The bubble sort branch is adaptive: the linear baseline's query time,
//! multiplied by [`BenchmarkConfig::deadline_factor`], becomes the sort
//! deadline. If bubble sort overruns it the partially sorted copy is dropped
//! and the baseline result is reported in place of a jump search.
//!
//! Every strategy works on its own copy of the records, so results do not
//! depend on what an earlier strategy did to the order.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::hash_table::HashTable;
use crate::report::{BenchmarkReport, Strategy, StrategyReport};
use crate::search::{BinarySearch, JumpSearch, LinearSearch, SearchResult};
use crate::sorting::{bubble_sort, quick_sort, SortOutcome};
use crate::timer::{time, Clock, SystemClock, Timed};
use crate::{Record, Searcher};

pub const DEFAULT_DEADLINE_FACTOR: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Bubble sort deadline as a multiple of the linear search time
    pub deadline_factor: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            deadline_factor: DEFAULT_DEADLINE_FACTOR,
        }
    }
}

/// Where the bubble sort branch ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortBranch {
    /// Sort finished in time and jump search ran on the sorted copy
    Succeeded {
        sort_ms: u64,
        search: Timed<SearchResult>,
    },
    /// Sort hit the deadline after `sort_ms`; the baseline stands in
    TimedOut { sort_ms: u64 },
}

impl SortBranch {
    /// Turn a sort branch into its report, substituting the baseline on timeout
    pub fn report(&self, baseline: &Timed<SearchResult>, total_queries: usize) -> StrategyReport {
        match self {
            SortBranch::Succeeded { sort_ms, search } => StrategyReport {
                strategy: Strategy::BubbleJump,
                found: search.value.found,
                total_queries,
                preparation_ms: Some(*sort_ms),
                query_ms: search.elapsed_ms,
                fallback: false,
                missing: Vec::new(),
            },
            SortBranch::TimedOut { sort_ms } => StrategyReport {
                strategy: Strategy::BubbleJump,
                found: baseline.value.found,
                total_queries,
                preparation_ms: Some(*sort_ms),
                query_ms: baseline.elapsed_ms,
                fallback: true,
                missing: Vec::new(),
            },
        }
    }
}

pub struct Benchmark<C: Clock = SystemClock> {
    clock: C,
    config: BenchmarkConfig,
}

impl Benchmark<SystemClock> {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_clock(SystemClock::new(), config)
    }
}

impl Default for Benchmark<SystemClock> {
    fn default() -> Self {
        Self::new(BenchmarkConfig::default())
    }
}

impl<C: Clock> Benchmark<C> {
    pub fn with_clock(clock: C, config: BenchmarkConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Run every strategy in order: linear, bubble + jump, quick + binary, hash
    pub fn run(&self, records: &[Record], queries: &[String]) -> BenchmarkReport {
        info!(
            records = records.len(),
            queries = queries.len(),
            "starting benchmark"
        );

        let baseline = self.linear_baseline(records, queries);
        let linear = StrategyReport {
            strategy: Strategy::Linear,
            found: baseline.value.found,
            total_queries: queries.len(),
            preparation_ms: None,
            query_ms: baseline.elapsed_ms,
            fallback: false,
            missing: baseline.value.missing.clone(),
        };

        let branch = self.sort_attempt(records, queries, baseline.elapsed_ms);
        let bubble_jump = branch.report(&baseline, queries.len());

        let strategies = vec![
            linear,
            bubble_jump,
            self.quick_binary(records, queries),
            self.hash(records, queries),
        ];
        BenchmarkReport { strategies }
    }

    /// Unsorted scan whose result and time anchor the bubble sort branch
    pub fn linear_baseline(&self, records: &[Record], queries: &[String]) -> Timed<SearchResult> {
        let baseline = time(&self.clock, || LinearSearch.search(records, queries));
        debug!(
            found = baseline.value.found,
            elapsed_ms = baseline.elapsed_ms,
            "linear baseline done"
        );
        for name in &baseline.value.missing {
            debug!(name = name.as_str(), "query not in phone book");
        }
        baseline
    }

    /// Bubble sort a fresh copy under the deadline derived from the
    /// baseline, then jump search it if the sort finished.
    pub fn sort_attempt(
        &self,
        records: &[Record],
        queries: &[String],
        baseline_ms: u64,
    ) -> SortBranch {
        let stop_time_ms = baseline_ms.saturating_mul(self.config.deadline_factor);
        debug!(stop_time_ms, "attempting bubble sort");

        let mut working = records.to_vec();
        match bubble_sort(&mut working, &self.clock, stop_time_ms) {
            SortOutcome::Completed { elapsed_ms } => {
                let search = time(&self.clock, || JumpSearch.search(&working, queries));
                info!(
                    sort_ms = elapsed_ms,
                    search_ms = search.elapsed_ms,
                    "bubble sort finished"
                );
                SortBranch::Succeeded {
                    sort_ms: elapsed_ms,
                    search,
                }
            }
            SortOutcome::TimedOut { elapsed_ms } => {
                warn!(
                    elapsed_ms,
                    stop_time_ms, "bubble sort exceeded deadline, falling back to linear result"
                );
                SortBranch::TimedOut {
                    sort_ms: elapsed_ms,
                }
            }
        }
    }

    pub fn quick_binary(&self, records: &[Record], queries: &[String]) -> StrategyReport {
        let mut working = records.to_vec();
        let sort = time(&self.clock, || quick_sort(&mut working));
        let search = time(&self.clock, || BinarySearch.search(&working, queries));
        info!(
            sort_ms = sort.elapsed_ms,
            search_ms = search.elapsed_ms,
            found = search.value.found,
            "quick sort + binary search done"
        );

        StrategyReport {
            strategy: Strategy::QuickBinary,
            found: search.value.found,
            total_queries: queries.len(),
            preparation_ms: Some(sort.elapsed_ms),
            query_ms: search.elapsed_ms,
            fallback: false,
            missing: Vec::new(),
        }
    }

    pub fn hash(&self, records: &[Record], queries: &[String]) -> StrategyReport {
        let working = records.to_vec();
        let table = time(&self.clock, || HashTable::build(working));
        let search = time(&self.clock, || table.value.search(queries));
        info!(
            buckets = table.value.bucket_count(),
            build_ms = table.elapsed_ms,
            search_ms = search.elapsed_ms,
            found = search.value.found,
            "hash table done"
        );

        StrategyReport {
            strategy: Strategy::Hash,
            found: search.value.found,
            total_queries: queries.len(),
            preparation_ms: Some(table.elapsed_ms),
            query_ms: search.elapsed_ms,
            fallback: false,
            missing: Vec::new(),
        }
    }
}
