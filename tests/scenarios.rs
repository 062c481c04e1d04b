//! End-to-end runs of the benchmark over small, fully known phone books

use phonebook_search::data::{generate, DataSpec};
use phonebook_search::hash_table::HashTable;
use phonebook_search::orchestrator::SortBranch;
use phonebook_search::{
    is_sorted_by_name, quick_sort, Benchmark, BenchmarkConfig, BinarySearch, JumpSearch,
    LinearSearch, ManualClock, Record, Searcher, Strategy,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_three_record_scenario() {
    let records = vec![Record::new("Bob", 1), Record::new("Amy", 2), Record::new("Cid", 3)];
    let queries = names(&["Amy", "Zed"]);

    let linear = LinearSearch.search(&records, &queries);
    assert_eq!(linear.found, 1);
    assert_eq!(linear.missing, names(&["Zed"]));

    let mut sorted = records.clone();
    quick_sort(&mut sorted);
    let order: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, vec!["Amy", "Bob", "Cid"]);

    // "Amy" is the unexamined final candidate, so binary search misses it
    assert_eq!(BinarySearch.search(&sorted, &queries).found, 0);
    assert_eq!(JumpSearch.search(&sorted, &queries).found, 1);

    let table = HashTable::build(records);
    assert_eq!(table.bucket_count(), 2);
    assert_eq!(table.search(&names(&["Amy"])).found, 1);
    assert_eq!(table.search(&names(&["Zed"])).found, 0);
}

#[test]
fn test_empty_phone_book() {
    let bench = Benchmark::with_clock(ManualClock::with_step(1), BenchmarkConfig::default());
    let report = bench.run(&[], &names(&["Amy", "Bob", "Amy"]));
    assert_eq!(report.strategies.len(), 4);
    for entry in &report.strategies {
        assert_eq!(entry.found, 0, "{:?}", entry.strategy);
        assert_eq!(entry.total_queries, 3);
    }
}

#[test]
fn test_descending_book_with_zero_deadline_reports_baseline() {
    let records: Vec<Record> = (0..50)
        .rev()
        .map(|i| Record::new(format!("person{i:03}"), i))
        .collect();
    let queries = names(&["person007", "person049", "nobody", "person007"]);

    let clock = ManualClock::with_step(1);
    let bench = Benchmark::with_clock(&clock, BenchmarkConfig { deadline_factor: 0 });
    let report = bench.run(&records, &queries);

    let linear = report.get(Strategy::Linear).expect("linear");
    let bubble = report.get(Strategy::BubbleJump).expect("bubble");
    assert_eq!(linear.found, 3);
    assert!(bubble.fallback);
    assert_eq!(bubble.found, linear.found);
    assert_eq!(bubble.query_ms, linear.query_ms);
    assert!(bubble.to_string().contains("STOPPED, moved to linear search"));

    // the other two branches are never gated by the deadline
    assert!(!report.get(Strategy::QuickBinary).expect("quick").fallback);
    assert_eq!(report.get(Strategy::Hash).expect("hash").found, 3);
}

#[test]
fn test_sort_attempt_succeeds_under_frozen_clock() {
    let (records, queries) = generate(&DataSpec {
        records: 300,
        queries: 100,
        ..Default::default()
    });
    let bench = Benchmark::with_clock(ManualClock::new(), BenchmarkConfig::default());
    let baseline = bench.linear_baseline(&records, &queries);
    match bench.sort_attempt(&records, &queries, baseline.elapsed_ms) {
        SortBranch::Succeeded { search, .. } => assert_eq!(search.value.found, baseline.value.found),
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn test_generated_book_strategies_agree() {
    let (records, queries) = generate(&DataSpec {
        records: 2_000,
        queries: 300,
        ..Default::default()
    });
    let bench = Benchmark::with_clock(ManualClock::new(), BenchmarkConfig::default());
    let report = bench.run(&records, &queries);

    let linear = report.get(Strategy::Linear).expect("linear").found;
    assert_eq!(report.get(Strategy::BubbleJump).expect("bubble").found, linear);
    assert_eq!(report.get(Strategy::Hash).expect("hash").found, linear);
    assert!(report.get(Strategy::QuickBinary).expect("quick").found <= linear);

    let mut sorted = records.clone();
    quick_sort(&mut sorted);
    assert!(is_sorted_by_name(&sorted));
}

#[test]
fn test_json_report() {
    let bench = Benchmark::with_clock(ManualClock::new(), BenchmarkConfig::default());
    let report = bench.run(&[Record::new("Amy", 1)], &names(&["Amy"]));
    let value = serde_json::to_value(&report).expect("serialize");
    let strategies = value["strategies"].as_array().expect("array");
    assert_eq!(strategies.len(), 4);
    assert_eq!(strategies[0]["strategy"], "linear");
    assert!(strategies[0]["preparation_ms"].is_null());
    assert_eq!(strategies[3]["strategy"], "hash");
}
