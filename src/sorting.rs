use crate::timer::Clock;
use crate::Record;

/// How a deadline-bounded sort ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// The slice is fully sorted
    Completed { elapsed_ms: u64 },
    /// The deadline passed at a swap point; the slice is only partially sorted
    TimedOut { elapsed_ms: u64 },
}

impl SortOutcome {
    pub fn elapsed_ms(&self) -> u64 {
        match *self {
            SortOutcome::Completed { elapsed_ms } | SortOutcome::TimedOut { elapsed_ms } => {
                elapsed_ms
            }
        }
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, SortOutcome::TimedOut { .. })
    }
}

/// Quicksort by name, Lomuto partition with the last element as pivot.
///
/// Not stable. Worst case O(n²) on already ordered input; recursion only
/// descends into the smaller partition so stack depth stays logarithmic.
pub fn quick_sort(records: &mut [Record]) {
    let mut slice = records;
    while slice.len() > 1 {
        let pivot_idx = partition(slice);
        let (left, right) = std::mem::take(&mut slice).split_at_mut(pivot_idx);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

#[inline]
fn partition(records: &mut [Record]) -> usize {
    let high = records.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if records[j].name < records[high].name {
            records.swap(store, j);
            store += 1;
        }
    }
    records.swap(store, high);
    store
}

/// Bubble sort by name that gives up once `stop_time_ms` has passed.
///
/// The clock is only consulted when an out-of-order pair is found, right
/// before it is swapped. Passes that swap nothing never read the clock.
pub fn bubble_sort<C: Clock + ?Sized>(
    records: &mut [Record],
    clock: &C,
    stop_time_ms: u64,
) -> SortOutcome {
    let start = clock.now_ms();
    let mut sorted = false;

    while !sorted {
        sorted = true;
        for i in 1..records.len() {
            if records[i - 1].name > records[i].name {
                let elapsed_ms = clock.now_ms().saturating_sub(start);
                if elapsed_ms > stop_time_ms {
                    return SortOutcome::TimedOut { elapsed_ms };
                }
                records.swap(i - 1, i);
                sorted = false;
            }
        }
    }

    SortOutcome::Completed {
        elapsed_ms: clock.now_ms().saturating_sub(start),
    }
}
