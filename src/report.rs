//! Per-strategy results handed to the console or JSON printer

use std::fmt;

use serde::Serialize;

/// The four benchmarked lookup strategies, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Linear,
    BubbleJump,
    QuickBinary,
    Hash,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::BubbleJump,
        Strategy::QuickBinary,
        Strategy::Hash,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Linear => "linear search",
            Strategy::BubbleJump => "bubble sort + jump search",
            Strategy::QuickBinary => "quick sort + binary search",
            Strategy::Hash => "hash table",
        }
    }

    /// How the preparation phase is named in console output
    fn preparation_label(&self) -> &'static str {
        match self {
            Strategy::Hash => "Creating time",
            _ => "Sorting time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Sorting or hash table construction
    Preparation,
    Query,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub found: usize,
    pub total_queries: usize,
    /// Absent for the linear scan, which needs no preparation
    pub preparation_ms: Option<u64>,
    pub query_ms: u64,
    /// Sorting overran its deadline and the linear result was reported instead
    pub fallback: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}

impl StrategyReport {
    pub fn total_ms(&self) -> u64 {
        self.preparation_ms.unwrap_or(0) + self.query_ms
    }

    /// Phase durations in run order
    pub fn phases(&self) -> Vec<(Phase, u64)> {
        let mut phases = Vec::with_capacity(2);
        if let Some(ms) = self.preparation_ms {
            phases.push((Phase::Preparation, ms));
        }
        phases.push((Phase::Query, self.query_ms));
        phases
    }
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Start searching ({})...", self.strategy.label())?;
        write!(
            f,
            "Found {} / {} entries. Time taken: {}",
            self.found,
            self.total_queries,
            format_duration(self.total_ms())
        )?;
        if let Some(ms) = self.preparation_ms {
            write!(
                f,
                "\n{}: {}",
                self.strategy.preparation_label(),
                format_duration(ms)
            )?;
            if self.fallback {
                write!(f, " - STOPPED, moved to linear search")?;
            }
            write!(f, "\nSearching time: {}", format_duration(self.query_ms))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenchmarkReport {
    pub strategies: Vec<StrategyReport>,
}

impl BenchmarkReport {
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.strategies.iter().find(|r| r.strategy == strategy)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.strategies.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}

/// Render milliseconds as `"M min. S sec. MS ms."`
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 1000 / 60;
    let seconds = ms / 1000 % 60;
    let millis = ms % 1000;
    format!("{minutes} min. {seconds} sec. {millis} ms.")
}
