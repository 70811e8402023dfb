//! Scenario replay runner
//!
//! This module provides the `replay` subcommand: it loads an operation
//! scenario from YAML, runs it on each wrapper/backing combination, and fails
//! if any two combinations disagree.

use anyhow::{Context, Result, bail};
use bideque::DequeError;
use bideque::backing::{BackingKind, CircularBufferDeque, LinkedNodeDeque};
use bideque::composed::ComposedDeque;
use bideque::dispatch::DynDeque;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the replay subcommand
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Scenario YAML file path (required)
    #[arg(long, short = 's')]
    pub scenario: PathBuf,

    /// Only run combinations on this backing (circular|linked)
    #[arg(long)]
    pub backing: Option<BackingKind>,

    /// Print a JSON report to stdout instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Scenario configuration from YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    /// Initial slot count for circular-buffer runs; linked runs ignore it.
    #[serde(default)]
    pub initial_capacity: Option<usize>,
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub operations: Vec<Operation>,
}

/// One deque call, written in YAML as `pop_front` or `push_back: 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    PushFront(i64),
    PushBack(i64),
    PopFront,
    PopBack,
    Front,
    Back,
    IsEmpty,
    Len,
    Clear,
}

/// What a single operation reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Done,
    Element(i64),
    Empty,
    Flag(bool),
    Size(usize),
}

impl From<Result<i64, DequeError>> for Outcome {
    fn from(result: Result<i64, DequeError>) -> Self {
        match result {
            Ok(element) => Self::Element(element),
            Err(DequeError::EmptyContainer) => Self::Empty,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => write!(f, "ok"),
            Self::Element(element) => write!(f, "{element}"),
            Self::Empty => write!(f, "<empty>"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::Size(size) => write!(f, "{size}"),
        }
    }
}

/// How the deque is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Dynamic,
    Composed,
}

/// A wrapper strategy paired with a backing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Combination {
    pub strategy: Strategy,
    pub backing: BackingKind,
}

impl Combination {
    /// Every combination, optionally restricted to one backing.
    pub fn all(backing: Option<BackingKind>) -> Vec<Self> {
        [Strategy::Dynamic, Strategy::Composed]
            .into_iter()
            .flat_map(|strategy| {
                BackingKind::ALL
                    .into_iter()
                    .map(move |kind| Self {
                        strategy,
                        backing: kind,
                    })
            })
            .filter(|combination| backing.is_none_or(|kind| kind == combination.backing))
            .collect()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            Strategy::Dynamic => "dynamic",
            Strategy::Composed => "composed",
        };
        write!(f, "{strategy}+{}", self.backing)
    }
}

/// Result of one combination's run
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub combination: Combination,
    pub outcomes: Vec<Outcome>,
    pub final_len: usize,
}

/// JSON report for a whole scenario
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    scenario: &'a str,
    consistent: bool,
    runs: &'a [RunReport],
}

// =============================================================================
// Execution
// =============================================================================

macro_rules! apply_operation {
    ($deque:expr, $operation:expr) => {
        match $operation {
            Operation::PushFront(value) => {
                $deque.push_front(value);
                Outcome::Done
            }
            Operation::PushBack(value) => {
                $deque.push_back(value);
                Outcome::Done
            }
            Operation::PopFront => Outcome::from($deque.pop_front()),
            Operation::PopBack => Outcome::from($deque.pop_back()),
            Operation::Front => Outcome::from($deque.front().copied()),
            Operation::Back => Outcome::from($deque.back().copied()),
            Operation::IsEmpty => Outcome::Flag($deque.is_empty()),
            Operation::Len => Outcome::Size($deque.len()),
            Operation::Clear => {
                $deque.clear();
                Outcome::Done
            }
        }
    };
}

fn circular_backing(initial_capacity: Option<usize>) -> CircularBufferDeque<i64> {
    initial_capacity.map_or_else(CircularBufferDeque::new, CircularBufferDeque::with_capacity)
}

/// Runs `operations` on a fresh deque of the given combination.
pub fn execute(
    combination: Combination,
    initial_capacity: Option<usize>,
    operations: &[Operation],
) -> RunReport {
    let mut outcomes = Vec::with_capacity(operations.len());
    let final_len = match combination.strategy {
        Strategy::Dynamic => {
            let mut deque: DynDeque<i64> = match combination.backing {
                BackingKind::Circular => {
                    DynDeque::from_backing(Box::new(circular_backing(initial_capacity)))
                }
                BackingKind::Linked => DynDeque::linked(),
            };
            outcomes.extend(operations.iter().map(|&operation| apply_operation!(deque, operation)));
            deque.len()
        }
        Strategy::Composed => match combination.backing {
            BackingKind::Circular => {
                let mut deque: ComposedDeque<i64, _> =
                    ComposedDeque::from_backing(circular_backing(initial_capacity));
                outcomes
                    .extend(operations.iter().map(|&operation| apply_operation!(deque, operation)));
                deque.len()
            }
            BackingKind::Linked => {
                let mut deque: ComposedDeque<i64, LinkedNodeDeque<i64>> =
                    ComposedDeque::from_backing(LinkedNodeDeque::new());
                outcomes
                    .extend(operations.iter().map(|&operation| apply_operation!(deque, operation)));
                deque.len()
            }
        },
    };
    tracing::debug!(%combination, operations = operations.len(), final_len, "replayed scenario");
    RunReport {
        combination,
        outcomes,
        final_len,
    }
}

/// Index of the first operation where `other` disagrees with `baseline`.
pub fn first_divergence(baseline: &RunReport, other: &RunReport) -> Option<usize> {
    baseline
        .outcomes
        .iter()
        .zip(&other.outcomes)
        .position(|(expected, actual)| expected != actual)
        .or_else(|| {
            (baseline.outcomes.len() != other.outcomes.len() || baseline.final_len != other.final_len)
                .then_some(baseline.outcomes.len().min(other.outcomes.len()))
        })
}

// =============================================================================
// Scenario loading
// =============================================================================

/// Get the project root directory
fn project_root() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    // xtask is in project_root/xtask, so go up one level
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn resolve_scenario(root: &Path, scenario: &Path) -> Result<PathBuf> {
    let direct = if scenario.is_absolute() {
        scenario.to_path_buf()
    } else {
        root.join(scenario)
    };
    if direct.exists() {
        return Ok(direct);
    }

    // Try looking in scenarios directory
    let alternative = root.join("xtask/scenarios").join(scenario);
    if alternative.exists() {
        return Ok(alternative);
    }
    bail!(
        "Scenario file not found: {} or {}",
        direct.display(),
        alternative.display()
    );
}

/// Parse a scenario from YAML text
pub fn parse_scenario(content: &str) -> Result<Scenario> {
    serde_yaml::from_str(content).context("Failed to parse scenario YAML")
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let root = project_root();
    let scenario_path = resolve_scenario(&root, &args.scenario)?;
    let content = fs::read_to_string(&scenario_path)
        .with_context(|| format!("Failed to read scenario file {}", scenario_path.display()))?;
    let scenario = parse_scenario(&content)?;

    tracing::info!(
        scenario = %scenario.name,
        path = %scenario_path.display(),
        operations = scenario.operations.len(),
        "loaded scenario"
    );

    let runs: Vec<RunReport> = Combination::all(args.backing)
        .into_iter()
        .map(|combination| execute(combination, scenario.initial_capacity, &scenario.operations))
        .collect();

    let divergence = runs.split_first().and_then(|(baseline, rest)| {
        rest.iter()
            .find_map(|run| first_divergence(baseline, run).map(|index| (baseline, run, index)))
    });

    if args.json {
        let report = ReplayReport {
            scenario: &scenario.name,
            consistent: divergence.is_none(),
            runs: &runs,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to render JSON report")?
        );
    } else {
        for run in &runs {
            println!(
                "{:<18} {} outcomes, final len {}",
                run.combination.to_string(),
                run.outcomes.len(),
                run.final_len
            );
        }
    }

    if let Some((baseline, run, index)) = divergence {
        let operation = scenario
            .operations
            .get(index)
            .map_or_else(|| "end of scenario".to_string(), |operation| format!("{operation:?}"));
        bail!(
            "{} and {} diverge at operation {index} ({operation})",
            baseline.combination,
            run.combination
        );
    }

    tracing::info!(scenario = %scenario.name, runs = runs.len(), "all combinations agree");
    Ok(())
}
