//! Reference showcases
//!
//! Pushes three values at the back and two at the front, reports the ends,
//! then pops one element from each end. Each showcase runs on every
//! wrapper/backing combination.

use anyhow::{Result, bail};

use crate::replay::{Combination, Operation, execute, first_divergence};

/// Showcase values: the first three are pushed at the back, the last two at
/// the front.
const SHOWCASES: [[i64; 5]; 2] = [[1, 2, 3, 4, 5], [10, 20, 30, 40, 50]];

fn showcase_operations(values: [i64; 5]) -> Vec<Operation> {
    let [first, second, third, fourth, fifth] = values;
    vec![
        Operation::PushBack(first),
        Operation::PushBack(second),
        Operation::PushBack(third),
        Operation::PushFront(fourth),
        Operation::PushFront(fifth),
        Operation::Len,
        Operation::Front,
        Operation::Back,
        Operation::PopFront,
        Operation::PopBack,
        Operation::Len,
    ]
}

const LABELS: [&str; 6] = [
    "size",
    "front",
    "back",
    "pop_front",
    "pop_back",
    "size after pops",
];

pub fn run() -> Result<()> {
    for values in SHOWCASES {
        let operations = showcase_operations(values);
        println!("showcase {values:?}");

        let runs: Vec<_> = Combination::all(None)
            .into_iter()
            .map(|combination| execute(combination, None, &operations))
            .collect();

        for run in &runs {
            let observed = &run.outcomes[run.outcomes.len() - LABELS.len()..];
            let line = LABELS
                .iter()
                .zip(observed)
                .map(|(label, outcome)| format!("{label}={outcome}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {:<18} {line}", run.combination.to_string());
        }

        if let Some((baseline, rest)) = runs.split_first()
            && let Some(run) = rest.iter().find(|run| first_divergence(baseline, run).is_some())
        {
            bail!(
                "{} and {} disagree on showcase {values:?}",
                baseline.combination,
                run.combination
            );
        }
    }
    tracing::info!(showcases = SHOWCASES.len(), "demo complete");
    Ok(())
}
