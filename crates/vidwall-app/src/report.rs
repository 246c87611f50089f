//! The JSON document printed on stdout.

use serde::Serialize;
use vidwall_common::types::{LayoutMode, Size};
use vidwall_layout::{evaluate_strategies, Arrangement, LayoutItem, LayoutResult, StrategyKind};

#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: LayoutMode,
    pub container: Size,
    pub arrangement: Arrangement,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,
}

/// One strategy's result, listed when `--compare` is given.
#[derive(Debug, Serialize)]
pub struct Candidate {
    pub strategy: StrategyKind,
    pub efficiency_percent: u32,
    pub result: LayoutResult,
}

pub fn candidates(container: Size, items: &[LayoutItem]) -> Vec<Candidate> {
    evaluate_strategies(container, items)
        .into_iter()
        .map(|(strategy, result)| Candidate {
            strategy,
            efficiency_percent: result.efficiency_percent(),
            result,
        })
        .collect()
}
