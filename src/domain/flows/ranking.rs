//! PROMETHEE I partial ranking and PROMETHEE II complete ranking.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{NetFlows, OutrankingFlows};

/// Relation between two alternatives in a PROMETHEE I ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// First alternative is preferred.
    Preferred,
    /// Both alternatives have identical flows.
    Indifferent,
    /// Flows disagree on which alternative is better.
    Incomparable,
    /// First alternative outranks (weak preference).
    Outranks,
}

impl Relation {
    /// Conventional one-letter symbol: `P`, `I`, `?` or `S`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Preferred => "P",
            Relation::Indifferent => "I",
            Relation::Incomparable => "?",
            Relation::Outranks => "S",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Partial ranking from positive and negative flows.
pub struct PrometheeIRanking;

impl PrometheeIRanking {
    /// Relation of every ordered pair of distinct alternatives.
    ///
    /// `a` is at least as good as `b` when `φ⁺(a) >= φ⁺(b)` and
    /// `φ⁻(a) <= φ⁻(b)`.
    ///
    /// # Algorithm
    /// - `weak_preference`: `S` when `a` is at least as good as `b`, else `?`
    /// - otherwise: `I` for equal flows, `P` when `a` is at least as good as
    ///   `b`, else `?`
    pub fn relations(
        flows: &OutrankingFlows,
        weak_preference: bool,
    ) -> Vec<(String, Relation, String)> {
        let ids = flows.entity_ids();
        let (positive, negative) = (flows.positive(), flows.negative());
        let mut pairs = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1));

        for a in 0..ids.len() {
            for b in 0..ids.len() {
                if a == b {
                    continue;
                }
                let at_least_as_good = positive[a] >= positive[b] && negative[a] <= negative[b];
                let relation = if weak_preference {
                    if at_least_as_good {
                        Relation::Outranks
                    } else {
                        Relation::Incomparable
                    }
                } else if positive[a] == positive[b] && negative[a] == negative[b] {
                    Relation::Indifferent
                } else if at_least_as_good {
                    Relation::Preferred
                } else {
                    Relation::Incomparable
                };
                pairs.push((ids[a].clone(), relation, ids[b].clone()));
            }
        }

        pairs
    }
}

/// One position in a complete ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// 1-based rank.
    pub rank: usize,
    pub alternative_id: String,
    pub net_flow: f64,
}

/// Complete ranking of alternatives.
pub struct PrometheeIIRanking;

impl PrometheeIIRanking {
    /// Ranks alternatives by descending net flow.
    ///
    /// Equal net flows keep their input order.
    pub fn rank(net_flows: &NetFlows) -> Vec<RankedAlternative> {
        let mut entries: Vec<(&str, f64)> = net_flows.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        entries
            .into_iter()
            .enumerate()
            .map(|(i, (id, flow))| RankedAlternative {
                rank: i + 1,
                alternative_id: id.to_string(),
                net_flow: flow,
            })
            .collect()
    }
}
