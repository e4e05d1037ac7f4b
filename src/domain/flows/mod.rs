//! Flows Module - outranking flows derived from preferences.
//!
//! # Components
//!
//! - `NetFlowCalculator` - single-criterion net flows and their weighted aggregate
//! - `OutrankingFlows` - PROMETHEE I / II positive and negative flows
//! - `PrometheeIRanking` - partial ranking relations (P, I, ?, S) from PROMETHEE I flows
//! - `PrometheeIIRanking` - complete ranking by net flow
//!
//! All functions are pure; they read preference tensors or matrices and
//! return new flow tables.

mod net_flow;
mod outranking_flows;
mod ranking;

pub use net_flow::{CriteriaNetFlows, NetFlowCalculator, NetFlows};
pub use outranking_flows::OutrankingFlows;
pub use ranking::{PrometheeIIRanking, PrometheeIRanking, RankedAlternative, Relation};
