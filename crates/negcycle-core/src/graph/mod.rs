//! Weighted graphs, relaxation strategies, and shortest-path queries
//!
//! - `model`: dense matrix graph with named nodes
//! - `types`: tagged edge, distance, predecessor, and outcome states
//! - `algos`: the four relaxation strategies
//! - `solution`: distance/predecessor arrays and path reconstruction
//! - `engine`: stateful runner holding the last solution

pub mod algos;
pub mod engine;
pub mod model;
pub mod solution;
pub mod types;

pub use algos::{RelaxOptions, RelaxationStrategy, StrategyKind};
pub use engine::Engine;
pub use model::{Graph, Node};
pub use solution::Solution;
pub use types::{Distance, EdgeWeight, Outcome, PathOutcome, Predecessor, ShortestPath};
