use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight of a directed edge in the dense matrix.
///
/// `Absent` means there is no edge; it never takes part in relaxation
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EdgeWeight {
    Finite(f64),
    #[default]
    Absent,
}

impl EdgeWeight {
    pub fn finite(self) -> Option<f64> {
        match self {
            EdgeWeight::Finite(w) => Some(w),
            EdgeWeight::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, EdgeWeight::Absent)
    }
}

impl From<f64> for EdgeWeight {
    fn from(weight: f64) -> Self {
        EdgeWeight::Finite(weight)
    }
}

impl From<Option<f64>> for EdgeWeight {
    fn from(weight: Option<f64>) -> Self {
        weight.map_or(EdgeWeight::Absent, EdgeWeight::Finite)
    }
}

/// Best known cost from the source to a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Distance {
    /// No path found yet (+infinity)
    Unreached,
    Finite(f64),
    /// Reachable from a negative cycle; no shortest path exists
    NegativeInfinity,
}

impl Distance {
    /// Cost after following one more edge of weight `weight`.
    ///
    /// A sum that overflows `f64` lands in the matching unbounded state:
    /// `Unreached` above, `NegativeInfinity` below. `Finite` never holds
    /// an infinity.
    pub fn extend(self, weight: f64) -> Distance {
        match self {
            Distance::Finite(d) => {
                let sum = d + weight;
                if sum.is_finite() {
                    Distance::Finite(sum)
                } else if sum > 0.0 {
                    Distance::Unreached
                } else {
                    Distance::NegativeInfinity
                }
            }
            other => other,
        }
    }

    /// Whether `self` beats `current` by more than `tolerance`.
    ///
    /// Ordering follows the extended reals: `NegativeInfinity` beats every
    /// other state, `Unreached` beats nothing.
    pub fn improves_on(self, current: Distance, tolerance: f64) -> bool {
        match (self, current) {
            (Distance::Unreached, _) | (_, Distance::NegativeInfinity) => false,
            (Distance::NegativeInfinity, _) | (Distance::Finite(_), Distance::Unreached) => true,
            (Distance::Finite(candidate), Distance::Finite(known)) => {
                candidate < known - tolerance
            }
        }
    }

    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(d) => Some(d),
            _ => None,
        }
    }

    pub fn is_reached(self) -> bool {
        !matches!(self, Distance::Unreached)
    }

    pub fn is_negative_infinity(self) -> bool {
        matches!(self, Distance::NegativeInfinity)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Unreached => f.write_str("inf"),
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::NegativeInfinity => f.write_str("-inf"),
        }
    }
}

/// Previous node on the best known path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "snake_case")]
pub enum Predecessor {
    /// The run's source node
    Source,
    Node(usize),
    Unreached,
    /// Contaminated by a negative cycle
    NegativeCycle,
}

/// Result of one strategy run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Fixed point reached; distances are true shortest-path costs
    NoNegativeCycle,
    /// A negative cycle exists; affected nodes were not identified
    NegativeCycle,
    /// A negative cycle exists; `affected` lists every contaminated node
    NegativeCycleMarked { affected: Vec<usize> },
    /// The FIFO worklist was stopped by its round bound; results are unsafe
    RoundLimitExceeded { rounds: usize },
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::NoNegativeCycle => "no_negative_cycle",
            Outcome::NegativeCycle => "negative_cycle",
            Outcome::NegativeCycleMarked { .. } => "negative_cycle_marked",
            Outcome::RoundLimitExceeded { .. } => "round_limit_exceeded",
        }
    }

    pub fn has_negative_cycle(&self) -> bool {
        matches!(
            self,
            Outcome::NegativeCycle | Outcome::NegativeCycleMarked { .. }
        )
    }

    /// Whether distances and predecessors can be queried for paths.
    ///
    /// Presence-only cycle detection leaves the arrays mid-relaxation, so
    /// reconstruction reports "not solved" for it.
    pub fn is_solved(&self) -> bool {
        !matches!(self, Outcome::NegativeCycle)
    }

    /// Whether the result is a proven fixed point
    pub fn is_trusted(&self) -> bool {
        matches!(self, Outcome::NoNegativeCycle)
    }
}

/// A concrete path in source-to-destination order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub nodes: Vec<usize>,
    pub cost: f64,
}

/// Result of reconstructing the path to one destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome {
    /// No completed run to read from
    NotSolved,
    /// Destination is reachable from a negative cycle
    NegativeCycle,
    /// Destination is not reachable from the start
    NoPath,
    Found(ShortestPath),
}

impl PathOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            PathOutcome::NotSolved => "not_solved",
            PathOutcome::NegativeCycle => "negative_cycle",
            PathOutcome::NoPath => "no_path",
            PathOutcome::Found(_) => "found",
        }
    }

    pub fn nodes(&self) -> &[usize] {
        match self {
            PathOutcome::Found(path) => &path.nodes,
            _ => &[],
        }
    }
}
