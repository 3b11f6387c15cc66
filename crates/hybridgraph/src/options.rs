//! Graph shape configuration fixed at construction time.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// A single shape flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphOption {
    /// Edges are one-directional
    Directed,
    /// Edges carry caller-supplied weights
    Weighted,
    /// Self-loops are permitted
    SelfLoops,
    /// Re-adding an edge between the same ordered pair is permitted
    ParallelEdges,
    /// The façade inserts the reverse edge on every add
    Undirected,
    /// Edges never carry caller-supplied weights
    Unweighted,
}

impl GraphOption {
    /// Every flag, in bit order.
    pub const ALL: [GraphOption; 6] = [
        GraphOption::Directed,
        GraphOption::Weighted,
        GraphOption::SelfLoops,
        GraphOption::ParallelEdges,
        GraphOption::Undirected,
        GraphOption::Unweighted,
    ];

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for GraphOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphOption::Directed => write!(f, "Directed"),
            GraphOption::Weighted => write!(f, "Weighted"),
            GraphOption::SelfLoops => write!(f, "SelfLoops"),
            GraphOption::ParallelEdges => write!(f, "ParallelEdges"),
            GraphOption::Undirected => write!(f, "Undirected"),
            GraphOption::Unweighted => write!(f, "Unweighted"),
        }
    }
}

/// Immutable set of [`GraphOption`] flags.
///
/// The default set is `{Directed, SelfLoops}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphCreationOptions {
    bits: u8,
}

impl GraphCreationOptions {
    /// Build an option set from a list of flags.
    pub fn new(options: &[GraphOption]) -> Self {
        options.iter().copied().collect()
    }

    /// The empty option set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Membership test for a single flag.
    pub fn has_option(&self, option: GraphOption) -> bool {
        self.bits & option.bit() != 0
    }

    /// True unless `Undirected` is set.
    pub fn is_directed(&self) -> bool {
        !self.has_option(GraphOption::Undirected)
    }

    /// Flags present in this set, in bit order.
    pub fn iter(&self) -> impl Iterator<Item = GraphOption> + '_ {
        GraphOption::ALL
            .into_iter()
            .filter(move |option| self.has_option(*option))
    }

    /// Reject contradictory flag combinations.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] when both `Directed` and
    /// `Undirected`, or both `Weighted` and `Unweighted`, are set.
    pub fn validate(&self) -> Result<()> {
        if self.has_option(GraphOption::Directed) && self.has_option(GraphOption::Undirected) {
            return Err(GraphError::invalid_argument()
                .with_message("Directed and Undirected are mutually exclusive"));
        }
        if self.has_option(GraphOption::Weighted) && self.has_option(GraphOption::Unweighted) {
            return Err(GraphError::invalid_argument()
                .with_message("Weighted and Unweighted are mutually exclusive"));
        }
        Ok(())
    }
}

impl Default for GraphCreationOptions {
    fn default() -> Self {
        Self::new(&[GraphOption::Directed, GraphOption::SelfLoops])
    }
}

impl FromIterator<GraphOption> for GraphCreationOptions {
    fn from_iter<I: IntoIterator<Item = GraphOption>>(iter: I) -> Self {
        let bits = iter.into_iter().fold(0, |bits, option| bits | option.bit());
        Self { bits }
    }
}

impl std::fmt::Display for GraphCreationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.iter().map(|option| option.to_string()).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}
