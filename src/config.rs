//! Generation parameters and their validation

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Errors raised when generation parameters are out of range
#[derive(Debug, Error, PartialEq)]
pub enum ParamError {
    #[error("node count ({node_count}) must be greater than the lattice degree ({k})")]
    NodeCountTooSmall { node_count: usize, k: usize },

    #[error("lattice degree must be an even integer >= 2, got {0}")]
    InvalidLatticeDegree(usize),

    #[error("rewiring probability must lie within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

/// Parameters for one Watts-Strogatz generation run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeneratorParams {
    /// Number of nodes arranged on the ring
    pub node_count: usize,

    /// Lattice degree: each node starts connected to its k nearest neighbors
    pub k: usize,

    /// Per-edge probability of rewiring the target endpoint
    pub rewire_probability: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            node_count: 30,
            k: 4,
            rewire_probability: 0.0,
        }
    }
}

impl GeneratorParams {
    /// Create parameters with custom values
    pub fn new(node_count: usize, k: usize, rewire_probability: f64) -> Self {
        Self {
            node_count,
            k,
            rewire_probability,
        }
    }

    /// Check parameter ranges before any generation work happens.
    ///
    /// The lattice degree must be even: every node connects to k/2 neighbors
    /// on each side, and an odd k would silently drop a half-step.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.k < 2 || self.k % 2 != 0 {
            return Err(ParamError::InvalidLatticeDegree(self.k));
        }

        if self.node_count <= self.k {
            return Err(ParamError::NodeCountTooSmall {
                node_count: self.node_count,
                k: self.k,
            });
        }

        if !self.rewire_probability.is_finite()
            || self.rewire_probability < 0.0
            || self.rewire_probability > 1.0
        {
            return Err(ParamError::ProbabilityOutOfRange(self.rewire_probability));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(GeneratorParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_node_count_not_above_k() {
        let params = GeneratorParams::new(4, 4, 0.0);
        assert_eq!(
            params.validate(),
            Err(ParamError::NodeCountTooSmall { node_count: 4, k: 4 })
        );
    }

    #[test]
    fn rejects_odd_or_tiny_lattice_degree() {
        assert_eq!(
            GeneratorParams::new(30, 3, 0.0).validate(),
            Err(ParamError::InvalidLatticeDegree(3))
        );
        assert_eq!(
            GeneratorParams::new(30, 0, 0.0).validate(),
            Err(ParamError::InvalidLatticeDegree(0))
        );
    }

    #[test]
    fn rejects_probability_outside_unit_interval() {
        assert_eq!(
            GeneratorParams::new(30, 4, 1.5).validate(),
            Err(ParamError::ProbabilityOutOfRange(1.5))
        );
        assert_eq!(
            GeneratorParams::new(30, 4, -0.1).validate(),
            Err(ParamError::ProbabilityOutOfRange(-0.1))
        );
        assert!(GeneratorParams::new(30, 4, f64::NAN).validate().is_err());
    }
}
