//! Shared configuration for Chaikin3D
//!
//! This crate provides the single source of truth for the subdivision
//! settings shared by the core library and whatever front-end drives it
//! (command line, batch jobs, renderers).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default Chaikin coefficient (a quarter of each edge is cut per corner)
pub const DEFAULT_COEFFICIENT: f64 = 4.0;

/// Default number of generations to compute
pub const DEFAULT_GENERATIONS: u32 = 0;

/// Smallest coefficient that is rejected. The special ratio `(k-2)/(k-1)`
/// degenerates at this value.
pub const MIN_EXCLUSIVE_COEFFICIENT: f64 = 2.0;

/// Errors raised while loading or validating a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Chaikin coefficient must be a finite number greater than 2, got {0}")]
    InvalidCoefficient(f64),
    #[error("Unknown edge ordering policy: {0:?} (expected \"all\", \"first\" or \"never\")")]
    UnknownOrderEdges(String),
    #[error("Unknown verbosity level: {0:?} (expected 0, 1 or 2)")]
    UnknownVerbosity(String),
    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// When node edge-lists are canonicalised before a transform.
///
/// Imported meshes insert edges in face order, which does not match the
/// geometric fan around a vertex. Meshes produced by a previous transform
/// already have consistent edge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderEdges {
    /// Before every transform
    All,
    /// Only before transforming the initial (imported) mesh
    #[default]
    First,
    /// Never reorder
    Never,
}

impl OrderEdges {
    /// Whether edge lists should be reordered for a mesh of the given origin.
    pub fn applies_to(self, initial_mesh: bool) -> bool {
        match self {
            Self::All => true,
            Self::First => initial_mesh,
            Self::Never => false,
        }
    }
}

impl FromStr for OrderEdges {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "first" => Ok(Self::First),
            "never" => Ok(Self::Never),
            _ => Err(ConfigError::UnknownOrderEdges(s.to_string())),
        }
    }
}

impl fmt::Display for OrderEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::First => "first",
            Self::Never => "never",
        };
        f.write_str(name)
    }
}

/// How chatty a transform is about its progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Verbosity {
    /// Summaries only (debug level)
    #[default]
    Quiet = 0,
    /// Periodic progress lines
    Progress = 1,
    /// Per-edge detail
    Detailed = 2,
}

impl Verbosity {
    pub fn reports_progress(self) -> bool {
        self >= Self::Progress
    }

    pub fn reports_detail(self) -> bool {
        self >= Self::Detailed
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Quiet),
            1 => Ok(Self::Progress),
            2 => Ok(Self::Detailed),
            other => Err(ConfigError::UnknownVerbosity(other.to_string())),
        }
    }
}

impl From<Verbosity> for u8 {
    fn from(verbosity: Verbosity) -> Self {
        verbosity as u8
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| ConfigError::UnknownVerbosity(s.to_string()))?;
        Self::try_from(level)
    }
}

/// Settings for a Chaikin3D run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaikinConfig {
    /// Truncation coefficient `k`; corners are cut at `1/k` of each edge
    pub coefficient: f64,
    /// Number of transforms to apply
    pub generations: u32,
    /// Edge-list ordering policy
    pub order_edges: OrderEdges,
    /// Progress reporting level
    pub verbosity: Verbosity,
}

impl Default for ChaikinConfig {
    fn default() -> Self {
        Self {
            coefficient: DEFAULT_COEFFICIENT,
            generations: DEFAULT_GENERATIONS,
            order_edges: OrderEdges::default(),
            verbosity: Verbosity::default(),
        }
    }
}

impl ChaikinConfig {
    /// Create a config with the given coefficient and generation count
    pub fn new(coefficient: f64, generations: u32) -> Self {
        Self {
            coefficient,
            generations,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject coefficients that make the truncation ratios meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.coefficient.is_finite() || self.coefficient <= MIN_EXCLUSIVE_COEFFICIENT {
            return Err(ConfigError::InvalidCoefficient(self.coefficient));
        }
        Ok(())
    }

    #[must_use]
    pub fn with_coefficient(mut self, coefficient: f64) -> Self {
        self.coefficient = coefficient;
        self
    }

    #[must_use]
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    #[must_use]
    pub fn with_order_edges(mut self, order_edges: OrderEdges) -> Self {
        self.order_edges = order_edges;
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChaikinConfig::default();
        assert_eq!(config.coefficient, DEFAULT_COEFFICIENT);
        assert_eq!(config.generations, DEFAULT_GENERATIONS);
        assert_eq!(config.order_edges, OrderEdges::First);
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_coefficients() {
        for k in [2.0, 1.5, -3.0, f64::NAN, f64::INFINITY] {
            let config = ChaikinConfig::default().with_coefficient(k);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidCoefficient(_))
            ));
        }
        assert!(ChaikinConfig::new(2.5, 1).validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_document() {
        let config =
            ChaikinConfig::from_json(r#"{ "generations": 3, "order_edges": "all", "verbosity": 2 }"#)
                .unwrap();
        assert_eq!(config.generations, 3);
        assert_eq!(config.order_edges, OrderEdges::All);
        assert_eq!(config.verbosity, Verbosity::Detailed);
        assert_eq!(config.coefficient, DEFAULT_COEFFICIENT);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(ChaikinConfig::from_json(r#"{ "coefficient": 2.0 }"#).is_err());
        assert!(ChaikinConfig::from_json(r#"{ "verbosity": 7 }"#).is_err());
        assert!(ChaikinConfig::from_json(r#"{ "order_edges": "sometimes" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let config = ChaikinConfig::new(5.0, 2).with_order_edges(OrderEdges::Never);
        let json = config.to_json().unwrap();
        assert!(json.contains("\"never\""));
        assert_eq!(ChaikinConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_order_edges_policy() {
        assert!(OrderEdges::All.applies_to(false));
        assert!(OrderEdges::First.applies_to(true));
        assert!(!OrderEdges::First.applies_to(false));
        assert!(!OrderEdges::Never.applies_to(true));
        assert_eq!("FIRST".parse::<OrderEdges>().unwrap(), OrderEdges::First);
        assert!("both".parse::<OrderEdges>().is_err());
    }

    #[test]
    fn test_verbosity_parsing() {
        assert_eq!("1".parse::<Verbosity>().unwrap(), Verbosity::Progress);
        assert!("3".parse::<Verbosity>().is_err());
        assert!("loud".parse::<Verbosity>().is_err());
        assert!(Verbosity::Detailed.reports_progress());
        assert!(!Verbosity::Progress.reports_detail());
    }
}
