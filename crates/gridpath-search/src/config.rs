/// Expansions allowed per search direction unless configured otherwise.
pub const DEFAULT_ITERATION_BUDGET: usize = 1000;

/// How many searches a request runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// One synchronous search from start to goal.
    #[default]
    Single,
    /// Two concurrent searches, start→goal and goal→start, joined before
    /// reconciliation.
    Dual,
}

/// Weights of the fallback score `h * h_weight - hops * parent_weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FallbackWeights {
    /// Weight of the remaining-distance estimate.
    pub h_weight: f32,
    /// Reward per parent link between a cell and the origin.
    pub parent_weight: f32,
}

impl Default for FallbackWeights {
    fn default() -> Self {
        Self {
            h_weight: 1.0,
            parent_weight: 0.5,
        }
    }
}

/// Tunables for a path search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Maximum expansions per search direction. Reaching it is not an
    /// error: the result falls back to the best explored cell.
    pub iteration_budget: usize,
    pub fallback: FallbackWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Single,
            iteration_budget: DEFAULT_ITERATION_BUDGET,
            fallback: FallbackWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Default single-direction configuration.
    pub fn single() -> Self {
        Self::default()
    }

    /// Default dual-direction configuration.
    pub fn dual() -> Self {
        Self {
            mode: SearchMode::Dual,
            ..Self::default()
        }
    }

    /// Same configuration with a different iteration budget.
    pub fn with_budget(self, iteration_budget: usize) -> Self {
        Self {
            iteration_budget,
            ..self
        }
    }

    /// Same configuration with different fallback weights.
    pub fn with_fallback(self, fallback: FallbackWeights) -> Self {
        Self { fallback, ..self }
    }
}
