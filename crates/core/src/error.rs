//! Errors returned by the simulation entry points

/// Errors that can occur when starting a simulation
///
/// Raised before the first grid is allocated: by parameter validation, or
/// when the frame list of a validated run cannot be reserved. Once the
/// forest is seeded the run cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A parameter is outside its accepted range
    InvalidParameter {
        /// Parameter name (`"width"`, `"height"`, `"density"`, `"steps"`)
        name: &'static str,
        /// What was wrong with the value
        reason: String,
    },
}

impl SimulationError {
    /// Create an `InvalidParameter` error
    ///
    /// # Arguments
    /// * `name` - The name of the invalid parameter (e.g. `"width"`, `"density"`)
    /// * `reason` - Description of the constraint that was violated
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter
    #[must_use]
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{name}': {reason}")
            }
        }
    }
}

impl std::error::Error for SimulationError {}
