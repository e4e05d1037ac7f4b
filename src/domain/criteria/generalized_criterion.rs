//! Generalized criterion functions.
//!
//! Each shape maps a directed performance difference `d = g(a) - g(b)` to a
//! preference degree in `[0, 1]`. The thresholds a shape needs travel with
//! its variant, so a criterion can never be evaluated with a missing
//! parameter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ensure_non_negative, ValidationError};

/// Selector for a generalized criterion shape, without its parameters.
///
/// Mirrors the tabular input where the shape and the `p`/`q`/`s` thresholds
/// arrive as parallel columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceFunction {
    Usual,
    UShape,
    VShape,
    Level,
    VShapeIndifference,
    Gaussian,
}

impl PreferenceFunction {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            PreferenceFunction::Usual => "usual",
            PreferenceFunction::UShape => "u-shape",
            PreferenceFunction::VShape => "v-shape",
            PreferenceFunction::Level => "level",
            PreferenceFunction::VShapeIndifference => "v-shape-indifference",
            PreferenceFunction::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for PreferenceFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A generalized criterion shape together with its thresholds.
///
/// - `p`: preference threshold
/// - `q`: indifference threshold
/// - `s`: gaussian inflection point, usually between `q` and `p`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum GeneralizedCriterion {
    Usual,
    UShape { q: f64 },
    VShape { p: f64 },
    Level { p: f64, q: f64 },
    VShapeIndifference { p: f64, q: f64 },
    Gaussian { s: f64 },
}

impl GeneralizedCriterion {
    /// Creates a u-shape criterion.
    pub fn u_shape(q: f64) -> Result<Self, ValidationError> {
        Self::UShape { q }.validated()
    }

    /// Creates a v-shape criterion.
    pub fn v_shape(p: f64) -> Result<Self, ValidationError> {
        Self::VShape { p }.validated()
    }

    /// Creates a level criterion.
    pub fn level(p: f64, q: f64) -> Result<Self, ValidationError> {
        Self::Level { p, q }.validated()
    }

    /// Creates a v-shape criterion with an indifference area.
    pub fn v_shape_indifference(p: f64, q: f64) -> Result<Self, ValidationError> {
        Self::VShapeIndifference { p, q }.validated()
    }

    /// Creates a gaussian criterion.
    pub fn gaussian(s: f64) -> Result<Self, ValidationError> {
        Self::Gaussian { s }.validated()
    }

    /// Builds a criterion from a shape selector and the full threshold row.
    ///
    /// Thresholds the selected shape does not use are ignored, so callers can
    /// pass every column of a parameter table unchanged.
    pub fn from_parameters(
        function: PreferenceFunction,
        preference_threshold: f64,
        indifference_threshold: f64,
        standard_deviation: f64,
    ) -> Result<Self, ValidationError> {
        let (p, q, s) = (
            preference_threshold,
            indifference_threshold,
            standard_deviation,
        );
        match function {
            PreferenceFunction::Usual => Ok(Self::Usual),
            PreferenceFunction::UShape => Self::u_shape(q),
            PreferenceFunction::VShape => Self::v_shape(p),
            PreferenceFunction::Level => Self::level(p, q),
            PreferenceFunction::VShapeIndifference => Self::v_shape_indifference(p, q),
            PreferenceFunction::Gaussian => Self::gaussian(s),
        }
    }

    /// Returns the shape selector of this criterion.
    pub fn function(&self) -> PreferenceFunction {
        match self {
            Self::Usual => PreferenceFunction::Usual,
            Self::UShape { .. } => PreferenceFunction::UShape,
            Self::VShape { .. } => PreferenceFunction::VShape,
            Self::Level { .. } => PreferenceFunction::Level,
            Self::VShapeIndifference { .. } => PreferenceFunction::VShapeIndifference,
            Self::Gaussian { .. } => PreferenceFunction::Gaussian,
        }
    }

    /// Checks threshold consistency.
    ///
    /// All thresholds must be finite and non-negative; `p` must be positive
    /// for the v-shape, `s` positive for the gaussian, and `q <= p` wherever
    /// both are used.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match *self {
            Self::Usual => {}
            Self::UShape { q } => {
                ensure_non_negative("indifference_threshold", q)?;
            }
            Self::VShape { p } => {
                ensure_positive("preference_threshold", p)?;
            }
            Self::Level { p, q } | Self::VShapeIndifference { p, q } => {
                ensure_non_negative("preference_threshold", p)?;
                ensure_non_negative("indifference_threshold", q)?;
                if q > p {
                    return Err(ValidationError::invalid_format(
                        "indifference_threshold",
                        format!("incorrect threshold: q {} greater than p {}", q, p),
                    ));
                }
            }
            Self::Gaussian { s } => {
                ensure_positive("standard_deviation", s)?;
            }
        }
        Ok(())
    }

    fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Maps a directed difference to a preference degree in `[0, 1]`.
    pub fn preference(&self, d: f64) -> f64 {
        match *self {
            Self::Usual => {
                if d > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Self::UShape { q } => {
                if d <= q {
                    0.0
                } else {
                    1.0
                }
            }
            Self::VShape { p } => {
                if d <= 0.0 {
                    0.0
                } else if d <= p {
                    d / p
                } else {
                    1.0
                }
            }
            Self::Level { p, q } => {
                if d <= q {
                    0.0
                } else if d <= p {
                    0.5
                } else {
                    1.0
                }
            }
            Self::VShapeIndifference { p, q } => {
                // d > q here, so p > q whenever the middle branch is taken
                if d <= q {
                    0.0
                } else if d <= p {
                    (d - q) / (p - q)
                } else {
                    1.0
                }
            }
            Self::Gaussian { s } => {
                if d <= 0.0 {
                    0.0
                } else {
                    1.0 - (-(d * d) / (2.0 * s * s)).exp()
                }
            }
        }
    }
}

fn ensure_positive(field: &str, value: f64) -> Result<f64, ValidationError> {
    let value = ensure_non_negative(field, value)?;
    if value == 0.0 {
        return Err(ValidationError::out_of_range(
            field,
            f64::MIN_POSITIVE,
            f64::INFINITY,
            value,
        ));
    }
    Ok(value)
}
