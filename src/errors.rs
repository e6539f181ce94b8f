//! Error types with diagnostics using miette
//!
//! Placement itself never fails: bad tokens normalize to the default and odd
//! geometry (zero sizes, negative clearance) is valid input. The only failures
//! come from measuring the document.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while reading geometry from a [`Document`](crate::dom::Document)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PositionError {
    #[error("cannot measure {node}: element is detached or not rendered")]
    #[diagnostic(
        code(perch::measure::unavailable),
        help("attach and display the element before positioning against it")
    )]
    MeasurementUnavailable { node: String },

    #[error("measured geometry for {node} is not finite")]
    #[diagnostic(code(perch::measure::non_finite))]
    NonFiniteMeasurement {
        node: String,
        #[source]
        source: NumericError,
    },
}

impl PositionError {
    pub(crate) fn unavailable(node: impl std::fmt::Debug) -> Self {
        PositionError::MeasurementUnavailable { node: format!("{node:?}") }
    }

    pub(crate) fn non_finite(node: impl std::fmt::Debug, source: NumericError) -> Self {
        PositionError::NonFiniteMeasurement { node: format!("{node:?}"), source }
    }
}
