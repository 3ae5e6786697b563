//! Error types for the health tools library

use thiserror::Error;

/// Errors surfaced by the calculators
///
/// Missing or unparseable form fields never produce an error; parsing fails
/// closed and the page keeps its button disabled. Errors are reserved for
/// inputs that parsed but fall outside a selectable range.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Validation error: {0}")]
    Validation(String),
}
