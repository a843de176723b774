//! Core types for the pipecheck validator.
//!
//! This module contains the foundational types shared by every layer:
//! - Node identifiers, edges and the validation summary
//! - Error types

pub mod types;
pub mod error;

// Re-export commonly used types
pub use types::{Edge, Invalidity, NodeId, PipelineSummary};
pub use error::{EdgeEnd, GraphError, GraphResult, PipecheckError, PipecheckResult};
