//! Validation module: classifies a submitted pipeline as a connected DAG or not.
//!
//! Structural failures are reported in a [`ValidationReport`], never as errors.

pub mod pipeline;
pub mod stages;

pub use pipeline::{validate, ValidationPipeline, ValidationReport};
pub use stages::{AcyclicValidation, ConnectivityValidation, ValidationStage};
