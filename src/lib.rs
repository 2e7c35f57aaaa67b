//! Deterministic transformation of casual counselor narratives into
//! five-section, 245G-compliant progress notes.

pub mod config;
pub mod enhance;
pub mod pipeline;

pub use pipeline::{NotePipeline, ProcessedNote, Section, ValidationReport};
