pub mod classify;
pub mod compose;
pub mod lexicon;
pub mod orchestrator;
pub mod segment;
pub mod types;
pub mod validate;

pub use classify::*;
pub use compose::*;
pub use lexicon::*;
pub use orchestrator::*;
pub use segment::*;
pub use types::*;
pub use validate::*;

use thiserror::Error;

/// Construction-time failures. Processing itself is total and never errors;
/// a malformed rule table must surface here, before the first note is touched.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Malformed lexicon rule table: {0}")]
    Lexicon(String),

    #[error("Malformed extraction pattern: {0}")]
    ExtractionPattern(String),

    #[error("Malformed compliance pattern: {0}")]
    CompliancePattern(String),
}
