pub mod format;
pub mod openai;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use format::*;
pub use openai::*;
pub use orchestrator::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Completion service is not configured (missing API key)")]
    NotConfigured,

    #[error("Completion service is unreachable at {0}")]
    Connection(String),

    #[error("Completion service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Empty completion response")]
    EmptyResponse,

    #[error("Enhanced note is missing required sections: {missing}")]
    IncompleteNote { missing: String },
}
