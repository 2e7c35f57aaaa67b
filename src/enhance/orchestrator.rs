use super::format::check_note_format;
use super::prompt::{build_enhancement_prompt, COMPLIANCE_SYSTEM_PROMPT};
use super::types::CompletionClient;
use super::EnhanceError;

/// Runs the optional external completion collaborator in front of the
/// deterministic pipeline: prompt → complete → structure check.
///
/// A failure here is signaled, never swallowed: the caller decides whether
/// to fall back to the deterministic pipeline.
pub struct NoteEnhancer {
    client: Box<dyn CompletionClient + Send + Sync>,
}

impl NoteEnhancer {
    pub fn new(client: Box<dyn CompletionClient + Send + Sync>) -> Self {
        Self { client }
    }

    /// Ask the completion service for a compliant note and verify its
    /// five-section structure.
    pub fn enhance(&self, casual_text: &str) -> Result<String, EnhanceError> {
        let user_prompt = build_enhancement_prompt(casual_text);
        let enhanced = self.client.complete(COMPLIANCE_SYSTEM_PROMPT, &user_prompt)?;

        let check = check_note_format(&enhanced);
        if !check.is_valid {
            let missing = check.missing_sections.join(", ");
            tracing::warn!(
                missing = %missing,
                "Enhanced note failed structure validation"
            );
            return Err(EnhanceError::IncompleteNote { missing });
        }

        Ok(enhanced)
    }
}
