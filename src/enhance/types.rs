use super::EnhanceError;

/// Completion backend abstraction (allows mocking).
pub trait CompletionClient {
    /// Run one system + user exchange and return the assistant text.
    fn complete(&self, system: &str, user: &str) -> Result<String, EnhanceError>;
}
