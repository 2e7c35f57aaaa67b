use serde::{Deserialize, Serialize};

/// The five sections of a 245G-compliant progress note, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    ServiceProvided,
    ClientResponse,
    Interventions,
    Progress,
    Plan,
}

impl Section {
    /// All sections in fixed rendering order.
    pub const ALL: [Section; 5] = [
        Section::ServiceProvided,
        Section::ClientResponse,
        Section::Interventions,
        Section::Progress,
        Section::Plan,
    ];

    /// Header used when rendering the note.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::ServiceProvided => "SERVICE PROVIDED",
            Section::ClientResponse => "CLIENT RESPONSE",
            Section::Interventions => "INTERVENTIONS",
            Section::Progress => "PROGRESS",
            Section::Plan => "PLAN",
        }
    }

    /// Canonical fallback paragraph used when a section receives no input.
    pub fn default_text(&self) -> &'static str {
        match self {
            Section::ServiceProvided => {
                "Provided 50-minute individual substance use disorder counseling session \
                 at ASAM Level 2.1 intensive outpatient program via in-person service."
            }
            Section::ClientResponse => {
                "Client actively participated in session with appropriate engagement."
            }
            Section::Interventions => {
                "Provided supportive counseling and therapeutic interventions addressing \
                 treatment goals."
            }
            Section::Progress => "Client maintaining progress toward treatment plan goals.",
            Section::Plan => "Continue current treatment plan and session schedule.",
        }
    }
}

/// Per-section note text. Always holds exactly five entries by construction;
/// after composition every entry is non-empty and ends with a single period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteSections {
    pub service_provided: String,
    pub client_response: String,
    pub interventions: String,
    pub progress: String,
    pub plan: String,
}

impl NoteSections {
    pub fn get(&self, section: Section) -> &str {
        match section {
            Section::ServiceProvided => &self.service_provided,
            Section::ClientResponse => &self.client_response,
            Section::Interventions => &self.interventions,
            Section::Progress => &self.progress,
            Section::Plan => &self.plan,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::ServiceProvided => &mut self.service_provided,
            Section::ClientResponse => &mut self.client_response,
            Section::Interventions => &mut self.interventions,
            Section::Progress => &mut self.progress,
            Section::Plan => &mut self.plan,
        }
    }

    /// Append a classified sentence to its section (accumulation is append-only).
    pub fn append(&mut self, section: Section, sentence: &str) {
        let slot = self.get_mut(section);
        slot.push_str(sentence);
        slot.push(' ');
    }

    /// Iterate sections with their text, in fixed rendering order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &str)> {
        Section::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    /// Render the note as `SECTION:\ntext\n` blocks joined by blank lines.
    pub fn format_note(&self) -> String {
        self.iter()
            .map(|(section, text)| format!("{}:\n{}\n", section.display_name(), text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Advisory compliance report. Recomputed per note, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub completeness_percent: f32,
}

/// Complete result of processing one session narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedNote {
    pub sections: NoteSections,
    pub formatted_note: String,
    pub compliance: ValidationReport,
}
