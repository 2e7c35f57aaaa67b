use regex::{Regex, RegexBuilder};

use super::types::{NoteSections, Section};
use super::PipelineError;

/// Named fallbacks for the SERVICE PROVIDED template fields.
const DEFAULT_DURATION: &str = "50";
const DEFAULT_SESSION_TYPE: &str = "individual substance use disorder counseling";
const DEFAULT_ASAM_LEVEL: &str = "2.1";
const DEFAULT_MODALITY: &str = "in-person service";
const PROGRAM: &str = "intensive outpatient program";

/// Keyword-to-value tables for SERVICE PROVIDED extraction. Probed top to
/// bottom against the lowercased text, first hit wins — more specific keys
/// must precede keys they contain ("intensive outpatient" before
/// "outpatient"), and slice order keeps extraction deterministic.
const SESSION_TYPES: &[(&str, &str)] = &[
    ("individual", "individual substance use disorder counseling"),
    ("group", "group therapy"),
    ("family", "family therapy"),
    ("one-on-one", "individual substance use disorder counseling"),
    ("1:1", "individual substance use disorder counseling"),
    ("iop", "intensive outpatient program group"),
];

const ASAM_LEVELS: &[(&str, &str)] = &[
    ("iop", "2.1"),
    ("intensive outpatient", "2.1"),
    ("outpatient", "1.0"),
    ("partial", "2.5"),
    ("residential", "3.5"),
];

const MODALITIES: &[(&str, &str)] = &[
    ("telehealth", "telehealth platform"),
    ("phone", "telephone"),
    ("in-person", "in-person service"),
    ("virtual", "telehealth platform"),
    ("zoom", "video conferencing"),
    ("video", "video conferencing"),
];

/// Canonical enhancement sentences appended or prepended when a populated
/// section lacks a required element.
const ENGAGEMENT_SENTENCE: &str = "Actively engaged in therapeutic discussion.";
const RECEPTIVENESS_SENTENCE: &str = "Demonstrated receptiveness to therapeutic interventions.";
const DIMENSION_THREE_SENTENCE: &str =
    "Implemented evidence-based therapeutic interventions addressing Dimension 3 (Emotional/Behavioral).";
const CBT_SENTENCE: &str =
    "Utilized Cognitive Behavioral Therapy techniques to address treatment goals.";
const DIMENSION_FIVE_SENTENCE: &str =
    "Dimension 5 (Relapse Potential) risk being actively addressed through skill development.";
const CONTINUATION_SENTENCE: &str = "Continue current treatment approach.";

/// Fills each section from its accumulated sentences, substituting the
/// canonical defaults for empty sections and patching in required elements.
/// Total: no input can make composition fail.
pub struct SectionComposer {
    duration_re: Regex,
    technique_re: Regex,
}

impl SectionComposer {
    pub fn new() -> Result<Self, PipelineError> {
        let duration_re = RegexBuilder::new(r"(\d+)\s*min(?:ute)?s?\b")
            .case_insensitive(true)
            .build()
            .map_err(|e| PipelineError::ExtractionPattern(e.to_string()))?;
        let technique_re = RegexBuilder::new(r"\b(?:cbt|dbt|mi|motivational|cognitive|behavioral)\b")
            .case_insensitive(true)
            .build()
            .map_err(|e| PipelineError::ExtractionPattern(e.to_string()))?;
        Ok(Self {
            duration_re,
            technique_re,
        })
    }

    /// Compose the final section set from accumulated sentence text.
    pub fn compose(&self, accumulated: &NoteSections) -> NoteSections {
        NoteSections {
            service_provided: normalize(
                &self.compose_service_provided(accumulated.get(Section::ServiceProvided)),
            ),
            client_response: normalize(&compose_client_response(
                accumulated.get(Section::ClientResponse),
            )),
            interventions: normalize(
                &self.compose_interventions(accumulated.get(Section::Interventions)),
            ),
            progress: normalize(&compose_progress(accumulated.get(Section::Progress))),
            plan: normalize(&compose_plan(accumulated.get(Section::Plan))),
        }
    }

    /// Fill the fixed service template from whatever the narrative offered,
    /// falling back per field. Empty input reproduces the canonical default.
    fn compose_service_provided(&self, text: &str) -> String {
        let lower = text.to_lowercase();

        let duration = self
            .duration_re
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| DEFAULT_DURATION.to_string());
        let session_type = lookup(SESSION_TYPES, &lower).unwrap_or(DEFAULT_SESSION_TYPE);
        let level = lookup(ASAM_LEVELS, &lower).unwrap_or(DEFAULT_ASAM_LEVEL);
        let modality = lookup(MODALITIES, &lower).unwrap_or(DEFAULT_MODALITY);

        format!(
            "Provided {duration}-minute {session_type} session at ASAM Level {level} {PROGRAM} via {modality}."
        )
    }

    fn compose_interventions(&self, text: &str) -> String {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Section::Interventions.default_text().to_string();
        }
        // Both conditions read the accumulated snapshot: the Dimension 3
        // sentence contains "Behavioral" and would otherwise mask the
        // technique check.
        let lower = trimmed.to_lowercase();
        let mut enhanced = trimmed.to_string();
        if !lower.contains("dimension") {
            enhanced = format!("{DIMENSION_THREE_SENTENCE} {enhanced}");
        }
        if !self.technique_re.is_match(trimmed) {
            enhanced.push(' ');
            enhanced.push_str(CBT_SENTENCE);
        }
        enhanced
    }
}

fn lookup(table: &[(&str, &'static str)], lower_text: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| lower_text.contains(key))
        .map(|(_, value)| *value)
}

fn compose_client_response(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Section::ClientResponse.default_text().to_string();
    }
    let lower = trimmed.to_lowercase();
    let mut enhanced = trimmed.to_string();
    if !lower.contains("engaged") && !lower.contains("participated") {
        enhanced.push(' ');
        enhanced.push_str(ENGAGEMENT_SENTENCE);
    }
    if !lower.contains("demonstrated") && !lower.contains("exhibited") {
        enhanced.push(' ');
        enhanced.push_str(RECEPTIVENESS_SENTENCE);
    }
    enhanced
}

fn compose_progress(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Section::Progress.default_text().to_string();
    }
    let lower = trimmed.to_lowercase();
    let mut enhanced = trimmed.to_string();
    if !lower.contains("goal") {
        enhanced = format!("Progress toward Goal #1: {enhanced}");
    }
    if !lower.contains("dimension") {
        enhanced.push(' ');
        enhanced.push_str(DIMENSION_FIVE_SENTENCE);
    }
    enhanced
}

fn compose_plan(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Section::Plan.default_text().to_string();
    }
    let lower = trimmed.to_lowercase();
    if !lower.contains("continue") && !lower.contains("next") {
        return format!("{CONTINUATION_SENTENCE} {trimmed}");
    }
    trimmed.to_string()
}

/// Collapse whitespace runs to single spaces, trim, and guarantee the text
/// ends with exactly one period.
fn normalize(text: &str) -> String {
    let mut out = text.split_whitespace().collect::<Vec<_>>().join(" ");
    while out.ends_with('.') {
        out.pop();
    }
    out.push('.');
    out
}
