use regex::{Regex, RegexBuilder};

use super::types::{NoteSections, Section, ValidationReport};
use super::PipelineError;

/// Minimum character counts per section, in rendering order.
const MIN_LENGTHS: &[(Section, usize)] = &[
    (Section::ServiceProvided, 50),
    (Section::ClientResponse, 100),
    (Section::Interventions, 80),
    (Section::Progress, 60),
    (Section::Plan, 40),
];

/// Outcome-word stems accepted as measurable indicators in PROGRESS.
/// Stems, not full words, so "maintaining"/"attended"/"improvement" all
/// qualify.
const OUTCOME_STEMS: &[&str] = &[
    "improv",
    "increas",
    "decreas",
    "reduc",
    "maintain",
    "abstinent",
    "attend",
    "complet",
];

/// Number of compliance check families feeding the completeness percentage.
const CHECK_COUNT: usize = 5;

/// Advisory 245G compliance checks over a composed note. Never mutates the
/// note; the pipeline returns its best-effort document even when invalid.
pub struct ComplianceValidator {
    dimension_re: Regex,
    goal_re: Regex,
}

impl ComplianceValidator {
    pub fn new() -> Result<Self, PipelineError> {
        let dimension_re = RegexBuilder::new(r"dimension\s*[1-6]\b")
            .case_insensitive(true)
            .build()
            .map_err(|e| PipelineError::CompliancePattern(e.to_string()))?;
        let goal_re = RegexBuilder::new(r"goal\s*#?\s*\d+")
            .case_insensitive(true)
            .build()
            .map_err(|e| PipelineError::CompliancePattern(e.to_string()))?;
        Ok(Self {
            dimension_re,
            goal_re,
        })
    }

    pub fn validate(&self, sections: &NoteSections) -> ValidationReport {
        let mut errors = Vec::new();

        for (section, min) in MIN_LENGTHS {
            let text = sections.get(*section);
            if text.trim().is_empty() || text.len() < *min {
                errors.push(format!(
                    "{} section is missing or too short ({} < {} characters)",
                    section.display_name(),
                    text.len(),
                    min
                ));
            }
        }

        let serialized = sections.format_note();
        if !self.dimension_re.is_match(&serialized)
            && !serialized.to_lowercase().contains("asam")
        {
            errors.push("Note must reference an ASAM dimension".to_string());
        }

        let progress = sections.get(Section::Progress);
        let progress_lower = progress.to_lowercase();
        let measurable = progress.chars().any(|c| c.is_ascii_digit())
            || progress.contains('%')
            || OUTCOME_STEMS.iter().any(|s| progress_lower.contains(s));
        if !measurable {
            errors.push("PROGRESS section must include a measurable indicator".to_string());
        }

        if !self.goal_re.is_match(progress)
            && !progress_lower.contains("objective")
            && !progress_lower.contains("treatment plan")
        {
            errors.push("PROGRESS section must reference a treatment plan goal".to_string());
        }

        let failed = errors.len().min(CHECK_COUNT);
        let completeness_percent = (CHECK_COUNT - failed) as f32 * 100.0 / CHECK_COUNT as f32;

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            completeness_percent,
        }
    }
}
