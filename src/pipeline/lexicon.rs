use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::PipelineError;

/// Semantic grouping for substitution rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexiconCategory {
    EmotionalState,
    Progress,
    SubstanceUse,
    TherapeuticAction,
    Engagement,
    Risk,
    Cognitive,
    Social,
    Medical,
    Measurement,
}

/// One casual-to-clinical substitution rule. Patterns are matched
/// case-insensitively on whole-word boundaries.
#[derive(Debug, Clone, Copy)]
pub struct LexiconEntry {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub category: LexiconCategory,
}

const fn rule(
    pattern: &'static str,
    replacement: &'static str,
    category: LexiconCategory,
) -> LexiconEntry {
    LexiconEntry {
        pattern,
        replacement,
        category,
    }
}

use LexiconCategory::{
    Cognitive, EmotionalState, Engagement, Measurement, Medical, Progress, Risk, Social,
    SubstanceUse, TherapeuticAction,
};

/// The full casual-to-clinical mapping dictionary.
///
/// Declaration order breaks ties between equal-length patterns; the compiled
/// matcher orders patterns longest-first so multi-word phrases win over any
/// single words they contain.
pub const CLINICAL_MAPPINGS: &[LexiconEntry] = &[
    // Emotional states
    rule("upset", "exhibited emotional distress", EmotionalState),
    rule("sad", "presented with depressed affect", EmotionalState),
    rule("happy", "displayed euthymic mood", EmotionalState),
    rule("angry", "demonstrated emotional dysregulation", EmotionalState),
    rule("anxious", "presented with anxiety symptoms", EmotionalState),
    rule("worried", "expressed anxiety regarding", EmotionalState),
    rule("stressed", "reported elevated stress levels", EmotionalState),
    rule("frustrated", "exhibited frustration tolerance difficulties", EmotionalState),
    rule("crying", "displayed tearful affect", EmotionalState),
    rule("laughing", "demonstrated appropriate affect", EmotionalState),
    rule("scared", "expressed fear and apprehension", EmotionalState),
    rule("nervous", "presented with observable anxiety", EmotionalState),
    rule("calm", "appeared emotionally regulated", EmotionalState),
    rule("mad", "expressed anger", EmotionalState),
    rule("depressed", "exhibited depressive symptoms", EmotionalState),
    rule("fine", "reported stable mood", EmotionalState),
    rule("okay", "indicated baseline functioning", EmotionalState),
    rule("good mood", "presented with positive affect", EmotionalState),
    rule("bad mood", "displayed dysphoric mood", EmotionalState),
    rule("mood swings", "exhibited affective lability", EmotionalState),
    // Progress indicators
    rule("doing better", "demonstrating clinical improvement", Progress),
    rule("doing worse", "showing decompensation", Progress),
    rule("getting better", "exhibiting positive treatment response", Progress),
    rule("not doing well", "experiencing symptom exacerbation", Progress),
    rule("improved", "showed measurable progress", Progress),
    rule("declined", "demonstrated clinical decline", Progress),
    rule("stable", "maintained current functioning level", Progress),
    rule("worse", "exhibited symptom deterioration", Progress),
    // Substance use
    rule("clean", "abstinent from substances", SubstanceUse),
    rule("sober", "abstinent from substances", SubstanceUse),
    rule("using", "actively using substances", SubstanceUse),
    rule("relapsed", "experienced substance use episode", SubstanceUse),
    rule("slipped", "had a brief substance use episode", SubstanceUse),
    rule("drank", "consumed alcohol", SubstanceUse),
    rule("used", "engaged in substance use", SubstanceUse),
    rule("high", "under the influence of substances", SubstanceUse),
    rule("drunk", "intoxicated with alcohol", SubstanceUse),
    // Therapeutic actions
    rule("worked on", "implemented interventions targeting", TherapeuticAction),
    rule("talked about", "discussed and processed", TherapeuticAction),
    rule("practiced", "engaged in skill rehearsal", TherapeuticAction),
    rule("went over", "reviewed and reinforced", TherapeuticAction),
    rule("taught", "provided psychoeducation regarding", TherapeuticAction),
    rule("explained", "clarified therapeutic concepts", TherapeuticAction),
    rule("reviewed", "systematically examined", TherapeuticAction),
    rule("explored", "conducted therapeutic exploration of", TherapeuticAction),
    rule("processed", "facilitated processing of", TherapeuticAction),
    rule("breathing", "breathing exercises", TherapeuticAction),
    rule("prayer", "spiritual practices", TherapeuticAction),
    rule("meditation", "mindfulness practices", TherapeuticAction),
    // Engagement
    rule("participated", "actively engaged in therapeutic discussion", Engagement),
    rule("cooperative", "demonstrated therapeutic cooperation", Engagement),
    rule("resistant", "exhibited resistance to therapeutic interventions", Engagement),
    rule("motivated", "displayed intrinsic motivation for change", Engagement),
    rule("willing", "expressed willingness to engage", Engagement),
    rule("reluctant", "showed reluctance to participate", Engagement),
    rule("engaged", "actively participated in session activities", Engagement),
    // Risk
    rule("triggers", "relapse triggers", Risk),
    rule("suicidal", "reported suicidal ideation", Risk),
    rule("self-harm", "engaged in self-injurious behavior", Risk),
    rule("hopeless", "expressed feelings of hopelessness", Risk),
    rule("overdose", "experienced substance overdose", Risk),
    // Cognitive
    rule("coping skills", "coping strategies", Cognitive),
    rule("negative thoughts", "maladaptive thought patterns", Cognitive),
    rule("can't focus", "demonstrated impaired concentration", Cognitive),
    rule("confused", "presented with confusion", Cognitive),
    rule("overthinking", "exhibited ruminative thinking", Cognitive),
    // Social
    rule("meetings", "support meetings", Social),
    rule("sponsor", "12-step sponsor", Social),
    rule("steps", "12-step program principles", Social),
    rule("lonely", "reported social isolation", Social),
    rule("argument", "interpersonal conflict", Social),
    rule("family problems", "familial stressors", Social),
    // Medical
    rule("meds", "prescribed medications", Medical),
    rule("doctor", "medical provider", Medical),
    rule("can't sleep", "reported sleep disturbance", Medical),
    rule("tired", "reported fatigue", Medical),
    rule("detox", "withdrawal management", Medical),
    // Measurement
    rule("out of 10", "on a 10-point scale", Measurement),
    rule("every day", "daily", Measurement),
    rule("once a week", "weekly", Measurement),
    rule("all the time", "persistently", Measurement),
    rule("a lot", "frequently", Measurement),
];

/// Compiled substitution engine.
///
/// All rules are folded into one case-insensitive alternation with patterns
/// ordered longest-first, so a single left-to-right pass applies every rule
/// and replacement text is never re-matched by other rules. Immutable after
/// construction; safe to share across concurrent invocations.
pub struct Lexicon {
    matcher: Regex,
    replacements: HashMap<String, &'static str>,
}

impl Lexicon {
    /// Compile the rule table. Fails fast on a malformed pattern rather than
    /// letting a broken rule corrupt every subsequent note.
    pub fn compile() -> Result<Self, PipelineError> {
        Self::from_entries(CLINICAL_MAPPINGS)
    }

    fn from_entries(entries: &'static [LexiconEntry]) -> Result<Self, PipelineError> {
        let mut ordered: Vec<&LexiconEntry> = entries.iter().collect();
        // Stable sort: equal-length patterns keep declaration order.
        ordered.sort_by_key(|e| std::cmp::Reverse(e.pattern.chars().count()));

        let alternation = ordered
            .iter()
            .map(|e| regex::escape(e.pattern))
            .collect::<Vec<_>>()
            .join("|");
        let matcher = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()
            .map_err(|e| PipelineError::Lexicon(e.to_string()))?;

        let replacements = entries
            .iter()
            .map(|e| (e.pattern.to_lowercase(), e.replacement))
            .collect();

        Ok(Self {
            matcher,
            replacements,
        })
    }

    /// Replace every whole-word occurrence of a casual phrase with its
    /// clinical counterpart in a single pass.
    pub fn apply(&self, text: &str) -> String {
        self.matcher
            .replace_all(text, |caps: &regex::Captures| {
                let matched = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
                self.replacements
                    .get(&matched.to_lowercase())
                    .copied()
                    .unwrap_or(matched)
                    .to_string()
            })
            .into_owned()
    }

    /// Number of rules in the compiled table.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::compile().unwrap()
    }

    #[test]
    fn substitutes_whole_words() {
        let out = lexicon().apply("Client was very upset and anxious");
        assert_eq!(
            out,
            "Client was very exhibited emotional distress and presented with anxiety symptoms"
        );
    }

    #[test]
    fn word_boundary_leaves_supersets_alone() {
        // "upsetting" contains "upset" but must not be rewritten.
        let out = lexicon().apply("The news was upsetting");
        assert_eq!(out, "The news was upsetting");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let out = lexicon().apply("UPSET about the visit");
        assert_eq!(out, "exhibited emotional distress about the visit");
    }

    #[test]
    fn longer_phrase_wins_over_contained_word() {
        // "good mood" has its own rule; "mood swings" likewise.
        let out = lexicon().apply("Client was in a good mood despite mood swings");
        assert_eq!(
            out,
            "Client was in a presented with positive affect despite exhibited affective lability"
        );
    }

    #[test]
    fn replacement_text_is_not_rematched() {
        // "practiced" maps to "engaged in skill rehearsal"; the inserted
        // "engaged" must not then feed the "engaged" rule.
        let out = lexicon().apply("Client practiced all week");
        assert_eq!(out, "Client engaged in skill rehearsal all week");
    }

    #[test]
    fn hyphenated_patterns_match() {
        let out = lexicon().apply("Denied self-harm this week");
        assert_eq!(out, "Denied engaged in self-injurious behavior this week");
    }

    #[test]
    fn multiword_measurement_phrase() {
        let out = lexicon().apply("Rated distress at 7 out of 10");
        assert_eq!(out, "Rated distress at 7 on a 10-point scale");
    }

    #[test]
    fn untouched_text_passes_through() {
        let out = lexicon().apply("Session lasted the usual length");
        assert_eq!(out, "Session lasted the usual length");
    }

    #[test]
    fn table_covers_all_ten_categories() {
        use std::collections::HashSet;
        let categories: HashSet<_> = CLINICAL_MAPPINGS.iter().map(|e| e.category).collect();
        assert_eq!(categories.len(), 10);
    }

    #[test]
    fn compiled_table_matches_declared_rules() {
        assert_eq!(lexicon().len(), CLINICAL_MAPPINGS.len());
    }
}
