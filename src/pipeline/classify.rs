use super::types::Section;

/// Trigger keywords per section. Classification runs after lexicon
/// substitution, so several triggers are the clinical forms the lexicon
/// produces (e.g. "intervention" catches what "worked on" became).
const PLAN_TRIGGERS: &[&str] = &[
    "continue",
    "next",
    "homework",
    "schedule",
    "follow up",
    "follow-up",
    "see him",
    "see her",
    "see you",
    "referral",
];

const PROGRESS_TRIGGERS: &[&str] = &[
    "days",
    "progress",
    "goal",
    "better",
    "worse",
    "meeting",
    "sober",
    "abstinent",
    "improvement",
    "deterioration",
    "decompensation",
];

const INTERVENTIONS_TRIGGERS: &[&str] = &[
    "worked on",
    "taught",
    "practiced",
    "cbt",
    "therapy",
    "technique",
    "intervention",
    "psychoeducation",
    "skill rehearsal",
    "discussed and processed",
    "systematically examined",
    "reviewed and reinforced",
    "therapeutic exploration",
];

const CLIENT_RESPONSE_TRIGGERS: &[&str] = &[
    "client",
    "seemed",
    "appeared",
    "presented",
    "reported",
    "stated",
    "denied",
    "mood",
    "affect",
    "tearful",
];

const SERVICE_PROVIDED_TRIGGERS: &[&str] = &[
    "session",
    "provided",
    "minute",
    "telehealth",
    "in-person",
    "group",
    "individual",
];

/// Sections in evaluation order: most-specific, override-prone categories
/// first. A sentence mentioning both "continue" and "session" is PLAN,
/// since treatment-planning language is a rarer, stronger signal than
/// generic session-descriptive words. Changing this order changes output
/// for ambiguous sentences.
const PRIORITY: &[(Section, &[&str])] = &[
    (Section::Plan, PLAN_TRIGGERS),
    (Section::Progress, PROGRESS_TRIGGERS),
    (Section::Interventions, INTERVENTIONS_TRIGGERS),
    (Section::ClientResponse, CLIENT_RESPONSE_TRIGGERS),
    (Section::ServiceProvided, SERVICE_PROVIDED_TRIGGERS),
];

/// Assign a sentence to exactly one section. First section in priority
/// order with a case-insensitive substring hit wins; unclear sentences
/// default to CLIENT RESPONSE.
pub fn classify_sentence(sentence: &str) -> Section {
    let lower = sentence.to_lowercase();
    for (section, triggers) in PRIORITY {
        if triggers.iter().any(|t| lower.contains(t)) {
            return *section;
        }
    }
    Section::ClientResponse
}
