use crate::pipeline::Section;

/// Result of the five-header structure check on an enhanced note.
#[derive(Debug, Clone)]
pub struct FormatCheck {
    pub is_valid: bool,
    pub missing_sections: Vec<&'static str>,
}

/// Verify the completion service produced all five section headers. The
/// deterministic pipeline guarantees this shape by construction; external
/// output has to be checked.
pub fn check_note_format(text: &str) -> FormatCheck {
    let missing_sections: Vec<&'static str> = Section::ALL
        .iter()
        .map(|s| s.display_name())
        .filter(|name| !text.contains(&format!("{name}:")))
        .collect();

    FormatCheck {
        is_valid: missing_sections.is_empty(),
        missing_sections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_NOTE: &str = "SERVICE PROVIDED:\nProvided 50-minute session.\n\n\
         CLIENT RESPONSE:\nClient engaged.\n\n\
         INTERVENTIONS:\nCBT techniques.\n\n\
         PROGRESS:\nGoal #1 on track.\n\n\
         PLAN:\nContinue weekly sessions.\n";

    #[test]
    fn complete_note_is_valid() {
        let check = check_note_format(COMPLETE_NOTE);
        assert!(check.is_valid);
        assert!(check.missing_sections.is_empty());
    }

    #[test]
    fn missing_headers_are_reported() {
        let check = check_note_format("SERVICE PROVIDED:\nSomething.\n\nPLAN:\nSomething.\n");
        assert!(!check.is_valid);
        assert_eq!(
            check.missing_sections,
            vec!["CLIENT RESPONSE", "INTERVENTIONS", "PROGRESS"]
        );
    }

    #[test]
    fn header_requires_trailing_colon() {
        let check = check_note_format("PLAN without a colon\n");
        assert!(!check.is_valid);
        assert_eq!(check.missing_sections.len(), 5);
    }
}
