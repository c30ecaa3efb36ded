//! Skill Collector — union of a "Skills" section scan and a whole-text
//! whitelist scan. Tokens are lowercased; a `BTreeSet` keeps display order
//! stable.

use std::collections::BTreeSet;

use crate::analysis::patterns::{cached_regex, is_profession_root, COMMON_SKILLS};
use crate::analysis::text::ResumeText;

/// First "Skills" marker plus up to 300 characters of section body. A dense
/// section can overflow the window and lose trailing entries; that slice
/// length is a deliberate, documented cap.
const SKILL_SECTION_PATTERN: &str = r"(?i)Skills[\s:]*([\s\S]{0,300})";

/// Alphanumeric-plus-`+`/`#` tokens of length >= 2 inside the section window.
const SKILL_TOKEN_PATTERN: &str = r"\b([A-Za-z+#]{2,})\b";

/// Collects the skill set for one résumé. An empty set is a valid outcome.
pub fn collect_skills(text: &ResumeText) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();

    // Step 1: tokens from the dedicated section, minus profession roots so
    // "Engineer" in a skills list is not re-captured as a skill.
    if let Some(caps) = cached_regex(SKILL_SECTION_PATTERN).captures(text.full()) {
        let section = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        for token in cached_regex(SKILL_TOKEN_PATTERN).find_iter(section) {
            let token = token.as_str().to_lowercase();
            if !is_profession_root(&token) {
                skills.insert(token);
            }
        }
    }

    // Step 2: whole-text scan against the whitelist. Escaping handles the
    // metacharacters in "c++" and "c#".
    for skill in COMMON_SKILLS {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(skill));
        if cached_regex(&pattern).is_match(text.full()) {
            skills.insert((*skill).to_string());
        }
    }

    skills
}
