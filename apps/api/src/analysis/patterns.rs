//! Pattern Library — static registries backing the extraction heuristics,
//! plus a small compilation cache for regexes generated at runtime.
//!
//! All tables are process-wide constants. Traversal order of the profession
//! taxonomy is its declaration order; callers depend on that for stable
//! tie-breaking, so entries must not be reordered.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that disqualify a line (or a captured span) from being a personal
/// name. Section headers and boilerplate, matched as case-insensitive
/// substrings.
pub const NON_NAME_WORDS: &[&str] = &[
    "skills",
    "experience",
    "education",
    "summary",
    "profile",
    "objective",
    "career",
    "work",
    "professional",
    "personal",
    "contact",
    "details",
    "resume",
    "cv",
    "curriculum vitae",
];

/// Profession taxonomy: profession root -> qualifying contexts.
///
/// Declaration order is the classifier's traversal order. The first
/// (profession, context) pair that matches a search window wins.
pub const PROFESSIONS: &[(&str, &[&str])] = &[
    (
        "engineer",
        &[
            "software", "mechanical", "electrical", "civil", "systems", "data", "network",
            "cloud", "devops", "security", "quality", "test", "automation",
        ],
    ),
    (
        "developer",
        &[
            "software", "web", "frontend", "backend", "fullstack", "mobile", "game",
            "application", "python", "java", "javascript", "react", "angular", "vue",
        ],
    ),
    (
        "manager",
        &[
            "project", "product", "team", "program", "technical", "development",
            "engineering", "quality", "operations", "business", "it",
        ],
    ),
    (
        "designer",
        &[
            "graphic", "ui", "ux", "web", "product", "interaction", "user interface",
            "user experience", "visual", "creative",
        ],
    ),
    (
        "analyst",
        &[
            "data", "business", "systems", "financial", "security", "market", "research",
            "quality", "process", "business intelligence",
        ],
    ),
    (
        "consultant",
        &[
            "it", "business", "management", "technical", "security", "cloud", "digital",
            "strategy", "process",
        ],
    ),
    (
        "scientist",
        &[
            "data", "research", "computer", "machine learning", "artificial intelligence",
            "ai", "ml", "quantitative",
        ],
    ),
    (
        "teacher",
        &[
            "computer", "science", "mathematics", "english", "language", "programming",
            "technology", "it",
        ],
    ),
    (
        "professor",
        &[
            "assistant", "associate", "full", "computer science", "engineering",
            "mathematics", "physics",
        ],
    ),
    (
        "accountant",
        &["senior", "junior", "financial", "tax", "audit", "cost", "management"],
    ),
    (
        "nurse",
        &["registered", "practical", "clinical", "specialist", "practitioner"],
    ),
    (
        "doctor",
        &["medical", "research", "clinical", "general", "specialist", "surgeon"],
    ),
    (
        "technician",
        &["it", "lab", "technical", "support", "network", "system", "field", "service"],
    ),
    (
        "administrator",
        &["system", "database", "network", "it", "security", "cloud", "devops"],
    ),
    (
        "specialist",
        &["it", "security", "network", "support", "cloud", "devops", "database", "system"],
    ),
    (
        "architect",
        &["software", "solution", "system", "enterprise", "technical", "cloud", "security"],
    ),
    (
        "lead",
        &["technical", "development", "engineering", "team", "project", "product"],
    ),
    (
        "director",
        &["technical", "engineering", "development", "it", "digital", "technology"],
    ),
    (
        "officer",
        &["technical", "security", "information", "technology", "it", "chief"],
    ),
    (
        "executive",
        &["chief", "technical", "technology", "information", "it", "digital"],
    ),
];

/// Returns true if `token` equals a profession root from the taxonomy.
/// Used by the skill collector to avoid re-capturing roles as skills.
pub fn is_profession_root(token: &str) -> bool {
    PROFESSIONS.iter().any(|(prof, _)| *prof == token)
}

/// Common-skill whitelist scanned across the whole text. Entries with regex
/// metacharacters ("c++", "c#") are escaped at match time.
pub const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "excel",
    "sql",
    "c++",
    "c#",
    "javascript",
    "html",
    "css",
    "react",
    "node",
    "aws",
    "azure",
    "docker",
    "linux",
    "git",
];

/// Phone number formats, tried in order. Used only as a presence test — the
/// first matching pattern short-circuits. Duplicated shapes between regions
/// are kept as-is so the ordered-list contract stays stable.
pub const PHONE_PATTERNS: &[&str] = &[
    // Sri Lankan formats
    r"\+94[-\s]?\d{2}[-\s]?\d{3}[-\s]?\d{4}\b",
    r"\+94\d{9}\b",
    r"0\d{2}[-\s]?\d{3}[-\s]?\d{4}\b",
    // Other international formats
    r"\+\d{1,3}[-.\s]?\d{1,3}[-.\s]?\d{3,4}[-.\s]?\d{4}",
    // US/Canada
    r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
    // UK
    r"\b\d{2}[-.\s]?\d{4}[-.\s]?\d{4}\b",
    // Indian
    r"\b\d{2}[-.\s]?\d{3}[-.\s]?\d{3}[-.\s]?\d{3}\b",
    // French
    r"\b\d{2}[-.\s]?\d{2}[-.\s]?\d{2}[-.\s]?\d{2}[-.\s]?\d{2}\b",
    // Swedish
    r"\b\d{3}[-.\s]?\d{2}[-.\s]?\d{2}[-.\s]?\d{2}\b",
    // Australian
    r"\b\d{2}[-.\s]?\d{3}[-.\s]?\d{4}\b",
    // Japanese
    r"\b\d{3}[-.\s]?\d{4}[-.\s]?\d{4}\b",
    // New Zealand
    r"\b\d{2}[-.\s]?\d{4}[-.\s]?\d{4}\b",
    // Short format
    r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{3}\b",
    // Alternative format
    r"\b\d{4}[-.\s]?\d{3}[-.\s]?\d{3}\b",
];

/// Keywords that mark a line as role/title metadata for the classifier's
/// indicator-line window.
pub const PROFESSION_INDICATORS: &[&str] = &[
    "position",
    "role",
    "title",
    "job",
    "profession",
    "career",
    "occupation",
];

// ────────────────────────────────────────────────────────────────────────────
// Regex compilation cache
// ────────────────────────────────────────────────────────────────────────────

static REGEX_CACHE: Lazy<RwLock<HashMap<String, Regex>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns a compiled regex for `pattern`, compiling it at most once per
/// process. `Regex` clones share the compiled program, so handing out clones
/// is cheap.
///
/// The profession classifier generates patterns combinatorially (profession x
/// context x 4 surface forms), so caching matters there; the fixed tables go
/// through the same path for uniformity.
///
/// Panics on an invalid pattern. Every pattern in this crate is either a
/// static literal or built from escaped static table entries, so compilation
/// cannot fail on user input.
pub fn cached_regex(pattern: &str) -> Regex {
    if let Some(re) = REGEX_CACHE
        .read()
        .expect("regex cache lock poisoned")
        .get(pattern)
    {
        return re.clone();
    }

    let re = Regex::new(pattern)
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"));
    REGEX_CACHE
        .write()
        .expect("regex cache lock poisoned")
        .insert(pattern.to_string(), re.clone());
    re
}
