//! Case-insensitive substring matching against a fixed skill vocabulary.

/// The built-in vocabulary, checked in this order.
pub const DEFAULT_SKILLS: [&str; 30] = [
    "python",
    "java",
    "c++",
    "javascript",
    "react",
    "angular",
    "vue",
    "machine learning",
    "data science",
    "web development",
    "mobile development",
    "cloud computing",
    "aws",
    "azure",
    "gcp",
    "sql",
    "database",
    "tensorflow",
    "keras",
    "django",
    "flask",
    "nodejs",
    "git",
    "docker",
    "kubernetes",
    "agile",
    "scrum",
    "communication",
    "leadership",
    "problem solving",
];

/// Separator used when joining matched skills.
pub const SKILL_SEPARATOR: &str = ", ";

/// Immutable set of lowercase skill terms, built once at startup and shared
/// through `AppState`.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS)
    }
}

impl SkillVocabulary {
    /// Terms are lower-cased; the first occurrence of a duplicate wins.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().to_lowercase();
            if !unique.contains(&term) {
                unique.push(term);
            }
        }
        Self { terms: unique }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term contained in `text` (any case), once each, in vocabulary order.
    ///
    /// Plain substring containment: "java" also matches inside "javascript".
    pub fn match_skills(&self, text: &str) -> Vec<&str> {
        let text_lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|term| text_lower.contains(term.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Matched skills joined with `", "`. Empty when nothing matches.
    pub fn extract_skills(&self, text: &str) -> String {
        self.match_skills(text).join(SKILL_SEPARATOR)
    }
}
