use serde::{Serialize, Serializer};

/// Coarse resume score derived solely from the number of matched skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeScore {
    Low,
    Fair,
    Good,
    Excellent,
}

impl ResumeScore {
    /// < 3 skills → 30, < 5 → 60, < 7 → 80, otherwise 95.
    pub fn from_count(count: usize) -> Self {
        match count {
            0..=2 => ResumeScore::Low,
            3..=4 => ResumeScore::Fair,
            5..=6 => ResumeScore::Good,
            _ => ResumeScore::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeScore::Low => "30",
            ResumeScore::Fair => "60",
            ResumeScore::Good => "80",
            ResumeScore::Excellent => "95",
        }
    }
}

impl Serialize for ResumeScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Counts entries in a comma-joined skill list. The empty string has none.
pub fn count_skills(skills: &str) -> usize {
    if skills.is_empty() {
        0
    } else {
        skills.split(',').count()
    }
}

pub fn calculate_resume_score(skills: &str) -> ResumeScore {
    ResumeScore::from_count(count_skills(skills))
}
