use std::sync::Arc;

use crate::analysis::fetcher::ResumeFetcher;
use crate::analysis::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable fetcher. Default: HttpResumeFetcher with the 30s timeout.
    pub fetcher: Arc<dyn ResumeFetcher>,
    pub vocabulary: Arc<SkillVocabulary>,
}
