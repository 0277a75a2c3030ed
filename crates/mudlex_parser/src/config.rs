//! Configuration for the text parser.

/// Tunable parser behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Whether ignore words ("the", "a") are skipped when matching aliases.
    ///
    /// Alias keys never contain ignore words, so with skipping off an input
    /// phrase that contains one matches no alias.
    pub skip_ignore_words: bool,

    /// Upper bound on the candidates returned from one parse. `None` returns
    /// every tied candidate.
    pub max_candidates: Option<usize>,

    /// Emit a trace event for every attempted verb/form pair.
    pub trace_candidates: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_ignore_words: true,
            max_candidates: None,
            trace_candidates: false,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration for debugging with per-candidate tracing.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            trace_candidates: true,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable ignore-word skipping.
    #[must_use]
    pub fn with_skip_ignore_words(mut self, skip: bool) -> Self {
        self.skip_ignore_words = skip;
        self
    }

    /// Builder method to set the candidate cap.
    ///
    /// A cap of zero is raised to one so a valid parse always returns a
    /// candidate.
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max.max(1));
        self
    }

    /// Builder method to return every tied candidate.
    #[must_use]
    pub fn without_candidate_cap(mut self) -> Self {
        self.max_candidates = None;
        self
    }

    /// Builder method to enable/disable per-candidate tracing.
    #[must_use]
    pub fn with_trace_candidates(mut self, trace: bool) -> Self {
        self.trace_candidates = trace;
        self
    }
}
