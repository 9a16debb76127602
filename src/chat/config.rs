//! Configuration for the combined chat engine.

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use support_chat::chat::config::CombinedChatConfig;
///
/// let config = CombinedChatConfig::default();
/// assert!(config.help_center_experience);
///
/// let legacy = CombinedChatConfig::legacy();
/// assert!(!legacy.help_center_experience);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedChatConfig {
    /// Whether a live-agent conversation referenced by the interaction is
    /// merged into the transcript. When `false` the transcript stays bot-only.
    pub help_center_experience: bool,
}

impl Default for CombinedChatConfig {
    fn default() -> Self {
        Self {
            help_center_experience: true,
        }
    }
}

impl CombinedChatConfig {
    /// Creates a configuration that never hands off to live agents.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            help_center_experience: false,
        }
    }

    /// Sets the help-center experience flag.
    #[must_use]
    pub const fn with_help_center_experience(mut self, enabled: bool) -> Self {
        self.help_center_experience = enabled;
        self
    }
}
