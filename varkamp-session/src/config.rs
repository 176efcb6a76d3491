/// Session controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Wrong answers on one puzzle before its hint is revealed.
    pub hint_after_failures: u32,
    /// Prefix of the persisted keys (`<prefix>started`, `<prefix>startTime`,
    /// `<prefix>current`).
    pub key_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hint_after_failures: 2,
            key_prefix: "varkamp_".to_string(),
        }
    }
}

impl SessionConfig {
    pub(crate) fn started_key(&self) -> String {
        format!("{}started", self.key_prefix)
    }

    pub(crate) fn start_time_key(&self) -> String {
        format!("{}startTime", self.key_prefix)
    }

    pub(crate) fn current_key(&self) -> String {
        format!("{}current", self.key_prefix)
    }
}
