use serde::Deserialize;

const DEFAULT_LISTEN_PORT: u16 = 3344;

/// Runtime configuration for the daemon.
///
/// Defaults are overridden by an optional `exambot.toml` next to the
/// binary, then by `EXAMBOT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// TCP port the tracker connects to.
    pub listen_port: u16,
    /// Capacity of the frame channel between intake and the pipeline.
    pub frame_buffer_size: usize,
    /// Capacity of the confirmed-action channel.
    pub action_buffer_size: usize,
    /// How long a gesture must be held before it fires, in milliseconds.
    pub hold_duration_ms: u64,
    /// Path to a JSON file with the exam questions. When unset, a small
    /// built-in question set is used so the daemon can run standalone.
    pub exam_path: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            listen_port: DEFAULT_LISTEN_PORT,
            frame_buffer_size: 60,
            action_buffer_size: 10,
            hold_duration_ms: 1500,
            exam_path: None,
        }
    }
}

impl Configuration {
    /// Load configuration, layering file and environment over defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("exambot").required(false))
            .add_source(config::Environment::with_prefix("EXAMBOT"))
            .build()?
            .try_deserialize()
    }

    pub fn hold_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.hold_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let configuration = Configuration::default();
        assert_eq!(configuration.listen_port, DEFAULT_LISTEN_PORT);
        assert_eq!(configuration.frame_buffer_size, 60);
        assert_eq!(configuration.action_buffer_size, 10);
        assert_eq!(
            configuration.hold_duration(),
            std::time::Duration::from_millis(1500)
        );
    }
}
