// Feature flags the snap-bot launchers used to export as ambient environment.

pub const ENABLE_DEVICE_INPUT_VAR: &str = "V3_ENABLE_DEVICE_INPUT";
pub const ANDROID_DEBUG_VAR: &str = "V3_ANDROID_DEBUG";
pub const ANDROID_DEBUG_ALIAS_VAR: &str = "V3_DEBUG_ANDROID";
pub const LEGACY_BOT_VAR: &str = "RUN_LEGACY_BOT";

/// Explicit launch configuration, read once at process start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchConfig {
    /// Allow taps/swipes on the device. This tool itself never sends input.
    pub enable_device_input: bool,
    pub android_debug_mode: bool,
    pub legacy_bot_enabled: bool,
}

impl LaunchConfig {
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let on = is_truthy(value.as_ref());
            match key.as_ref() {
                ENABLE_DEVICE_INPUT_VAR => config.enable_device_input = on,
                ANDROID_DEBUG_VAR | ANDROID_DEBUG_ALIAS_VAR => {
                    config.android_debug_mode |= on;
                }
                LEGACY_BOT_VAR => config.legacy_bot_enabled = on,
                _ => {}
            }
        }
        config
    }

    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Variables to set on a child bot process, so nothing is inherited implicitly.
    pub fn env_pairs(&self) -> [(&'static str, &'static str); 3] {
        let flag = |on: bool| if on { "1" } else { "0" };
        [
            (ENABLE_DEVICE_INPUT_VAR, flag(self.enable_device_input)),
            (ANDROID_DEBUG_VAR, flag(self.android_debug_mode)),
            (LEGACY_BOT_VAR, flag(self.legacy_bot_enabled)),
        ]
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let config = LaunchConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn reads_recognized_flags() {
        let config = LaunchConfig::from_vars([
            ("V3_ENABLE_DEVICE_INPUT", "YES"),
            ("V3_DEBUG_ANDROID", "1"),
            ("RUN_LEGACY_BOT", "0"),
            ("PATH", "/usr/bin"),
        ]);
        assert!(config.enable_device_input);
        assert!(config.android_debug_mode);
        assert!(!config.legacy_bot_enabled);
    }

    #[test]
    fn debug_alias_does_not_clear_primary() {
        let config =
            LaunchConfig::from_vars([("V3_ANDROID_DEBUG", "1"), ("V3_DEBUG_ANDROID", "")]);
        assert!(config.android_debug_mode);
    }

    #[test]
    fn env_pairs_round_out_every_flag() {
        let config = LaunchConfig {
            enable_device_input: false,
            android_debug_mode: true,
            legacy_bot_enabled: true,
        };
        assert_eq!(
            config.env_pairs(),
            [
                ("V3_ENABLE_DEVICE_INPUT", "0"),
                ("V3_ANDROID_DEBUG", "1"),
                ("RUN_LEGACY_BOT", "1"),
            ]
        );
    }
}
