use crate::probe::config::{DEFAULT_MARKER_PATTERN, DEFAULT_MAX_HITS, ProbeRequest};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "android-ui-probe")]
#[command(about = "Dump the Android UI hierarchy over ADB and grep it for engagement markers")]
#[command(version = env!("PROBE_VERSION_DISPLAY"))]
pub struct Args {
    /// Path to the adb executable (default: search install folders, then PATH)
    #[arg(long, env = "V3_ADB_PATH", default_value = "")]
    pub adb_path: String,

    /// Device serial to target when several devices are attached
    #[arg(short, long, env = "V3_ANDROID_SERIAL")]
    pub serial: Option<String>,

    /// Serial under the bot config's variable name; `--serial` wins when both are set
    #[arg(long, env = "V3_ADB_SERIAL", hide = true)]
    pub adb_serial: Option<String>,

    /// Case-insensitive regular expression to search for
    #[arg(short, long, default_value = DEFAULT_MARKER_PATTERN, hide_default_value = true)]
    pub pattern: String,

    /// Maximum number of matching lines to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_HITS)]
    pub max_hits: usize,

    /// Print one line of context before and after each hit
    #[arg(short = 'C', long)]
    pub with_context: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    pub fn to_request(&self) -> ProbeRequest {
        ProbeRequest {
            adb_path: Some(self.adb_path.clone()).filter(|p| !p.trim().is_empty()),
            serial: self.serial.clone().or_else(|| self.adb_serial.clone()),
            pattern: self.pattern.clone(),
            max_hits: self.max_hits,
            with_context: self.with_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_request_defaults() {
        let args = Args::try_parse_from(["android-ui-probe", "--adb-path", ""]).unwrap();
        let request = args.to_request();
        assert_eq!(request.adb_path, None);
        assert_eq!(request.pattern, DEFAULT_MARKER_PATTERN);
        assert_eq!(request.max_hits, 20);
        assert!(!request.with_context);
        assert!(!args.json);
    }

    #[test]
    fn parses_every_flag() {
        let args = Args::try_parse_from([
            "android-ui-probe",
            "--adb-path",
            "C:/tools/adb.exe",
            "-s",
            "emulator-5554",
            "-p",
            "vues|j'aime",
            "-n",
            "2",
            "-C",
            "--json",
        ])
        .unwrap();
        let request = args.to_request();
        assert_eq!(request.adb_path.as_deref(), Some("C:/tools/adb.exe"));
        assert_eq!(request.serial.as_deref(), Some("emulator-5554"));
        assert_eq!(request.pattern, "vues|j'aime");
        assert_eq!(request.max_hits, 2);
        assert!(request.with_context);
        assert!(args.json);
    }

    #[test]
    fn serial_falls_back_to_bot_variable() {
        temp_env::with_vars(
            [
                ("V3_ANDROID_SERIAL", None),
                ("V3_ADB_SERIAL", Some("1d36d8f1")),
            ],
            || {
                let args = Args::try_parse_from(["android-ui-probe", "--adb-path", ""]).unwrap();
                assert_eq!(args.to_request().serial.as_deref(), Some("1d36d8f1"));
            },
        );
    }

    #[test]
    fn serial_variable_beats_bot_variable() {
        temp_env::with_vars(
            [
                ("V3_ANDROID_SERIAL", Some("emulator-5554")),
                ("V3_ADB_SERIAL", Some("1d36d8f1")),
            ],
            || {
                let args = Args::try_parse_from(["android-ui-probe", "--adb-path", ""]).unwrap();
                assert_eq!(args.to_request().serial.as_deref(), Some("emulator-5554"));
            },
        );
    }

    #[test]
    fn rejects_negative_max_hits() {
        assert!(Args::try_parse_from(["android-ui-probe", "--adb-path", "", "-n", "-1"]).is_err());
    }
}
