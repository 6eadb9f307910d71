use android_ui_probe::adb::AdbLocator;
use android_ui_probe::args::Args;
use android_ui_probe::config::LaunchConfig;
use android_ui_probe::probe::{
    self,
    error::{EXIT_OK, EXIT_USAGE},
};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            // clap uses 2 for usage errors, which is reserved for "adb not found"
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::from(EXIT_OK)
            };
        }
    };

    let launch = LaunchConfig::from_env();
    init_logging(args.debug || launch.android_debug_mode);
    log::debug!("Launch flags: {launch:?}");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("❌ Failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let locator = AdbLocator::from_env();
    let request = args.to_request();
    match runtime.block_on(probe::run(&locator, &request)) {
        Ok(report) => {
            if args.json {
                match report.to_json() {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("❌ Failed to encode report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", report.render_text());
            }
            ExitCode::from(EXIT_OK)
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
