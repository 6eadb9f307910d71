use std::env;
use std::process::Command;
use time::OffsetDateTime;

fn main() {
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let build_date = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|epoch| OffsetDateTime::from_unix_timestamp(epoch).ok())
        .unwrap_or_else(OffsetDateTime::now_utc)
        .date();

    let package_version = env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "0.0.0".to_string());

    // Release builds skip git so packaging works outside a checkout
    let profile = env::var("PROFILE").unwrap_or_default();
    let tagged = profile == "release" || {
        println!("cargo:rerun-if-changed=.git/HEAD");
        println!("cargo:rerun-if-changed=.git/refs/tags");
        git_tag().as_deref() == Some(format!("v{package_version}").as_str())
    };

    let version = if tagged {
        format!("{package_version} ({build_date})")
    } else {
        format!("{package_version}-dev ({build_date})")
    };
    println!("cargo:rustc-env=PROBE_VERSION_DISPLAY={version}");
}

fn git_tag() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--exact-match"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
