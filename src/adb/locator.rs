// Locate the adb executable: explicit override, package-manager installs, then PATH.
use super::error::{AdbError, AdbResult};
use super::types::BridgePath;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Name looked up on PATH; `which` appends PATHEXT suffixes on Windows.
pub const ADB_BINARY: &str = "adb";

type FindFn = Box<dyn Fn() -> Option<PathBuf> + Send + Sync>;

/// One named resolution strategy.
pub struct Resolver {
    name: &'static str,
    find: FindFn,
}

impl Resolver {
    pub fn new(
        name: &'static str,
        find: impl Fn() -> Option<PathBuf> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            find: Box::new(find),
        }
    }

    /// First candidate that is an executable file wins.
    pub fn install_locations(candidates: Vec<PathBuf>) -> Self {
        Self::new("package-manager install", move || {
            candidates.iter().find(|p| is_executable(p)).cloned()
        })
    }

    pub fn search_path(path_var: Option<OsString>, cwd: PathBuf) -> Self {
        Self::new("PATH", move || {
            let path_var = path_var.clone()?;
            which::which_in(ADB_BINARY, Some(path_var), &cwd).ok()
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

pub struct AdbLocator {
    resolvers: Vec<Resolver>,
}

impl AdbLocator {
    pub fn new(resolvers: Vec<Resolver>) -> Self {
        Self { resolvers }
    }

    /// Default strategy list for the current process environment.
    pub fn from_env() -> Self {
        let local_app_data = env::var_os("LOCALAPPDATA").map(PathBuf::from);
        let home = homedir::my_home().ok().flatten();
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(vec![
            Resolver::install_locations(default_install_candidates(
                local_app_data.as_deref(),
                home.as_deref(),
            )),
            Resolver::search_path(env::var_os("PATH"), cwd),
        ])
    }

    pub fn resolve(&self, explicit: Option<&str>) -> AdbResult<BridgePath> {
        let mut tried = Vec::with_capacity(self.resolvers.len() + 1);

        if let Some(raw) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
            tried.push(format!("explicit path {raw}"));
            let path = Path::new(raw);
            if is_executable(path) {
                log::debug!("Using explicit adb path {}", path.display());
                return Ok(BridgePath::new(path));
            }
            log::warn!("⚠️ adb path '{raw}' is not an executable file, searching default locations");
        }

        for resolver in &self.resolvers {
            tried.push(resolver.name.to_string());
            if let Some(path) = (resolver.find)() {
                log::debug!("Found adb via {}: {}", resolver.name, path.display());
                return Ok(BridgePath::new(path));
            }
        }

        Err(AdbError::BridgeNotFound { tried })
    }
}

/// Known install folders for the current platform, most specific first.
pub fn default_install_candidates(
    local_app_data: Option<&Path>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if cfg!(windows) {
        if let Some(local) = local_app_data {
            candidates.extend(winget_candidates(local));
            candidates.push(local.join("Android/Sdk/platform-tools/adb.exe"));
        }
    } else if cfg!(target_os = "macos") {
        candidates.push(PathBuf::from("/opt/homebrew/bin/adb"));
        candidates.push(PathBuf::from("/usr/local/bin/adb"));
        if let Some(home) = home {
            candidates.push(home.join("Library/Android/sdk/platform-tools/adb"));
        }
    } else {
        candidates.push(PathBuf::from("/usr/lib/android-sdk/platform-tools/adb"));
        if let Some(home) = home {
            candidates.push(home.join("Android/Sdk/platform-tools/adb"));
        }
    }
    candidates
}

/// WinGet `Google.PlatformTools` installs, newest package folder first.
pub fn winget_candidates(local_app_data: &Path) -> Vec<PathBuf> {
    let base = glob::Pattern::escape(&local_app_data.to_string_lossy());
    let pattern = format!(
        "{base}/Microsoft/WinGet/Packages/Google.PlatformTools_*/platform-tools/adb.exe"
    );
    let mut found: Vec<PathBuf> = match glob::glob(&pattern) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(e) => {
            log::debug!("Bad WinGet glob '{pattern}': {e}");
            Vec::new()
        }
    };
    found.sort();
    found.reverse();
    found
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
