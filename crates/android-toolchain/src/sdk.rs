//! Android SDK collaborator
//!
//! Read-only view over an installed Android SDK: where it lives, the latest
//! platform / build-tools pairing, and whether the directory layout is
//! complete enough to build with. The filesystem is probed once; validators
//! only ever read the cached snapshot.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

/// Latest installed platform / build-tools pairing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkVersion {
    pub platform_name: String,
    pub build_tools_version_name: String,
}

/// Read-only contract the doctor validators consume
pub trait AndroidSdk {
    /// Resolved SDK root, if one was located
    fn directory(&self) -> Option<&Path>;

    /// Latest installed platform / build-tools pairing, if resolvable
    fn latest_version(&self) -> Option<&SdkVersion>;

    /// Structural problems with the installation, empty when well-formed
    fn validate_sdk_well_formed(&self) -> Vec<String>;
}

/// Snapshot of the local machine's SDK installation.
///
/// Built once by [`LocalAndroidSdk::locate`]; all trait methods read the
/// snapshot without touching the filesystem again.
#[derive(Debug, Clone)]
pub struct LocalAndroidSdk {
    directory: Option<PathBuf>,
    latest_version: Option<SdkVersion>,
    problems: Vec<String>,
}

impl LocalAndroidSdk {
    /// Probe the local machine for an SDK installation.
    ///
    /// Candidates are tried in order: the explicit override, `ANDROID_HOME`,
    /// then `ANDROID_SDK_ROOT`. The first existing directory that looks like
    /// an SDK root wins. No further search across OS-specific install
    /// locations is attempted.
    pub async fn locate(override_path: Option<&Path>) -> Self {
        let mut candidates: Vec<PathBuf> = Vec::new();

        if let Some(path) = override_path {
            candidates.push(path.to_path_buf());
        }
        if let Ok(home) = std::env::var(crate::ANDROID_HOME) {
            candidates.push(PathBuf::from(home));
        }
        if let Ok(root) = std::env::var(crate::ANDROID_SDK_ROOT) {
            candidates.push(PathBuf::from(root));
        }

        for path in candidates {
            if Self::is_sdk_root(&path) {
                info!("Found Android SDK at {:?}", path);
                return Self::snapshot(path).await;
            }
            debug!("No Android SDK at candidate {:?}", path);
        }

        debug!("No Android SDK located");
        Self {
            directory: None,
            latest_version: None,
            problems: Vec::new(),
        }
    }

    /// A directory counts as an SDK root when it holds at least one of the
    /// standard component directories. An existing but unrelated directory
    /// does not.
    fn is_sdk_root(path: &Path) -> bool {
        if !path.is_dir() {
            return false;
        }

        ["platforms", "build-tools", "platform-tools", "cmdline-tools", "tools"]
            .iter()
            .any(|component| path.join(component).is_dir())
    }

    /// Build a snapshot from a confirmed SDK root
    async fn snapshot(root: PathBuf) -> Self {
        let platform = Self::latest_platform(&root).await;
        let build_tools = Self::latest_build_tools(&root).await;

        let latest_version = match (&platform, &build_tools) {
            (Some(platform_name), Some(build_tools_version_name)) => Some(SdkVersion {
                platform_name: platform_name.clone(),
                build_tools_version_name: build_tools_version_name.clone(),
            }),
            _ => None,
        };

        let problems =
            Self::inspect_layout(&root, platform.is_some(), build_tools.is_some());

        Self {
            directory: Some(root),
            latest_version,
            problems,
        }
    }

    /// Highest installed platform, by API level ("android-NN" directories)
    async fn latest_platform(root: &Path) -> Option<String> {
        let mut latest: Option<u32> = None;

        let mut entries = tokio::fs::read_dir(root.join("platforms")).await.ok()?;
        while let Ok(Some(entry)) = entries.next_entry().await {
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Some(api) = name.strip_prefix("android-").and_then(|v| v.parse().ok()) {
                    latest = Some(latest.map_or(api, |current: u32| current.max(api)));
                }
            }
        }

        latest.map(|api| format!("android-{}", api))
    }

    /// Highest installed build-tools release, by parsed version
    async fn latest_build_tools(root: &Path) -> Option<String> {
        let mut versions: Vec<(u32, u32, u32, String)> = Vec::new();

        let mut entries = tokio::fs::read_dir(root.join("build-tools")).await.ok()?;
        while let Ok(Some(entry)) = entries.next_entry().await {
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if let Some((major, minor, patch)) = parse_build_tools_version(name) {
                    versions.push((major, minor, patch, name.to_string()));
                }
            }
        }

        versions.sort();
        versions.pop().map(|(_, _, _, name)| name)
    }

    /// Check the layout for the components a working install needs.
    ///
    /// One human-readable problem string per missing piece, empty when the
    /// installation is complete.
    fn inspect_layout(root: &Path, has_platform: bool, has_build_tools: bool) -> Vec<String> {
        let mut problems = Vec::new();

        if !has_platform {
            problems.push(
                "No Android platform installed; install at least one platforms;android-XX \
                 package with sdkmanager."
                    .to_string(),
            );
        }

        if !has_build_tools {
            problems.push(
                "No build-tools installed; install a build-tools;XX.X.X package with sdkmanager."
                    .to_string(),
            );
        }

        let adb = root
            .join("platform-tools")
            .join(if cfg!(windows) { "adb.exe" } else { "adb" });
        if !adb.exists() {
            problems.push("Android SDK is missing platform-tools (adb).".to_string());
        }

        if find_sdkmanager(root).is_none() {
            problems.push(
                "Android SDK command-line tools not found; install cmdline-tools;latest."
                    .to_string(),
            );
        }

        problems
    }
}

impl AndroidSdk for LocalAndroidSdk {
    fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    fn latest_version(&self) -> Option<&SdkVersion> {
        self.latest_version.as_ref()
    }

    fn validate_sdk_well_formed(&self) -> Vec<String> {
        self.problems.clone()
    }
}

/// Find the sdkmanager executable inside an SDK root
fn find_sdkmanager(root: &Path) -> Option<PathBuf> {
    let exe_name = if cfg!(windows) { "sdkmanager.bat" } else { "sdkmanager" };

    // Preferred location since cmdline-tools replaced the legacy tools dir.
    let path = root
        .join("cmdline-tools")
        .join("latest")
        .join("bin")
        .join(exe_name);
    if path.exists() {
        return Some(path);
    }

    // Versioned cmdline-tools/X.X installs
    let cmdline_tools = root.join("cmdline-tools");
    if let Ok(entries) = std::fs::read_dir(&cmdline_tools) {
        for entry in entries.flatten() {
            let path = entry.path().join("bin").join(exe_name);
            if path.exists() {
                return Some(path);
            }
        }
    }

    // Legacy tools directory
    let path = root.join("tools").join("bin").join(exe_name);
    if path.exists() {
        return Some(path);
    }

    None
}

/// Parse a build-tools directory name into a comparable version triple.
///
/// Tolerates preview suffixes like "35.0.0-rc1" by taking the leading
/// digits of the last segment.
fn parse_build_tools_version(name: &str) -> Option<(u32, u32, u32)> {
    let mut parts = name.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    let patch = {
        let last = parts.next()?;
        let digits: String = last.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()?
    };
    Some((major, minor, patch))
}
