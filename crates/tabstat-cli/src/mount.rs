//! Best-effort Google Drive mount for Colab runtimes.
//!
//! Outside Colab there is nothing to mount, so the step degrades to a
//! logged no-op instead of failing the run.

use std::path::Path;

/// Fixed mount point used by the Colab Drive integration.
pub const DRIVE_MOUNT_POINT: &str = "/content/drive";

/// Environment marker set by Colab runtimes.
const COLAB_ENV_VAR: &str = "COLAB_RELEASE_TAG";

/// Outcome of the mount capability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountStatus {
    /// Colab runtime detected and the mount point is present.
    Available,
    /// Colab runtime detected but the mount point directory is missing.
    MissingMountPoint,
    /// Not a Colab runtime; the step is a no-op.
    Unsupported,
}

/// Check whether Drive storage can be reached at `mount_point` and log the
/// outcome. Never fatal.
pub fn mount_drive(mount_point: &Path) -> MountStatus {
    let colab_runtime = std::env::var_os(COLAB_ENV_VAR).is_some();
    let status = detect(colab_runtime, mount_point.exists());

    match status {
        MountStatus::Available => {
            tracing::info!(
                event = "mount_checked",
                status = "available",
                mount_point = %mount_point.display()
            );
        }
        MountStatus::MissingMountPoint => {
            tracing::warn!(
                event = "mount_checked",
                status = "missing_mount_point",
                mount_point = %mount_point.display(),
                "create the directory first or adjust the path"
            );
        }
        MountStatus::Unsupported => {
            tracing::info!(
                event = "mount_checked",
                status = "unsupported",
                "not a Colab runtime; skipping mount"
            );
        }
    }

    status
}

/// Pure capability decision so every branch is testable without touching
/// the process environment.
fn detect(colab_runtime: bool, mount_point_exists: bool) -> MountStatus {
    match (colab_runtime, mount_point_exists) {
        (false, _) => MountStatus::Unsupported,
        (true, true) => MountStatus::Available,
        (true, false) => MountStatus::MissingMountPoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_colab_runtime_is_unsupported() {
        assert_eq!(detect(false, true), MountStatus::Unsupported);
        assert_eq!(detect(false, false), MountStatus::Unsupported);
    }

    #[test]
    fn colab_runtime_with_mount_point_is_available() {
        assert_eq!(detect(true, true), MountStatus::Available);
    }

    #[test]
    fn colab_runtime_without_mount_point_is_flagged() {
        assert_eq!(detect(true, false), MountStatus::MissingMountPoint);
    }
}
