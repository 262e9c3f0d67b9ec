//! Error types for pmem mount operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type MountResult<T> = std::result::Result<T, MountError>;

/// Failure modes of the mount operation. Both are terminal; no retries
/// are performed here.
#[derive(Debug, Error)]
pub enum MountError {
    /// Creating the target directory failed. The OS error is passed
    /// through as-is; no mount was attempted and nothing was left
    /// behind to clean up.
    #[error(transparent)]
    CreateDir(#[from] std::io::Error),

    /// The mount syscall failed. The created target directory has
    /// already been removed (best effort) by the time this is
    /// returned.
    #[error("failed to mount pmem device {} onto {}: {errno}", device.display(), target.display())]
    Mount {
        /// Derived device node path, e.g. `/dev/pmem3`.
        device: PathBuf,
        /// Mount point the mount was attempted on.
        target: PathBuf,
        #[source]
        errno: nix::errno::Errno,
    },
}
