//! Pmem device mount helper.
//!
//! Mounts the numbered pmem device nodes (`/dev/pmem<N>`) read-only.

use std::path::{Path, PathBuf};

use nix::mount::MsFlags;

use crate::errors::{MountError, MountResult};
use crate::ops::{MountOps, RealOps};

/// Device node prefix; index 3 names `/dev/pmem3`.
const DEVICE_PREFIX: &str = "/dev/pmem";

/// The platform only provisions readonly pmem that is assumed to be ext4.
const FS_TYPE: &str = "ext4";

/// Skip journal replay; recovery would require write access.
const MOUNT_DATA: &str = "noload";

/// Mode for created mount points (owner only).
const TARGET_MODE: u32 = 0o700;

/// Mounts pmem devices over a set of OS primitives.
///
/// Production callers use [`PmemMount::new`] (or the free [`mount`]
/// function), which binds the real syscalls. Tests construct an
/// isolated instance over fakes with [`PmemMount::with_ops`].
#[derive(Debug)]
pub struct PmemMount<O = RealOps> {
    ops: O,
}

impl PmemMount<RealOps> {
    /// A mounter backed by the real OS calls.
    pub fn new() -> Self {
        Self { ops: RealOps }
    }
}

impl Default for PmemMount<RealOps> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: MountOps> PmemMount<O> {
    /// A mounter backed by the given primitives.
    pub fn with_ops(ops: O) -> Self {
        Self { ops }
    }

    /// Mount the pmem device `/dev/pmem<device>` read-only at `target`.
    ///
    /// `target` is created (mode `0700`) along with any missing
    /// parents. On mount failure the created `target` is removed again
    /// before the error is returned; on success the mount is left in
    /// place and ownership of it passes to the caller.
    pub fn mount(&self, device: u32, target: &Path) -> MountResult<()> {
        let span = tracing::info_span!("pmem_mount", device, target_path = %target.display());
        let _enter = span.enter();

        self.ops.create_dir_tree(target, TARGET_MODE)?;

        let source = device_path(device);
        if let Err(errno) =
            self.ops
                .mount(&source, target, FS_TYPE, MsFlags::MS_RDONLY, Some(MOUNT_DATA))
        {
            // Best-effort cleanup; the mount failure is what the caller
            // needs to see, so a removal error is only logged.
            if let Err(e) = self.ops.remove_dir_tree(target) {
                tracing::debug!(
                    target_path = %target.display(),
                    error = %e,
                    "failed to clean up mount point"
                );
            }
            tracing::warn!(
                device = %source.display(),
                target_path = %target.display(),
                %errno,
                "pmem mount failed"
            );
            return Err(MountError::Mount {
                device: source,
                target: target.to_path_buf(),
                errno,
            });
        }

        tracing::info!(
            device = %source.display(),
            target_path = %target.display(),
            "mounted pmem device read-only"
        );
        Ok(())
    }
}

/// Mount `/dev/pmem<device>` at `target` using the real OS primitives.
pub fn mount(device: u32, target: &Path) -> MountResult<()> {
    PmemMount::new().mount(device, target)
}

/// Derive the device node path for `device`.
fn device_path(device: u32) -> PathBuf {
    PathBuf::from(format!("{DEVICE_PREFIX}{device}"))
}
