//! Swappable OS primitives behind the mount operation.
//!
//! Tests run against recording fakes instead of the live mount table;
//! production uses [`RealOps`].

use std::io;
use std::path::Path;

use nix::errno::Errno;
use nix::mount::{mount, MsFlags};

/// The three OS calls the mount operation is built from.
pub trait MountOps {
    /// Create `path` and any missing parents with the given mode bits.
    fn create_dir_tree(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Remove `path` and everything under it.
    fn remove_dir_tree(&self, path: &Path) -> io::Result<()>;

    /// Issue the `mount(2)` syscall.
    fn mount(
        &self,
        source: &Path,
        target: &Path,
        fstype: &str,
        flags: MsFlags,
        data: Option<&str>,
    ) -> Result<(), Errno>;
}

/// Syscall-backed implementation used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealOps;

impl MountOps for RealOps {
    fn create_dir_tree(&self, path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::DirBuilderExt;

        // The mode applies to every directory created, not just the leaf.
        std::fs::DirBuilder::new()
            .recursive(true)
            .mode(mode)
            .create(path)
    }

    fn remove_dir_tree(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn mount(
        &self,
        source: &Path,
        target: &Path,
        fstype: &str,
        flags: MsFlags,
        data: Option<&str>,
    ) -> Result<(), Errno> {
        mount(Some(source), target, Some(fstype), flags, data)
    }
}
