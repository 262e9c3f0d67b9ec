//! Read-only mounting of persistent-memory (pmem) block devices.
//!
//! The guest side of a VM runtime exposes pre-provisioned pmem-backed
//! storage as numbered device nodes (`/dev/pmem0`, `/dev/pmem1`, ...).
//! This crate attaches such a device as a read-only ext4 filesystem at
//! a caller-supplied path:
//!
//! ```no_run
//! use std::path::Path;
//!
//! pmem_mount::mount(0, Path::new("/mnt/p0"))?;
//! # Ok::<(), pmem_mount::MountError>(())
//! ```
//!
//! The target directory is created (mode `0700`) before the mount and
//! removed again if the mount fails. The device is assumed to carry a
//! readonly ext4 filesystem, so journal replay is skipped (`noload`).
//!
//! # Modules
//!
//! - [`pmem`]: The mount operation
//! - [`ops`]: Swappable OS primitives (real syscalls in production)
//! - [`errors`]: Error types

#[cfg(not(target_os = "linux"))]
compile_error!("pmem-mount is Linux-only; build with a Linux target");

pub mod errors;
pub mod ops;
pub mod pmem;

pub use errors::{MountError, MountResult};
pub use ops::{MountOps, RealOps};
pub use pmem::{mount, PmemMount};
