//! Operating system entropy.
//!
//! Platform-specific implementations are selected at compile time. Each
//! submodule exposes the same crate-private surface:
//!
//! - `sys_random(&mut [u8])`: fill a buffer with cryptographically secure
//!   bytes taken straight from the kernel.
//!
//! The rest of the crate reaches the OS only through this function, via
//! [`crate::entropy::OsEntropy`].

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::sys_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;
