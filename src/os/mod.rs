//! Operating system abstraction layer
//!
//! This module provides a unified, platform-independent interface to the
//! operating system entropy source used to seed the generators.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same surface:
//!
//! ```text
//! fn sys_random(buf: &mut [u8]) -> std::io::Result<()>
//! ```
//!
//! Unlike a cryptographic library, a failing entropy source is not fatal
//! here. Callers receive the error and decide whether to degrade (see
//! `rng::seed`) or to surface it (see `Csprng::try_from_os`).

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
mod unsupported;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) use unsupported::*;
