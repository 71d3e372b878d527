// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Sill desktop shell application library.
// Author: Lukas Bower
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Sill desktop shell: filesystem adapters, the session engine, and the
//! egui window. The binary wires these together; tests drive the session
//! directly against the in-memory and host adapters.

pub mod app;
pub mod fs;
pub mod session;

pub use app::{severity_color, SillApp};
pub use fs::{Filesystem, FsError, HostFs, MemFs};
pub use session::{SessionPhase, ShellSession};
