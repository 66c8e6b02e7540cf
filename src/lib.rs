//! # native-platform
//!
//! Host operating-system and CPU-architecture identification with native
//! file naming rules.
//!
//! ## Overview
//!
//! `native-platform` answers two questions build tooling and native-library
//! loaders keep re-answering: which platform family is this process running
//! on, and what is a given artifact called there. Both identities resolve
//! once per process from environment-supplied strings and every naming rule
//! is a pure string transformation; nothing here touches the filesystem.
//!
//! ## Quick Start
//!
//! ```rust
//! use native_platform::{Architecture, Platform};
//!
//! let platform = Platform::current();
//! let arch = Architecture::current();
//! println!("running on {}-{}", platform, arch);
//!
//! // "librender.so" on Linux, "librender.dylib" on macOS,
//! // "render.dll" on Windows
//! let shared = platform.shared_library_name("render");
//!
//! // "fmt.exe" on Windows, "fmt" everywhere else
//! let tool = platform.executable_name("fmt");
//! ```
//!
//! ## Architecture
//!
//! - **Platform** — closed five-variant OS family carrying the naming
//!   rules for scripts, executables, shared and static libraries
//! - **Architecture** — closed seven-variant CPU family, resolved from
//!   the platform plus the host's raw architecture string
//! - Detection is total: unrecognized hosts resolve to the `Unknown`
//!   variants, never to an error
//! - Both `current()` values are memoized on first use and safe under
//!   concurrent initialization

pub mod arch;
pub mod error;
mod host;
mod names;
pub mod platform;

// Re-export core types
pub use arch::Architecture;
pub use error::{PlatformError, Result};
pub use platform::Platform;
