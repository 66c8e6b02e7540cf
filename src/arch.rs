//! CPU architecture detection.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::host;
use crate::platform::Platform;

/// The CPU instruction-set family of the host
///
/// A closed set resolved from the current [`Platform`] plus the host's
/// raw architecture string; the string rules branch per platform family,
/// so the same raw string can resolve differently on different
/// platforms. Resolution is total and [`Architecture::Unknown`] is
/// reserved for hosts whose platform is itself unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// 64-bit x86 (amd64)
    X64,
    /// 32-bit x86
    X86,
    /// 64-bit ARM (AArch64)
    Arm64,
    /// 32-bit ARM
    Arm32,
    /// PowerPC 64-bit little-endian
    Ppc64le,
    /// RISC-V 64-bit
    Riscv64,
    /// The platform was unknown, so no architecture rule applied
    Unknown,
}

impl Architecture {
    /// The architecture of the host this process is running on
    ///
    /// Resolved on the first call from [`Platform::current`] and the raw
    /// architecture string, then memoized for the lifetime of the
    /// process. Concurrent first calls are safe and all observe the same
    /// value.
    pub fn current() -> Architecture {
        static CURRENT: OnceLock<Architecture> = OnceLock::new();
        *CURRENT.get_or_init(|| {
            let platform = Platform::current();
            let raw_arch = host::arch_name();
            let architecture = Architecture::detect(platform, &raw_arch);
            tracing::debug!(
                raw_arch = %raw_arch,
                architecture = %architecture,
                "Host architecture resolved"
            );
            architecture
        })
    }

    /// Resolve an architecture from a platform family and a raw
    /// architecture string
    ///
    /// The raw string is lowercased, then matched by per-platform rules:
    ///
    /// - **FreeBSD** is always [`Architecture::X64`]
    /// - **Linux**: `arm*`/`aarch64*` strings split on a `64` marker
    ///   (`armv8*` counts as 64-bit) into `Arm64` or `Arm32`; `ppc*` is
    ///   `Ppc64le`; `riscv*` is `Riscv64`; everything else falls back to
    ///   `X64`
    /// - **macOS**: `aarch64*` is `Arm64`, everything else `X64`
    /// - **Windows**: strings containing `64` are `Arm64` for `aarch64*`
    ///   and `X64` otherwise; strings without it are `X86`
    /// - **Unknown** platform yields [`Architecture::Unknown`]
    ///
    /// Total: every input resolves to a variant, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use native_platform::{Architecture, Platform};
    ///
    /// assert_eq!(Architecture::detect(Platform::Linux, "x86_64"), Architecture::X64);
    /// assert_eq!(Architecture::detect(Platform::Linux, "armv7l"), Architecture::Arm32);
    /// assert_eq!(Architecture::detect(Platform::Windows, "AARCH64"), Architecture::Arm64);
    /// assert_eq!(Architecture::detect(Platform::Unknown, "x86_64"), Architecture::Unknown);
    /// ```
    pub fn detect(platform: Platform, raw_arch: &str) -> Architecture {
        let arch = raw_arch.to_lowercase();
        match platform {
            Platform::FreeBSD => Architecture::X64,
            Platform::Linux => {
                if arch.starts_with("arm") || arch.starts_with("aarch64") {
                    if arch.contains("64") || arch.starts_with("armv8") {
                        Architecture::Arm64
                    } else {
                        Architecture::Arm32
                    }
                } else if arch.starts_with("ppc") {
                    Architecture::Ppc64le
                } else if arch.starts_with("riscv") {
                    Architecture::Riscv64
                } else {
                    Architecture::X64
                }
            }
            Platform::MacOS => {
                if arch.starts_with("aarch64") {
                    Architecture::Arm64
                } else {
                    Architecture::X64
                }
            }
            Platform::Windows => {
                if arch.contains("64") {
                    if arch.starts_with("aarch64") {
                        Architecture::Arm64
                    } else {
                        Architecture::X64
                    }
                } else {
                    Architecture::X86
                }
            }
            Platform::Unknown => Architecture::Unknown,
        }
    }

    /// The lowercase name of this architecture
    ///
    /// One of `"x64"`, `"x86"`, `"arm64"`, `"arm32"`, `"ppc64le"`,
    /// `"riscv64"`, `"unknown"`. Stable, unique per variant, and shared
    /// by the `Display` and serde representations.
    pub fn name(&self) -> &'static str {
        match self {
            Architecture::X64 => "x64",
            Architecture::X86 => "x86",
            Architecture::Arm64 => "arm64",
            Architecture::Arm32 => "arm32",
            Architecture::Ppc64le => "ppc64le",
            Architecture::Riscv64 => "riscv64",
            Architecture::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse an architecture name (the `Display` form) back into a variant
impl FromStr for Architecture {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x64" => Ok(Architecture::X64),
            "x86" => Ok(Architecture::X86),
            "arm64" => Ok(Architecture::Arm64),
            "arm32" => Ok(Architecture::Arm32),
            "ppc64le" => Ok(Architecture::Ppc64le),
            "riscv64" => Ok(Architecture::Riscv64),
            "unknown" => Ok(Architecture::Unknown),
            other => Err(PlatformError::UnknownArchitecture(other.to_string())),
        }
    }
}
