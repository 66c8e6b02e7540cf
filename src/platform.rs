//! Platform family detection and native file naming rules.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::{host, names};

/// The operating-system family of the host platform
///
/// A closed set of five variants. Each variant answers the naming
/// questions native to its family: what scripts, executables, shared
/// libraries and static libraries are called there. Detection is total,
/// so an unrecognized host resolves to [`Platform::Unknown`] rather than
/// an error, and `Unknown` applies identity naming rules.
///
/// Values are `Copy`; the suffix and family-name accessors return
/// `&'static str` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Any operating system the detector does not recognize
    Unknown,
    /// FreeBSD
    FreeBSD,
    /// Linux, plus unix-likes that share its conventions (SunOS, Unit)
    Linux,
    /// macOS, detected from both its product and kernel (Darwin) names
    MacOS,
    /// Windows
    Windows,
}

impl Platform {
    /// The platform of the host this process is running on
    ///
    /// Resolved from the host OS-name string on the first call and
    /// memoized for the lifetime of the process; later calls return the
    /// cached value without re-reading the environment. Concurrent first
    /// calls are safe and all observe the same value.
    pub fn current() -> Platform {
        static CURRENT: OnceLock<Platform> = OnceLock::new();
        *CURRENT.get_or_init(|| {
            let os_name = host::os_name();
            let platform = Platform::from_os_name(&os_name);
            tracing::debug!(os_name = %os_name, platform = %platform, "Host platform resolved");
            platform
        })
    }

    /// Resolve a platform family from a raw OS-name string
    ///
    /// Rules are case-sensitive and checked in order, first match wins:
    ///
    /// 1. exactly `"FreeBSD"` (a versioned string like `"FreeBSD 14.1"`
    ///    does not match)
    /// 2. prefix `"Linux"`, `"SunOS"` or `"Unit"`
    /// 3. prefix `"Mac OS X"` or `"Darwin"`
    /// 4. prefix `"Windows"`
    ///
    /// Anything else resolves to [`Platform::Unknown`]; this function
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use native_platform::Platform;
    ///
    /// assert_eq!(Platform::from_os_name("Windows 11"), Platform::Windows);
    /// assert_eq!(Platform::from_os_name("Darwin"), Platform::MacOS);
    /// assert_eq!(Platform::from_os_name("SunOS 5.11"), Platform::Linux);
    /// assert_eq!(Platform::from_os_name("BeOS"), Platform::Unknown);
    /// ```
    pub fn from_os_name(os_name: &str) -> Platform {
        if os_name == "FreeBSD" {
            Platform::FreeBSD
        } else if os_name.starts_with("Linux")
            || os_name.starts_with("SunOS")
            || os_name.starts_with("Unit")
        {
            Platform::Linux
        } else if os_name.starts_with("Mac OS X") || os_name.starts_with("Darwin") {
            Platform::MacOS
        } else if os_name.starts_with("Windows") {
            Platform::Windows
        } else {
            Platform::Unknown
        }
    }

    /// The lowercase family name of this platform
    ///
    /// One of `"unknown"`, `"freebsd"`, `"linux"`, `"macos"`,
    /// `"windows"`. Stable, unique per variant, and shared by the
    /// `Display` and serde representations.
    pub fn family_name(&self) -> &'static str {
        match self {
            Platform::Unknown => "unknown",
            Platform::FreeBSD => "freebsd",
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
        }
    }

    /// Convert a script path to this platform's native script form
    ///
    /// Windows forces the `.bat` extension, replacing any existing one;
    /// every other platform returns the path unchanged.
    pub fn script_name(&self, script_path: &str) -> String {
        match self {
            Platform::Windows => names::with_extension(script_path, ".bat"),
            _ => script_path.to_string(),
        }
    }

    /// The suffix executables carry on this platform, dot included
    ///
    /// `".exe"` on Windows, empty everywhere else.
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            _ => "",
        }
    }

    /// Convert an executable path to this platform's native form
    ///
    /// Windows forces the `.exe` extension; every other platform returns
    /// the path unchanged.
    pub fn executable_name(&self, executable_path: &str) -> String {
        match self {
            Platform::Windows => names::with_extension(executable_path, self.executable_suffix()),
            _ => executable_path.to_string(),
        }
    }

    /// The shared-library suffix on this platform, dot included
    ///
    /// Empty on `Unknown`. FreeBSD delegates to Linux so the two can
    /// never drift apart.
    pub fn shared_library_suffix(&self) -> &'static str {
        match self {
            Platform::Unknown => "",
            Platform::FreeBSD => Platform::Linux.shared_library_suffix(),
            Platform::Linux => ".so",
            Platform::MacOS => ".dylib",
            Platform::Windows => ".dll",
        }
    }

    /// Convert a library name to this platform's shared-library file name
    ///
    /// The unix families apply the `lib<name><suffix>` rule, which is
    /// idempotent and keeps directory components; Windows forces the
    /// `.dll` extension with no `lib` prefix; `Unknown` returns the name
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use native_platform::Platform;
    ///
    /// assert_eq!(Platform::Linux.shared_library_name("render"), "librender.so");
    /// assert_eq!(Platform::MacOS.shared_library_name("tools/render"), "tools/librender.dylib");
    /// assert_eq!(Platform::Windows.shared_library_name("render"), "render.dll");
    /// ```
    pub fn shared_library_name(&self, library_name: &str) -> String {
        match self {
            Platform::Unknown => library_name.to_string(),
            Platform::Windows => names::with_extension(library_name, self.shared_library_suffix()),
            _ => names::unix_library_name(library_name, self.shared_library_suffix()),
        }
    }

    /// The static-library suffix on this platform, dot included
    ///
    /// Empty on `Unknown`, `".lib"` on Windows, `".a"` on the unix
    /// families (FreeBSD again delegating to Linux).
    pub fn static_library_suffix(&self) -> &'static str {
        match self {
            Platform::Unknown => "",
            Platform::FreeBSD => Platform::Linux.static_library_suffix(),
            Platform::Linux => ".a",
            Platform::MacOS => ".a",
            Platform::Windows => ".lib",
        }
    }

    /// Convert a library name to this platform's static-library file name
    ///
    /// Same shape as [`Platform::shared_library_name`] with the static
    /// suffixes: `lib<name>.a` on the unix families, `<name>.lib` on
    /// Windows, unchanged on `Unknown`.
    pub fn static_library_name(&self, library_name: &str) -> String {
        match self {
            Platform::Unknown => library_name.to_string(),
            Platform::Windows => names::with_extension(library_name, self.static_library_suffix()),
            _ => names::unix_library_name(library_name, self.static_library_suffix()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.family_name())
    }
}

/// Parse a family name (the `Display` form) back into a variant
impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unknown" => Ok(Platform::Unknown),
            "freebsd" => Ok(Platform::FreeBSD),
            "linux" => Ok(Platform::Linux),
            "macos" => Ok(Platform::MacOS),
            "windows" => Ok(Platform::Windows),
            other => Err(PlatformError::UnknownFamily(other.to_string())),
        }
    }
}
