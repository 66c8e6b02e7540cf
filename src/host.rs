//! Host property surface: the raw OS and architecture name strings.
//!
//! Detection consumes two opaque strings describing the host. Each comes
//! from an environment variable when set, otherwise from a canonical name
//! derived from the compile-time target constants. The override variables
//! exist so tests and packaging scripts can pin the strings the detectors
//! see without cross-compiling.

use std::env;

/// Environment variable overriding the raw OS-name string.
pub(crate) const OS_NAME_VAR: &str = "NATIVE_PLATFORM_OS";

/// Environment variable overriding the raw architecture string.
pub(crate) const ARCH_NAME_VAR: &str = "NATIVE_PLATFORM_ARCH";

/// The raw OS-name string for this host.
pub(crate) fn os_name() -> String {
    env::var(OS_NAME_VAR).unwrap_or_else(|_| canonical_os_name(env::consts::OS).to_string())
}

/// The raw architecture string for this host.
pub(crate) fn arch_name() -> String {
    env::var(ARCH_NAME_VAR).unwrap_or_else(|_| canonical_arch_name(env::consts::ARCH).to_string())
}

/// Translate a `std::env::consts::OS` value into the vocabulary the
/// OS-name rules consume.
///
/// Targets sharing a family map to one canonical spelling (Android
/// reports as `"Linux"`, the Apple mobile targets as `"Darwin"`).
/// Unlisted targets pass through unchanged and resolve to `Unknown`
/// downstream.
fn canonical_os_name(os: &str) -> &str {
    match os {
        "linux" | "android" => "Linux",
        "macos" => "Mac OS X",
        "ios" | "tvos" | "watchos" | "visionos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "solaris" | "illumos" => "SunOS",
        other => other,
    }
}

/// Translate a `std::env::consts::ARCH` value into the vocabulary the
/// architecture rules consume.
///
/// Most values already match; only the PowerPC spellings differ.
fn canonical_arch_name(arch: &str) -> &str {
    match arch {
        "powerpc" => "ppc",
        "powerpc64" => "ppc64",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_os_name() {
        assert_eq!(canonical_os_name("linux"), "Linux");
        assert_eq!(canonical_os_name("android"), "Linux");
        assert_eq!(canonical_os_name("macos"), "Mac OS X");
        assert_eq!(canonical_os_name("ios"), "Darwin");
        assert_eq!(canonical_os_name("windows"), "Windows");
        assert_eq!(canonical_os_name("freebsd"), "FreeBSD");
        assert_eq!(canonical_os_name("solaris"), "SunOS");
        assert_eq!(canonical_os_name("illumos"), "SunOS");
        assert_eq!(canonical_os_name("haiku"), "haiku");
    }

    #[test]
    fn test_canonical_arch_name() {
        assert_eq!(canonical_arch_name("x86_64"), "x86_64");
        assert_eq!(canonical_arch_name("aarch64"), "aarch64");
        assert_eq!(canonical_arch_name("powerpc"), "ppc");
        assert_eq!(canonical_arch_name("powerpc64"), "ppc64");
        assert_eq!(canonical_arch_name("riscv64"), "riscv64");
    }

    #[test]
    fn test_os_name_env_override() {
        std::env::set_var(OS_NAME_VAR, "Windows Server 2022");
        assert_eq!(os_name(), "Windows Server 2022");

        std::env::remove_var(OS_NAME_VAR);
        assert_eq!(os_name(), canonical_os_name(env::consts::OS));
    }

    #[test]
    fn test_arch_name_env_override() {
        std::env::set_var(ARCH_NAME_VAR, "armv7l");
        assert_eq!(arch_name(), "armv7l");

        std::env::remove_var(ARCH_NAME_VAR);
        assert_eq!(arch_name(), canonical_arch_name(env::consts::ARCH));
    }
}
