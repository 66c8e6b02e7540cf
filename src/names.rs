//! Pure string rules for native file naming.
//!
//! Two rules cover every platform family: the unix `lib<name><suffix>`
//! rule used for shared and static libraries on Linux, macOS and FreeBSD,
//! and the extension-replacement rule used for everything on Windows.
//! Both operate on path strings only and never touch the filesystem.

/// Apply the unix library naming rule: `lib` prefix plus suffix.
///
/// If `name` already ends with `suffix` (case-sensitive) it is returned
/// unchanged, which makes the rule idempotent. Otherwise the `lib` prefix
/// is inserted after the last `/`, so directory components are preserved:
/// `"tools/render"` becomes `"tools/librender.so"`.
pub(crate) fn unix_library_name(name: &str, suffix: &str) -> String {
    if name.ends_with(suffix) {
        return name.to_string();
    }
    match name.rfind('/') {
        Some(pos) => format!("{}lib{}{}", &name[..=pos], &name[pos + 1..], suffix),
        None => format!("lib{}{}", name, suffix),
    }
}

/// Force `path` to carry `extension`, replacing any existing extension.
///
/// The "already has it" check is case-insensitive, so `"TOOL.EXE"` passes
/// through unchanged when the target extension is `".exe"`. Otherwise the
/// current extension (if any) is stripped and `extension` appended.
pub(crate) fn with_extension(path: &str, extension: &str) -> String {
    if path.to_lowercase().ends_with(extension) {
        return path.to_string();
    }
    format!("{}{}", strip_extension(path), extension)
}

/// Strip the extension from `path`, if it has one.
///
/// Only a dot strictly after the last path separator (`/` or `\`) counts
/// as an extension, so `"dir.d/file"` has none and a leading dot as in
/// `".profile"` is treated as an extension dot.
fn strip_extension(path: &str) -> &str {
    match (path.rfind('.'), path.rfind(['/', '\\'])) {
        (Some(dot), Some(sep)) if dot > sep => &path[..dot],
        (Some(dot), None) => &path[..dot],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_library_name_bare() {
        assert_eq!(unix_library_name("render", ".so"), "librender.so");
        assert_eq!(unix_library_name("render", ".dylib"), "librender.dylib");
        assert_eq!(unix_library_name("render", ".a"), "librender.a");
    }

    #[test]
    fn test_unix_library_name_with_directory() {
        assert_eq!(unix_library_name("tools/render", ".so"), "tools/librender.so");
        assert_eq!(
            unix_library_name("a/b/render", ".dylib"),
            "a/b/librender.dylib"
        );
    }

    #[test]
    fn test_unix_library_name_idempotent() {
        let once = unix_library_name("render", ".so");
        assert_eq!(unix_library_name(&once, ".so"), once);
    }

    #[test]
    fn test_unix_library_name_suffix_check_is_case_sensitive() {
        // "render.SO" does not end with ".so", so the rule applies again
        assert_eq!(unix_library_name("render.SO", ".so"), "librender.SO.so");
    }

    #[test]
    fn test_unix_library_name_backslash_is_not_a_separator() {
        // Windows never takes this path; backslashes are ordinary chars here
        assert_eq!(unix_library_name("dir\\render", ".so"), "libdir\\render.so");
    }

    #[test]
    fn test_unix_library_name_trailing_slash() {
        assert_eq!(unix_library_name("tools/", ".so"), "tools/lib.so");
    }

    #[test]
    fn test_with_extension_appends_when_missing() {
        assert_eq!(with_extension("tool", ".exe"), "tool.exe");
        assert_eq!(with_extension("bin/tool", ".exe"), "bin/tool.exe");
    }

    #[test]
    fn test_with_extension_replaces_existing() {
        assert_eq!(with_extension("setup.sh", ".bat"), "setup.bat");
        assert_eq!(with_extension("render.so", ".dll"), "render.dll");
    }

    #[test]
    fn test_with_extension_match_is_case_insensitive() {
        assert_eq!(with_extension("TOOL.EXE", ".exe"), "TOOL.EXE");
        assert_eq!(with_extension("Setup.Bat", ".bat"), "Setup.Bat");
    }

    #[test]
    fn test_with_extension_dot_in_directory_is_not_an_extension() {
        assert_eq!(with_extension("dir.d/tool", ".exe"), "dir.d/tool.exe");
        assert_eq!(with_extension("dir.d\\tool", ".exe"), "dir.d\\tool.exe");
    }

    #[test]
    fn test_with_extension_only_last_dot_is_stripped() {
        assert_eq!(with_extension("archive.tar.gz", ".bat"), "archive.tar.bat");
    }

    #[test]
    fn test_with_extension_empty_path() {
        assert_eq!(with_extension("", ".exe"), ".exe");
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("tool.exe"), "tool");
        assert_eq!(strip_extension("tool"), "tool");
        assert_eq!(strip_extension("dir.d/tool"), "dir.d/tool");
        assert_eq!(strip_extension("dir.d\\tool"), "dir.d\\tool");
        assert_eq!(strip_extension(".profile"), "");
    }
}
