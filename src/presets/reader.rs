//! Preset description reader
//!
//! Parses the line-oriented description file into preset requests. The
//! format is deliberately permissive: it is meant to be hand-edited, so
//! comments, blank separators, and malformed lines are skipped silently.

use crate::error::{PresetgenError, Result};
use std::fs;
use std::path::Path;

/// One accepted line of the description file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRequest {
    /// Install unit identifier: a conan profile or a vcpkg triplet.
    pub target: String,
    /// Configuration label, conventionally Debug/Release.
    pub build_type: String,
    /// CMake generator string, quoted in the file when it contains spaces.
    pub generator: String,
}

/// Result of parsing a description source.
#[derive(Debug, Default)]
pub struct ParsedPresets {
    pub requests: Vec<PresetRequest>,
    /// Lines dropped by the acceptance rule, exposed for diagnostics only.
    pub skipped: usize,
}

/// Parse the full text of a description file.
///
/// A line is accepted iff it does not start with `#` and shell-tokenizes
/// to exactly three words: `<target> <buildType> <generator>`. Everything
/// else counts as skipped, never as an error.
pub fn parse_presets(text: &str) -> ParsedPresets {
    let mut parsed = ParsedPresets::default();

    for line in text.lines() {
        if line.starts_with('#') {
            parsed.skipped += 1;
            continue;
        }

        match shlex::split(line) {
            Some(tokens) if tokens.len() == 3 => {
                let mut tokens = tokens.into_iter();
                parsed.requests.push(PresetRequest {
                    target: tokens.next().unwrap_or_default(),
                    build_type: tokens.next().unwrap_or_default(),
                    generator: tokens.next().unwrap_or_default(),
                });
            }
            // Wrong arity, blank, or unbalanced quoting
            _ => parsed.skipped += 1,
        }
    }

    parsed
}

/// Read and parse a description file. A missing file aborts the run.
pub fn read_presets(path: &Path) -> Result<ParsedPresets> {
    if !path.exists() {
        return Err(PresetgenError::PresetsNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| PresetgenError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_presets(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_token_lines() {
        let parsed = parse_presets("my-profile Debug Ninja\n");
        assert_eq!(parsed.requests.len(), 1);
        assert_eq!(parsed.skipped, 0);

        let req = &parsed.requests[0];
        assert_eq!(req.target, "my-profile");
        assert_eq!(req.build_type, "Debug");
        assert_eq!(req.generator, "Ninja");
    }

    #[test]
    fn skips_comment_lines() {
        let parsed = parse_presets("# my-profile Debug Ninja\n");
        assert!(parsed.requests.is_empty());
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn skips_wrong_arity() {
        let parsed = parse_presets("my-profile Debug\nmy-profile Debug Ninja extra\n");
        assert!(parsed.requests.is_empty());
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn skips_blank_lines() {
        let parsed = parse_presets("\n\nmy-profile Release Ninja\n\n");
        assert_eq!(parsed.requests.len(), 1);
        assert_eq!(parsed.skipped, 3);
    }

    #[test]
    fn quoted_generator_is_one_token() {
        let parsed = parse_presets("msvc2022 Release \"Visual Studio 17 2022\"\n");
        assert_eq!(parsed.requests.len(), 1);
        assert_eq!(parsed.requests[0].generator, "Visual Studio 17 2022");
    }

    #[test]
    fn skips_unbalanced_quoting() {
        let parsed = parse_presets("msvc2022 Release \"Visual Studio 17 2022\n");
        assert!(parsed.requests.is_empty());
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn preserves_file_order() {
        let parsed = parse_presets("a Debug Ninja\n# comment\nb Release Ninja\n");
        let targets: Vec<&str> = parsed.requests.iter().map(|r| r.target.as_str()).collect();
        assert_eq!(targets, vec!["a", "b"]);
        assert_eq!(parsed.skipped, 1);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = read_presets(Path::new("/nonexistent/cpresets.txt")).unwrap_err();
        assert!(matches!(err, PresetgenError::PresetsNotFound { .. }));
    }
}
