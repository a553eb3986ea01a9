//! # File System Operations Module / 文件系统操作模块
//!
//! This module expands report glob patterns into concrete paths and reads
//! report files.
//!
//! 此模块将报告 glob 模式展开为具体路径，并读取报告文件。

use globset::GlobBuilder;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ReportError;

/// Characters that make a path component a glob rather than a literal name.
const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// Expands a report pattern into the sorted list of matching files.
///
/// `~` and `$VAR` references are expanded first. A pattern without wildcards
/// is treated as a plain path. A pattern whose literal base directory does
/// not exist matches nothing.
///
/// # Arguments
/// * `pattern` - Glob such as `./build/reports/**/TESTS*.xml`
///
/// # Returns
/// Matching file paths in sorted order, possibly empty
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>, ReportError> {
    let expanded = shellexpand::full(pattern)
        .map_err(|source| ReportError::Expand {
            pattern: pattern.to_string(),
            source,
        })?
        .into_owned();

    let Some(split) = split_pattern(&expanded) else {
        let path = PathBuf::from(&expanded);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    };

    let matcher = GlobBuilder::new(&expanded)
        .literal_separator(true)
        .build()
        .map_err(|source| ReportError::Pattern {
            pattern: expanded.clone(),
            source,
        })?
        .compile_matcher();

    let walk_root = if split.base.is_empty() {
        PathBuf::from(".")
    } else {
        PathBuf::from(&split.base)
    };
    if !is_directory(&walk_root) {
        return Ok(Vec::new());
    }

    let mut walker = WalkDir::new(&walk_root);
    if !split.recursive {
        walker = walker.max_depth(split.depth);
    }

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // Files removed while walking are simply not matches.
            Err(e) if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) => continue,
            Err(source) => {
                return Err(ReportError::Walk {
                    root: walk_root,
                    source,
                });
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let candidate = if split.base.is_empty() {
            entry
                .path()
                .strip_prefix(".")
                .unwrap_or(entry.path())
                .to_path_buf()
        } else {
            entry.path().to_path_buf()
        };
        if matcher.is_match(&candidate) {
            matches.push(candidate);
        }
    }
    matches.sort();
    Ok(matches)
}

/// Reads a report file as UTF-8 text.
///
/// Returns `Ok(None)` when the file does not exist, so a report that
/// vanished after the glob was expanded counts as empty.
pub async fn read_report(path: &Path) -> Result<Option<String>, ReportError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ReportError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Checks if a path exists and is a directory.
pub fn is_directory(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// The literal directory prefix of a glob and how deep below it the glob reaches.
#[derive(Debug, PartialEq, Eq)]
struct PatternSplit {
    base: String,
    depth: usize,
    recursive: bool,
}

/// Splits a pattern at its first wildcard component.
/// Returns `None` when the pattern contains no wildcard at all.
fn split_pattern(pattern: &str) -> Option<PatternSplit> {
    let components: Vec<&str> = pattern.split('/').collect();
    let first_glob = components.iter().position(|c| c.contains(GLOB_META))?;

    let mut base = components[..first_glob].join("/");
    if base.is_empty() && pattern.starts_with('/') {
        base = "/".to_string();
    }
    Some(PatternSplit {
        base,
        depth: components.len() - first_glob,
        recursive: components[first_glob..].iter().any(|c| c.contains("**")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_pattern_finds_literal_base() {
        assert_eq!(
            split_pattern("./build/reports/**/TESTS*.xml"),
            Some(PatternSplit {
                base: "./build/reports".to_string(),
                depth: 2,
                recursive: true,
            })
        );
        assert_eq!(
            split_pattern("fixtures/junit_*.xml"),
            Some(PatternSplit {
                base: "fixtures".to_string(),
                depth: 1,
                recursive: false,
            })
        );
        assert_eq!(
            split_pattern("*.xml"),
            Some(PatternSplit {
                base: String::new(),
                depth: 1,
                recursive: false,
            })
        );
        assert_eq!(
            split_pattern("/*/report.xml"),
            Some(PatternSplit {
                base: "/".to_string(),
                depth: 2,
                recursive: false,
            })
        );
    }

    #[test]
    fn split_pattern_is_none_for_plain_paths() {
        assert_eq!(split_pattern("build/reports/TESTS-a.xml"), None);
    }
}
