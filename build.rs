//! # Build Script for Internationalization / 国际化构建脚本
//!
//! Checks the TOML message catalogs in `locales/` against the base catalog
//! `en.toml`. Keys missing from a translation fall back to English at
//! runtime, so they are reported as build warnings rather than errors.
//!
//! 根据基础目录 `en.toml` 检查 `locales/` 中的 TOML 消息目录。
//! 翻译中缺失的键在运行时会回退到英文，因此仅作为构建警告报告。

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A flat message catalog: translation key to localized string.
/// 扁平的消息目录：翻译键到本地化字符串的映射。
#[derive(Debug, Deserialize)]
struct Translations(BTreeMap<String, String>);

fn read_catalog(path: &Path) -> Translations {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    toml::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse {:?}: {}", path, e))
}

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=locales/");

    let locales_dir = Path::new("locales");
    let base = read_catalog(&locales_dir.join("en.toml"));

    let lang_files: Vec<PathBuf> = fs::read_dir(locales_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("toml"))
        .filter(|path| path.file_stem().and_then(|s| s.to_str()) != Some("en"))
        .collect();

    for path in &lang_files {
        let translations = read_catalog(path);
        for key in base.0.keys() {
            if !translations.0.contains_key(key) {
                println!("cargo:warning=Key '{}' missing from {:?}", key, path);
            }
        }
        for key in translations.0.keys() {
            if !base.0.contains_key(key) {
                println!("cargo:warning=Key '{}' in {:?} not found in base (en.toml)", key, path);
            }
        }
    }

    Ok(())
}
