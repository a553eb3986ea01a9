//! # Config Initialization Module / 配置初始化模块
//!
//! This module provides an interactive command-line wizard that creates a
//! `JUnitReport.toml` file in the current directory.
//!
//! 此模块提供一个交互式命令行向导，用于在当前目录中创建 `JUnitReport.toml` 文件。
//!
//! ## Features / 功能特性
//!
//! - **Interactive Wizard**: Prompts for the report pattern, label and toggles
//! - **Non-interactive Mode**: Writes the defaults without asking
//! - **Overwrite Protection**: Confirmation prompt before replacing a config
//!
//! - **交互式向导**: 提示输入报告模式、标签和开关
//! - **非交互模式**: 不询问直接写入默认值
//! - **覆盖保护**: 替换配置前的确认提示

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use std::fs;
use std::path::Path;

use crate::{
    core::config::{DEFAULT_CONFIG_FILE, ReportConfig, ReportOptions},
    infra::t,
};

/// Runs the wizard that generates a `JUnitReport.toml` file.
///
/// In non-interactive mode the default config is written right away,
/// replacing any existing file.
///
/// 运行生成 `JUnitReport.toml` 文件的向导。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);

    if non_interactive {
        let config = ReportConfig {
            language: language.to_string(),
            ..ReportConfig::default()
        };
        return write_config(config_path, &config, language);
    }

    let theme = ColorfulTheme::default();
    println!("\n{}", t!("init_wizard_welcome", locale = language).cyan().bold());
    println!("{}", t!("init_wizard_description", locale = language));

    if config_path.exists() {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(t!("init_overwrite_prompt", locale = language, path = config_path.display()))
            .default(false)
            .interact()
            .context(t!("init_user_confirmation_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init_aborted", locale = language));
            return Ok(());
        }
    }

    let defaults = ReportOptions::default();

    let path_to_report: String = Input::with_theme(&theme)
        .with_prompt(t!("init_pattern_prompt", locale = language))
        .default(defaults.path_to_report)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let name: String = Input::with_theme(&theme)
        .with_prompt(t!("init_name_prompt", locale = language))
        .default(defaults.name)
        .interact_text()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let show_message_test_summary = Confirm::with_theme(&theme)
        .with_prompt(t!("init_summary_prompt", locale = language))
        .default(defaults.show_message_test_summary)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let show_test_failures = Confirm::with_theme(&theme)
        .with_prompt(t!("init_failures_prompt", locale = language))
        .default(defaults.show_test_failures)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let only_warn = Confirm::with_theme(&theme)
        .with_prompt(t!("init_only_warn_prompt", locale = language))
        .default(defaults.only_warn)
        .interact()
        .context(t!("init_user_confirmation_failed", locale = language).to_string())?;

    let config = ReportConfig {
        language: language.to_string(),
        report: ReportOptions {
            path_to_report,
            show_message_test_summary,
            show_test_failures,
            name,
            only_warn,
        },
        ..ReportConfig::default()
    };

    write_config(config_path, &config, language)
}

/// Serializes `config` as TOML and writes it to `path`.
pub fn write_config(path: &Path, config: &ReportConfig, language: &str) -> Result<()> {
    let toml_string = toml::to_string_pretty(config)
        .context(t!("init_serialize_failed", locale = language).to_string())?;

    fs::write(path, toml_string).with_context(|| {
        t!("init_write_failed", locale = language, path = path.display()).to_string()
    })?;

    println!(
        "\n{} {}",
        "✔".green(),
        t!("init_success_created", locale = language, path = path.display()).bold()
    );
    println!("{}", t!("init_usage_hint", locale = language));

    Ok(())
}
