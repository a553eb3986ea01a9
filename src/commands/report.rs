//! # Report Command Module / 报告命令模块
//!
//! This module implements the `report` command, which loads the config,
//! applies command line overrides and runs the report pipeline against the
//! console or JSON reporter.
//!
//! 此模块实现 `report` 命令：加载配置，应用命令行覆盖项，
//! 并使用控制台或 JSON 报告器运行报告管道。

use anyhow::{Context, Result};
use colored::*;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        config::{DEFAULT_CONFIG_FILE, OutputFormat, ReportConfig},
        pipeline::run_report,
    },
    infra::t,
    reporting::{ConsoleReporter, RecordingReporter},
};

/// Command line overrides of the `report` command.
/// Every `Some`/`true` value wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    pub config: Option<PathBuf>,
    pub path: Option<String>,
    pub name: Option<String>,
    pub only_warn: bool,
    pub no_summary: bool,
    pub no_failures: bool,
    pub jobs: Option<usize>,
    pub format: Option<OutputFormat>,
    /// Language given with `--lang`, if any.
    pub language: Option<String>,
}

/// Executes the report command with the provided arguments.
///
/// # Arguments
/// * `args` - Parsed command line overrides
/// * `locale` - The locale resolved before the config was read
///
/// # Returns
/// An error when the run failed or when failing tests were reported on the
/// blocking fail channel, so the process exits non-zero in CI.
pub async fn execute(args: ReportArgs, locale: &str) -> Result<()> {
    let (config, config_path) = load_config(args.config.as_deref(), locale)?;

    let locale = match (&args.language, &config_path) {
        (None, Some(_)) => config.language.clone(),
        _ => locale.to_string(),
    };
    rust_i18n::set_locale(&locale);

    match &config_path {
        Some(path) => eprintln!(
            "{}",
            t!("config_loaded", locale = locale, path = path.display()).cyan()
        ),
        None => eprintln!("{}", t!("using_default_config", locale = locale).cyan()),
    }

    let config = apply_overrides(config, &args);
    let jobs = config.jobs.unwrap_or_else(num_cpus::get);
    eprintln!(
        "{}",
        t!(
            "searching_reports",
            locale = locale,
            pattern = &config.report.path_to_report
        )
        .cyan()
    );

    let failed = match config.format {
        OutputFormat::Console => {
            let mut reporter = ConsoleReporter::new();
            run_report(&config.report, jobs, &mut reporter)
                .await
                .with_context(|| t!("report_run_failed", locale = locale).to_string())?;
            reporter.has_failed()
        }
        OutputFormat::Json => {
            let mut reporter = RecordingReporter::new();
            run_report(&config.report, jobs, &mut reporter)
                .await
                .with_context(|| t!("report_run_failed", locale = locale).to_string())?;
            let mut stdout = std::io::stdout().lock();
            reporter
                .write_json(&mut stdout)
                .context(t!("json_write_failed", locale = locale).to_string())?;
            writeln!(stdout).context(t!("json_write_failed", locale = locale).to_string())?;
            reporter.has_failed()
        }
    };

    if failed {
        anyhow::bail!(t!("blocking_failure_reported", locale = locale).to_string());
    }
    eprintln!("{}", t!("report_finished", locale = locale).green());
    Ok(())
}

/// Loads the config file.
///
/// An explicitly given path must exist. Without one, `JUnitReport.toml` in
/// the working directory is used when present and the defaults otherwise.
///
/// # Returns
/// The config and the path it was read from, if any
pub fn load_config(explicit: Option<&Path>, locale: &str) -> Result<(ReportConfig, Option<PathBuf>)> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!(t!("config_not_found", locale = locale, path = path.display()).to_string());
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.is_file() {
                return Ok((ReportConfig::default(), None));
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| t!("config_read_failed_path", locale = locale, path = path.display()).to_string())?;
    let config: ReportConfig = toml::from_str(&content)
        .with_context(|| t!("config_parse_failed", locale = locale, path = path.display()).to_string())?;

    Ok((config, Some(path)))
}

/// Applies command line overrides on top of a loaded config.
pub fn apply_overrides(mut config: ReportConfig, args: &ReportArgs) -> ReportConfig {
    if let Some(path) = &args.path {
        config.report.path_to_report = path.clone();
    }
    if let Some(name) = &args.name {
        config.report.name = name.clone();
    }
    if args.only_warn {
        config.report.only_warn = true;
    }
    if args.no_summary {
        config.report.show_message_test_summary = false;
    }
    if args.no_failures {
        config.report.show_test_failures = false;
    }
    if let Some(jobs) = args.jobs {
        config.jobs = Some(jobs);
    }
    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    config
}
