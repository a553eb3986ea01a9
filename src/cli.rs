// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::{
    commands::{self, report::ReportArgs},
    core::config::OutputFormat,
    infra::t,
};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

fn build_cli(locale: &str) -> Command {
    Command::new("junit-report")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("report")
                .about(t!("cmd_report_about", locale = locale).to_string())
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("path")
                        .short('p')
                        .long("path")
                        .help(t!("arg_path", locale = locale).to_string())
                        .value_name("GLOB")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .help(t!("arg_name", locale = locale).to_string())
                        .value_name("NAME")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("only-warn")
                        .long("only-warn")
                        .help(t!("arg_only_warn", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-summary")
                        .long("no-summary")
                        .help(t!("arg_no_summary", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-failures")
                        .long("no-failures")
                        .help(t!("arg_no_failures", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help(t!("arg_format", locale = locale).to_string())
                        .value_name("FORMAT")
                        .value_parser(["console", "json"])
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let requested_language = pre_parse_language();
    let language = crate::resolve_locale(requested_language.as_deref());
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("report", report_matches)) => {
            let format = report_matches
                .get_one::<String>("format")
                .map(|raw| raw.parse::<OutputFormat>())
                .transpose()
                .map_err(anyhow::Error::msg)?;

            let args = ReportArgs {
                config: report_matches.get_one::<PathBuf>("config").cloned(),
                path: report_matches.get_one::<String>("path").cloned(),
                name: report_matches.get_one::<String>("name").cloned(),
                only_warn: report_matches.get_flag("only-warn"),
                no_summary: report_matches.get_flag("no-summary"),
                no_failures: report_matches.get_flag("no-failures"),
                jobs: report_matches.get_one::<usize>("jobs").copied(),
                format,
                language: requested_language,
            };
            commands::report::execute(args, &language).await?;
        }
        Some(("init", init_matches)) => {
            let non_interactive = init_matches.get_flag("non-interactive");

            // Show language detection message if it was auto-detected
            if requested_language.is_none() && !non_interactive {
                eprintln!(
                    "🌐 {}",
                    t!("system_language_detected", locale = &language, lang = &language)
                );
            }
            commands::init::run_init_wizard(&language, non_interactive)?;
        }
        _ => {
            // subcommand_required makes clap print help and exit before this point.
        }
    }
    Ok(())
}
