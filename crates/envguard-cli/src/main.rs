//! CLI entry point for envguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `envguard-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use envguard_app::{
    ValidateInput, list_presets, render_annotations, render_text, run_validate, serialize_report,
    write_report,
};
use envguard_settings::Overrides;
use envguard_source::RuntimeEnv;
use envguard_types::ids::DEFAULT_CONFIG_FILE;
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "envguard",
    version,
    about = "Validate environment variables and dotenv files against declarative rules"
)]
struct Cli {
    /// Project root; relative config, env, and example paths resolve against it.
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to the envguard config TOML (missing file means defaults).
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Debug-level diagnostics on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Github,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the environment (or an env file) against the selected rules.
    Validate {
        /// Output machine-readable JSON (same as `--format json`).
        #[arg(long)]
        json: bool,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Fail when rule keys are missing from the example file.
        #[arg(long)]
        strict_example: bool,

        /// Override the configured preset (standard, strict, custom, or a configured preset).
        #[arg(long)]
        preset: Option<String>,

        /// Validate against a specific env file (for example .env.testing).
        #[arg(long)]
        env_file: Option<String>,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// List selectable presets.
    Presets,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = match &cli.cmd {
        Commands::Validate {
            json,
            format,
            strict_example,
            preset,
            env_file,
            report_out,
        } => {
            let format = if *json { OutputFormat::Json } else { *format };
            let overrides = Overrides {
                preset: preset.clone(),
                env_file: env_file.clone(),
            };
            cmd_validate(&cli, format, *strict_example, overrides, report_out.as_deref())
        }
        Commands::Presets => cmd_presets(&cli),
    };

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("envguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_validate(
    cli: &Cli,
    format: OutputFormat,
    strict_example: bool,
    overrides: Overrides,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<i32> {
    let project_root = project_root(cli)?;
    let config_text = read_config(&project_root, &cli.config)?;

    let output = run_validate(ValidateInput {
        project_root: &project_root,
        config_text: &config_text,
        overrides,
        strict_example,
        runtime: RuntimeEnv::capture(),
    })?;

    if let Some(path) = report_out {
        write_report(path, &output.report).context("write report json")?;
    }

    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Text => stdout.write_all(render_text(&output.report).as_bytes())?,
        OutputFormat::Json => {
            stdout.write_all(&serialize_report(&output.report)?)?;
            stdout.write_all(b"\n")?;
        }
        OutputFormat::Github => {
            for line in render_annotations(&output.report) {
                writeln!(stdout, "{line}")?;
            }
        }
    }
    stdout.flush()?;

    Ok(output.exit_code)
}

fn cmd_presets(cli: &Cli) -> anyhow::Result<i32> {
    let project_root = project_root(cli)?;
    let config_text = read_config(&project_root, &cli.config)?;

    let mut stdout = std::io::stdout().lock();
    for name in list_presets(&config_text)? {
        writeln!(stdout, "{name}")?;
    }
    Ok(0)
}

fn project_root(cli: &Cli) -> anyhow::Result<Utf8PathBuf> {
    let root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());
    if !root.is_dir() {
        anyhow::bail!("project root does not exist: {}", root);
    }
    Ok(root)
}

/// Missing config is allowed (defaults apply); any other read failure is fatal.
fn read_config(project_root: &Utf8Path, config: &Utf8Path) -> anyhow::Result<String> {
    let path = project_root.join(config);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            tracing::debug!(path = %path, "loaded config");
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}
