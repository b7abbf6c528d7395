//! CLI argument definitions using clap derive macros.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use gs1_lint_config::{
    apply_env_overrides, is_valid_marker, load_dotenv, ConfigLoader, Gs1LintConfig,
};
use gs1_lint_core::{LinterRegistry, TracingObserver};
use gs1_lint_log::{LogConfig, LogLevel};

use crate::commands::{CheckCommand, ExplainCommand, ListCommand};
use crate::error::CliError;
use crate::Exit;

/// gs1lint - validate GS1 Application Identifier data values
///
/// Checks candidate values against named linters and reports the exact
/// position of every violation.
#[derive(Debug, Parser)]
#[command(
    name = "gs1lint",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Only report failing values"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        env = "GS1LINT_CONFIG",
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Character placed either side of an error range
    #[arg(
        long,
        global = true,
        value_parser = parse_marker,
        help = "Highlight marker for error ranges"
    )]
    pub marker: Option<char>,

    #[command(subcommand)]
    pub command: Command,
}

/// Parse `--marker`, holding it to the same rule as `output.marker`.
fn parse_marker(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_valid_marker(c) => Ok(c),
        (Some(_), None) => Err(format!("{s:?} is not a printable ASCII symbol")),
        _ => Err("expected a single character".to_string()),
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<gs1_lint_config::OutputFormat> for OutputFormat {
    fn from(format: gs1_lint_config::OutputFormat) -> Self {
        match format {
            gs1_lint_config::OutputFormat::Text => Self::Text,
            gs1_lint_config::OutputFormat::Json => Self::Json,
        }
    }
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check values against a linter
    Check(CheckCommand),

    /// List available linters
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Describe a linter and the errors it reports
    Explain(ExplainCommand),

    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsCommand),
}

/// Shell completions generation
#[derive(Debug, Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, _ctx: &CommandContext) -> Result<Exit, CliError> {
        use clap::CommandFactory;
        use clap_complete::generate;
        use std::io;

        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(self.shell, &mut cmd, name, &mut io::stdout());
        Ok(Exit::Success)
    }
}

impl Cli {
    /// Load configuration from the given file, or `gs1lint.yaml` in the
    /// working directory, then apply `.env` and `GS1LINT_*` overrides.
    pub fn load_config(&self) -> Result<Gs1LintConfig, CliError> {
        let (loader, env_dir) = match &self.config {
            Some(path) => {
                let dir = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or_else(|| Path::new("."))
                    .to_path_buf();
                (ConfigLoader::from_file(path), dir)
            }
            None => (
                ConfigLoader::default(),
                std::env::current_dir().unwrap_or_default(),
            ),
        };

        load_dotenv(&env_dir)?;
        let mut config = loader.load()?;
        apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Logging setup: config file, then `GS1LINT_LOG_*`, then `-v` / `-q`.
    pub fn log_config(&self, config: &Gs1LintConfig) -> LogConfig {
        let mut log = config.log_config();
        log.apply_env();
        self.apply_verbosity(&mut log);
        log
    }

    /// `-q` and `-v` take precedence over any `RUST_LOG` directives.
    fn apply_verbosity(&self, log: &mut LogConfig) {
        if self.quiet {
            log.level = LogLevel::Error;
        } else if self.verbose > 0 {
            log.level = log.level.louder(self.verbose);
        } else {
            return;
        }
        log.directives = None;
    }

    /// Execute the selected command
    pub fn execute(self, config: Gs1LintConfig) -> Result<Exit, CliError> {
        let ctx = CommandContext::new(config, &self);

        match self.command {
            Command::Check(cmd) => cmd.execute(&ctx),
            Command::List(cmd) => cmd.execute(&ctx),
            Command::Explain(cmd) => cmd.execute(&ctx),
            Command::Completions(cmd) => cmd.execute(&ctx),
        }
    }
}

/// Context passed to all commands
#[derive(Debug)]
pub struct CommandContext {
    pub config: Gs1LintConfig,
    pub registry: LinterRegistry,
    pub format: OutputFormat,
    pub marker: char,
    pub quiet: bool,
    pub verbose: u8,
}

impl CommandContext {
    /// Build the context for a run: flags win over configuration.
    pub fn new(config: Gs1LintConfig, cli: &Cli) -> Self {
        let observer = TracingObserver::new(config.lint_event_level().into());
        let mut registry = LinterRegistry::with_defaults().with_observer(observer);
        for name in &config.linters.disabled {
            registry.remove(name);
        }

        Self {
            format: cli.format.unwrap_or_else(|| config.output.format.into()),
            marker: cli.marker.unwrap_or(config.output.marker),
            quiet: cli.quiet,
            verbose: cli.verbose,
            registry,
            config,
        }
    }
}
