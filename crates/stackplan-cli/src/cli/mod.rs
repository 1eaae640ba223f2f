//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stackplan",
    bin_name = "stackplan",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Validate a cluster address plan and render its stack template",
    long_about = "Stackplan checks that a cluster description's networks form a \
                  consistent plan, packages the cluster's TLS assets, and renders \
                  the infrastructure stack template with everything embedded.",
    after_help = "EXAMPLES:\n\
        \x20 stackplan init\n\
        \x20 stackplan validate cluster.yaml\n\
        \x20 stackplan render cluster.yaml --output stack.json\n\
        \x20 stackplan completions bash > /usr/share/bash-completion/completions/stackplan",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a cluster description's address plan.
    #[command(
        visible_alias = "check",
        about = "Validate a cluster description",
        after_help = "EXAMPLES:\n\
            \x20 stackplan validate cluster.yaml\n\
            \x20 stackplan validate cluster.yaml --output-format json"
    )]
    Validate(ValidateArgs),

    /// Render the stack template for a cluster description.
    #[command(
        about = "Render the stack template",
        after_help = "EXAMPLES:\n\
            \x20 stackplan render cluster.yaml > stack.json\n\
            \x20 stackplan render cluster.yaml --assets-dir ./tls --output out/stack.json\n\
            \x20 stackplan render cluster.yaml --stack-template custom.json --force -o stack.json"
    )]
    Render(RenderArgs),

    /// Write a starting cluster description.
    #[command(
        about = "Write the default cluster description",
        after_help = "EXAMPLES:\n\
            \x20 stackplan init                     # writes cluster.yaml\n\
            \x20 stackplan init --output prod.yaml\n\
            \x20 stackplan init --force             # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stackplan completions bash > ~/.local/share/bash-completion/completions/stackplan\n\
            \x20 stackplan completions zsh  > ~/.zfunc/_stackplan\n\
            \x20 stackplan completions fish > ~/.config/fish/completions/stackplan.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Stackplan configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 stackplan config get paths.assets_dir\n\
            \x20 stackplan config list\n\
            \x20 stackplan config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `stackplan validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Cluster description document (YAML).
    #[arg(value_name = "FILE", help = "Cluster description file")]
    pub file: PathBuf,
}

// ── render ────────────────────────────────────────────────────────────────────

/// Arguments for `stackplan render`.
///
/// Paths left unset fall back to the `paths` section of the configuration.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Cluster description document (YAML).
    #[arg(value_name = "FILE", help = "Cluster description file")]
    pub file: PathBuf,

    #[arg(
        long = "assets-dir",
        value_name = "DIR",
        help = "Directory holding the TLS assets (ca.pem, ca-key.pem, ...)"
    )]
    pub assets_dir: Option<PathBuf>,

    #[arg(
        long = "controller-template",
        value_name = "FILE",
        help = "Controller bootstrap template"
    )]
    pub controller_template: Option<PathBuf>,

    #[arg(
        long = "worker-template",
        value_name = "FILE",
        help = "Worker bootstrap template"
    )]
    pub worker_template: Option<PathBuf>,

    #[arg(
        long = "stack-template",
        value_name = "FILE",
        help = "Stack template (JSON once rendered)"
    )]
    pub stack_template: Option<PathBuf>,

    #[arg(
        long = "ami",
        value_name = "ID",
        help = "Machine image published as AMI (overrides the description)"
    )]
    pub ami: Option<String>,

    /// Write the stack to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write the rendered stack to FILE"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[arg(long = "force", requires = "output", help = "Overwrite existing output")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stackplan init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = "cluster.yaml",
        help = "Where to write the description"
    )]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing description")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stackplan completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `stackplan config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.assets_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
