mod cmd;
mod logging;
mod options;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "breakdown",
    version,
    about = "Turn markdown project, issue and task descriptions into structured prompts",
    after_help = "User variables: pass --uv-<name>=<value> to any prompt command."
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// List prompt templates discovered under prompt_base_dir
    ListPrompts,

    /// Break input down into the target layer
    To(PromptArgs),

    /// Summarize input at the target layer
    Summary(PromptArgs),

    /// Extract defects at the target layer
    Defect(PromptArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LayerType {
    Project,
    Issue,
    Task,
}

impl LayerType {
    pub fn as_str(self) -> &'static str {
        match self {
            LayerType::Project => "project",
            LayerType::Issue => "issue",
            LayerType::Task => "task",
        }
    }
}

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Target layer of the generated prompt
    #[arg(value_enum)]
    pub layer: LayerType,

    /// Markdown input file
    #[arg(long, short = 'f')]
    pub from: Option<String>,

    /// Destination path referenced in the prompt
    #[arg(long = "destination", short = 'o')]
    pub destination: Option<String>,

    /// Layer the input describes (inferred from the input file name if omitted)
    #[arg(long = "input", short = 'i', value_enum)]
    pub from_layer: Option<LayerType>,

    /// Prompt template variant, e.g. "strict" selects f_<layer>_strict.md
    #[arg(long, short = 'a')]
    pub adaptation: Option<String>,

    /// Schema file to reference in the prompt
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Read input text from standard input
    #[arg(long)]
    pub stdin: bool,
}

fn main() {
    let (argv, user_options) = options::split_user_variable_args(std::env::args());
    let cli = Cli::parse_from(argv);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref()),
        Commands::ListPrompts => {
            cmd::list_prompts::run(cli.config.as_deref(), cli.profile.as_deref())
        }
        Commands::To(args) => cmd::prompt::run(
            cli.config.as_deref(),
            cli.profile.as_deref(),
            "to",
            &args,
            &user_options,
        ),
        Commands::Summary(args) => cmd::prompt::run(
            cli.config.as_deref(),
            cli.profile.as_deref(),
            "summary",
            &args,
            &user_options,
        ),
        Commands::Defect(args) => cmd::prompt::run(
            cli.config.as_deref(),
            cli.profile.as_deref(),
            "defect",
            &args,
            &user_options,
        ),
    }
}
