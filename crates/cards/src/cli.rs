use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cards", version, about = "GitHub contributor cards for your terminal")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "CARDS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API base URL (overrides config file; useful for testing)
    #[arg(long, env = "CARDS_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Locale for card labels (ar, es, hi, zh; anything else is English)
    #[arg(long, env = "CARDS_LOCALE", global = true)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and render the contributor cards
    #[command(visible_alias = "s")]
    Show {
        /// Organization (owner) of the repository
        #[arg(long, short = 'g')]
        org: Option<String>,

        /// Repository name
        #[arg(long, short = 'r')]
        repo: Option<String>,

        /// Maximum number of contributors to request (first page only)
        #[arg(long, short = 'l')]
        limit: Option<usize>,
    },
    /// Open the repository page in your browser
    Open {
        /// Organization (owner) of the repository
        #[arg(long, short = 'g')]
        org: Option<String>,

        /// Repository name
        #[arg(long, short = 'r')]
        repo: Option<String>,
    },
    /// Print the design-tool integration descriptor as JSON
    Describe,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "cards", &mut std::io::stdout());
    }
}
