mod app;
mod avatar;
mod cli;
mod color;
mod config;
mod output;

use anyhow::{anyhow, Result};
use app::App;
use avatar::BlockArtist;
use cards_core::{
    authoring_descriptor, render, ComponentRegistry, ContributorSource, ContributorsWidget,
    Localizer, Theme, WIDGET_TAG,
};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use github_backend::GitHubClient;
use output::output_error;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    let format = cli.format;

    if let Err(e) = run(cli) {
        output_error(&e, format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    // Completions and the descriptor need no config or network
    match &cli.command {
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            return Ok(());
        }
        Commands::Describe => {
            println!("{}", serde_json::to_string_pretty(&authoring_descriptor())?);
            return Ok(());
        }
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api_url.clone(), cli.locale.clone());

    match &cli.command {
        Commands::Show { org, repo, limit } => handle_show(
            &config,
            org.as_deref(),
            repo.as_deref(),
            *limit,
            cli.format,
        ),
        Commands::Open { org, repo } => handle_open(&config, org.as_deref(), repo.as_deref()),
        Commands::Describe | Commands::Completions { .. } => unreachable!("handled above"),
    }
}

/// Build the widget through the registry, the same path a design tool
/// embedding the component would take.
fn build_registry(config: &Config) -> Result<ComponentRegistry> {
    let organization = config.organization.clone();
    let repo = config.repo.clone();
    let limit = config.limit;

    let mut registry = ComponentRegistry::new();
    registry
        .register(WIDGET_TAG, move || {
            let mut widget = ContributorsWidget::new();
            widget.set_limit(limit);
            widget.configure(organization.clone(), repo.clone());
            widget
        })
        .map_err(|e| anyhow!("{}", e))?;
    Ok(registry)
}

fn handle_show(
    config: &Config,
    org: Option<&str>,
    repo: Option<&str>,
    limit: Option<usize>,
    format: cli::OutputFormat,
) -> Result<()> {
    let registry = build_registry(config)?;
    let mut widget = registry
        .instantiate(WIDGET_TAG)
        .map_err(|e| anyhow!("{}", e))?;
    if let Some(limit) = limit {
        widget.set_limit(limit);
    }

    let client = GitHubClient::with_base_url(&config.api_url);
    let mut app = App::new(widget, Arc::new(client) as Arc<dyn ContributorSource>);

    match (org, repo) {
        // Explicit pair on the command line acts like a form submission
        (Some(org), Some(repo)) => app.submit(org, repo),
        (None, None) => app.mount(),
        _ => return Err(anyhow!("--org and --repo must be given together")),
    }

    app.drain();

    let artist = BlockArtist::new();
    let localizer = Localizer::for_locale(&config.locale);
    let surface = render(app.widget(), &artist, &localizer);
    output::output_surface(&surface, format, Theme::preset(&config.theme));

    Ok(())
}

fn handle_open(config: &Config, org: Option<&str>, repo: Option<&str>) -> Result<()> {
    let org = org.unwrap_or(&config.organization);
    let repo = repo.unwrap_or(&config.repo);
    let url = format!("https://github.com/{}/{}", org, repo);

    open::that(&url).map_err(|e| anyhow!("Failed to open {}: {}", url, e))?;
    println!("Opened {}", url);
    Ok(())
}
