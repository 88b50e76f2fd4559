use crate::cli::OutputFormat;
use cards_core::{Hue, Surface, Theme};
use colored::{Color, Colorize};
use serde::Serialize;

fn hue_to_color(hue: Hue) -> Color {
    match hue {
        Hue::Cyan => Color::Cyan,
        Hue::Magenta => Color::Magenta,
        Hue::Yellow => Color::Yellow,
        Hue::Green => Color::Green,
        Hue::Blue => Color::Blue,
        Hue::White => Color::White,
    }
}

/// Paint the rendered surface to stdout
pub fn output_surface(surface: &Surface, format: OutputFormat, theme: Theme) {
    match format {
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "title": surface.title,
                "repo_link": surface.repo_link,
                "loading": surface.loading,
                "items": surface
                    .cards
                    .iter()
                    .map(|card| {
                        serde_json::json!({
                            "login": card.login,
                            "contributions": card.contributions,
                            "profile_link": card.profile_link,
                        })
                    })
                    .collect::<Vec<_>>(),
            });
            if let Ok(json) = serde_json::to_string_pretty(&doc) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => print_text(surface, theme),
    }
}

fn print_text(surface: &Surface, theme: Theme) {
    let primary = hue_to_color(theme.primary);
    let accent = hue_to_color(theme.accent);

    println!("{}", surface.title.color(primary).bold());
    println!("{}", surface.repo_link.as_str().dimmed());
    println!();

    if surface.loading {
        println!("{}", surface.labels.loading.yellow());
    }

    for card in &surface.cards {
        for row in &card.avatar {
            println!("  {}", row);
        }
        println!(
            "  {}: {}",
            surface.labels.username.as_str().dimmed(),
            card.login.color(primary).bold()
        );
        println!(
            "  {}: {}",
            surface.labels.contributions.as_str().dimmed(),
            card.contributions.to_string().color(accent)
        );
        println!("  {}", card.profile_link.as_str().dimmed());
        println!();
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}
