use std::path::PathBuf;

use aimon_core::{
    Passthrough, SystemClock, Theme, budget_color, format_count, format_relative_time,
    rate_limit_color, usage_color,
};
use chrono::{DateTime, Local};
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::style::{Color as TermColor, Stylize};
use ratatui::style::Color;

/// aimon - preview AI usage readouts in the terminal
#[derive(Parser, Debug)]
#[command(name = "aimon")]
#[command(about = "Render AI usage values the way the monitor displays them")]
#[command(version)]
struct Args {
    /// Token count to abbreviate
    #[arg(long)]
    tokens: Option<f64>,

    /// Usage percentage (0-100)
    #[arg(long)]
    percent: Option<f64>,

    /// Remaining rate-limit requests
    #[arg(long, requires = "limit")]
    remaining: Option<f64>,

    /// Total rate-limit requests
    #[arg(long)]
    limit: Option<f64>,

    /// Amount spent this period, in dollars
    #[arg(long, requires = "budget")]
    spent: Option<f64>,

    /// Budget for the period, in dollars
    #[arg(long)]
    budget: Option<f64>,

    /// Last update timestamp (RFC 3339)
    #[arg(long)]
    updated: Option<String>,

    /// TOML theme file overriding the default palette
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let theme = match &args.theme {
        Some(path) => Theme::load(path)
            .wrap_err_with(|| format!("Failed to load theme: {}", path.display()))?,
        None => Theme::default(),
    };

    let mut rows: Vec<(&str, String)> = Vec::new();

    if let Some(tokens) = args.tokens {
        rows.push(("Tokens", format_count(tokens)));
    }

    if let Some(percent) = args.percent {
        let text = format!("{percent}%");
        rows.push(("Usage", paint(&text, usage_color(percent, &theme), &args)));
    }

    if let (Some(remaining), Some(limit)) = (args.remaining, args.limit) {
        let text = format!("{} / {}", format_count(remaining), format_count(limit));
        let color = rate_limit_color(remaining, limit, &theme);
        rows.push(("Rate limit", paint(&text, color, &args)));
    }

    if let (Some(spent), Some(budget)) = (args.spent, args.budget) {
        let text = format!("${spent:.2} / ${budget:.2}");
        let color = budget_color(spent, budget, &theme);
        rows.push(("Budget", paint(&text, color, &args)));
    }

    if let Some(raw) = &args.updated {
        let timestamp = DateTime::parse_from_rfc3339(raw)
            .wrap_err_with(|| format!("Invalid --updated timestamp: {raw}"))?
            .with_timezone(&Local);
        let text = format_relative_time(Some(timestamp), &SystemClock, &Passthrough);
        rows.push(("Updated", text));
    }

    if rows.is_empty() {
        eprintln!("No values supplied (see --help)");
        std::process::exit(1);
    }

    for (label, value) in rows {
        println!("{label:<12} {value}");
    }

    Ok(())
}

fn paint(text: &str, color: Color, args: &Args) -> String {
    if args.no_color {
        text.to_string()
    } else {
        text.with(to_term_color(color)).to_string()
    }
}

/// Map a theme color onto the crossterm palette.
fn to_term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}
