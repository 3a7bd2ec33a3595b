/* src/cli/core/src/main.rs */

mod logging;
mod month;
mod render;
mod routes;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{ArgAction, Parser, Subcommand};

use craft_app::{CraftConfig, load_or_default};
use craft_calendar::{ExportFormat, WeekStart};
use craft_i18n::Language;

use month::MonthRequest;

#[derive(Parser)]
#[command(name = "craft", about = "CalendarCraft CLI", version)]
struct Cli {
  /// Raise log verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count, global = true)]
  verbose: u8,
  /// Path to craft.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Export one month as text, csv, ics or json
  Month {
    #[arg(short, long)]
    year: Option<i32>,
    /// Month number, 1-12
    #[arg(short, long)]
    month: Option<u32>,
    /// Date treated as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Highlighted date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    selected: Option<NaiveDate>,
    /// sunday or monday; overrides [calendar].week_start
    #[arg(long)]
    week_start: Option<WeekStart>,
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,
    /// Output file, or a directory to write calendar-YYYY-MM.<ext> into
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Boot the app headlessly at a route and print the mounted HTML
  Render {
    route: String,
    #[arg(short, long)]
    lang: Option<Language>,
    /// Date treated as today (YYYY-MM-DD)
    #[arg(long)]
    today: Option<NaiveDate>,
  },
  /// List route names, paths and titles
  Routes,
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<CraftConfig> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (path, config) = load_or_default(explicit.as_deref(), &cwd)?;
  match path {
    Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
    None => tracing::debug!("no craft.toml found, using defaults"),
  }
  Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logging::init(cli.verbose);
  let config = resolve_config(cli.config)?;

  match cli.command {
    Command::Month { year, month, today, selected, week_start, format, out } => {
      let req = MonthRequest {
        year,
        month,
        today: today.unwrap_or_else(|| Local::now().date_naive()),
        selected,
        week_start: week_start.unwrap_or(config.calendar.week_start),
        format,
      };
      let content = month::render_month(&req)?;
      let out = out.map(|p| if p.is_dir() { p.join(month::default_file_name(&req)) } else { p });
      month::emit(&content, out.as_deref())?;
    }
    Command::Render { route, lang, today } => {
      let now = match today {
        Some(date) => date.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
      };
      let lang = lang.unwrap_or(config.i18n.default);
      let rendered = render::render_route(&route, lang, now, config).await;
      if !rendered.navigation.succeeded() {
        ui::warn(&format!("{route}: {:?}", rendered.navigation));
      }
      println!("{}", rendered.html);
    }
    Command::Routes => {
      ui::banner("routes");
      for line in routes::route_table() {
        ui::detail(&line);
      }
      ui::blank();
    }
  }
  Ok(())
}
