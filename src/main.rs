//! crudctl - Entry Point

use clap::Parser;
use crudctl::model::PageFixture;
use std::path::PathBuf;
use tracing::info;

/// Terminal host for a single-URL CRUD screen controller
#[derive(Parser, Debug)]
#[command(name = "crudctl")]
#[command(version)]
#[command(about = "Drive a single-URL CRUD screen from the terminal")]
pub struct Args {
    /// Path to a JSON page fixture (a demo page is used if omitted)
    pub fixture: Option<PathBuf>,

    /// Number of rows of the demo page
    #[arg(long, default_value = "12", value_parser = clap::value_parser!(u16).range(0..=999))]
    pub rows: u16,

    /// Page URL to open
    #[arg(short, long)]
    pub url: Option<String>,

    /// Treat the page as a popup (cancel closes it)
    #[arg(long)]
    pub popup: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the effects that ran as JSON lines after exit
    #[arg(long)]
    pub print_effects: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = crudctl::config::load_config_with_precedence(args.config.clone())?;
        let merged = crudctl::config::merge_config(config_file);
        let with_env = crudctl::config::apply_env_overrides(merged);
        let popup_override = if args.popup { Some(true) } else { None };
        crudctl::config::apply_cli_overrides(with_env, args.url.clone(), popup_override)
    };
    config.slots.validate()?;

    crudctl::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let fixture = match &args.fixture {
        Some(path) => PageFixture::load(path)?,
        None => PageFixture::demo(usize::from(args.rows)),
    };

    let styles = crudctl::view::ScreenStyles::with_color_config(
        crudctl::view::ColorConfig::from_env_and_args(args.no_color),
    );
    let transcript = crudctl::view::run_with_page(fixture, &config, styles)?;

    if args.print_effects {
        for effect in &transcript {
            println!("{}", serde_json::to_string(effect)?);
        }
    }

    Ok(())
}
