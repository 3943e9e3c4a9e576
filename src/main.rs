//! folio - Entry Point

use clap::Parser;
use folio::model::Theme;
use folio::storage::{FileStore, PreferencesRepository};
use folio::view::{ColorConfig, ReaderOptions};
use std::path::PathBuf;
use tracing::{info, warn};

/// folio - paginated terminal reader for portfolio and resume content
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Read a portfolio or resume as a paginated book in the terminal")]
pub struct Args {
    /// Path to a TOML content pack (the built-in sample is shown if omitted)
    pub content: Option<PathBuf>,

    /// Open at this page, 1-based (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Chrome theme, overriding the saved preference for this session
    #[arg(long, value_parser = ["dark", "light"])]
    pub theme: Option<String>,

    /// Forget saved display preferences before starting
    #[arg(long)]
    pub reset_preferences: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let theme_override = args
        .theme
        .as_deref()
        .map(str::parse::<Theme>)
        .transpose()?;

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = folio::config::load_config_with_precedence(args.config.clone())?;
        let merged = folio::config::merge_config(config_file);
        let with_env = folio::config::apply_env_overrides(merged);
        let page_override = args.page.map(|page| page as usize);
        folio::config::apply_cli_overrides(with_env, theme_override, page_override)
    };

    // Held until exit so buffered log lines are flushed
    let _log_guard = folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let store = match &args.content {
        Some(path) => folio::content::load_content_file(path)?,
        None => folio::content::builtin_store()?,
    };

    let file_store = FileStore::open(&config.storage_path).unwrap_or_else(|err| {
        warn!(error = %err, "Storage unreadable, starting with empty preferences");
        FileStore::empty_at(&config.storage_path)
    });
    let mut repository = PreferencesRepository::new(file_store);

    if args.reset_preferences {
        repository.reset()?;
        info!("Stored display preferences cleared");
    }

    let mut preferences = repository.load();
    if let Some(theme) = config.theme {
        preferences.theme = theme;
    }

    let resumed = if config.remember_position {
        repository.load_last_page()
    } else {
        None
    };
    let start_index = config.start_index().or(resumed).unwrap_or(0);

    let options = ReaderOptions {
        start_index,
        colors: ColorConfig::from_env_and_args(args.no_color),
        swipe_threshold_columns: config.drag_threshold_columns,
        transition_cooldown: config.transition_cooldown,
        remember_position: config.remember_position,
    };

    folio::view::run(store, preferences, repository, options)?;

    Ok(())
}
