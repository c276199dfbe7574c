use anyhow::{Context, Result};
use clap::Parser;
use researchmate::app::App;
use researchmate::cli::{print_error, Cli};
use researchmate::config::Config;
use researchmate::styles::init_theme;
use researchmate::tui::Tui;
use researchmate::utils::get_log_dir;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal first so the panic message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() {
    if let Err(err) = run() {
        print_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal belongs to the TUI, so logs only go to the file
    let file_appender = tracing_appender::rolling::never(&log_dir, "researchmate.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if cli.execute()? {
        return Ok(());
    }

    let config_path = cli.config_path();
    let mut config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    init_theme(config.theme_type());
    let fixtures = config.load_fixtures().context("Failed to load workspace data")?;

    let project = cli.startup_project(&fixtures)?;

    setup_panic_hook();

    let mut app = App::new(config, config_path, fixtures);
    if let Some(project) = &project {
        app.open_project(project);
    }

    let mut tui = Tui::new()?;
    app.run(&mut tui)
}
