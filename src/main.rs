use clap::Parser;
use color_eyre::eyre::Result;
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use floatscope::infrastructure::CliArgs;
use floatscope::presentation::App;
use floatscope::presentation::demo::{DEMO_HEIGHT, StaticDemo};
use floatscope::presentation::views;

fn init_logging(args: &CliArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.effective_log_level().to_string()));

    if let Some(log_path) = args.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(DEMO_HEIGHT),
        },
    )?;
    terminal.draw(|frame| frame.render_widget(StaticDemo, frame.area()))?;
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    init_logging(&args)?;

    info!(version = floatscope::VERSION, format = %args.format, "Starting floatscope");

    if args.demo {
        return run_demo();
    }

    let view = views::view_for(args.format);

    let mut terminal = ratatui::init();
    let result = App::new(view.as_ref()).run(&mut terminal).await;
    ratatui::restore();

    result
}
