//! Speedplot - plot benchmark speedup curves from CSV.

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use speedplot::app::App;
use speedplot::config::PlotConfig;
use speedplot::data::{DataReader, XAxisChoice};
use speedplot::plot::Plot;
use speedplot::{render, summary, ui};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "speedplot")]
#[command(about = "Plot benchmark speedup per machine from a CSV file", long_about = None)]
struct Args {
    /// CSV file with machine, grid, rho and speedup columns
    csv: PathBuf,

    /// Plot title
    title: String,

    /// Output image (.png, .jpg, .bmp or .svg); omit to view in the terminal
    out: Option<PathBuf>,

    /// Independent variable; `auto` picks grid when the file name contains "by_grid"
    #[arg(long, value_enum, default_value_t = XAxisChoice::Auto)]
    x_axis: XAxisChoice,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Figure width in inches
    #[arg(long, default_value_t = 6.4)]
    width: f64,

    /// Figure height in inches
    #[arg(long, default_value_t = 4.8)]
    height: f64,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = 150)]
    dpi: u32,

    /// Print the grouped series instead of plotting
    #[arg(long)]
    summary: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Speedplot");
    }

    if !args.delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got '{}'", args.delimiter);
    }
    if !(args.width > 0.0 && args.height > 0.0) || args.dpi == 0 {
        bail!("Figure size and dpi must be positive");
    }

    let records = DataReader::read_file(&args.csv, args.delimiter as u8)
        .with_context(|| format!("Failed to load {}", args.csv.display()))?;
    let axis = args.x_axis.resolve(&args.csv);
    tracing::info!("Plotting speedup against {:?}", axis);

    let plot = Plot::new(args.title, axis, &records);
    let config = PlotConfig {
        width_in: args.width,
        height_in: args.height,
        dpi: args.dpi,
        ..PlotConfig::default()
    };

    if args.summary {
        print!("{}", summary::format_summary(&plot));
    } else if let Some(out) = &args.out {
        render::render_to_file(&plot, &config, out)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        println!("Saved {}", out.display());
    } else {
        view(App::new(plot, &config.style))?;
    }

    if args.log.is_some() {
        tracing::info!("Speedplot exited");
    }

    Ok(())
}

/// Show the chart full screen until the user quits.
fn view(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Focus
                    (KeyModifiers::NONE, KeyCode::Tab) => app.next_focus(),
                    (_, KeyCode::BackTab) => app.prev_focus(),

                    // View
                    (KeyModifiers::NONE, KeyCode::Char('l')) => app.toggle_legend(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
                    (_, KeyCode::Char('?')) => app.show_help(),

                    _ => {},
                }
            }
        }
    }
}
