//! ICGrind - Entry Point
//!
//! Parses the command line, then either runs a one-shot command or
//! initializes the terminal and runs the interactive calculator.

use std::fs::{self, OpenOptions};
use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};

use icgrind::calculator::CalculatorState;
use icgrind::cli::{format_table, run_calc, Cli, Commands};
use icgrind::data::{export_table, load_xp_table};
use icgrind::progression::XpTable;
use icgrind::save::{data_directory, load_settings, settings_path};
use icgrind::ui::App;

fn main() -> Result<()> {
    init_logging();

    log::info!("Starting ICGrind v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc(ref args)) => {
            let table = load_xp_table(cli.table.as_deref());
            match run_calc(args, table) {
                Ok(needed) => println!("{}", needed),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Table) => {
            let table = load_xp_table(cli.table.as_deref());
            print!("{}", format_table(&table));
        }
        Some(Commands::ExportTable { ref path }) => {
            export_table(XpTable::builtin(), path)?;
            println!("Wrote {}", path.display());
        }
        None => run_tui(&cli)?,
    }

    log::info!("ICGrind shut down cleanly");
    Ok(())
}

/// Initialize logging to file (to avoid interfering with TUI)
fn init_logging() {
    let dir = data_directory();
    let _ = fs::create_dir_all(&dir);

    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(dir.join("icgrind.log"))
        .or_else(|_| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open("icgrind.log")
        });

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    );
    match log_file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // Nowhere safe to write while the TUI owns the terminal
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn run_tui(cli: &Cli) -> Result<()> {
    let table = load_xp_table(cli.table.as_deref());
    let mut settings = load_settings();
    if let Some(theme) = cli.theme {
        settings.theme = theme;
    }
    let mut app = App::new(CalculatorState::new(table), settings, Some(settings_path()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Calculator exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    result
}

/// Draw, then block until the next event; each event is handled fully
/// before the next redraw.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        match event::read()? {
            // Only handle key press events, not releases
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_input(key) {
                    Ok(true) => break,
                    Ok(false) => {}
                    Err(e) => log::warn!("Input handling error: {}", e),
                }
            }
            Event::Paste(text) => app.handle_paste(&text),
            _ => {}
        }
    }

    Ok(())
}
