use cashflow::core::notify::NotificationLog;
use cashflow::core::Session;
use cashflow::ui::draw_ui;
use cashflow::EngineConfig;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

type GameSession = Session<ChaCha8Rng, NotificationLog>;

#[derive(Parser, Debug)]
#[command(name = "cashflow", about = "Card-driven personal finance game")]
struct Args {
    /// Seed the card deck for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Engine config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?,
        None => EngineConfig::default(),
    };

    let rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut session = Session::new(config, rng, NotificationLog::default());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    session.shutdown();
    result?;

    let state = session.state();
    println!(
        "Final balance ${:.2}, cash flow {:+.2}/mo, level {}",
        state.balance,
        state.cash_flow(),
        state.level()
    );

    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| {
            draw_ui(frame, session.state(), session.config(), session.notifier());
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                // Rejections are already reported through the notification log
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') => {
                        let _ = session.buy(false, None);
                    }
                    KeyCode::Char('l') => {
                        let _ = session.buy(true, None);
                    }
                    KeyCode::Char('s') => {
                        let _ = session.sell(None);
                    }
                    KeyCode::Char('k') | KeyCode::Char(' ') => {
                        let _ = session.skip();
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                        session.increment_stock_quantity();
                    }
                    KeyCode::Char('-') | KeyCode::Down => {
                        session.decrement_stock_quantity();
                    }
                    _ => {}
                }
            }
        }

        session.advance_clock(Instant::now());
    }

    Ok(())
}
