use std::io;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::debug;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use gridlife::camera::Camera;
use gridlife::config::Config;
use gridlife::events::AppEvent;
use gridlife::events::EngineEvent;
use gridlife::events::Event;
use gridlife::grid::Grid;
use gridlife::io::convert_event;
use gridlife::ticker::Ticker;
use gridlife::world::Snapshot;
use gridlife::world::World;

const FRAMERATE: u32 = 60;
const FRAMETIME: Duration =
    Duration::from_millis(((1f64 / FRAMERATE as f64) * 1_000f64) as u64);

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    init_logging(config.headless);

    let mut grid = Grid::new(config.width, config.height).context("Failed to create grid")?;
    grid.seed(config.seed().into_iter().map(Into::into))
        .context("Failed to seed grid")?;

    info!(
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "created grid"
    );

    if config.headless {
        run_headless(grid, config.generations)
    } else {
        run_terminal(grid, &config)
    }
}

fn init_logging(headless: bool) {
    // In the terminal UI anything we log lands on top of the frame, so stay quiet unless asked
    let default = if headless {
        "gridlife=info"
    } else {
        "gridlife=warn"
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .init();
}

/// Print `generations` generations (plus the starting one) to stdout
fn run_headless(mut grid: Grid, generations: u64) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();

    for _ in 0..generations {
        writeln!(stdout, "{grid}")?;
        grid.tick();
    }
    writeln!(stdout, "{grid}")?;

    Ok(())
}

fn run_terminal(grid: Grid, config: &Config) -> anyhow::Result<()> {
    let world = Arc::new(World::new(grid));
    let ticker =
        Ticker::spawn(Arc::clone(&world), config.interval()).context("Failed to start ticker")?;

    let mut stdout = io::stdout();

    let res = {
        let _guard = TerminalGuard::enter(&mut stdout)?;

        event_loop(&world, usize::from(config.cell_size), &mut stdout)
    };

    ticker.stop();

    res
}

/// Raw mode, the alternate screen and mouse capture, for as long as this is alive
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut impl Write) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on, dropping the guard undoes raw mode even if the rest fails
        let guard = Self;

        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal(&mut io::stdout(), terminal::disable_raw_mode) {
            warn!("Failed to restore terminal: {e}");
        }
    }
}

/// Leave the alternate screen, then raw mode. `disable_raw_mode` always runs, and the first
/// error (if any) is returned.
fn restore_terminal<W: Write>(
    out: &mut W,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    let screen = execute!(
        out,
        cursor::Show,
        event::DisableMouseCapture,
        terminal::LeaveAlternateScreen
    );
    let raw = disable_raw_mode();

    screen.and(raw)
}

fn event_loop(world: &World, cell_size: usize, stdout: &mut io::Stdout) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size()?;

    // the bottom row is kept for the status line
    let mut cam = Camera::new(cols, rows.saturating_sub(1), cell_size);

    loop {
        // Poll event for as long as FRAMETIME
        if event::poll(FRAMETIME)? {
            match convert_event(event::read()?) {
                None => {}
                Some(Event::AppEvent(AppEvent::Exit)) => break,
                Some(Event::AppEvent(AppEvent::Resize { cols, rows })) => {
                    cam.resize(cols, rows.saturating_sub(1));
                }
                Some(Event::EngineEvent(e)) => handle_engine_event(world, &cam, e),
            }
        }

        draw(stdout, &mut cam, &world.snapshot())?;
    }

    Ok(())
}

fn handle_engine_event(world: &World, cam: &Camera, event: EngineEvent) {
    match event {
        EngineEvent::TogglePause => {
            world.toggle_running();
        }
        EngineEvent::Step => world.tick(),
        EngineEvent::Clear => world.clear(),
        EngineEvent::ToggleCell { col, row } => {
            let Some((x, y)) = cam.cell_at(col, row) else {
                return;
            };

            if let Err(e) = world.toggle(x, y) {
                debug!("Ignoring click: {e}");
            }
        }
    }
}

fn draw(stdout: &mut io::Stdout, cam: &mut Camera, snapshot: &Snapshot) -> io::Result<()> {
    cam.reset();
    cam.draw(snapshot);

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
    )?;

    for line in cam.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let state = if snapshot.running { "running" } else { "paused" };
    let status = format!(
        "gen {} | pop {} | {state} | space: pause  n: step  c: clear  q: quit",
        snapshot.generation, snapshot.population
    );
    queue!(stdout, style::Print(status))?;

    stdout.flush()
}
