mod app;
mod consts;
mod engine;
mod event;
mod games;
mod sim;
mod ui;

use std::fs::File;
use std::io;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use consts::FRAME_INTERVAL_MS;
use event::{Event, EventHandler};

/// The terminal owns stdout and stderr, so logs only go to a file, and only
/// when `ASTEROIDS_LOG` names one. `RUST_LOG` filters as usual.
fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os("ASTEROIDS_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        match events.next()? {
            Event::Tick(now) => {
                app.on_tick(now);
                if app.should_quit {
                    break;
                }
                terminal.draw(|frame| ui::render(frame, app))?;
            }
            Event::Key(key) => app.on_key(key, Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    init_logging()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Release events are needed for held keys and fire-on-release; terminals
    // without the enhancement protocol fall back to timing out repeats.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("keyboard release events: {}", enhanced);
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(seed, enhanced);
    let result = if app.on_create() {
        let event_handler = EventHandler::new(FRAME_INTERVAL_MS); // ~60 FPS
        run(&mut terminal, &mut app, &event_handler)
    } else {
        log::error!("setup failed, exiting");
        Ok(())
    };

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
