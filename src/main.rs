mod display;

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing_subscriber::EnvFilter;

use alien_invasion::config::Config;
use alien_invasion::game::{Command, Flow, Game, TICKS_PER_SECOND};
use alien_invasion::persistence::HighScoreStore;
use alien_invasion::settings::{Difficulty, Settings};

const FRAME: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND as u64);

/// A key counts as held if its last press/repeat event arrived within this
/// many frames. Covers terminals that never send key-release events: OS
/// key-repeat runs at 15 Hz or faster, so 8 frames (~133 ms) is refreshed
/// before it expires.
const HOLD_WINDOW: u64 = 8;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

/// One-shot actions bound to a key press.
fn key_command(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(' ') => Some(Command::Fire),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('1') => Some(Command::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SelectDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SelectDifficulty(Difficulty::Hard)),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit command arrives.
///
/// Movement is level-triggered: a `key_frame` map records the frame each key
/// was last pressed or repeated, and every frame the ship's intent flags are
/// set from whichever direction keys are still fresh. Everything else is
/// edge-triggered off the press event itself.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;
    let mut mouse_captured = true;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let command = match ev {
                Event::Key(KeyEvent { code, kind, modifiers, .. }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        key_command(code, modifiers)
                    }
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                        None
                    }
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                        None
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let (x, y) = display::from_cell(column, row);
                    Some(Command::Click { x, y })
                }
                _ => None,
            };

            if let Some(command) = command {
                if game.handle(command) == Flow::Quit {
                    return Ok(());
                }
            }
        }

        game.set_movement(
            any_held(&key_frame, &LEFT_KEYS, frame),
            any_held(&key_frame, &RIGHT_KEYS, frame),
        );
        game.tick();

        // The pointer only matters for the menu buttons
        if game.pointer_visible() != mouse_captured {
            mouse_captured = game.pointer_visible();
            if mouse_captured {
                out.execute(EnableMouseCapture)?;
            } else {
                out.execute(DisableMouseCapture)?;
            }
        }

        display::render(out, game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(log_path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Subscriber first, so config fallbacks are logged
    init_logging(&Config::log_path_from_env())?;
    let config = Config::from_env();

    let store = HighScoreStore::new(config.record_path.clone());
    let high_score = store.load();

    let (cols, rows) = terminal::size().context("cannot query terminal size")?;
    let settings = Settings::new(
        cols as f32 * display::CELL_WIDTH,
        rows as f32 * display::CELL_HEIGHT,
    )
    .with_ship_limit(config.ship_limit);
    let mut game = Game::new(settings, high_score).context("cannot start game")?;
    tracing::info!(cols, rows, high_score, "alien invasion starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("game loop failed")?;

    store
        .save(game.stats.high_score)
        .context("cannot save high score")?;
    tracing::info!(high_score = game.stats.high_score, "alien invasion exiting");
    Ok(())
}
