mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use display::Screen;
use yars_revenge::compute::{init_state, step};
use yars_revenge::entities::GamePhase;
use yars_revenge::input::{InputState, Key};
use yars_revenge::Settings;

// ── Key mapping ───────────────────────────────────────────────────────────────

fn map_key(code: &KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::MoveDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::MoveRight),
        KeyCode::Char(' ') => Some(Key::Fire),
        _ => None,
    }
}

fn is_quit(code: &KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: key events update a shared `InputState` between frames and
/// every frame the simulation gets a snapshot of it.  Terminals with the
/// keyboard-enhancement protocol send real `Release` events.  Classic
/// terminals only repeat `Press` while a key is down, so there a key is
/// released once `hold_window_frames` frames pass without a fresh press.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let frame_time = settings.frame_duration();
    let session_start = Instant::now();

    let mut state = init_state();
    let mut input = InputState::new();
    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<Key, u64> = HashMap::new();
    let mut best_score: u32 = 0;
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind == KeyEventKind::Press && is_quit(&code, modifiers) {
                return Ok(());
            }
            let Some(key) = map_key(&code) else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    // A repeat on classic terminals arrives as another Press;
                    // only a key that was up counts as a fresh press.
                    if !input.is_held(key) {
                        input.press(key);
                    }
                    key_frame.insert(key, frame);
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(key, frame);
                }
                KeyEventKind::Release => {
                    input.release(key);
                    key_frame.remove(&key);
                }
            }
        }

        if !keyboard_enhanced {
            let window = settings.hold_window_frames;
            key_frame.retain(|&key, &mut last| {
                let live = frame.saturating_sub(last) <= window;
                if !live {
                    input.release(key);
                }
                live
            });
        }

        // ── Step ──────────────────────────────────────────────────────────────
        let previous_phase = state.phase;
        let previous_score = state.score;
        state = step(&state, &input.snapshot(), session_start.elapsed(), &mut rng);

        if previous_phase == GamePhase::GameOver && state.phase == GamePhase::Start {
            best_score = best_score.max(previous_score);
        }

        let (width, height) = terminal::size()?;
        display::render(out, &state, Screen { width, height }, best_score)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(settings: &Settings) {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = &settings.log_file {
        match std::fs::File::create(path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("cannot open log file {}: {}", path.display(), e),
        }
    }
    builder.init();
}

fn main() -> std::io::Result<()> {
    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::resolve(settings_path.as_deref());
    init_logging(&settings);
    log::info!("Yars' Revenge starting ({:?})", settings);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Terminals without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::debug!("keyboard enhancement: {}", keyboard_enhanced);

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::error!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, &settings, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}
