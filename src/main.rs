//! Terminal Life runner (default binary).
//!
//! This is the rendering harness: it owns one engine instance, advances it
//! at a fixed frame interval, renders the exposed cell buffer each frame,
//! and forwards keyboard/mouse input as engine mutations.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_life::core::Universe;
use tui_life::input::{handle_key_event, should_quit, Cursor};
use tui_life::term::{HudState, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{
    LifeAction, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_TICK_MS, MIN_TICK_MS, TICK_MS, TICK_STEP_MS,
};

struct Options {
    width: u32,
    height: u32,
    seed: u32,
}

fn main() -> Result<()> {
    let options = parse_args()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: &Options) -> Result<()> {
    let mut universe = Universe::randomized(options.width, options.height, options.seed)?;
    let view = LifeView::default();
    let mut cursor = Cursor::new(options.width, options.height);

    let mut paused = false;
    let mut interval_ms = TICK_MS;
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let hud = HudState {
            cursor: cursor.pos(),
            paused,
            interval_ms,
        };
        let fb = view.render(&universe, &hud, viewport);
        term.draw(&fb)?;

        // Input with timeout until the next due tick.
        let tick_duration = Duration::from_millis(interval_ms);
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_action(
                            action,
                            &mut universe,
                            &mut cursor,
                            &mut paused,
                            &mut interval_ms,
                        )?;
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        // Hit-test against the same layout the view draws with.
                        let layout = view.layout(&universe, viewport);
                        if let Some((row, col)) = layout.cell_at(mouse.column, mouse.row) {
                            universe.toggle(row, col)?;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if !paused && last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            universe.tick();
        }
    }
}

fn apply_action(
    action: LifeAction,
    universe: &mut Universe,
    cursor: &mut Cursor,
    paused: &mut bool,
    interval_ms: &mut u64,
) -> Result<()> {
    match action {
        LifeAction::TogglePause => *paused = !*paused,
        LifeAction::Step => {
            if *paused {
                universe.tick();
            }
        }
        LifeAction::CursorUp
        | LifeAction::CursorDown
        | LifeAction::CursorLeft
        | LifeAction::CursorRight => cursor.apply(action),
        LifeAction::ToggleCell => {
            let (row, col) = cursor.pos();
            universe.toggle(row, col)?;
        }
        LifeAction::Randomize => {
            *universe = Universe::randomized(universe.width(), universe.height(), time_seed())?;
        }
        LifeAction::Clear => universe.clear(),
        LifeAction::SpeedUp => {
            *interval_ms = interval_ms.saturating_sub(TICK_STEP_MS).max(MIN_TICK_MS);
        }
        LifeAction::SlowDown => {
            *interval_ms = (*interval_ms + TICK_STEP_MS).min(MAX_TICK_MS);
        }
    }
    Ok(())
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        seed: time_seed(),
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--width" => options.width = parse_value(&arg, args.next())?,
            "--height" => options.height = parse_value(&arg, args.next())?,
            "--seed" => options.seed = parse_value(&arg, args.next())?,
            other => bail!("unknown argument: {other} (expected --width, --height, --seed)"),
        }
    }

    if options.width == 0 || options.height == 0 {
        bail!("--width and --height must be nonzero");
    }
    Ok(options)
}

fn parse_value(flag: &str, value: Option<String>) -> Result<u32> {
    let Some(value) = value else {
        bail!("{flag} requires a value");
    };
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => bail!("{flag} expects an unsigned integer, got {value}"),
    }
}

fn time_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
        Err(_) => 1,
    }
}
