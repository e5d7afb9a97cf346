//! Terminal runner (default binary).
//!
//! Wires the pure core to the outside world: crossterm for keys, the
//! fixed-step driver for gravity, a JSON file for the high score and a
//! plain-text board dump as the renderer.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, execute, queue, terminal};
use log::{info, warn};

use neon_tetris::core::{GameSnapshot, GameState};
use neon_tetris::engine::{
    record_final_score, Config, Driver, HighScoreStore, JsonFileStore, Renderer, SystemClock,
};
use neon_tetris::input::{handle_key_event, help_lines, should_quit};
use neon_tetris::types::{CoreEvent, BOARD_HEIGHT, BOARD_WIDTH};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env();
    info!("starting with {:?}", config);

    let mut store = JsonFileStore::new(&config.high_score_path);
    let high_score = store.load().unwrap_or_else(|e| {
        warn!("high score unavailable: {:#}", e);
        0
    });

    let mut renderer = TextRenderer::new(high_score);
    renderer.enter()?;

    let result = run(&config, &mut store, &mut renderer);

    // Always try to restore terminal state.
    let _ = renderer.exit();
    result
}

fn run(config: &Config, store: &mut JsonFileStore, renderer: &mut TextRenderer) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.start();

    let mut driver = Driver::new(SystemClock::new(), config.tick_ms);

    loop {
        driver.frame(&mut game, renderer)?;

        for ev in game.take_events() {
            if let CoreEvent::GameOver { score } = ev {
                match record_final_score(store, score) {
                    Ok(true) => renderer.high_score = score,
                    Ok(false) => {}
                    Err(e) => warn!("could not store high score: {:#}", e),
                }
            }
        }

        if !event::poll(driver.time_until_next_tick())? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if should_quit(key) {
                return Ok(());
            }
            if let Some(action) = handle_key_event(key) {
                game.apply_action(action);
            }
        }
    }
}

/// Plain-text board dump: two terminal columns per cell.
struct TextRenderer {
    out: Stdout,
    high_score: u32,
}

impl TextRenderer {
    fn new(high_score: u32) -> Self {
        Self {
            out: io::stdout(),
            high_score,
        }
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snap: &GameSnapshot) -> Result<()> {
        let width = BOARD_WIDTH as usize * 2;

        queue!(self.out, cursor::MoveTo(0, 0), Print(format!("+{}+", "-".repeat(width))))?;
        for row in 0..BOARD_HEIGHT as i8 {
            queue!(self.out, cursor::MoveTo(0, row as u16 + 1), Print("|"))?;
            for col in 0..BOARD_WIDTH as i8 {
                match snap.cell_at(row, col) {
                    Some(kind) => {
                        let c = kind.color();
                        queue!(
                            self.out,
                            SetForegroundColor(Color::Rgb { r: c.r, g: c.g, b: c.b }),
                            Print("[]"),
                            ResetColor
                        )?;
                    }
                    None if snap.ghost_covers(row, col) => queue!(self.out, Print("::"))?,
                    None => queue!(self.out, Print(" ."))?,
                }
            }
            queue!(self.out, Print("|"))?;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, BOARD_HEIGHT as u16 + 1),
            Print(format!("+{}+", "-".repeat(width)))
        )?;

        let status = if snap.game_over {
            "GAME OVER  (r: restart, q: quit)"
        } else if snap.paused {
            "PAUSED     (p: resume)"
        } else {
            "           "
        };
        let side = [
            format!("Score  {:>8}", snap.score),
            format!("Best   {:>8}", self.high_score.max(snap.score)),
            format!("Level  {:>8}", snap.level),
            format!("Lines  {:>8}", snap.lines),
            format!("Next   {:>8}", snap.next.as_str().to_uppercase()),
            String::new(),
            status.to_string(),
            String::new(),
        ];
        let help = help_lines().chain(std::iter::once(format!("{:<11} quit", "q")));
        for (i, line) in side.into_iter().chain(help).enumerate() {
            queue!(
                self.out,
                cursor::MoveTo(width as u16 + 4, i as u16 + 1),
                terminal::Clear(terminal::ClearType::UntilNewLine),
                Print(line)
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
