//! Terminal runner (default binary).
//!
//! Owns the terminal, the view and the frame clock, and feeds the game one
//! discrete event at a time: player actions as keys arrive, gravity every few
//! frames. When the game ends, the final score is printed after the terminal
//! has been restored.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use simple_tetris::cli::Args;
use simple_tetris::core::{Game, RandomSource, RenderSnapshot};
use simple_tetris::input::{handle_key_event, should_quit};
use simple_tetris::pacing::GravityPacer;
use simple_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// How long the GAME OVER overlay stays up unless a key is pressed
const GAME_OVER_LINGER: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    GameOver,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (width, height) = args.board_size();
    let mut game = match args.seed {
        Some(seed) => Game::new(width, height, seed),
        None => Game::from_entropy(width, height),
    };
    info!("starting {}x{} board, seed {:?}", width, height, args.seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &args);

    // Always try to restore terminal state.
    let _ = term.exit();

    match result? {
        SessionEnd::GameOver => println!("Game over! Final score: {}", game.score()),
        SessionEnd::Quit => println!("Quit. Final score: {}", game.score()),
    }
    Ok(())
}

struct Screen<'a> {
    term: &'a mut TerminalRenderer,
    view: GameView,
    snap: RenderSnapshot,
    fb: FrameBuffer,
}

impl Screen<'_> {
    fn draw<R: RandomSource>(&mut self, game: &Game<R>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut self.snap);
        self.view.render_into(&self.snap, Viewport::new(w, h), &mut self.fb);
        self.term.draw(&self.fb)
    }
}

fn run<R: RandomSource>(term: &mut TerminalRenderer, game: &mut Game<R>, args: &Args) -> Result<SessionEnd> {
    let mut screen = Screen {
        term,
        view: GameView::default(),
        snap: RenderSnapshot::default(),
        fb: FrameBuffer::new(0, 0),
    };
    let frame = args.frame_interval();
    let mut pacer = GravityPacer::new(args.gravity_frames);
    let mut last_frame = Instant::now();

    while !game.game_over() {
        screen.draw(game)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(SessionEnd::Quit);
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
                Event::Resize(_, _) => screen.term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if pacer.on_frame() {
                game.tick();
            }
        }
    }

    // Show the final board until a key is pressed or the linger runs out.
    screen.draw(game)?;
    let deadline = Instant::now() + GAME_OVER_LINGER;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        if event::poll(left)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    break;
                }
            }
        }
    }
    Ok(SessionEnd::GameOver)
}
