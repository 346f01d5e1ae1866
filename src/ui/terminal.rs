use crate::app::{mode::AppMode, App};
use crate::engine::Clock;
use crate::ui::command::{command_to_app_event, parse_key};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::draw_frame;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    // Dropped after the terminal so the screen is restored last
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Ticks and paints at the configured frame interval until the user quits.
    ///
    /// Input is polled for whatever is left of the current frame, so a key
    /// press never delays the next tick.
    pub fn run_event_loop<C: Clock>(&mut self, app: &mut App<C>) -> io::Result<AppMode> {
        let frame_interval = app.frame_interval();

        app.tick();
        self.render_frame(app)?;
        let mut last_tick = Instant::now();

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            let timeout = frame_interval.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_event(command_to_app_event(parse_key(key)));
                }
            }

            if last_tick.elapsed() >= frame_interval {
                last_tick = Instant::now();
                app.tick();
                self.render_frame(app)?;
            }
        }
    }

    pub fn render_frame<C: Clock>(&mut self, app: &App<C>) -> io::Result<()> {
        let render_state = app.get_render_state();
        self.terminal.draw(|frame| draw_frame(frame, &render_state))?;
        Ok(())
    }
}
