use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Model, effects, input, update};
use crate::store;

impl App {
    /// Run the editor session to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization fails or the event
    /// loop hits an I/O failure reading events or drawing frames.
    pub fn run(&mut self) -> Result<()> {
        // A missing or unreadable file is tolerated: start with an empty
        // buffer bound to the path for a later save.
        let lines = match store::read_lines(&self.file_path) {
            Ok(lines) => lines,
            Err(err) => {
                tracing::info!(path = %self.file_path.display(), %err, "starting with empty buffer");
                Vec::new()
            }
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal — ced requires an interactive terminal")?;
        let size = terminal.size()?;

        let mut model = Model::new(
            self.file_path.clone(),
            &lines,
            usize::from(size.width),
            usize::from(size.height),
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    /// One blocking read per iteration: draw, wait for an event, apply it.
    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        loop {
            terminal.draw(|frame| crate::ui::render(model, frame))?;

            let event = event::read().context("Failed to read terminal event")?;
            if let Some(msg) = input::handle_event(&event, model) {
                *model = update(std::mem::take(model), msg.clone());
                effects::handle_message_side_effects(model, &msg);
            }

            if model.should_quit {
                return Ok(());
            }
        }
    }
}
