use crate::core::game::{Context, EffectHandler, Game};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info};

pub struct Engine<G: Game, H> {
    game: G,
    effects: H,
}

impl<G, H> Engine<G, H>
where
    G: Game,
    H: EffectHandler<G::Effect, G::Event>,
{
    pub fn new(game: G, effects: H) -> Self {
        Self { game, effects }
    }

    /// Run until Esc. Hands the terminal back so the caller can keep using it.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<DefaultTerminal> {
        let (outbox_tx, mut outbox_rx) = tokio::sync::mpsc::unbounded_channel::<G::Effect>();
        let (inbox_tx, mut inbox_rx) = tokio::sync::mpsc::unbounded_channel::<G::Event>();
        let ctx = Context { tx: outbox_tx };

        info!("engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if crossterm::event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = crossterm::event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Esc {
                            break;
                        }
                        self.game.handle_input(key, &ctx);
                    }
                }
            }

            // Wake periodically so input keeps getting polled.
            let frame = tokio::time::sleep(Duration::from_millis(16));

            tokio::select! {
                // Effects never block the loop; each runs on its own task.
                Some(effect) = outbox_rx.recv() => {
                    let handler = self.effects.clone();
                    let inbox = inbox_tx.clone();
                    tokio::spawn(async move {
                        if let Some(event) = handler.handle(effect).await {
                            let _ = inbox.send(event);
                        }
                    });
                }

                Some(event) = inbox_rx.recv() => {
                    debug!("effect completed");
                    self.game.handle_event(event, &ctx);
                }

                _ = frame => {}
            }
        }

        info!("engine stopped");
        Ok(terminal)
    }
}
