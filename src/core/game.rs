//! Core game interface for the hangterm framework
use std::future::Future;
use std::pin::Pin;

use tokio::sync::mpsc::UnboundedSender;

/// Boxed future returned by effect handlers
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Handle the game uses to request side effects from the engine
pub struct Context<E> {
    pub tx: UnboundedSender<E>,
}

impl<E> Context<E> {
    /// Queue an effect. Fire-and-forget: the game never waits on it.
    pub fn send_effect(&self, effect: E) {
        if self.tx.send(effect).is_err() {
            tracing::warn!("effect dropped, engine outbox closed");
        }
    }
}

/// Main game trait that all games must implement
pub trait Game {
    /// Side effects the game asks the engine to run
    type Effect: Send + 'static;

    /// Results fed back from completed effects
    type Event: Send + 'static;

    fn handle_input(&mut self, event: crossterm::event::KeyEvent, ctx: &Context<Self::Effect>);

    fn handle_event(&mut self, event: Self::Event, ctx: &Context<Self::Effect>);

    fn render(&self, frame: &mut ratatui::Frame);
}

/// Runs effects outside the game loop
pub trait EffectHandler<E, V>: Clone + Send + Sync + 'static {
    /// Resolve an effect, optionally producing an event for the game
    fn handle(&self, effect: E) -> BoxFuture<Option<V>>;
}
