use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::collaborators::{Effect, Event};
use super::gallows::Gallows;
use super::presenter::Presenter;
use super::renderer;
use super::round::{GuessOutcome, Policy, Round, Status};
use super::word::Vocabulary;
use crate::core::game::{Context, Game};

/// Owns the vocabulary and the active round; one per session.
pub struct HangmanGame {
    vocabulary: Vocabulary,
    policy: Policy,
    rng: StdRng,
    round: Round,
    presenter: Presenter<Gallows>,
    message: String,
    hint: Option<String>,
}

impl HangmanGame {
    pub fn new(vocabulary: Vocabulary, policy: Policy, mut rng: StdRng) -> Self {
        let round = Round::new(vocabulary.select_word(&mut rng).clone(), policy);
        let mut presenter = Presenter::new(Gallows::new());
        presenter.reset(&round);
        info!(?policy, len = round.word().len(), "round started");
        Self {
            vocabulary,
            policy,
            rng,
            round,
            presenter,
            message: "Welcome to Hangman!".to_string(),
            hint: None,
        }
    }

    /// Throws away the current round and draws a new word.
    pub fn start_round(&mut self) {
        let word = self.vocabulary.select_word(&mut self.rng).clone();
        self.round = Round::new(word, self.policy);
        self.presenter.reset(&self.round);
        self.message = "New word! Pick a letter.".to_string();
        self.hint = None;
        info!(policy = ?self.policy, len = self.round.word().len(), "round started");
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let outcome = self.round.submit_guess(letter);
        self.presenter.sync(&self.round);

        match outcome {
            GuessOutcome::Correct { .. } => {
                self.message = format!("Good guess! '{}' is in the word.", letter)
            }
            GuessOutcome::Incorrect { .. } => {
                self.message = format!("Sorry, '{}' is not in the word.", letter)
            }
            // Rejected guesses are silent; only the log sees them.
            GuessOutcome::Ignored(rejection) => debug!(%rejection, "guess ignored"),
        }

        match self.round.status() {
            Status::Won if matches!(outcome, GuessOutcome::Correct { .. }) => {
                info!(word = %self.round.word(), failures = self.round.failures(), "round won")
            }
            Status::Lost if matches!(outcome, GuessOutcome::Incorrect { .. }) => {
                info!(word = %self.round.word(), "round lost")
            }
            _ => {}
        }
        outcome
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn presenter(&self) -> &Presenter<Gallows> {
        &self.presenter
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn spoken_word(&self) -> String {
        self.round.word().as_str().to_ascii_lowercase()
    }
}

impl Game for HangmanGame {
    type Effect = Effect;
    type Event = Event;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Effect>) {
        if event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return;
        }
        match event.code {
            KeyCode::Enter => self.start_round(),
            KeyCode::Tab => {
                ctx.send_effect(Effect::Hint(self.spoken_word()));
                self.message = "Looking up a hint...".to_string();
            }
            KeyCode::Char(' ') => ctx.send_effect(Effect::Pronounce(self.spoken_word())),
            KeyCode::Char(c) => {
                self.guess(c.to_ascii_uppercase());
            }
            _ => {}
        }
    }

    fn handle_event(&mut self, event: Self::Event, _ctx: &Context<Self::Effect>) {
        match event {
            // A hint for an earlier round is stale.
            Event::Hint { word, text } => {
                if word == self.spoken_word() {
                    self.hint = Some(text);
                }
            }
            Event::Notice(text) => self.message = text,
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::gallows::Illustration;
    use rand::SeedableRng;
    use tokio::sync::mpsc;

    fn game(words: &str, policy: Policy) -> HangmanGame {
        let vocab = Vocabulary::from_text(words).unwrap();
        HangmanGame::new(vocab, policy, StdRng::seed_from_u64(42))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctx() -> (Context<Effect>, mpsc::UnboundedReceiver<Effect>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Context { tx }, rx)
    }

    #[test]
    fn test_lowercase_keys_are_normalized() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, _rx) = ctx();
        g.handle_input(key(KeyCode::Char('c')), &ctx);
        assert_eq!(g.round().display_mask(), "C__");
        assert_eq!(g.message(), "Good guess! 'C' is in the word.");
    }

    #[test]
    fn test_enter_starts_fresh_round() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, _rx) = ctx();
        g.guess('X');
        g.guess('C');
        g.handle_input(key(KeyCode::Enter), &ctx);
        assert_eq!(g.round().failures(), 0);
        assert_eq!(g.round().display_mask(), "___");
        assert!(g.round().guesses().is_empty());
        assert_eq!(g.presenter().illustration().parts(), 0);
    }

    #[test]
    fn test_restart_after_loss() {
        let mut g = game("CAT", Policy::PositionalSequence);
        for _ in 0..6 {
            g.guess('Z');
        }
        assert_eq!(g.round().status(), Status::Lost);
        g.start_round();
        assert_eq!(g.round().status(), Status::InProgress);
        assert_eq!(g.round().policy(), Policy::PositionalSequence);
    }

    #[test]
    fn test_hint_and_pronounce_send_effects() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, mut rx) = ctx();
        g.handle_input(key(KeyCode::Tab), &ctx);
        g.handle_input(key(KeyCode::Char(' ')), &ctx);
        assert_eq!(rx.try_recv().unwrap(), Effect::Hint("cat".into()));
        assert_eq!(rx.try_recv().unwrap(), Effect::Pronounce("cat".into()));
        // Neither request changes the round.
        assert!(g.round().guesses().is_empty());
    }

    #[test]
    fn test_stale_hint_is_dropped() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, _rx) = ctx();
        g.handle_event(Event::Hint { word: "dog".into(), text: "woof".into() }, &ctx);
        assert_eq!(g.hint(), None);
        g.handle_event(Event::Hint { word: "cat".into(), text: "meow".into() }, &ctx);
        assert_eq!(g.hint(), Some("meow"));
    }

    #[test]
    fn test_notice_only_touches_message() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, _rx) = ctx();
        g.guess('C');
        let before = g.round().clone();
        g.handle_event(Event::Notice("no speech".into()), &ctx);
        assert_eq!(g.message(), "no speech");
        assert_eq!(*g.round(), before);
    }

    #[test]
    fn test_rejected_guesses_leave_message_alone() {
        let mut g = game("CAT", Policy::SetMembership);
        g.guess('C');
        assert!(matches!(g.guess('C'), GuessOutcome::Ignored(_)));
        assert_eq!(g.message(), "Good guess! 'C' is in the word.");

        g.guess('A');
        g.guess('T');
        assert_eq!(g.round().status(), Status::Won);
        for c in ['Z', '1'] {
            assert!(matches!(g.guess(c), GuessOutcome::Ignored(_)));
            assert_eq!(g.message(), "Good guess! 'T' is in the word.");
        }
    }

    #[test]
    fn test_modified_keys_are_not_guesses() {
        let mut g = game("CAT", Policy::SetMembership);
        let (ctx, mut rx) = ctx();
        g.handle_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &ctx);
        g.handle_input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT), &ctx);
        g.handle_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL), &ctx);
        assert!(g.round().guesses().is_empty());
        assert!(rx.try_recv().is_err());

        g.handle_input(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT), &ctx);
        assert_eq!(g.round().display_mask(), "C__");
    }
}
