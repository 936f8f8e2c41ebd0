/// Macro to register game modes in the registry with automatic initializer generation
///
/// Usage in games/mod.rs:
/// ```ignore
/// register_games! {
///     classic => {
///         policy: Policy::SetMembership,
///         name: "Classic",
///         description: "Each letter reveals all its occurrences"
///     },
/// }
/// ```
#[macro_export]
macro_rules! register_games {
    (
        $(
            $id:ident => {
                policy: $policy:expr,
                name: $name:expr,
                description: $desc:expr
            }
        ),* $(,)?
    ) => {
        /// Get all available games with their metadata and initializers
        pub fn get_all_games() -> Vec<GameRegistry> {
            vec![
                $(
                    GameRegistry {
                        info: GameInfo {
                            id: stringify!($id),
                            name: $name,
                            description: $desc,
                            policy: $policy,
                        },
                        initializer: |session, terminal| {
                            Box::pin(async move {
                                use $crate::core::engine::Engine;
                                use $crate::games::hangman::{Collaborators, HangmanGame};

                                let game = HangmanGame::new(session.vocabulary, $policy, session.rng);
                                let engine = Engine::new(game, Collaborators::new(session.speech));
                                engine.run(terminal).await
                            })
                        },
                    }
                ),*
            ]
        }

        /// Get a game by ID
        pub fn get_game(id: &str) -> Option<GameRegistry> {
            get_all_games().into_iter().find(|g| g.info.id == id)
        }

        /// Get the game that plays with `policy`
        pub fn game_for_policy(policy: Policy) -> Option<GameRegistry> {
            get_all_games().into_iter().find(|g| g.info.policy == policy)
        }
    };
}
