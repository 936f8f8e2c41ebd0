use hangterm::games::hangman::{GuessOutcome, Policy, Round, Status, Word, FAILURE_LIMIT};
use hangterm::{HangmanGame, Vocabulary};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn round(word: &str, policy: Policy) -> Round {
    Round::new(Word::parse(word).unwrap(), policy)
}

#[test]
fn test_set_membership_cat_scenario() {
    let mut r = round("CAT", Policy::SetMembership);

    r.submit_guess('X');
    assert_eq!(r.failures(), 1);
    assert_eq!(r.display_mask(), "___");

    r.submit_guess('C');
    assert_eq!(r.display_mask(), "C__");

    r.submit_guess('A');
    assert_eq!(r.display_mask(), "CA_");
    assert_eq!(r.status(), Status::InProgress);

    assert_eq!(r.submit_guess('T'), GuessOutcome::Correct { revealed: 1 });
    assert_eq!(r.status(), Status::Won);
    assert_eq!(r.display_mask(), "CAT");
    assert_eq!(r.status_text(), "Congratulations! You won!");
}

#[test]
fn test_positional_boo_scenario() {
    let mut r = round("BOO", Policy::PositionalSequence);

    // O before B: not the next letter, counted as a miss, never a repeat violation.
    assert_eq!(r.submit_guess('O'), GuessOutcome::Incorrect { failures: 1 });
    assert_eq!(r.cursor(), 0);

    r.submit_guess('B');
    assert_eq!(r.cursor(), 1);
    assert_eq!(r.display_mask(), "B__");

    r.submit_guess('O');
    assert_eq!(r.cursor(), 2);
    assert_eq!(r.display_mask(), "BO_");
    assert_eq!(r.status(), Status::InProgress);

    assert_eq!(r.submit_guess('O'), GuessOutcome::Correct { revealed: 1 });
    assert_eq!(r.cursor(), 3);
    assert_eq!(r.status(), Status::Won);
    assert_eq!(r.display_mask(), "BOO");
}

#[test]
fn test_failing_guess_at_limit_minus_one_loses_immediately() {
    for policy in [Policy::SetMembership, Policy::PositionalSequence] {
        let mut r = round("CAT", policy);
        for c in "QRSUV".chars() {
            r.submit_guess(c);
        }
        assert_eq!(r.failures(), FAILURE_LIMIT - 1);
        assert_eq!(r.status(), Status::InProgress);
        r.submit_guess('W');
        assert_eq!(r.status(), Status::Lost, "{policy:?}");
    }
}

#[test]
fn test_failures_monotonic_and_status_terminal_once() {
    let mut r = round("ELEPHANT", Policy::SetMembership);
    let mut last_failures = 0;
    let mut transitions = 0;
    let mut last_status = r.status();

    for c in "ZQXELPWHANTYK".chars() {
        r.submit_guess(c);
        assert!(r.failures() >= last_failures);
        last_failures = r.failures();
        if r.status() != last_status {
            transitions += 1;
            last_status = r.status();
        }
    }
    assert_eq!(r.status(), Status::Won);
    assert_eq!(transitions, 1);
}

#[test]
fn test_mask_matches_revealed_positions() {
    let mut r = round("BANANA", Policy::SetMembership);
    r.submit_guess('A');
    let mask = r.display_mask();
    assert_eq!(mask.len(), r.word().len());
    for (i, (m, w)) in mask.chars().zip(r.word().as_str().chars()).enumerate() {
        if r.is_revealed(i) {
            assert_eq!(m, w);
        } else {
            assert_eq!(m, '_');
        }
    }
    assert_eq!(mask, "_A_A_A");
}

#[test]
fn test_read_only_queries_are_idempotent() {
    let mut r = round("MELON", Policy::PositionalSequence);
    r.submit_guess('M');
    r.submit_guess('Z');
    let (mask, text) = (r.display_mask(), r.status_text());
    for _ in 0..3 {
        assert_eq!(r.display_mask(), mask);
        assert_eq!(r.status_text(), text);
    }
    assert_eq!(text, "Wrong guesses: 1/6");
}

#[test]
fn test_start_round_resets_everything() {
    let vocab = Vocabulary::from_text("CAT\nDOG\nOWL").unwrap();
    let mut game = HangmanGame::new(vocab, Policy::SetMembership, StdRng::seed_from_u64(11));
    for _ in 0..5 {
        for c in "QXZ".chars() {
            game.guess(c);
        }
        assert_eq!(game.round().failures(), 3);
        game.start_round();
        assert_eq!(game.round().failures(), 0);
        assert_eq!(game.round().status(), Status::InProgress);
        assert!(game.round().guesses().is_empty());
        assert!(game.round().display_mask().chars().all(|c| c == '_'));
    }
}

#[test]
fn test_seeded_sessions_draw_the_same_words() {
    let words = |seed| {
        let mut game = HangmanGame::new(Vocabulary::default(), Policy::SetMembership, StdRng::seed_from_u64(seed));
        let mut drawn = vec![game.round().word().clone()];
        for _ in 0..5 {
            game.start_round();
            drawn.push(game.round().word().clone());
        }
        drawn
    };
    assert_eq!(words(5), words(5));
}
