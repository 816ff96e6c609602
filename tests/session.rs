//! End-to-end games through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_game::core::{LetterVerdict, Word, evaluate};
use wordle_game::dictionary::Dictionary;
use wordle_game::game::{GameConfig, GameStatus, Outcome, RejectReason, Session};

fn type_word(session: &mut Session, word: &str) {
    for letter in word.chars() {
        session.append_letter(letter).unwrap();
    }
}

fn guess(session: &mut Session, word: &str) -> Outcome {
    type_word(session, word);
    session.submit_guess()
}

#[test]
fn losing_game_reveals_target_after_last_attempt() {
    let dictionary = Dictionary::embedded(5);
    let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();

    let misses = ["slate", "stone", "irate", "allot", "robot"];
    for word in misses {
        assert!(matches!(guess(&mut session, word), Outcome::Continue(_)));
    }

    match guess(&mut session, "trace") {
        Outcome::Lost { result, target } => {
            assert_eq!(target.text(), "crane");
            assert_eq!(result.to_string(), "-GGYG");
        }
        other => panic!("expected a loss, got {other:?}"),
    }
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.attempts_remaining(), 0);
}

#[test]
fn won_game_refuses_further_input() {
    let dictionary = Dictionary::embedded(5);
    let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();

    assert!(matches!(guess(&mut session, "slate"), Outcome::Continue(_)));
    assert!(matches!(guess(&mut session, "crane"), Outcome::Won(_)));

    assert!(session.append_letter('a').is_err());
    assert_eq!(
        session.submit_guess(),
        Outcome::Rejected(RejectReason::GameAlreadyOver)
    );
    assert_eq!(session.attempts_used(), 2);
}

#[test]
fn rejected_submissions_do_not_use_attempts() {
    let dictionary = Dictionary::embedded(5);
    let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();

    type_word(&mut session, "cra");
    assert_eq!(
        session.submit_guess(),
        Outcome::Rejected(RejectReason::WrongLength { expected: 5 })
    );
    type_word(&mut session, "zq");
    assert_eq!(
        session.submit_guess(),
        Outcome::Rejected(RejectReason::NotInDictionary)
    );

    assert_eq!(session.current_guess(), "crazq");
    assert_eq!(session.attempts_used(), 0);
    assert_eq!(session.status(), GameStatus::InProgress);
}

#[test]
fn keyboard_never_downgrades() {
    let dictionary = Dictionary::embedded(5);
    let mut session = Session::with_target(&dictionary, GameConfig::default(), "crane").unwrap();

    guess(&mut session, "trace");
    assert_eq!(session.keyboard_status().get('e'), Some(LetterVerdict::Correct));
    assert_eq!(session.keyboard_status().get('c'), Some(LetterVerdict::Present));

    guess(&mut session, "geese");
    let keyboard = session.keyboard_status();
    assert_eq!(keyboard.get('e'), Some(LetterVerdict::Correct));
    assert_eq!(keyboard.get('g'), Some(LetterVerdict::Absent));
    assert_eq!(keyboard.get('z'), None);
}

#[test]
fn history_matches_evaluator() {
    let dictionary = Dictionary::embedded(5);
    let mut session = Session::with_target(&dictionary, GameConfig::default(), "erase").unwrap();

    guess(&mut session, "speed");
    let record = &session.history()[0];
    let expected = evaluate(&Word::new("speed").unwrap(), &Word::new("erase").unwrap()).unwrap();
    assert_eq!(record.result, expected);
    assert_eq!(record.result.count_correct(), 0);
    assert_eq!(record.result.count_present(), 3);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let dictionary = Dictionary::embedded(5);
    let config = GameConfig::default();

    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);
    let mut a = Session::with_rng(&dictionary, config, &mut rng_a).unwrap();
    let mut b = Session::with_rng(&dictionary, config, &mut rng_b).unwrap();
    assert_eq!(a.reveal_target(), b.reveal_target());
    assert!(dictionary.contains(a.reveal_target()));

    a.new_game_with_rng(&mut rng_a).unwrap();
    b.new_game_with_rng(&mut rng_b).unwrap();
    assert_eq!(a.reveal_target(), b.reveal_target());
}

#[test]
fn custom_length_and_attempts() {
    let dictionary = Dictionary::from_words(["cat", "dog", "cot"], 3);
    let config = GameConfig::new(3, 2).unwrap();
    let mut session = Session::with_target(&dictionary, config, "cat").unwrap();

    assert!(matches!(guess(&mut session, "cot"), Outcome::Continue(_)));
    assert!(matches!(guess(&mut session, "dog"), Outcome::Lost { .. }));
}
