// Integration tests (native) for the game session.
// These drive the pure state machine exactly the way the browser shell does:
// keys in, effects out, tickets resolved by hand instead of by a timer.

use chrono::NaiveDate;
use heatwords::game::{Advance, Ticket};
use heatwords::seed::{Clock, FixedClock, daily_index};
use heatwords::{
    AnimalEntry, Dictionary, Effect, GameConfig, GameSession, Heat, Key, Outcome, Phase,
};

const ALPHABET_ANIMALS: [&str; 26] = [
    "cat", "dog", "eel", "fox", "gnu", "hen", "ibis", "jay", "koi", "lark", "mole", "newt",
    "owl", "pig", "quail", "rat", "seal", "toad", "urchin", "vole", "wasp", "xerus", "yeti",
    "zebu", "ant", "yak",
];

fn alphabet_dictionary() -> Dictionary {
    let entries = ALPHABET_ANIMALS
        .iter()
        .enumerate()
        .map(|(i, w)| AnimalEntry {
            word: w.to_string(),
            rank: i as u32 + 1,
        })
        .collect();
    Dictionary::new(entries).unwrap()
}

fn new_session(secret: usize, board_size: usize) -> GameSession {
    let config = GameConfig {
        board_size,
        ..GameConfig::default()
    };
    GameSession::with_secret_index(alphabet_dictionary(), config, secret).unwrap()
}

fn type_text(s: &mut GameSession, text: &str) {
    for c in text.chars() {
        let key = if c == ' ' {
            Key::Space
        } else {
            Key::Letter(c.to_ascii_uppercase())
        };
        s.handle_input(key);
    }
}

/// Type, press Enter and resolve the check immediately.
fn guess(s: &mut GameSession, word: &str) -> heatwords::Step {
    type_text(s, word);
    let ticket: Ticket = s
        .handle_input(Key::Enter)
        .schedule
        .expect("enter should start a check");
    s.resolve_check(ticket)
}

#[test]
fn near_guess_is_warm_and_exact_guess_wins() {
    let mut s = new_session(0, 6);
    assert_eq!(s.secret().word, "cat");

    // distance 1 of 26 is a ratio of about 0.038, inside the warm bucket.
    let step = guess(&mut s, "dog");
    assert_eq!(
        step.outcome,
        Some(Outcome::Miss {
            heat: Heat::Warm,
            advance: Advance::Next { current: 1 }
        })
    );
    assert!(step.effects.contains(&Effect::Submitted { cell: 0 }));
    assert!(s.board().cell(0).unwrap().submitted);

    let step = guess(&mut s, "cat");
    assert_eq!(step.outcome, Some(Outcome::Win));
    assert_eq!(s.board().cell(1).unwrap().heat, Some(Heat::Found));
    assert!(s.state().finished);
}

#[test]
fn unknown_word_never_finishes_or_submits() {
    let mut s = new_session(0, 6);
    let step = guess(&mut s, "dragon");
    assert_eq!(step.outcome, Some(Outcome::NotFound));
    assert!(step.effects.contains(&Effect::NotFound));
    assert!(!s.is_finished());
    assert!(!s.board().current().submitted);
    assert_eq!(s.board().current().heat, None);
    assert_eq!(s.phase(), &Phase::Idle);
    // Same cell stays editable.
    s.handle_input(Key::Backspace);
    assert_eq!(s.board().current().text, "DRAGO");
}

#[test]
fn guess_is_trimmed_and_lowercased() {
    let mut s = new_session(1, 6);
    type_text(&mut s, "DOG ");
    let ticket = s.handle_input(Key::Enter).schedule.unwrap();
    assert_eq!(s.resolve_check(ticket).outcome, Some(Outcome::Win));
}

#[test]
fn filling_last_slot_slides_exactly_once() {
    let mut s = new_session(0, 3);
    guess(&mut s, "yak");
    guess(&mut s, "zebu");
    let step = guess(&mut s, "yeti");
    assert_eq!(
        step.outcome,
        Some(Outcome::Miss {
            heat: Heat::Freezing,
            advance: Advance::Slid {
                evicted: 0,
                appended: 3
            }
        })
    );
    let slides = step
        .effects
        .iter()
        .filter(|e| matches!(e, Effect::SlideOut { .. }))
        .count();
    assert_eq!(slides, 1);
    assert!(step.effects.contains(&Effect::Append { cell: 3 }));
    assert!(step.effects.contains(&Effect::Activate { cell: 3 }));

    let ids: Vec<u32> = s.board().cells().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(s.board().current_index(), 2);
    assert_eq!(s.board().current().text, "");

    // The next miss slides again from the new last slot.
    let step = guess(&mut s, "ant");
    assert!(matches!(
        step.outcome,
        Some(Outcome::Miss {
            advance: Advance::Slid { evicted: 1, appended: 4 },
            ..
        })
    ));
}

#[test]
fn finished_game_ignores_every_key() {
    let mut s = new_session(0, 6);
    guess(&mut s, "cat");
    let before: Vec<String> = s.board().cells().map(|c| c.text.clone()).collect();
    for key in [
        Key::Letter('A'),
        Key::Space,
        Key::Backspace,
        Key::Enter,
    ] {
        let step = s.handle_input(key);
        assert!(step.effects.is_empty());
        assert_eq!(step.schedule, None);
    }
    let after: Vec<String> = s.board().cells().map(|c| c.text.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn repeated_space_keeps_one_trailing_space() {
    let mut s = new_session(0, 6);
    s.handle_input(Key::Space);
    assert_eq!(s.board().current().text, "");
    type_text(&mut s, "SEA");
    for _ in 0..5 {
        s.handle_input(Key::Space);
    }
    assert_eq!(s.board().current().text, "SEA ");
}

#[test]
fn letters_emit_set_text_effects() {
    let mut s = new_session(0, 6);
    let step = s.handle_input(Key::Letter('c'));
    assert_eq!(
        step.effects,
        vec![Effect::SetText {
            cell: 0,
            text: "C".to_string()
        }]
    );
    assert!(s.handle_input(Key::Letter('1')).effects.is_empty());
}

#[test]
fn daily_secret_follows_the_clock() {
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let clock = FixedClock(day);
    let a = GameSession::new(alphabet_dictionary(), GameConfig::default(), &clock).unwrap();
    let b = GameSession::new(alphabet_dictionary(), GameConfig::default(), &clock).unwrap();
    assert_eq!(a.secret(), b.secret());
    let expected = alphabet_dictionary()
        .get(daily_index(clock.today(), ALPHABET_ANIMALS.len()))
        .cloned()
        .unwrap();
    assert_eq!(a.secret(), &expected);
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        board_size: 0,
        ..GameConfig::default()
    };
    assert!(GameSession::with_secret_index(alphabet_dictionary(), config, 0).is_err());
}
