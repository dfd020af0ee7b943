//! Full games through the public API

use termo::core::{LetterClass, Word};
use termo::game::{
    Game, GameStatus, JsonFileStore, MemoryStore, PersistencePort, PlayError, SessionState,
    Statistics, WordList, win_message,
};
use termo::output::share_text;
use termo::wordlists::loader::words_from_slice;

const WORDS: &[&str] = &[
    "garden", "planet", "bridge", "candle", "forest", "silver", "rocket",
];

fn dictionary() -> WordList {
    WordList::new(words_from_slice(WORDS)).unwrap()
}

fn store_with_secret<P: PersistencePort>(mut store: P, secret: &str) -> P {
    let state = SessionState::new(Word::new(secret).unwrap());
    store.save_session(&state.snapshot()).unwrap();
    store
}

fn guess<P: PersistencePort>(game: &mut Game<'_, WordList, P>, word: &str) -> GameStatus {
    for c in word.chars() {
        game.type_letter(c).unwrap();
    }
    game.submit().unwrap().status
}

#[test]
fn garden_won_on_third_attempt() {
    let dict = dictionary();
    let mut game = Game::load(&dict, store_with_secret(MemoryStore::new(), "garden"));

    assert_eq!(guess(&mut game, "planet"), GameStatus::InProgress);
    assert_eq!(game.state().history().len(), 1);
    assert_eq!(
        game.state().history()[0].classification().classes(),
        &[
            LetterClass::Absent,
            LetterClass::Absent,
            LetterClass::Present,
            LetterClass::Present,
            LetterClass::Correct,
            LetterClass::Absent,
        ]
    );

    assert_eq!(guess(&mut game, "bridge"), GameStatus::InProgress);

    for c in "garden".chars() {
        game.type_letter(c).unwrap();
    }
    let outcome = game.submit().unwrap();
    assert_eq!(outcome.status, GameStatus::Won);
    assert_eq!(outcome.attempt, 3);
    assert_eq!(outcome.win_message(), Some(win_message(3)));
    assert_eq!(game.state().history().len(), 3);

    let stats = game.stats();
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.games_won, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);
    assert_eq!(stats.wins_on(3), 1);
    assert_eq!(stats.distribution, [0, 0, 1, 0, 0, 0]);

    assert_eq!(
        share_text(game.state()),
        "Termo Clone 3/6\n\n⬛⬛🟨🟨🟩⬛\n⬛🟨⬛🟩🟨🟨\n🟩🟩🟩🟩🟩🟩"
    );
}

#[test]
fn finished_game_rejects_further_input() {
    let dict = dictionary();
    let mut game = Game::load(&dict, store_with_secret(MemoryStore::new(), "garden"));
    guess(&mut game, "garden");

    assert_eq!(game.type_letter('a'), Err(PlayError::GameOver));
    assert_eq!(game.erase_letter(), Err(PlayError::GameOver));
    assert_eq!(game.submit(), Err(PlayError::GameOver));
    assert_eq!(game.stats().games_played, 1);
}

#[test]
fn progress_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dictionary();

    {
        let store = store_with_secret(JsonFileStore::open(dir.path()).unwrap(), "garden");
        let mut game = Game::load(&dict, store);
        guess(&mut game, "planet");
        game.type_letter('b').unwrap();
        game.type_letter('r').unwrap();
    }

    let mut game = Game::load(&dict, JsonFileStore::open(dir.path()).unwrap());
    assert_eq!(game.state().secret().text(), "garden");
    assert_eq!(game.state().history().len(), 1);
    assert_eq!(game.state().buffer(), "br");

    for c in "idge".chars() {
        game.type_letter(c).unwrap();
    }
    assert_eq!(game.submit().unwrap().status, GameStatus::InProgress);
    assert_eq!(guess(&mut game, "garden"), GameStatus::Won);

    let reopened = JsonFileStore::open(dir.path()).unwrap();
    let stats = reopened.load_statistics().unwrap().unwrap();
    assert_eq!(stats.wins_on(3), 1);
}

#[test]
fn loss_resets_streak_but_keeps_history() {
    let dict = dictionary();
    let mut store = store_with_secret(MemoryStore::new(), "garden");
    let mut previous = Statistics::default();
    previous.record_win(2);
    previous.record_win(5);
    store.save_statistics(&previous).unwrap();

    let mut game = Game::load(&dict, store);
    for word in ["planet", "bridge", "candle", "forest", "silver"] {
        assert_eq!(guess(&mut game, word), GameStatus::InProgress);
    }
    assert_eq!(guess(&mut game, "rocket"), GameStatus::Lost);

    let stats = game.stats();
    assert_eq!(stats.games_played, 3);
    assert_eq!(stats.games_won, 2);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.win_percentage(), 67);
    assert!(share_text(game.state()).starts_with("Termo Clone X/6"));
}
