//! Game driver: a session plus statistics plus storage
//!
//! Front ends talk to a `Game`. It forwards each action to the session,
//! saves after every successful change (session first, statistics second) and
//! applies the statistics transition exactly once per finished game.

use super::{
    Dictionary, GameStatus, PersistencePort, PlayError, Session, SessionState, Statistics,
    SubmitOutcome,
};
use rand::RngCore;
use tracing::{error, info, instrument, warn};

pub struct Game<'a, D: Dictionary + ?Sized, P: PersistencePort> {
    session: Session<'a, D>,
    stats: Statistics,
    store: P,
}

impl<'a, D: Dictionary + ?Sized, P: PersistencePort> Game<'a, D, P> {
    /// Resume the saved game, or start a new one
    ///
    /// Unreadable or inconsistent saved data never fails the load: a bad
    /// session is replaced by a new game, bad statistics by empty ones.
    #[must_use]
    pub fn load(dictionary: &'a D, store: P) -> Self {
        Self::load_with(dictionary, store, &mut rand::rng())
    }

    /// Like [`Game::load`], drawing any new secret from `rng`
    #[instrument(skip_all)]
    pub fn load_with(dictionary: &'a D, store: P, rng: &mut dyn RngCore) -> Self {
        let stats = match store.load_statistics() {
            Ok(Some(stats)) => stats,
            Ok(None) => Statistics::default(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable statistics");
                Statistics::default()
            }
        };

        let restored = match store.load_session() {
            Ok(Some(snapshot)) => match SessionState::from_snapshot(snapshot) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!(error = %e, "Discarding inconsistent saved session");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable saved session");
                None
            }
        };

        match restored {
            Some(state) => {
                info!(
                    attempts = state.attempts(),
                    status = ?state.status(),
                    "Resumed saved session"
                );
                Self {
                    session: Session::restore(dictionary, state),
                    stats,
                    store,
                }
            }
            None => {
                let mut game = Self {
                    session: Session::new_with(dictionary, rng),
                    stats,
                    store,
                };
                info!("Started new session");
                game.save_session();
                game
            }
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session<'a, D> {
        &self.session
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &P {
        &self.store
    }

    #[must_use]
    pub fn into_store(self) -> P {
        self.store
    }

    /// Abandon the current game and start another
    pub fn new_game(&mut self) {
        self.new_game_with(&mut rand::rng());
    }

    #[instrument(skip_all)]
    pub fn new_game_with(&mut self, rng: &mut dyn RngCore) {
        let abandoned =
            self.state().status() == GameStatus::InProgress && self.state().attempts() > 0;
        if abandoned {
            info!(attempts = self.state().attempts(), "Abandoning game in progress");
        }
        self.session.start_new_game_with(rng);
        info!("Started new session");
        self.save_session();
    }

    /// Type one letter
    ///
    /// # Errors
    /// See [`Session::append_letter`].
    pub fn type_letter(&mut self, letter: char) -> Result<(), PlayError> {
        self.session.append_letter(letter)?;
        self.save_session();
        Ok(())
    }

    /// Erase the last letter
    ///
    /// # Errors
    /// See [`Session::remove_letter`].
    pub fn erase_letter(&mut self) -> Result<char, PlayError> {
        let letter = self.session.remove_letter()?;
        self.save_session();
        Ok(letter)
    }

    /// Submit the typed word
    ///
    /// When the guess finishes the game, statistics are updated and saved
    /// after the session.
    ///
    /// # Errors
    /// See [`Session::submit_guess`].
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<SubmitOutcome, PlayError> {
        let outcome = self.session.submit_guess()?;
        self.save_session();

        if self.stats.record(outcome.status, outcome.attempt) {
            info!(
                status = ?outcome.status,
                attempt = outcome.attempt,
                played = self.stats.games_played,
                streak = self.stats.current_streak,
                "Statistics updated"
            );
            if let Err(e) = self.store.save_statistics(&self.stats) {
                error!(error = %e, "Failed to save statistics");
            }
        }

        Ok(outcome)
    }

    fn save_session(&mut self) {
        let snapshot = self.session.state().snapshot();
        if let Err(e) = self.store.save_session(&snapshot) {
            error!(error = %e, "Failed to save session");
        }
    }
}
