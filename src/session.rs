//! Registry of independent rounds, one per session.
//!
//! A [`Round`] has no locking of its own. When rounds are served from
//! several threads, [`Sessions`] keeps each one behind its own mutex so that
//! actions on one session never interleave, while different sessions do not
//! contend with each other.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::debug;

use crate::error::SessionError;
use crate::options::RoundOptions;
use crate::round::Round;
use crate::snapshot::RoundSnapshot;
use crate::sync::Lock;

/// Identifier of an open session.
pub type SessionId = u32;

/// Open rounds keyed by session.
pub struct Sessions {
    /// Rounds by session id.
    rounds: Lock<HashMap<SessionId, Arc<Lock<Round>>>>,
    /// Next session id to assign.
    next_id: AtomicU32,
    /// Seeds the generator of each new round.
    seeder: Lock<ChaCha8Rng>,
    /// Options applied to every new round.
    options: RoundOptions,
}

impl Sessions {
    /// Creates an empty registry.
    ///
    /// Rounds opened later are seeded from a generator derived from `seed`,
    /// so a registry built with the same seed opens the same sequence of
    /// rounds.
    ///
    /// ```
    /// use bjtable::{RoundOptions, Sessions};
    ///
    /// let sessions = Sessions::new(RoundOptions::default(), 7);
    /// let id = sessions.open();
    /// sessions.with_round(id, |round| round.deal()).unwrap().unwrap();
    /// assert_eq!(sessions.snapshot(id).unwrap().remaining_cards, 48);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        Self {
            rounds: Lock::new(HashMap::new()),
            next_id: AtomicU32::new(0),
            seeder: Lock::new(ChaCha8Rng::seed_from_u64(seed)),
            options,
        }
    }

    /// Opens a session holding a new idle round.
    ///
    /// Returns the assigned session ID. IDs wrap around after
    /// `u32::MAX`; IDs of sessions that are still open are skipped.
    pub fn open(&self) -> SessionId {
        let seed = self.seeder.lock().next_u64();
        let round = Arc::new(Lock::new(Round::new(self.options, seed)));

        let mut rounds = self.rounds.lock();
        let id = loop {
            let candidate = self.next_id.fetch_add(1, Ordering::SeqCst);
            if !rounds.contains_key(&candidate) {
                break candidate;
            }
        };
        rounds.insert(id, round);
        drop(rounds);

        debug!(session = id, "session opened");
        id
    }

    /// Closes a session and discards its round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session is not open.
    pub fn close(&self, id: SessionId) -> Result<(), SessionError> {
        self.rounds
            .lock()
            .remove(&id)
            .ok_or(SessionError::NotFound(id))?;
        debug!(session = id, "session closed");
        Ok(())
    }

    /// Runs `f` on the session's round while holding that session's lock.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session is not open.
    pub fn with_round<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut Round) -> T,
    ) -> Result<T, SessionError> {
        let round = self
            .rounds
            .lock()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))?;

        let mut guard = round.lock();
        Ok(f(&mut *guard))
    }

    /// Returns the derived state of the session's round.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] if the session is not open.
    pub fn snapshot(&self, id: SessionId) -> Result<RoundSnapshot, SessionError> {
        self.with_round(id, |round| round.snapshot())
    }

    /// Returns the number of open sessions.
    pub fn len(&self) -> usize {
        self.rounds.lock().len()
    }

    /// Returns whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.rounds.lock().is_empty()
    }
}
