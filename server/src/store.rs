//! Record storage for sessions and moves.
//!
//! The engine only needs create, fetch, filter-with-order, update and delete;
//! no transactions are assumed.

use std::collections::BTreeMap;
use std::sync::RwLock;

use sweeper_core::{Coord2, MoveState};
use sweeper_protocol::{GameMove, GameSession, MoveId, SessionId, UserId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Session {0} already exists")]
    DuplicateSession(SessionId),
    #[error("Session {0} does not exist")]
    MissingSession(SessionId),
    #[error("Store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A move before the store assigns it an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMove {
    pub game_id: SessionId,
    pub owner_id: UserId,
    pub coords: Coord2,
    pub state: MoveState,
    pub create_time: i64,
}

pub trait GameStore: Send + Sync {
    fn insert_session(&self, session: GameSession) -> StoreResult<GameSession>;

    fn session(&self, id: &str) -> StoreResult<Option<GameSession>>;

    /// Sessions owned by `owner`, newest first.
    fn sessions_by_owner(&self, owner: UserId) -> StoreResult<Vec<GameSession>>;

    fn update_session(&self, session: &GameSession) -> StoreResult<()>;

    /// Removes the session and every move recorded against it.
    fn delete_session(&self, id: &str) -> StoreResult<bool>;

    /// Appends a move; ids increase strictly with insertion order.
    fn append_move(&self, new_move: NewMove) -> StoreResult<GameMove>;

    fn game_move(&self, id: MoveId) -> StoreResult<Option<GameMove>>;

    /// Moves of one game, newest first.
    fn moves_for_game(&self, game_id: &str) -> StoreResult<Vec<GameMove>>;

    /// Moves made by `owner` across all games, newest first.
    fn moves_by_owner(&self, owner: UserId) -> StoreResult<Vec<GameMove>>;

    fn delete_move(&self, id: MoveId) -> StoreResult<bool>;
}

#[derive(Debug, Default)]
struct MemoryTables {
    sessions: Vec<GameSession>,
    moves: BTreeMap<MoveId, GameMove>,
    last_move_id: MoveId,
}

/// Process-local store; everything is lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<MemoryTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&MemoryTables) -> T) -> StoreResult<T> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&tables))
    }

    fn write<T>(&self, f: impl FnOnce(&mut MemoryTables) -> T) -> StoreResult<T> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut tables))
    }
}

impl GameStore for MemoryStore {
    fn insert_session(&self, session: GameSession) -> StoreResult<GameSession> {
        self.write(|tables| {
            if tables.sessions.iter().any(|s| s.id == session.id) {
                return Err(StoreError::DuplicateSession(session.id));
            }
            tables.sessions.push(session.clone());
            Ok(session)
        })?
    }

    fn session(&self, id: &str) -> StoreResult<Option<GameSession>> {
        self.read(|tables| tables.sessions.iter().find(|s| s.id == id).cloned())
    }

    fn sessions_by_owner(&self, owner: UserId) -> StoreResult<Vec<GameSession>> {
        self.read(|tables| {
            let mut sessions: Vec<_> = tables
                .sessions
                .iter()
                .rev()
                .filter(|s| s.owner_id == owner)
                .cloned()
                .collect();
            sessions.sort_by_key(|s| std::cmp::Reverse(s.create_time));
            sessions
        })
    }

    fn update_session(&self, session: &GameSession) -> StoreResult<()> {
        self.write(|tables| {
            let stored = tables
                .sessions
                .iter_mut()
                .find(|s| s.id == session.id)
                .ok_or_else(|| StoreError::MissingSession(session.id.clone()))?;
            *stored = session.clone();
            Ok(())
        })?
    }

    fn delete_session(&self, id: &str) -> StoreResult<bool> {
        self.write(|tables| {
            let before = tables.sessions.len();
            tables.sessions.retain(|s| s.id != id);
            tables.moves.retain(|_, m| m.game_id != id);
            tables.sessions.len() != before
        })
    }

    fn append_move(&self, new_move: NewMove) -> StoreResult<GameMove> {
        self.write(|tables| {
            tables.last_move_id += 1;
            let (x, y) = new_move.coords;
            let recorded = GameMove {
                id: tables.last_move_id,
                game_id: new_move.game_id,
                owner_id: new_move.owner_id,
                x,
                y,
                state: new_move.state,
                create_time: new_move.create_time,
            };
            tables.moves.insert(recorded.id, recorded.clone());
            recorded
        })
    }

    fn game_move(&self, id: MoveId) -> StoreResult<Option<GameMove>> {
        self.read(|tables| tables.moves.get(&id).cloned())
    }

    fn moves_for_game(&self, game_id: &str) -> StoreResult<Vec<GameMove>> {
        self.read(|tables| {
            tables
                .moves
                .values()
                .rev()
                .filter(|m| m.game_id == game_id)
                .cloned()
                .collect()
        })
    }

    fn moves_by_owner(&self, owner: UserId) -> StoreResult<Vec<GameMove>> {
        self.read(|tables| {
            tables
                .moves
                .values()
                .rev()
                .filter(|m| m.owner_id == owner)
                .cloned()
                .collect()
        })
    }

    fn delete_move(&self, id: MoveId) -> StoreResult<bool> {
        self.write(|tables| tables.moves.remove(&id).is_some())
    }
}
