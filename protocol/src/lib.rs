//! JSON bodies exchanged over the HTTP API.
//!
//! Resource bodies (`/games/`, `/moves/`) use camelCase field names, while the
//! RPC snapshot keeps snake_case, matching what existing clients expect.

use serde::{Deserialize, Serialize};
use sweeper_core::{Coord, Coord2, MoveState, SessionState};

pub type SessionId = String;
pub type UserId = i64;
pub type MoveId = u64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: Coord,
    pub y: Coord,
}

impl From<Coord2> for Coordinate {
    fn from((x, y): Coord2) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for Coord2 {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

/// A stored game session as returned by `/games/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub id: SessionId,
    pub owner_id: UserId,
    pub width: Coord,
    pub height: Coord,
    pub mine_density: u8,
    pub mine_coordinates: Vec<Coordinate>,
    /// `None` is treated as active.
    pub state: Option<SessionState>,
    pub create_time: i64,
}

impl GameSession {
    pub fn effective_state(&self) -> SessionState {
        self.state.unwrap_or_default()
    }
}

/// A stored move as returned by `/moves/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMove {
    pub id: MoveId,
    pub game_id: SessionId,
    pub owner_id: UserId,
    pub x: Coord,
    pub y: Coord,
    pub state: MoveState,
    pub create_time: i64,
}

impl sweeper_core::PlacedMove for GameMove {
    fn coords(&self) -> Coord2 {
        (self.x, self.y)
    }

    fn state(&self) -> MoveState {
        self.state
    }
}

/// `POST /games/`. Fields are optional so that a missing one can be named.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGameRequest {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub mine_density: Option<i64>,
}

/// `PUT /games/{id}`; only the state can change.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateGameRequest {
    pub state: Option<String>,
}

/// `POST /moves/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMoveRequest {
    pub game_id: Option<String>,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub state: Option<String>,
}

/// `POST /rpc/visit/{id}`. A missing state means reveal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitRequest {
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub state: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    pub id: SessionId,
    pub width: Coord,
    pub height: Coord,
    pub mine_density: u8,
    pub create_time: i64,
    pub state: Option<SessionState>,
}

impl From<&GameSession> for GameInfo {
    fn from(session: &GameSession) -> Self {
        Self {
            id: session.id.clone(),
            width: session.width,
            height: session.height,
            mine_density: session.mine_density,
            create_time: session.create_time,
            state: session.state,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedMove {
    pub x: Coord,
    pub y: Coord,
    pub state: MoveState,
}

impl From<&GameMove> for SimplifiedMove {
    fn from(m: &GameMove) -> Self {
        Self {
            x: m.x,
            y: m.y,
            state: m.state,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hint {
    /// Row-to-column matrix, `nearby_mine_count[y][x]`.
    pub nearby_mine_count: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub info: GameInfo,
    pub moves: Vec<SimplifiedMove>,
    pub hint: Hint,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pong {
    pub ping: String,
}

impl Default for Pong {
    fn default() -> Self {
        Self {
            ping: "pong".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub scope: String,
}

/// `GET /me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeResponse {
    Authorized { authorized: bool, claims: Claims },
    Unauthorized { authorized: bool, reason: String },
}

impl MeResponse {
    pub fn authorized(claims: Claims) -> Self {
        Self::Authorized {
            authorized: true,
            claims,
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            authorized: false,
            reason: reason.into(),
        }
    }
}
