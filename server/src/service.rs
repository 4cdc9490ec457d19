//! Game session facade: composes the engine, the reducer and the store into
//! the operations the HTTP layer calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use sweeper_core::*;
use sweeper_protocol::{
    self as protocol, GameInfo, GameMove, GameSession, GameSnapshot, MoveId, NewGameRequest,
    NewMoveRequest, SimplifiedMove, UpdateGameRequest, VisitRequest,
};

use crate::auth::Identity;
use crate::config::BoardLimits;
use crate::error::{ApiError, ApiResult};
use crate::store::{GameStore, NewMove};

/// Result of a visit. A rejected visit still carries the current snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Visit {
    pub accepted: bool,
    pub snapshot: GameSnapshot,
}

pub struct GameService {
    store: Arc<dyn GameStore>,
    limits: BoardLimits,
    session_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl GameService {
    pub fn new(store: Arc<dyn GameStore>, limits: BoardLimits) -> Self {
        Self {
            store,
            limits,
            session_locks: Mutex::default(),
        }
    }

    pub fn create(&self, caller: &Identity, request: &NewGameRequest) -> ApiResult<GameSession> {
        let width = coord_field("width", request.width)?;
        let height = coord_field("height", request.height)?;
        let density = required("mineDensity", request.mine_density)?;
        let density = u8::try_from(density).map_err(|_| ApiError::invalid("mineDensity"))?;

        if width == 0 || width > self.limits.max_width {
            return Err(ApiError::invalid("width"));
        }
        if height == 0 || height > self.limits.max_height {
            return Err(ApiError::invalid("height"));
        }

        let config = BoardConfig::new((width, height), density)?;
        let layout = RandomLayoutGenerator::new(rand::random()).generate(config);

        let session = GameSession {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: caller.user_id,
            width,
            height,
            mine_density: density,
            mine_coordinates: layout.mine_coords().into_iter().map(Into::into).collect(),
            state: None,
            create_time: unix_now(),
        };
        let session = self.store.insert_session(session)?;

        log::info!(
            "User {} created game {} ({}x{}, {} mines)",
            caller.user_id,
            session.id,
            width,
            height,
            layout.mine_count()
        );
        Ok(session)
    }

    /// Fetches a session owned by `caller`; someone else's session is not found.
    pub fn load(&self, caller: &Identity, id: &str) -> ApiResult<GameSession> {
        match self.store.session(id)? {
            Some(session) if session.owner_id == caller.user_id => Ok(session),
            Some(_) => {
                log::debug!("User {} asked for game {} they do not own", caller.user_id, id);
                Err(ApiError::NotFound)
            }
            None => Err(ApiError::NotFound),
        }
    }

    pub fn list(&self, caller: &Identity) -> ApiResult<Vec<GameSession>> {
        Ok(self.store.sessions_by_owner(caller.user_id)?)
    }

    pub fn snapshot(&self, caller: &Identity, id: &str) -> ApiResult<GameSnapshot> {
        let session = self.load(caller, id)?;
        let (moves, engine) = self.replay(&session)?;
        Ok(snapshot_of(&session, &moves, engine.mine_layout()))
    }

    /// Applies one move. The whole read-modify-write runs under the session's lock.
    pub fn visit(&self, caller: &Identity, id: &str, request: &VisitRequest) -> ApiResult<Visit> {
        self.with_session(caller, id, |session| self.visit_locked(caller, session, request))
    }

    fn visit_locked(
        &self,
        caller: &Identity,
        mut session: GameSession,
        request: &VisitRequest,
    ) -> ApiResult<Visit> {
        let coords = coords_field(request.x, request.y)?;
        let requested = optional_state(request.state.as_deref())?;
        let (moves, mut engine) = self.replay(&session)?;

        if engine.is_finished() {
            log::debug!("Game {} already concluded as {}", session.id, engine.state());
            return Ok(Visit {
                accepted: false,
                snapshot: snapshot_of(&session, &moves, engine.mine_layout()),
            });
        }

        let coords = check_bounds(&session, coords)?;
        let outcome = engine.apply(MoveAction::from_requested(requested), coords)?;

        let create_time = unix_now();
        for change in outcome.changes() {
            self.store.append_move(NewMove {
                game_id: session.id.clone(),
                owner_id: caller.user_id,
                coords: change.coords,
                state: change.state,
                create_time,
            })?;
        }

        if outcome.is_accepted() && session.state != Some(outcome.state()) {
            session.state = Some(outcome.state());
            self.store.update_session(&session)?;
            if outcome.state().is_terminal() {
                log::info!("Game {} concluded as {}", session.id, outcome.state());
            }
        }

        let (moves, engine) = self.replay(&session)?;
        Ok(Visit {
            accepted: outcome.is_accepted(),
            snapshot: snapshot_of(&session, &moves, engine.mine_layout()),
        })
    }

    /// Changes the session state; a concluded game keeps its state.
    pub fn update_state(
        &self,
        caller: &Identity,
        id: &str,
        request: &UpdateGameRequest,
    ) -> ApiResult<GameSession> {
        let next: SessionState = required("state", request.state.as_deref())?
            .parse()
            .map_err(|_| ApiError::invalid("state"))?;

        self.with_session(caller, id, |mut session| {
            let current = session.effective_state();
            if !current.can_become(next) {
                return Err(ApiError::Conflict(current));
            }

            session.state = Some(next);
            self.store.update_session(&session)?;
            Ok(session)
        })
    }

    pub fn delete(&self, caller: &Identity, id: &str) -> ApiResult<()> {
        self.with_session(caller, id, |session| {
            if self.store.delete_session(&session.id)? {
                Ok(())
            } else {
                Err(ApiError::NotFound)
            }
        })?;

        self.forget_lock(id)?;
        log::info!("User {} deleted game {}", caller.user_id, id);
        Ok(())
    }

    /// The caller's moves, reduced to the latest per game and coordinate.
    pub fn list_moves(&self, caller: &Identity, game_id: Option<&str>) -> ApiResult<Vec<GameMove>> {
        let moves = match game_id {
            Some(game_id) => {
                self.load(caller, game_id)?;
                self.store.moves_for_game(game_id)?
            }
            None => self.store.moves_by_owner(caller.user_id)?,
        };

        Ok(dedup_newest_first(
            moves.into_iter().filter(|m| m.owner_id == caller.user_id),
            |m| (m.game_id.clone(), m.x, m.y),
        ))
    }

    /// Records a raw move without running the engine.
    pub fn create_move(&self, caller: &Identity, request: &NewMoveRequest) -> ApiResult<GameMove> {
        let game_id = required("gameId", request.game_id.as_deref())?;
        let coords = coords_field(request.x, request.y)?;
        let state: MoveState = required("state", request.state.as_deref())?
            .parse()
            .map_err(|_| ApiError::invalid("state"))?;

        self.with_session(caller, game_id, |session| {
            let coords = check_bounds(&session, coords)?;
            Ok(self.store.append_move(NewMove {
                game_id: session.id,
                owner_id: caller.user_id,
                coords,
                state,
                create_time: unix_now(),
            })?)
        })
    }

    pub fn get_move(&self, caller: &Identity, id: MoveId) -> ApiResult<GameMove> {
        match self.store.game_move(id)? {
            Some(m) if m.owner_id == caller.user_id => Ok(m),
            _ => Err(ApiError::NotFound),
        }
    }

    pub fn delete_move(&self, caller: &Identity, id: MoveId) -> ApiResult<()> {
        let m = self.get_move(caller, id)?;
        if self.store.delete_move(m.id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }

    /// Runs `f` on a freshly loaded session while holding that session's lock.
    ///
    /// The session is loaded again after the lock is taken, so `f` never sees
    /// a session that was deleted while this call waited.
    fn with_session<T>(
        &self,
        caller: &Identity,
        id: &str,
        f: impl FnOnce(GameSession) -> ApiResult<T>,
    ) -> ApiResult<T> {
        self.load(caller, id)?;
        let lock = self.session_lock(id)?;
        let guard = lock.lock().map_err(|_| ApiError::internal("session lock poisoned"))?;

        match self.load(caller, id) {
            Ok(session) => f(session),
            Err(err) => {
                drop(guard);
                if self.store.session(id)?.is_none() {
                    self.forget_lock(id)?;
                }
                Err(err)
            }
        }
    }

    fn session_lock(&self, id: &str) -> ApiResult<Arc<Mutex<()>>> {
        let mut locks = self.locks()?;
        Ok(Arc::clone(locks.entry(id.to_string()).or_default()))
    }

    fn forget_lock(&self, id: &str) -> ApiResult<()> {
        self.locks()?.remove(id);
        Ok(())
    }

    fn locks(&self) -> ApiResult<MutexGuard<'_, HashMap<String, Arc<Mutex<()>>>>> {
        self.session_locks
            .lock()
            .map_err(|_| ApiError::internal("session locks poisoned"))
    }

    /// Reduces the stored move log and rebuilds the engine from it.
    fn replay(&self, session: &GameSession) -> ApiResult<(MoveLog<GameMove>, GameEngine)> {
        let mines: Vec<Coord2> = session.mine_coordinates.iter().map(|&c| c.into()).collect();
        let layout = MineLayout::from_mine_coords((session.width, session.height), &mines)
            .map_err(|err| {
                ApiError::internal(format!("game {} has a corrupt mine layout: {err}", session.id))
            })?;

        let moves = MoveLog::from_newest_first(self.store.moves_for_game(&session.id)?);
        let engine = GameEngine::replay(layout, session.effective_state(), &moves);
        Ok((moves, engine))
    }
}

fn snapshot_of(session: &GameSession, moves: &MoveLog<GameMove>, layout: &MineLayout) -> GameSnapshot {
    GameSnapshot {
        info: GameInfo::from(session),
        moves: moves.iter().map(SimplifiedMove::from).collect(),
        hint: protocol::Hint {
            nearby_mine_count: Hint::from_layout(layout).rows(),
        },
    }
}

fn required<T>(field: &str, value: Option<T>) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::invalid(field))
}

fn coord_field(field: &str, value: Option<i64>) -> ApiResult<Coord> {
    Coord::try_from(required(field, value)?).map_err(|_| ApiError::invalid(field))
}

fn coords_field(x: Option<i64>, y: Option<i64>) -> ApiResult<Coord2> {
    Ok((coord_field("x", x)?, coord_field("y", y)?))
}

fn check_bounds(session: &GameSession, (x, y): Coord2) -> ApiResult<Coord2> {
    if x >= session.width {
        return Err(ApiError::invalid("x"));
    }
    if y >= session.height {
        return Err(ApiError::invalid("y"));
    }
    Ok((x, y))
}

fn optional_state(state: Option<&str>) -> ApiResult<Option<MoveState>> {
    state
        .map(|s| s.parse().map_err(|_| ApiError::invalid("state")))
        .transpose()
}

fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::thread;
    use sweeper_protocol::Coordinate;

    fn alice() -> Identity {
        Identity {
            user_id: 1,
            scope: "game".to_string(),
        }
    }

    fn bob() -> Identity {
        Identity {
            user_id: 2,
            scope: "game".to_string(),
        }
    }

    fn service() -> (GameService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = GameService::new(store.clone(), BoardLimits::default());
        (service, store)
    }

    /// Stores a session with a hand-picked layout.
    fn seeded(store: &MemoryStore, id: &str, size: Coord2, mines: &[Coord2]) -> GameSession {
        let session = GameSession {
            id: id.to_string(),
            owner_id: alice().user_id,
            width: size.0,
            height: size.1,
            mine_density: 0,
            mine_coordinates: mines.iter().map(|&c| Coordinate::from(c)).collect(),
            state: None,
            create_time: 0,
        };
        store.insert_session(session).unwrap()
    }

    fn visit(x: i64, y: i64, state: Option<&str>) -> VisitRequest {
        VisitRequest {
            x: Some(x),
            y: Some(y),
            state: state.map(str::to_string),
        }
    }

    #[test]
    fn create_generates_layout_from_density() {
        let (service, _) = service();
        let request = NewGameRequest {
            width: Some(10),
            height: Some(8),
            mine_density: Some(15),
        };

        let session = service.create(&alice(), &request).unwrap();

        assert_eq!(session.owner_id, 1);
        assert_eq!(session.mine_coordinates.len(), 12);
        assert_eq!(session.state, None);
        assert_eq!(service.load(&alice(), &session.id).unwrap(), session);
    }

    #[test]
    fn create_names_the_bad_field() {
        let (service, _) = service();

        let missing = NewGameRequest {
            width: Some(10),
            height: None,
            mine_density: Some(10),
        };
        assert_eq!(service.create(&alice(), &missing), Err(ApiError::invalid("height")));

        let too_dense = NewGameRequest {
            width: Some(10),
            height: Some(10),
            mine_density: Some(101),
        };
        assert_eq!(service.create(&alice(), &too_dense), Err(ApiError::invalid("mineDensity")));

        let too_wide = NewGameRequest {
            width: Some(201),
            height: Some(10),
            mine_density: Some(10),
        };
        assert_eq!(service.create(&alice(), &too_wide), Err(ApiError::invalid("width")));
    }

    #[test]
    fn other_users_session_is_not_found() {
        let (service, store) = service();
        seeded(&store, "g", (2, 1), &[(0, 0)]);

        assert_eq!(service.load(&bob(), "g"), Err(ApiError::NotFound));
        assert_eq!(service.snapshot(&bob(), "g"), Err(ApiError::NotFound));
        assert_eq!(service.visit(&bob(), "g", &visit(1, 0, None)), Err(ApiError::NotFound));
        assert!(store.moves_for_game("g").unwrap().is_empty());
    }

    #[test]
    fn reveal_then_flag_wins_two_cell_game() {
        let (service, store) = service();
        seeded(&store, "g", (2, 1), &[(0, 0)]);

        let first = service.visit(&alice(), "g", &visit(1, 0, None)).unwrap();
        assert!(first.accepted);
        assert_eq!(first.snapshot.info.state, Some(SessionState::Active));
        assert_eq!(
            first.snapshot.moves,
            [SimplifiedMove { x: 1, y: 0, state: MoveState::Cleared }]
        );
        assert_eq!(first.snapshot.hint.nearby_mine_count, [[0, 1]]);

        let second = service.visit(&alice(), "g", &visit(0, 0, Some("flagged"))).unwrap();
        assert!(second.accepted);
        assert_eq!(second.snapshot.info.state, Some(SessionState::Cleared));
        assert_eq!(second.snapshot.moves.len(), 2);
        assert_eq!(second.snapshot.moves[0].state, MoveState::Flagged);
    }

    #[test]
    fn exploded_game_rejects_visits_without_writes() {
        let (service, store) = service();
        seeded(&store, "g", (3, 3), &[(1, 1)]);

        let boom = service.visit(&alice(), "g", &visit(1, 1, None)).unwrap();
        assert!(boom.accepted);
        assert_eq!(boom.snapshot.info.state, Some(SessionState::Exploded));

        let moves_before = store.moves_for_game("g").unwrap().len();
        let late = service.visit(&alice(), "g", &visit(0, 0, None)).unwrap();
        assert!(!late.accepted);
        assert_eq!(late.snapshot.info.state, Some(SessionState::Exploded));

        // concluded wins over an out-of-bounds target
        let outside = service.visit(&alice(), "g", &visit(9, 9, Some("flagged"))).unwrap();
        assert!(!outside.accepted);
        assert_eq!(store.moves_for_game("g").unwrap().len(), moves_before);
    }

    #[test]
    fn flood_fill_writes_one_move_per_cleared_cell() {
        let (service, store) = service();
        seeded(&store, "g", (4, 4), &[(3, 3)]);

        let result = service.visit(&alice(), "g", &visit(0, 0, None)).unwrap();

        assert_eq!(store.moves_for_game("g").unwrap().len(), 15);
        assert_eq!(result.snapshot.moves.len(), 15);
        assert_eq!(result.snapshot.info.state, Some(SessionState::Active));
    }

    #[test]
    fn replayed_log_honours_latest_move() {
        let (service, store) = service();
        seeded(&store, "g", (3, 1), &[]);

        service.visit(&alice(), "g", &visit(1, 0, Some("flagged"))).unwrap();
        service.visit(&alice(), "g", &visit(1, 0, Some("unknown"))).unwrap();
        let result = service.visit(&alice(), "g", &visit(0, 0, None)).unwrap();

        // the unknown mark no longer blocks the fill
        assert_eq!(result.snapshot.info.state, Some(SessionState::Cleared));
        assert_eq!(result.snapshot.moves.len(), 3);
        assert!(result.snapshot.moves.iter().all(|m| m.state == MoveState::Cleared));
    }

    #[test]
    fn out_of_bounds_and_bad_state_are_invalid() {
        let (service, store) = service();
        seeded(&store, "g", (3, 2), &[]);

        assert_eq!(service.visit(&alice(), "g", &visit(3, 0, None)), Err(ApiError::invalid("x")));
        assert_eq!(service.visit(&alice(), "g", &visit(0, 2, None)), Err(ApiError::invalid("y")));
        assert_eq!(service.visit(&alice(), "g", &visit(-1, 0, None)), Err(ApiError::invalid("x")));
        assert_eq!(
            service.visit(&alice(), "g", &visit(0, 0, Some("boom"))),
            Err(ApiError::invalid("state"))
        );
        assert!(store.moves_for_game("g").unwrap().is_empty());
    }

    #[test]
    fn concluded_state_cannot_be_rewritten() {
        let (service, store) = service();
        seeded(&store, "g", (2, 2), &[]);
        let set = |state: &str| UpdateGameRequest {
            state: Some(state.to_string()),
        };

        let updated = service.update_state(&alice(), "g", &set("exploded")).unwrap();
        assert_eq!(updated.state, Some(SessionState::Exploded));

        assert_eq!(
            service.update_state(&alice(), "g", &set("active")),
            Err(ApiError::Conflict(SessionState::Exploded))
        );
        assert_eq!(
            service.update_state(&alice(), "g", &UpdateGameRequest::default()),
            Err(ApiError::invalid("state"))
        );
    }

    #[test]
    fn delete_removes_session_and_moves() {
        let (service, store) = service();
        seeded(&store, "g", (2, 2), &[]);
        service.visit(&alice(), "g", &visit(0, 0, Some("flagged"))).unwrap();

        assert_eq!(service.delete(&bob(), "g"), Err(ApiError::NotFound));
        service.delete(&alice(), "g").unwrap();

        assert_eq!(service.load(&alice(), "g"), Err(ApiError::NotFound));
        assert!(store.moves_for_game("g").unwrap().is_empty());
    }

    #[test]
    fn move_listing_is_reduced_per_game_and_coordinate() {
        let (service, store) = service();
        seeded(&store, "a", (2, 2), &[(1, 1)]);
        seeded(&store, "b", (2, 2), &[(1, 1)]);

        service.visit(&alice(), "a", &visit(0, 0, Some("flagged"))).unwrap();
        service.visit(&alice(), "a", &visit(0, 0, Some("unknown"))).unwrap();
        service.visit(&alice(), "b", &visit(0, 0, Some("flagged"))).unwrap();

        let all = service.list_moves(&alice(), None).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!((all[0].game_id.as_str(), all[0].state), ("b", MoveState::Flagged));
        assert_eq!((all[1].game_id.as_str(), all[1].state), ("a", MoveState::Unknown));

        let only_a = service.list_moves(&alice(), Some("a")).unwrap();
        assert_eq!(only_a.len(), 1);
        assert!(service.list_moves(&bob(), None).unwrap().is_empty());
        assert_eq!(service.list_moves(&bob(), Some("a")), Err(ApiError::NotFound));
    }

    #[test]
    fn raw_moves_are_owned_by_their_creator() {
        let (service, store) = service();
        seeded(&store, "g", (2, 2), &[]);
        let request = NewMoveRequest {
            game_id: Some("g".to_string()),
            x: Some(1),
            y: Some(1),
            state: Some("flagged".to_string()),
        };

        let created = service.create_move(&alice(), &request).unwrap();
        assert_eq!(created.state, MoveState::Flagged);
        assert_eq!(service.get_move(&alice(), created.id).unwrap(), created);
        assert_eq!(service.get_move(&bob(), created.id), Err(ApiError::NotFound));
        assert_eq!(service.create_move(&bob(), &request), Err(ApiError::NotFound));

        service.delete_move(&alice(), created.id).unwrap();
        assert_eq!(service.get_move(&alice(), created.id), Err(ApiError::NotFound));
    }

    #[test]
    fn raw_move_waiting_on_a_deleted_game_writes_nothing() {
        let (service, store) = service();
        seeded(&store, "g", (2, 2), &[]);
        let request = NewMoveRequest {
            game_id: Some("g".to_string()),
            x: Some(0),
            y: Some(0),
            state: Some("flagged".to_string()),
        };

        let lock = service.session_lock("g").unwrap();
        let guard = lock.lock().unwrap();
        thread::scope(|scope| {
            let pending = scope.spawn(|| service.create_move(&alice(), &request));

            // map, this test and the writer each hold the lock once it waits
            while Arc::strong_count(&lock) < 3 {
                thread::yield_now();
            }
            store.delete_session("g").unwrap();
            drop(guard);

            assert_eq!(pending.join().unwrap(), Err(ApiError::NotFound));
        });

        assert!(store.moves_by_owner(alice().user_id).unwrap().is_empty());
        assert!(!service.locks().unwrap().contains_key("g"));
    }

    #[test]
    fn concurrent_visits_match_a_serial_run() {
        let (service, store) = service();
        let width: Coord = 8;
        seeded(&store, "g", (width, 1), &[]);

        let mut seen: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..width)
                .map(|x| {
                    let service = &service;
                    scope.spawn(move || service.visit(&alice(), "g", &visit(i64::from(x), 0, Some("flagged"))))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    let result = handle.join().unwrap().unwrap();
                    assert!(result.accepted);
                    result.snapshot.moves.len()
                })
                .collect()
        });

        // every visit saw all the ones before it
        seen.sort_unstable();
        assert_eq!(seen, (1..=usize::from(width)).collect::<Vec<_>>());
        assert_eq!(service.load(&alice(), "g").unwrap().state, Some(SessionState::Cleared));
        assert_eq!(store.moves_for_game("g").unwrap().len(), usize::from(width));

        let late: Vec<Visit> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| service.visit(&alice(), "g", &visit(0, 0, None))))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap().unwrap()).collect()
        });
        assert!(late.iter().all(|v| !v.accepted));
        assert_eq!(store.moves_for_game("g").unwrap().len(), usize::from(width));
    }

    #[test]
    fn no_visit_is_accepted_after_a_concurrent_explosion() {
        let (service, store) = service();
        seeded(&store, "g", (3, 3), &[(1, 1)]);
        let targets: Vec<(i64, i64)> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();

        let results: Vec<((i64, i64), Visit)> = thread::scope(|scope| {
            let handles: Vec<_> = targets
                .iter()
                .map(|&(x, y)| {
                    let service = &service;
                    let state = if (x, y) == (1, 1) { None } else { Some("flagged") };
                    scope.spawn(move || ((x, y), service.visit(&alice(), "g", &visit(x, y, state)).unwrap()))
                })
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        let (_, boom) = results.iter().find(|(target, _)| *target == (1, 1)).unwrap();
        assert!(boom.accepted);
        assert_eq!(boom.snapshot.info.state, Some(SessionState::Exploded));

        let mut accepted = 1;
        for (_, result) in results.iter().filter(|(target, _)| *target != (1, 1)) {
            if result.accepted {
                accepted += 1;
                assert_eq!(result.snapshot.info.state, Some(SessionState::Active));
                assert!(result.snapshot.moves.len() < boom.snapshot.moves.len());
            } else {
                assert_eq!(result.snapshot.info.state, Some(SessionState::Exploded));
            }
        }
        assert_eq!(store.moves_for_game("g").unwrap().len(), accepted);
    }
}
