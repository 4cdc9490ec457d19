//! HTTP routes and extractors over [`GameService`].
//!
//! Every route is served with and without a trailing slash, and again under
//! an `/api` prefix.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{MethodRouter, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sweeper_protocol::{
    GameMove, GameSession, GameSnapshot, MeResponse, MoveId, NewGameRequest, NewMoveRequest, Pong,
    UpdateGameRequest, VisitRequest,
};

use crate::auth::{self, AuthError, CredentialVerifier, GAME_SCOPE, Identity};
use crate::error::{ApiError, ApiResult};
use crate::service::GameService;

/// Shared state behind every route.
pub struct Api {
    service: GameService,
    verifier: Arc<dyn CredentialVerifier>,
}

impl Api {
    pub fn new(service: GameService, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { service, verifier }
    }
}

pub fn router(api: Arc<Api>) -> Router {
    let routes = Router::new();
    let routes = both_slashes(routes, "/ping", get(ping));
    let routes = both_slashes(routes, "/me", get(me));
    let routes = both_slashes(routes, "/rpc/snapshot/{id}", get(snapshot));
    let routes = both_slashes(routes, "/rpc/visit/{id}", post(visit));
    let routes = both_slashes(routes, "/games", get(list_games).post(create_game));
    let routes = both_slashes(
        routes,
        "/games/{id}",
        get(get_game).put(update_game).delete(delete_game),
    );
    let routes = both_slashes(routes, "/moves", get(list_moves).post(create_move));
    let routes = both_slashes(routes, "/moves/{id}", get(get_move).delete(delete_move));
    let routes = routes.method_not_allowed_fallback(method_not_allowed);

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .fallback(not_found)
        .with_state(api)
}

fn both_slashes(
    router: Router<Arc<Api>>,
    path: &str,
    methods: MethodRouter<Arc<Api>>,
) -> Router<Arc<Api>> {
    router
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}

/// The verified caller of a game endpoint.
pub struct Caller(pub Identity);

impl FromRequestParts<Arc<Api>> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, api: &Arc<Api>) -> Result<Self, Self::Rejection> {
        let header = authorization(&parts.headers)?;
        Ok(Self(auth::authorize(api.verifier.as_ref(), header, GAME_SCOPE)?))
    }
}

/// A JSON body; any decoding failure is `invalid_request/body`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::invalid("body")
            }
        })?;

        serde_json::from_slice(&bytes).map(Self).map_err(|err| {
            log::debug!("Rejecting request body: {err}");
            ApiError::invalid("body")
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct MovesQuery {
    #[serde(rename = "gameId", alias = "filter_gameId")]
    game_id: Option<String>,
}

fn authorization(headers: &HeaderMap) -> Result<Option<&str>, AuthError> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::InvalidToken))
        .transpose()
}

/// Runs a service call off the async workers; the service takes blocking locks.
async fn blocking<T, F>(api: &Arc<Api>, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&GameService) -> ApiResult<T> + Send + 'static,
{
    let api = Arc::clone(api);
    tokio::task::spawn_blocking(move || f(&api.service))
        .await
        .map_err(|err| ApiError::internal(format!("handler task failed: {err}")))?
}

async fn ping() -> Json<Pong> {
    Json(Pong::default())
}

/// Reports the caller's claims without requiring any scope.
async fn me(State(api): State<Arc<Api>>, headers: HeaderMap) -> Json<MeResponse> {
    let identity = authorization(&headers)
        .and_then(auth::bearer_token)
        .and_then(|token| api.verifier.verify(token));

    Json(match identity {
        Ok(identity) => MeResponse::authorized(identity.claims()),
        Err(err) => MeResponse::unauthorized(err.reason()),
    })
}

async fn snapshot(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<GameSnapshot>> {
    blocking(&api, move |service| service.snapshot(&caller, &id))
        .await
        .map(Json)
}

async fn visit(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<VisitRequest>,
) -> ApiResult<Json<GameSnapshot>> {
    let visit = blocking(&api, move |service| service.visit(&caller, &id, &request)).await?;
    if !visit.accepted {
        let state = visit.snapshot.info.state.unwrap_or_default();
        return Err(ApiError::Conflict(state));
    }
    Ok(Json(visit.snapshot))
}

async fn list_games(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
) -> ApiResult<Json<Vec<GameSession>>> {
    blocking(&api, move |service| service.list(&caller)).await.map(Json)
}

async fn create_game(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    JsonBody(request): JsonBody<NewGameRequest>,
) -> ApiResult<Json<GameSession>> {
    blocking(&api, move |service| service.create(&caller, &request))
        .await
        .map(Json)
}

async fn get_game(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<GameSession>> {
    blocking(&api, move |service| service.load(&caller, &id))
        .await
        .map(Json)
}

async fn update_game(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateGameRequest>,
) -> ApiResult<Json<GameSession>> {
    blocking(&api, move |service| service.update_state(&caller, &id, &request))
        .await
        .map(Json)
}

async fn delete_game(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    blocking(&api, move |service| service.delete(&caller, &id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_moves(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    query: Result<Query<MovesQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<GameMove>>> {
    let Query(query) = query.map_err(|_| ApiError::invalid("query"))?;
    let game_id = query.game_id.filter(|id| !id.is_empty());

    blocking(&api, move |service| service.list_moves(&caller, game_id.as_deref()))
        .await
        .map(Json)
}

async fn create_move(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    JsonBody(request): JsonBody<NewMoveRequest>,
) -> ApiResult<Json<GameMove>> {
    blocking(&api, move |service| service.create_move(&caller, &request))
        .await
        .map(Json)
}

async fn get_move(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<Json<GameMove>> {
    let id = move_id(&id)?;
    blocking(&api, move |service| service.get_move(&caller, id))
        .await
        .map(Json)
}

async fn delete_move(
    State(api): State<Arc<Api>>,
    Caller(caller): Caller,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = move_id(&id)?;
    blocking(&api, move |service| service.delete_move(&caller, id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Ids that cannot exist are simply not found.
fn move_id(id: &str) -> ApiResult<MoveId> {
    id.parse().map_err(|_| ApiError::NotFound)
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
