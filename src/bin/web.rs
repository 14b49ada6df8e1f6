//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Configuration comes from the environment, see `pickems_web::config`.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{self, Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use pickems_web::{
    group_highlights, import_teams_csv, layout_bracket, leaderboard_csv, match_highlight,
    pick_match_winner, populate_sample_tournament, score_picks, set_advancing_teams,
    set_match_winner, toggle_group_team, AppConfig, BracketGeometry, BracketSide, GroupId,
    MatchId, PickemsError, PickemsStore, RoundPolicy, StageUpdate, TeamId, TeamUpdate, Tournament,
    TournamentEntry, TournamentId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path as FsPath;
use std::sync::RwLock;

/// Store plus a flag telling the snapshot task there is something to write.
struct ServerState {
    store: PickemsStore,
    dirty: bool,
}

type AppState = Data<RwLock<ServerState>>;

const SESSION_USERNAME: &str = "username";
const SESSION_ADMIN: &str = "is_admin";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    username: Option<String>,
    is_admin: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TournamentSummary {
    id: TournamentId,
    name: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize)]
struct UsernameBody {
    username: String,
}

#[derive(Deserialize)]
struct LoginBody {
    password: String,
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
    #[serde(default)]
    seed: Option<u32>,
    #[serde(default)]
    logo: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamIdBody {
    team_id: TeamId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionalTeamBody {
    #[serde(default)]
    team_id: Option<TeamId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdvancingBody {
    team_ids: Vec<TeamId>,
}

#[derive(Deserialize)]
struct AddMatchBody {
    round: String,
    #[serde(default)]
    bracket: BracketSide,
}

#[derive(Deserialize)]
struct RoundBody {
    round: String,
}

#[derive(Deserialize)]
struct MatchTeamsBody {
    #[serde(default)]
    team1: Option<TeamId>,
    #[serde(default)]
    team2: Option<TeamId>,
}

#[derive(Deserialize)]
struct RoundPolicyBody {
    policy: RoundPolicy,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TeamPath {
    id: TournamentId,
    team_id: TeamId,
}

#[derive(Deserialize)]
struct GroupPath {
    id: TournamentId,
    group_id: GroupId,
}

#[derive(Deserialize)]
struct GroupTeamPath {
    id: TournamentId,
    group_id: GroupId,
    team_id: TeamId,
}

#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn error_response(e: &PickemsError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        PickemsError::TournamentNotFound(_)
        | PickemsError::TeamNotFound(_)
        | PickemsError::GroupNotFound(_)
        | PickemsError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn unauthorized(message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({ "error": message }))
}

fn session_username(session: &Session) -> Option<String> {
    session.get::<String>(SESSION_USERNAME).ok().flatten()
}

fn session_is_admin(session: &Session) -> bool {
    session
        .get::<bool>(SESSION_ADMIN)
        .ok()
        .flatten()
        .unwrap_or(false)
}

/// Run a read-only view against one tournament.
fn read_entry(state: &AppState, id: TournamentId, f: impl FnOnce(&TournamentEntry) -> HttpResponse) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.get(id) {
        Ok(entry) => f(entry),
        Err(e) => error_response(&e),
    }
}

/// Run a write against one tournament; on success the store is marked for the next snapshot.
fn write_entry(
    state: &AppState,
    id: TournamentId,
    f: impl FnOnce(&mut TournamentEntry) -> Result<HttpResponse, PickemsError>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.get_mut(id).and_then(f) {
        Ok(response) => {
            g.dirty = true;
            response
        }
        Err(e) => error_response(&e),
    }
}

/// Admin-only edit of the tournament; responds with the updated tournament.
fn admin_edit<T>(
    state: &AppState,
    session: &Session,
    id: TournamentId,
    f: impl FnOnce(&mut Tournament) -> Result<T, PickemsError>,
) -> HttpResponse {
    if !session_is_admin(session) {
        return unauthorized("Admin login required");
    }
    write_entry(state, id, |entry| {
        entry.edit(f)?;
        Ok(HttpResponse::Ok().json(&entry.tournament))
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pickems-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/api/session")]
async fn api_get_session(session: Session) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse {
        username: session_username(&session),
        is_admin: session_is_admin(&session),
    })
}

/// Set the display name used for picks and the leaderboard.
#[post("/api/session")]
async fn api_set_username(session: Session, body: Json<UsernameBody>) -> HttpResponse {
    let username = body.username.trim();
    if username.is_empty() {
        return error_response(&PickemsError::EmptyName);
    }
    if let Err(e) = session.insert(SESSION_USERNAME, username) {
        log::error!("Failed to store username in session: {e}");
        return HttpResponse::InternalServerError().body("session error");
    }
    HttpResponse::Ok().json(SessionResponse {
        username: Some(username.to_string()),
        is_admin: session_is_admin(&session),
    })
}

#[delete("/api/session")]
async fn api_clear_session(session: Session) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

#[post("/api/admin/login")]
async fn api_admin_login(session: Session, config: Data<AppConfig>, body: Json<LoginBody>) -> HttpResponse {
    if body.password != config.admin_password {
        log::warn!("Rejected admin login");
        return unauthorized("Incorrect password!");
    }
    if let Err(e) = session.insert(SESSION_ADMIN, true) {
        log::error!("Failed to store admin flag in session: {e}");
        return HttpResponse::InternalServerError().body("session error");
    }
    HttpResponse::Ok().json(SessionResponse {
        username: session_username(&session),
        is_admin: true,
    })
}

#[post("/api/admin/logout")]
async fn api_admin_logout(session: Session) -> HttpResponse {
    session.remove(SESSION_ADMIN);
    HttpResponse::NoContent().finish()
}

/// All tournaments, newest first.
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let list: Vec<TournamentSummary> = g
        .store
        .list()
        .into_iter()
        .map(|t| TournamentSummary {
            id: t.id,
            name: t.name.clone(),
            created_at: t.created_at,
        })
        .collect();
    HttpResponse::Ok().json(list)
}

/// Create a new tournament (admin).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    config: Data<AppConfig>,
    session: Session,
    body: Json<NameBody>,
) -> HttpResponse {
    if !session_is_admin(&session) {
        return unauthorized("Admin login required");
    }
    let name = body.name.trim();
    if name.is_empty() {
        return error_response(&PickemsError::EmptyName);
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = Tournament::new(name).with_round_policy(config.round_policy);
    let response = HttpResponse::Ok().json(&g.store.create(tournament).tournament);
    g.dirty = true;
    response
}

/// The tournament shown on the front page: the most recently created one.
#[get("/api/tournaments/current")]
async fn api_current_tournament(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.store.latest() {
        Some(entry) => HttpResponse::Ok().json(&entry.tournament),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_entry(&state, path.id, |entry| HttpResponse::Ok().json(&entry.tournament))
}

/// Enable/disable and lock/unlock the group and knockout stages.
#[put("/api/tournaments/{id}/stages")]
async fn api_update_stages(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<StageUpdate>,
) -> HttpResponse {
    let update = body.into_inner();
    admin_edit(&state, &session, path.id, |t| {
        t.update_stages(update);
        Ok(())
    })
}

#[put("/api/tournaments/{id}/round-policy")]
async fn api_set_round_policy(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<RoundPolicyBody>,
) -> HttpResponse {
    let policy = body.policy;
    admin_edit(&state, &session, path.id, |t| {
        t.set_round_policy(policy);
        Ok(())
    })
}

/// Replace the roster with the 32-team sample field.
#[post("/api/tournaments/{id}/sample")]
async fn api_populate_sample(state: AppState, session: Session, path: Path<TournamentPath>) -> HttpResponse {
    admin_edit(&state, &session, path.id, |t| {
        populate_sample_tournament(t);
        Ok(())
    })
}

#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<AddTeamBody>,
) -> HttpResponse {
    let AddTeamBody { name, seed, logo } = body.into_inner();
    admin_edit(&state, &session, path.id, |t| t.add_team_with(name, seed, logo))
}

/// Bulk import teams from a CSV body (`name,seed,logo` with header row).
#[post("/api/tournaments/{id}/teams/import")]
async fn api_import_teams(state: AppState, session: Session, path: Path<TournamentPath>, body: String) -> HttpResponse {
    admin_edit(&state, &session, path.id, |t| import_teams_csv(t, &body))
}

#[put("/api/tournaments/{id}/teams/{team_id}")]
async fn api_update_team(
    state: AppState,
    session: Session,
    path: Path<TeamPath>,
    body: Json<TeamUpdate>,
) -> HttpResponse {
    let team_id = path.team_id;
    admin_edit(&state, &session, path.id, |t| t.update_team(team_id, body.into_inner()))
}

#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, session: Session, path: Path<TeamPath>) -> HttpResponse {
    let team_id = path.team_id;
    admin_edit(&state, &session, path.id, |t| t.remove_team(team_id))
}

#[post("/api/tournaments/{id}/groups")]
async fn api_add_group(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<NameBody>,
) -> HttpResponse {
    admin_edit(&state, &session, path.id, |t| t.add_group(body.name.as_str()))
}

#[delete("/api/tournaments/{id}/groups/{group_id}")]
async fn api_remove_group(state: AppState, session: Session, path: Path<GroupPath>) -> HttpResponse {
    let group_id = path.group_id;
    admin_edit(&state, &session, path.id, |t| t.remove_group(group_id))
}

#[post("/api/tournaments/{id}/groups/{group_id}/teams")]
async fn api_add_team_to_group(
    state: AppState,
    session: Session,
    path: Path<GroupPath>,
    body: Json<TeamIdBody>,
) -> HttpResponse {
    let (group_id, team_id) = (path.group_id, body.team_id);
    admin_edit(&state, &session, path.id, |t| t.add_team_to_group(group_id, team_id))
}

#[delete("/api/tournaments/{id}/groups/{group_id}/teams/{team_id}")]
async fn api_remove_team_from_group(state: AppState, session: Session, path: Path<GroupTeamPath>) -> HttpResponse {
    let (group_id, team_id) = (path.group_id, path.team_id);
    admin_edit(&state, &session, path.id, |t| t.remove_team_from_group(group_id, team_id))
}

/// Certify the teams that advanced from a group (empty list = unresolved).
#[put("/api/tournaments/{id}/groups/{group_id}/advancing")]
async fn api_set_advancing(
    state: AppState,
    session: Session,
    path: Path<GroupPath>,
    body: Json<AdvancingBody>,
) -> HttpResponse {
    let group_id = path.group_id;
    admin_edit(&state, &session, path.id, |t| set_advancing_teams(t, group_id, &body.team_ids))
}

#[post("/api/tournaments/{id}/matches")]
async fn api_add_match(
    state: AppState,
    session: Session,
    path: Path<TournamentPath>,
    body: Json<AddMatchBody>,
) -> HttpResponse {
    let AddMatchBody { round, bracket } = body.into_inner();
    admin_edit(&state, &session, path.id, |t| t.add_match(round, bracket))
}

#[put("/api/tournaments/{id}/matches/{match_id}/round")]
async fn api_rename_match(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<RoundBody>,
) -> HttpResponse {
    let match_id = path.match_id;
    admin_edit(&state, &session, path.id, |t| t.rename_match_round(match_id, body.round.as_str()))
}

#[put("/api/tournaments/{id}/matches/{match_id}/teams")]
async fn api_set_match_teams(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<MatchTeamsBody>,
) -> HttpResponse {
    let match_id = path.match_id;
    admin_edit(&state, &session, path.id, |t| t.set_match_teams(match_id, body.team1, body.team2))
}

/// Record (or clear, with `teamId: null`) the real winner of a match.
#[put("/api/tournaments/{id}/matches/{match_id}/winner")]
async fn api_set_match_winner(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<OptionalTeamBody>,
) -> HttpResponse {
    let match_id = path.match_id;
    admin_edit(&state, &session, path.id, |t| set_match_winner(t, match_id, body.team_id))
}

#[delete("/api/tournaments/{id}/matches/{match_id}")]
async fn api_remove_match(state: AppState, session: Session, path: Path<MatchPath>) -> HttpResponse {
    let match_id = path.match_id;
    admin_edit(&state, &session, path.id, |t| t.remove_match(match_id))
}

/// Positioned knockout bracket. Geometry can be overridden via the query string.
#[get("/api/tournaments/{id}/bracket")]
async fn api_bracket(state: AppState, path: Path<TournamentPath>, geometry: Query<BracketGeometry>) -> HttpResponse {
    read_entry(&state, path.id, |entry| {
        HttpResponse::Ok().json(layout_bracket(&entry.tournament.matches, &geometry))
    })
}

/// Join a tournament with the session's username (shows up on the leaderboard with 0 points).
#[post("/api/tournaments/{id}/join")]
async fn api_join(state: AppState, session: Session, path: Path<TournamentPath>) -> HttpResponse {
    let Some(username) = session_username(&session) else {
        return unauthorized("Please enter a username");
    };
    write_entry(&state, path.id, |entry| {
        entry.register(&username);
        Ok(HttpResponse::Ok().json(&entry.picks[&username]))
    })
}

/// The session user's picks, score and highlight state for every match and group.
#[get("/api/tournaments/{id}/picks")]
async fn api_get_picks(state: AppState, session: Session, path: Path<TournamentPath>) -> HttpResponse {
    let Some(username) = session_username(&session) else {
        return unauthorized("Please enter a username");
    };
    read_entry(&state, path.id, |entry| {
        let t = &entry.tournament;
        let picks = entry.picks.get(&username);
        let match_highlights: HashMap<MatchId, _> = t
            .matches
            .iter()
            .map(|m| {
                let picked = picks.and_then(|p| p.match_pick(m.id)).map(|p| p.team_id);
                (m.id, match_highlight(m, picked))
            })
            .collect();
        let group_highlights: HashMap<GroupId, _> = t
            .groups
            .iter()
            .map(|g| {
                let selected = picks.map(|p| p.group_selection(g.id)).unwrap_or(&[]);
                (g.id, group_highlights(g, selected))
            })
            .collect();
        HttpResponse::Ok().json(serde_json::json!({
            "username": username,
            "picks": picks,
            "score": picks.map(|p| score_picks(t, p)).unwrap_or_default(),
            "matchHighlights": match_highlights,
            "groupHighlights": group_highlights,
        }))
    })
}

/// Pick the winner of a knockout match.
#[put("/api/tournaments/{id}/picks/matches/{match_id}")]
async fn api_pick_match(
    state: AppState,
    session: Session,
    path: Path<MatchPath>,
    body: Json<TeamIdBody>,
) -> HttpResponse {
    let Some(username) = session_username(&session) else {
        return unauthorized("Please enter a username");
    };
    let (match_id, team_id) = (path.match_id, body.team_id);
    write_entry(&state, path.id, |entry| {
        entry.with_picks(&username, |t, picks| pick_match_winner(t, picks, match_id, team_id))?;
        Ok(HttpResponse::Ok().json(&entry.picks[&username]))
    })
}

/// Toggle a team in the user's two predicted qualifiers for a group.
#[post("/api/tournaments/{id}/picks/groups/{group_id}/toggle")]
async fn api_toggle_group_team(
    state: AppState,
    session: Session,
    path: Path<GroupPath>,
    body: Json<TeamIdBody>,
) -> HttpResponse {
    let Some(username) = session_username(&session) else {
        return unauthorized("Please enter a username");
    };
    let (group_id, team_id) = (path.group_id, body.team_id);
    write_entry(&state, path.id, |entry| {
        let (toggle, selected) =
            entry.with_picks(&username, |t, picks| toggle_group_team(t, picks, group_id, team_id))?;
        Ok(HttpResponse::Ok().json(serde_json::json!({
            "toggle": toggle,
            "selectedTeams": selected,
        })))
    })
}

#[get("/api/tournaments/{id}/leaderboard")]
async fn api_leaderboard(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_entry(&state, path.id, |entry| HttpResponse::Ok().json(entry.ranked()))
}

#[get("/api/tournaments/{id}/leaderboard.csv")]
async fn api_leaderboard_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    read_entry(&state, path.id, |entry| match leaderboard_csv(&entry.ranked()) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => {
            log::error!("Leaderboard export failed: {e}");
            HttpResponse::InternalServerError().body("export error")
        }
    })
}

/// Load the snapshot at `path`; a missing file means a fresh start.
async fn load_store(path: &FsPath) -> std::io::Result<PickemsStore> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => {
            let store = PickemsStore::from_json(&json)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            log::info!(
                "Loaded {} tournament(s) from {}",
                store.tournaments.len(),
                path.display()
            );
            Ok(store)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No snapshot at {}, starting empty", path.display());
            Ok(PickemsStore::new())
        }
        Err(e) => Err(e),
    }
}

/// Write the store to `path` if it changed since the last flush.
async fn flush_store(state: &AppState, path: &FsPath) {
    let json = {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return,
        };
        if !g.dirty {
            return;
        }
        match g.store.to_json() {
            Ok(json) => {
                g.dirty = false;
                json
            }
            Err(e) => {
                log::error!("Failed to serialize snapshot: {e}");
                return;
            }
        }
    };
    match tokio::fs::write(path, json).await {
        Ok(()) => log::debug!("Wrote snapshot to {}", path.display()),
        Err(e) => {
            log::error!("Failed to write snapshot to {}: {e}", path.display());
            if let Ok(mut g) = state.write() {
                g.dirty = true;
            }
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let store = match &config.data_file {
        Some(path) => load_store(path).await?,
        None => PickemsStore::new(),
    };
    let state = Data::new(RwLock::new(ServerState { store, dirty: false }));

    let session_key = match &config.session_secret {
        Some(secret) => Key::from(secret.as_slice()),
        None => Key::generate(),
    };

    // Background task: periodically flush the store to the snapshot file
    if let Some(path) = config.data_file.clone() {
        let state_flush = state.clone();
        let period = config.snapshot_interval;
        actix_web::rt::spawn(async move {
            let mut interval = actix_web::rt::time::interval(period);
            loop {
                interval.tick().await;
                flush_store(&state_flush, &path).await;
            }
        });
    }

    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    let config_data = Data::new(config.clone());
    let state_server = state.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(state_server.clone())
            .app_data(config_data.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_session)
            .service(api_set_username)
            .service(api_clear_session)
            .service(api_admin_login)
            .service(api_admin_logout)
            .service(api_list_tournaments)
            .service(api_create_tournament)
            .service(api_current_tournament)
            .service(api_get_tournament)
            .service(api_update_stages)
            .service(api_set_round_policy)
            .service(api_populate_sample)
            .service(api_add_team)
            .service(api_import_teams)
            .service(api_update_team)
            .service(api_remove_team)
            .service(api_add_group)
            .service(api_remove_group)
            .service(api_add_team_to_group)
            .service(api_remove_team_from_group)
            .service(api_set_advancing)
            .service(api_add_match)
            .service(api_rename_match)
            .service(api_set_match_teams)
            .service(api_set_match_winner)
            .service(api_remove_match)
            .service(api_bracket)
            .service(api_join)
            .service(api_get_picks)
            .service(api_pick_match)
            .service(api_toggle_group_team)
            .service(api_leaderboard)
            .service(api_leaderboard_csv)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await?;

    if let Some(path) = &config.data_file {
        flush_store(&state, path).await;
    }
    Ok(())
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
