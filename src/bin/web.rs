//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    get, post,
    web::{self, Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use pickup_teams_web::{
    generate_teams, parse_players_csv, GameError, GameId, GenerationError, MemoryStore,
    PersistenceError, PlayerId,
};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory state: players, games and RSVPs. Team generation holds the write lock for the
/// whole allocate-and-save run.
type AppState = Data<RwLock<MemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    skill: u32,
    #[serde(default)]
    goalkeeper: bool,
}

#[derive(Deserialize)]
struct CreateGameBody {
    title: String,
    #[serde(default)]
    scheduled_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RsvpBody {
    player_id: PlayerId,
}

/// Path segment: game id (e.g. /api/games/{id})
#[derive(Deserialize)]
struct GamePath {
    id: GameId,
}

fn error_json(e: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": e.to_string() })
}

fn game_error_response(e: GameError) -> HttpResponse {
    match e {
        GameError::GameNotFound(_) | GameError::PlayerNotFound(_) => {
            HttpResponse::NotFound().json(error_json(e))
        }
        _ => HttpResponse::BadRequest().json(error_json(e)),
    }
}

fn generation_error_response(e: GenerationError) -> HttpResponse {
    match e {
        GenerationError::Roster(_) => HttpResponse::BadRequest().json(error_json(e)),
        GenerationError::Persistence(PersistenceError::GameNotFound(_)) => {
            HttpResponse::NotFound().json(error_json(e))
        }
        GenerationError::Persistence(_) => HttpResponse::InternalServerError().json(error_json(e)),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "pickup-teams-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// List registered players (sorted by name).
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.players())
}

/// Register a player.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_player(&body.name, body.skill, body.goalkeeper) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => game_error_response(e),
    }
}

/// Register players from a CSV body (`name,skill,goalkeeper`). All or nothing.
#[post("/api/players/import")]
async fn api_import_players(state: AppState, body: Bytes) -> HttpResponse {
    let players = match parse_players_csv(body.as_ref()) {
        Ok(players) => players,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.import_players(players) {
        Ok(players) => {
            log::info!("Imported {} player(s)", players.len());
            HttpResponse::Ok().json(players)
        }
        Err(e) => game_error_response(e),
    }
}

/// Create a game (returns it with id).
#[post("/api/games")]
async fn api_create_game(state: AppState, body: Json<CreateGameBody>) -> HttpResponse {
    if body.title.trim().is_empty() {
        return HttpResponse::BadRequest().json(error_json("Game title must not be empty"));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.create_game(&body.title, body.scheduled_at))
}

/// Get a game with its RSVPs (404 if not found).
#[get("/api/games/{id}")]
async fn api_get_game(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.game(path.id) {
        Some(game) => HttpResponse::Ok().json(game),
        None => game_error_response(GameError::GameNotFound(path.id)),
    }
}

/// Confirm a player's attendance for a game.
#[post("/api/games/{id}/rsvps")]
async fn api_confirm_attendance(
    state: AppState,
    path: Path<GamePath>,
    body: Json<RsvpBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.confirm_attendance(path.id, body.player_id) {
        Ok(game) => HttpResponse::Ok().json(game),
        Err(e) => game_error_response(e),
    }
}

/// Current teams for a game (400 if nobody has confirmed).
#[get("/api/games/{id}/teams")]
async fn api_get_teams(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.team_sheet(path.id) {
        Ok(sheet) => HttpResponse::Ok().json(sheet),
        Err(e) => game_error_response(e),
    }
}

/// Generate balanced teams from the confirmed players; replaces any earlier teams.
#[post("/api/games/{id}/teams")]
async fn api_generate_teams(state: AppState, path: Path<GamePath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    if let Err(e) = generate_teams(&mut *g, path.id) {
        return generation_error_response(e);
    }
    match g.team_sheet(path.id) {
        Ok(sheet) => HttpResponse::Ok().json(sheet),
        Err(e) => game_error_response(e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(MemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_import_players)
            .service(api_create_game)
            .service(api_get_game)
            .service(api_confirm_attendance)
            .service(api_get_teams)
            .service(api_generate_teams)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
