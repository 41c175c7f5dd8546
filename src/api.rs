//! Web API Module
//!
//! Exposes JSON endpoints for the advisor front-end.
//! Single user, no authentication (prototype mode).

use crate::advisor::{
    controller::Advisor,
    store::{Persistence, SqliteStore, StoreError},
    types::{AnswerSet, Profile, MAX_ANSWER},
};
use crate::config::ServerConfig;
use actix_cors::Cors;
use actix_web::{
    error::InternalError, middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer,
    Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};

// ============================================================
// APPLICATION STATE
// ============================================================

/// Shared application state
pub struct AppState {
    pub advisor: Mutex<Advisor>,
}

impl AppState {
    pub fn new(store: Arc<dyn Persistence>) -> Self {
        Self {
            advisor: Mutex::new(Advisor::load(store)),
        }
    }

    /// State over a throwaway in-memory store
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(SqliteStore::in_memory()?)))
    }

    fn advisor(&self) -> Result<MutexGuard<'_, Advisor>, HttpResponse> {
        self.advisor.lock().map_err(|_| {
            log::error!("Advisor state lock poisoned");
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Advisor state unavailable"))
        })
    }
}

// ============================================================
// API REQUEST/RESPONSE TYPES
// ============================================================

#[derive(Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Deserialize)]
pub struct CollegeQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct AddReminderRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: &str) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
        }
    }
}

macro_rules! advisor_or_500 {
    ($data:expr) => {
        match $data.advisor() {
            Ok(guard) => guard,
            Err(resp) => return resp,
        }
    };
}

// ============================================================
// API HANDLERS
// ============================================================

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "Career Compass API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn get_profile(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    HttpResponse::Ok().json(ApiResponse::success(advisor.profile()))
}

async fn update_profile(data: web::Data<Arc<AppState>>, req: web::Json<Profile>) -> HttpResponse {
    let mut advisor = advisor_or_500!(data);
    let profile = advisor.update_profile(req.into_inner());
    HttpResponse::Ok().json(ApiResponse::success(profile))
}

async fn get_questions(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    HttpResponse::Ok().json(ApiResponse::success(advisor.questions()))
}

/// Score a quiz submission and keep it as the latest result
async fn submit_quiz(data: web::Data<Arc<AppState>>, req: web::Json<QuizSubmission>) -> HttpResponse {
    if let Some((id, value)) = req.answers.iter().find(|(_, v)| **v > MAX_ANSWER) {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(&format!(
            "Answer for question {} must be between 0 and {}, got {}",
            id, MAX_ANSWER, value
        )));
    }

    let mut advisor = advisor_or_500!(data);
    let result = advisor.submit_quiz(&req.answers);
    HttpResponse::Ok().json(ApiResponse::success(result))
}

async fn get_quiz_result(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    match advisor.last_result() {
        Some(result) => HttpResponse::Ok().json(ApiResponse::success(result)),
        None => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error("No quiz result yet. Submit the quiz first.")),
    }
}

async fn get_recommendations(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    HttpResponse::Ok().json(ApiResponse::success(advisor.recommendation()))
}

async fn get_courses(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    HttpResponse::Ok().json(ApiResponse::success(advisor.courses()))
}

async fn list_colleges(data: web::Data<Arc<AppState>>, query: web::Query<CollegeQuery>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    let colleges = advisor.search_colleges(query.q.as_deref().unwrap_or(""));
    HttpResponse::Ok().json(ApiResponse::success(colleges))
}

async fn list_reminders(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let advisor = advisor_or_500!(data);
    HttpResponse::Ok().json(ApiResponse::success(advisor.reminder_views()))
}

async fn add_reminder(data: web::Data<Arc<AppState>>, req: web::Json<AddReminderRequest>) -> HttpResponse {
    let mut advisor = advisor_or_500!(data);
    match advisor.add_reminder(&req.title, &req.date) {
        Some(_) => HttpResponse::Ok().json(ApiResponse::success(advisor.reminder_views())),
        None => HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Reminder needs a title and a date (YYYY-MM-DD)",
        )),
    }
}

/// Removing an unknown id is not an error
async fn delete_reminder(data: web::Data<Arc<AppState>>, path: web::Path<i64>) -> HttpResponse {
    let mut advisor = advisor_or_500!(data);
    advisor.remove_reminder(path.into_inner());
    HttpResponse::Ok().json(ApiResponse::success(advisor.reminder_views()))
}

async fn clear_reminders(data: web::Data<Arc<AppState>>) -> HttpResponse {
    let mut advisor = advisor_or_500!(data);
    advisor.clear_reminders();
    HttpResponse::Ok().json(ApiResponse::success(advisor.reminder_views()))
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Wrap an extractor failure in the JSON envelope as a 400
fn bad_request<E>(err: E, _req: &HttpRequest) -> actix_web::Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let message = err.to_string();
    log::debug!("Rejected request: {}", message);
    let resp = HttpResponse::BadRequest().json(ApiResponse::<()>::error(&message));
    InternalError::from_response(err, resp).into()
}

/// Register all routes and extractor error handlers
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(bad_request))
        .app_data(web::PathConfig::default().error_handler(bad_request))
        .app_data(web::QueryConfig::default().error_handler(bad_request));

    cfg.route("/health", web::get().to(health_check))
        .route("/api/profile", web::get().to(get_profile))
        .route("/api/profile", web::put().to(update_profile))
        .route("/api/quiz/questions", web::get().to(get_questions))
        .route("/api/quiz", web::post().to(submit_quiz))
        .route("/api/quiz/result", web::get().to(get_quiz_result))
        .route("/api/recommendations", web::get().to(get_recommendations))
        .route("/api/courses", web::get().to(get_courses))
        .route("/api/colleges", web::get().to(list_colleges))
        .route("/api/reminders", web::get().to(list_reminders))
        .route("/api/reminders", web::post().to(add_reminder))
        .route("/api/reminders", web::delete().to(clear_reminders))
        .route("/api/reminders/{id}", web::delete().to(delete_reminder));
}

/// Configure and run the API server
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    let store = SqliteStore::new(Some(config.db_path.clone()))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    let state = Arc::new(AppState::new(Arc::new(store)));

    log::info!("Career Compass API starting at http://{}:{}", config.host, config.port);
    log::info!("Persisting to {}", config.db_path.display());

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
