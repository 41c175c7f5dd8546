use actix_web::{test, web, App};
use career_compass::api::{configure, ApiResponse, AppState};
use career_compass::advisor::store::SqliteStore;
use career_compass::advisor::types::{
    College, Profile, QuizResult, Recommendation, ReminderView, Stream, StreamScores,
};
use serde_json::json;
use std::sync::Arc;

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure),
        )
        .await
    };
}

fn state() -> Arc<AppState> {
    Arc::new(AppState::in_memory().unwrap())
}

#[actix_web::test]
async fn test_health() {
    let app = app!(state());
    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_quiz_then_recommendations() {
    let app = app!(state());

    let req = test::TestRequest::get().uri("/api/recommendations").to_request();
    let body: ApiResponse<Recommendation> = test::call_and_read_body_json(&app, req).await;
    assert!(body.data.unwrap().is_empty());

    let req = test::TestRequest::get().uri("/api/quiz/result").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let req = test::TestRequest::post()
        .uri("/api/quiz")
        .set_json(json!({ "answers": { "1": 0, "2": 2, "3": 0, "4": 0, "5": 1 } }))
        .to_request();
    let body: ApiResponse<QuizResult> = test::call_and_read_body_json(&app, req).await;
    let result = body.data.unwrap();
    assert_eq!(result.scores, StreamScores { science: 0, commerce: 1, arts: 5 });
    assert_eq!(result.top_stream, Stream::Arts);

    let req = test::TestRequest::get().uri("/api/recommendations").to_request();
    let body: ApiResponse<Recommendation> = test::call_and_read_body_json(&app, req).await;
    let rec = body.data.unwrap();
    assert_eq!(rec.suggested_programs, vec!["B.A.", "BFA", "BSW"]);
    assert!(!rec.matched_colleges.is_empty());
}

#[actix_web::test]
async fn test_quiz_rejects_out_of_range_answer() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/api/quiz")
        .set_json(json!({ "answers": { "1": 3 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_undecodable_answer_gets_error_envelope() {
    let app = app!(state());
    let req = test::TestRequest::post()
        .uri("/api/quiz")
        .set_json(json!({ "answers": { "1": 300 } }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.error.is_some());
}

#[actix_web::test]
async fn test_non_numeric_reminder_id_gets_error_envelope() {
    let app = app!(state());
    let req = test::TestRequest::delete().uri("/api/reminders/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: ApiResponse<()> = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.error.is_some());
}

#[actix_web::test]
async fn test_partial_profile_is_accepted() {
    let app = app!(state());
    let req = test::TestRequest::put()
        .uri("/api/profile")
        .set_json(json!({ "name": "A" }))
        .to_request();
    let body: ApiResponse<Profile> = test::call_and_read_body_json(&app, req).await;
    assert!(body.success);
    let profile = body.data.unwrap();
    assert_eq!(profile.name, "A");
    assert_eq!(profile.age, "");
}

#[actix_web::test]
async fn test_college_search() {
    let app = app!(state());

    let req = test::TestRequest::get().uri("/api/colleges").to_request();
    let body: ApiResponse<Vec<College>> = test::call_and_read_body_json(&app, req).await;
    let all = body.data.unwrap();
    assert_eq!(all.len(), 5);

    let req = test::TestRequest::get().uri("/api/colleges?q=pune").to_request();
    let body: ApiResponse<Vec<College>> = test::call_and_read_body_json(&app, req).await;
    let found = body.data.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].district, "Pune");
}

#[actix_web::test]
async fn test_profile_update_is_returned() {
    let app = app!(state());
    let req = test::TestRequest::put()
        .uri("/api/profile")
        .set_json(json!({ "name": "Meera", "age": "15", "class": "10", "district": "Pune" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/api/profile").to_request();
    let body: ApiResponse<Profile> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().name, "Meera");
}

#[actix_web::test]
async fn test_reminder_lifecycle() {
    let app = app!(state());

    let req = test::TestRequest::post()
        .uri("/api/reminders")
        .set_json(json!({ "title": "", "date": "2025-01-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    for (title, date) in [("Results", "2025-01-01"), ("Form", "2024-06-01")] {
        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .set_json(json!({ "title": title, "date": date }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/reminders").to_request();
    let body: ApiResponse<Vec<ReminderView>> = test::call_and_read_body_json(&app, req).await;
    let views = body.data.unwrap();
    let dates: Vec<String> = views.iter().map(|v| v.reminder.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-06-01", "2025-01-01"]);

    let req = test::TestRequest::delete().uri("/api/reminders/1").to_request();
    let body: ApiResponse<Vec<ReminderView>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 2);

    let id = views[0].reminder.id;
    let req = test::TestRequest::delete()
        .uri(&format!("/api/reminders/{}", id))
        .to_request();
    let body: ApiResponse<Vec<ReminderView>> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.data.unwrap().len(), 1);

    let req = test::TestRequest::delete().uri("/api/reminders").to_request();
    let body: ApiResponse<Vec<ReminderView>> = test::call_and_read_body_json(&app, req).await;
    assert!(body.data.unwrap().is_empty());
}

#[actix_web::test]
async fn test_state_persists_across_app_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("compass.db");

    {
        let store = SqliteStore::new(Some(path.clone())).unwrap();
        let state = Arc::new(AppState::new(Arc::new(store)));
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/api/reminders")
            .set_json(json!({ "title": "Scholarship", "date": "2025-09-30" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let store = SqliteStore::new(Some(path)).unwrap();
    let state = Arc::new(AppState::new(Arc::new(store)));
    let app = app!(state);
    let req = test::TestRequest::get().uri("/api/reminders").to_request();
    let body: ApiResponse<Vec<ReminderView>> = test::call_and_read_body_json(&app, req).await;
    let views = body.data.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].reminder.title, "Scholarship");
}
