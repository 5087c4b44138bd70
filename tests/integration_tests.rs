// Integration tests for Compat Algo HTTP routes

use actix_web::{test, web, App};
use compat_algo::config::AnalysisSettings;
use compat_algo::routes::{configure_routes, handle_json_payload_error, AppState};
use serde_json::{json, Value};

fn test_state() -> AppState {
    AppState {
        analysis: AnalysisSettings { delay_ms: 0 },
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_integration_health() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_integration_zodiac_listing() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get().uri("/api/v1/zodiac").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let signs = body["signs"].as_array().unwrap();
    assert_eq!(signs.len(), 12);
    assert_eq!(signs[0]["name"], "白羊座");
    assert_eq!(signs[11]["english"], "pisces");
}

#[actix_web::test]
async fn test_integration_end_to_end_evaluation() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/evaluate")
        .set_json(json!({
            "user": { "age": "25", "gender": "male", "zodiac": "白羊座" },
            "partner": { "age": 27, "gender": "female", "zodiac": "狮子座" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["score"], 90);
    assert_eq!(body["verdict"], "destined_match");
    assert_eq!(body["verdictLabel"], "天生一对");
    assert!(body["reportId"].as_str().is_some_and(|id| !id.is_empty()));

    let factors = body["factors"].as_array().unwrap();
    assert_eq!(factors.len(), 3);
    assert_eq!(factors[0]["category"], "age_gap");
    assert_eq!(factors[1]["category"], "zodiac_affinity");
    assert_eq!(factors[2]["category"], "gender_pairing");
    assert_eq!(factors[2]["title"], "性别组合");

    assert_eq!(
        body["shareText"],
        "我和TA的契合度测试结果：90%\n天生一对\n\n快来测试你们的缘分吧！"
    );
    assert_eq!(
        body["overallAdvice"].as_str().unwrap().lines().count(),
        5
    );
}

#[actix_web::test]
async fn test_integration_field_errors() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/evaluate")
        .set_json(json!({
            "user": { "age": "", "gender": "male" },
            "partner": { "age": 101, "gender": "female", "zodiac": "leo" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["statusCode"], 400);
    assert!(body.get("status_code").is_none());
    assert_eq!(body["fieldErrors"]["user"]["age"], "年龄不能为空");
    assert_eq!(body["fieldErrors"]["user"]["zodiac"], "请选择星座");
    assert!(body["fieldErrors"]["user"].get("gender").is_none());
    assert_eq!(body["fieldErrors"]["partner"]["age"], "年龄必须在18-100岁之间");
    assert!(body.get("score").is_none());
}

#[actix_web::test]
async fn test_integration_invalid_json() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/evaluate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_json");
}

#[actix_web::test]
async fn test_integration_fractional_age_is_a_field_error() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/evaluate")
        .set_json(json!({
            "user": { "age": 25.5, "gender": "male", "zodiac": "白羊座" },
            "partner": { "age": 1e20, "gender": "female", "zodiac": "狮子座" }
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["fieldErrors"]["user"]["age"], "年龄必须在18-100岁之间");
    assert_eq!(body["fieldErrors"]["partner"]["age"], "年龄必须在18-100岁之间");
    assert!(body["fieldErrors"]["user"].get("zodiac").is_none());
}

#[actix_web::test]
async fn test_integration_share() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/share")
        .set_json(json!({ "score": 60, "verdictLabel": "需要更多了解" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["title"], "AI恋爱契合度测试结果");
    assert_eq!(
        body["text"],
        "我和TA的契合度测试结果：60%\n需要更多了解\n\n快来测试你们的缘分吧！"
    );

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/share")
        .set_json(json!({ "score": 60, "verdictLabel": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_integration_analysis_delay_is_applied() {
    let app = test_app!(AppState {
        analysis: AnalysisSettings { delay_ms: 50 },
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/compatibility/evaluate")
        .set_json(json!({
            "user": { "age": 30, "gender": "female", "zodiac": "aries" },
            "partner": { "age": 41, "gender": "female", "zodiac": "taurus" }
        }))
        .to_request();

    let started = std::time::Instant::now();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(started.elapsed() >= std::time::Duration::from_millis(50));
    assert_eq!(body["score"], 60);
    assert_eq!(body["verdictLabel"], "需要更多了解");
}
