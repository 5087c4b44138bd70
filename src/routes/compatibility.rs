use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::AnalysisSettings;
use crate::core::{self, ShareMessage};
use crate::models::{
    ErrorResponse, EvaluateRequest, EvaluateResponse, HealthResponse, ShareRequest, ZodiacEntry,
    ZodiacListResponse, ZodiacSign,
};

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub analysis: AnalysisSettings,
}

/// Configure all compatibility-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/zodiac", web::get().to(list_zodiac))
        .route("/compatibility/evaluate", web::post().to(evaluate))
        .route("/compatibility/share", web::post().to(share));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Zodiac signs in selection order
///
/// GET /api/v1/zodiac
async fn list_zodiac() -> impl Responder {
    HttpResponse::Ok().json(ZodiacListResponse {
        signs: ZodiacSign::ALL.into_iter().map(ZodiacEntry::from).collect(),
    })
}

/// Evaluate compatibility endpoint
///
/// POST /api/v1/compatibility/evaluate
///
/// Request body:
/// ```json
/// {
///   "user": { "age": "25", "gender": "male", "zodiac": "白羊座" },
///   "partner": { "age": 27, "gender": "female", "zodiac": "狮子座" }
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    let (user, partner) = match req.to_profiles() {
        Ok(pair) => pair,
        Err(field_errors) => {
            tracing::info!("Rejected evaluate request: field_errors={:?}", field_errors);
            return HttpResponse::BadRequest().json(ErrorResponse {
                field_errors: Some(field_errors),
                ..ErrorResponse::bad_request("Validation failed", "One or more fields are invalid")
            });
        }
    };

    if let Some(delay) = state.analysis.delay() {
        tracing::debug!("Simulating analysis for {:?}", delay);
        tokio::time::sleep(delay).await;
    }

    let report = core::evaluate(&user, &partner);
    let share = ShareMessage::from(&report);

    tracing::info!(
        "Evaluated compatibility: score={}, verdict={:?}",
        report.score,
        report.verdict
    );

    HttpResponse::Ok().json(EvaluateResponse {
        report_id: uuid::Uuid::new_v4().to_string(),
        report,
        share_text: share.text,
    })
}

/// Format a result for sharing
///
/// POST /api/v1/compatibility/share
///
/// Request body:
/// ```json
/// { "score": 90, "verdictLabel": "天生一对" }
/// ```
async fn share(req: web::Json<ShareRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for share request: {:?}", errors);
        return HttpResponse::BadRequest()
            .json(ErrorResponse::bad_request("Validation failed", errors.to_string()));
    }

    HttpResponse::Ok().json(ShareMessage::new(req.score, &req.verdict_label))
}
