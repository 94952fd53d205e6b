use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, handlers, middleware, state::AppState};

fn cors_layer(allow_origin: Option<&str>) -> CorsLayer {
    let origin = match allow_origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(value) => AllowOrigin::exact(value),
        None => AllowOrigin::from(Any),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60))
}

pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_allow_origin.as_deref());

    let api_routes = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/holidays", get(handlers::holidays::list_holidays))
        .route("/api/employees", get(handlers::employees::list_employees))
        .route(
            "/api/employees/{email}",
            get(handlers::employees::get_employee),
        )
        .route("/api/projects", get(handlers::projects::list_projects));

    Router::new()
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(cors),
        )
        .with_state(state)
}
