//! Documentation endpoints
//!
//! Serves Swagger UI and the raw OpenAPI spec. When a docs key is
//! configured, requests must carry it in `X-Docs-Key`; anything else gets a
//! 404 so the endpoint's existence is not revealed.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::docs::ApiDoc;

/// Key expected in `X-Docs-Key`; `None` leaves the docs open
#[derive(Debug, Clone, Default)]
pub struct DocsKey(pub Option<String>);

/// Middleware to protect docs endpoints with the configured key
pub async fn docs_auth_middleware(
    State(DocsKey(expected)): State<DocsKey>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = expected else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get("X-Docs-Key")
        .and_then(|v| v.to_str().ok());

    if provided == Some(expected.as_str()) {
        next.run(request).await
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// Create the docs router
///
/// Routes:
/// - GET /docs - Swagger UI
/// - GET /docs/openapi.json - Raw OpenAPI spec
///
/// Generic over the parent router's state so it can be merged anywhere.
pub fn create_docs_router<S>(docs_key: Option<String>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/docs", get(swagger_ui))
        .route("/docs/", get(swagger_ui))
        .route("/docs/openapi.json", get(openapi_json))
        .layer(axum::middleware::from_fn_with_state(
            DocsKey(docs_key),
            docs_auth_middleware,
        ))
}

/// Swagger UI page loading assets from the unpkg CDN
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Tiergate API - Documentation</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/docs/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;
