use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use tracing::error;

use crate::args::CleanArgs;
use crate::controller::loader::StatsSource;
use crate::mvu::dashboard::{DashboardModel, Deps, Msg};
use crate::mvu::runtime::run_dashboard;
use crate::view::dashboard::{PageTarget, render_dashboard_body};
use crate::view::index::render_index_template;

/// Registers every route except `/static`, which depends on the filesystem.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/dashboard", web::get().to(dashboard))
        .route("/api/stats", web::get().to(api_stats))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub async fn index(args: Data<CleanArgs>) -> impl Responder {
    let markup = render_index_template(&args.title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

/// One page load: fetch, then paint. On failure nothing is sent back, so the
/// placeholder already on the page stays as it is.
pub async fn dashboard(
    query: web::Query<HashMap<String, String>>,
    source: Data<dyn StatsSource>,
) -> impl Responder {
    let want_json = match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let mut model = DashboardModel::new(want_json);
    let mut page = PageTarget::new();
    let deps = Deps {
        source: source.get_ref(),
    };

    if run_dashboard(&mut model, Msg::PageReady, deps, &mut page)
        .await
        .is_err()
    {
        return HttpResponse::NoContent().finish();
    }

    if want_json {
        match model.snapshot {
            Some(snapshot) => HttpResponse::Ok().json(snapshot),
            None => HttpResponse::NoContent().finish(),
        }
    } else {
        HttpResponse::Ok()
            .content_type("text/html")
            .body(render_dashboard_body(&page).into_string())
    }
}

/// Serves the configured snapshot file as-is. It is re-read on every request.
pub async fn api_stats(args: Data<CleanArgs>) -> impl Responder {
    let Some(path) = args.stats_json.as_ref() else {
        return HttpResponse::NotFound().json(json!({"error": "no stats file configured"}));
    };

    match tokio::fs::read(path).await {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to read stats file");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}
