use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use shortgame_dashboard::args;
use shortgame_dashboard::controller::handlers;
use shortgame_dashboard::controller::loader::{HttpStatsSource, StatsSource};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = args::args_checks();
    let args_for_web = args.clone();

    let http_source = HttpStatsSource::new(args.stats_url.clone());
    info!(stats_url = %http_source.url(), "dashboard reads stats from upstream");
    let source: Arc<dyn StatsSource> = Arc::new(http_source);
    let source = Data::from(source);
    if let Some(path) = &args.stats_json {
        info!(path = %path.display(), "serving stats file at /api/stats");
    }

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(source.clone())
            .app_data(Data::new(args_for_web.clone()))
            .configure(handlers::configure);
        match &args_for_web.static_dir {
            Some(dir) => app.service(Files::new("/static", dir)),
            None => app,
        }
    })
    .bind((args.bind.as_str(), args.port))?;

    info!("listening on http://{}:{}", args.bind, args.port);
    server.run().await?;
    Ok(())
}
