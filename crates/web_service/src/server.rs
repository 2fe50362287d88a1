use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use github_client::{Config, GithubClient, GithubClientTrait};
use log::{error, info};

use crate::controllers::{auth_controller, system_controller};

pub struct AppState {
    pub github_client: Arc<dyn GithubClientTrait>,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth_controller::config)
        .configure(system_controller::config);
}

pub async fn run(port: u16) -> Result<(), String> {
    info!("Starting web service...");

    let config = Config::new();
    let github_client: Arc<dyn GithubClientTrait> = Arc::new(
        GithubClient::new(config).map_err(|e| format!("Failed to build GitHub client: {e}"))?,
    );

    let app_state = web::Data::new(AppState { github_client });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Web service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
