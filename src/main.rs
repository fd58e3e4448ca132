use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use astra::Server;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod app;
mod catalog;
mod config;
mod domain;
mod errors;
mod forms;
mod geos;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.api_key.is_none() {
        warn!("API_KEY not set; page integrations that need it are disabled");
    }

    let addr = config.bind_addr;
    let workers = config.max_workers;

    let app = match App::seeded() {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to load seed catalog");
            std::process::exit(1);
        }
    };

    info!(
        properties = app.catalog.len(),
        workers,
        "starting server at http://{addr}"
    );

    let server = Server::bind(&addr).max_workers(workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                error!(error = %err, "request failed");
            } else {
                warn!(error = %err, "request rejected");
            }
            responses::html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}
