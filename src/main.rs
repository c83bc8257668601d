use crate::app::App;
use crate::config::{AppConfig, BackendConfig};
use crate::db::{init_db, Database};
use crate::errors::StoreError;
use crate::repository::{LocalRepository, PropertyRepository, RemoteRepository};
use crate::router::handle;
use crate::service::PropertyService;
use astra::Server;

mod app;
mod config;
mod controllers;
mod db;
mod domain;
mod errors;
mod logging;
mod repository;
mod responses;
mod router;
mod service;
mod templates;
mod view_state;

#[cfg(test)]
mod tests;

fn build_repository(backend: &BackendConfig) -> Result<Box<dyn PropertyRepository>, StoreError> {
    match backend {
        BackendConfig::Local {
            dataset_path,
            db_path,
            schema_path,
        } => {
            let db = Database::new(db_path.as_str());
            init_db(&db, schema_path)?;
            let repo = match dataset_path {
                Some(path) => LocalRepository::from_dataset_file(path, db)?,
                None => LocalRepository::bundled(db)?,
            };
            Ok(Box::new(repo))
        }
        BackendConfig::Remote(cfg) => Ok(Box::new(RemoteRepository::new(cfg.clone())?)),
    }
}

fn main() {
    logging::init_logging();

    let config = AppConfig::from_env();

    let repo = match build_repository(&config.backend) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::error!(error = %e, "record store initialization failed");
            std::process::exit(1);
        }
    };
    let app = App::new(PropertyService::new(repo));

    tracing::info!(
        addr = %config.bind_addr,
        workers = config.max_workers,
        backend = app.svc.backend_name(),
        "starting server"
    );

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
