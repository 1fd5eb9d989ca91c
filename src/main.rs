#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use crate::{
    config::DbConfig,
    routes::{
        alunos::{
            delete_aluno, get_listar, internal_edit_aluno, internal_get_alunos, post_update_aluno,
        },
        index::get_index_route,
        profiles::get_profiles_route,
    },
    state::ChamadaState,
    store::postgres::PgRecordStore,
};
use axum::{
    Router,
    routing::{get, post},
};
use sqlx::postgres::PgPoolOptions;
use std::{env, sync::Arc};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod config;
mod controller;
mod data;
mod error;
mod form;
mod maud_conveniences;
mod notify;
mod roster;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testing;

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    warn!("signal received, starting graceful shutdown");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("unable to load env vars");

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = DbConfig::from_env().expect("unable to create config");
    let options = PgPoolOptions::new().max_connections(15);
    let store = PgRecordStore::connect(options, &config)
        .await
        .expect("unable to connect to the record store");

    let state = ChamadaState::new(Arc::new(store));
    state.ui().lock().await.roster.refresh().await;

    let app = Router::new()
        .route("/", get(get_index_route))
        .route("/profiles", get(get_profiles_route))
        .route("/profiles/cadastrar/listar", get(get_listar))
        .route("/alunos", post(post_update_aluno).delete(delete_aluno))
        .route("/internal/get_alunos", get(internal_get_alunos))
        .route("/internal/alunos/editar", get(internal_edit_aluno))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let server_ip = env::var("CHAMADA_SERVER_IP").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    let listener = TcpListener::bind(&server_ip)
        .await
        .expect("unable to listen on server ip");

    info!(?server_ip, "Listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("unable to serve app");
}
