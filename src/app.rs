use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::JokeLookupHandler;
use crate::proto::ChuckNorrisServiceServer;
use crate::upstream::ChuckNorrisApi;

/// Initialize tracing and logging for the application
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the joke handler backed by the real upstream API
pub fn create_handler(config: &Config) -> anyhow::Result<JokeLookupHandler> {
    let api = ChuckNorrisApi::new(config.joke_api_base_url.clone(), config.upstream_timeout)?;
    Ok(JokeLookupHandler::new(
        Arc::new(api),
        config.max_concurrent_requests,
    ))
}

/// Create the gRPC router with the `ChuckNorrisService` registered
pub fn create_server(config: &Config) -> anyhow::Result<Router> {
    info!(
        "Initializing gRPC service (upstream: {})",
        config.joke_api_base_url
    );
    let handler = create_handler(config)?;

    Ok(Server::builder().add_service(ChuckNorrisServiceServer::new(handler)))
}

/// Bind the gRPC listener, resolving host names such as `localhost`
pub async fn bind_listener(config: &Config) -> anyhow::Result<TcpListener> {
    TcpListener::bind((config.bind_host(), config.port))
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: &str) -> Config {
        Config::from_lookup(|key| match key {
            "HOST" => Some(host.to_string()),
            "PORT" => Some("0".to_string()),
            _ => None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_bind_listener_resolves_localhost() {
        let listener = bind_listener(&config_with_host("localhost")).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_ipv4_literal() {
        let listener = bind_listener(&config_with_host("127.0.0.1")).await.unwrap();
        assert_eq!(listener.local_addr().unwrap().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_bind_listener_unresolvable_host_is_error() {
        let result = bind_listener(&config_with_host("no such host")).await;
        assert!(result.is_err());
    }
}
