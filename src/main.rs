use chuck_norris_grpc::app::{bind_listener, create_server, init_tracing};
use chuck_norris_grpc::config::Config;
use tokio_stream::wrappers::TcpListenerStream;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log_level);
    info!("Starting Chuck Norris gRPC service...");
    info!("Configuration loaded: {:?}", config);

    let server = match create_server(&config) {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to create server: {:#}", e);
            std::process::exit(1);
        }
    };

    // Create TCP listener
    let listener = match bind_listener(&config).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };
    match listener.local_addr() {
        Ok(addr) => info!("gRPC server listening on {}", addr),
        Err(_) => info!("gRPC server listening on {}", config.bind_address()),
    }

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received");
    };

    let incoming = TcpListenerStream::new(listener);
    if let Err(e) = server.serve_with_incoming_shutdown(incoming, shutdown).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    } else {
        info!("Server shutdown gracefully");
    }
}
