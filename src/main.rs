use std::sync::Arc;
use tokio::net::TcpListener;

mod assets;
mod config;
mod handler;
mod http;
mod logger;
mod render;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::Config::load()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // Parse the embedded template before binding; startup must abort on
    // a broken template, not serve 500s forever.
    let state = Arc::new(config::AppState::new(cfg)?);

    let listener = server::create_listener(addr)?;
    logger::log_server_start(&addr, &state.config);

    run_accept_loop(listener, state).await;
    Ok(())
}

/// Accept connections until Ctrl+C
async fn run_accept_loop(listener: TcpListener, state: Arc<config::AppState>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        server::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_shutdown();
                break;
            }
        }
    }
}
