use std::{env, fs, net::SocketAddr, path::PathBuf, str::FromStr};
use tokio::net::TcpListener;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

pub struct TracingGuards {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global tracing subscriber: env-filtered stdout logs, plus a
/// daily-rolling file under `LOG_DIR/<service_name>` when `LOG_DIR` is set.
/// The returned guards must live as long as the process.
pub fn init_tracing(service_name: &str) -> TracingGuards {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_writer(std::io::stdout);

    let mut file_guard: Option<WorkerGuard> = None;
    let file_layer = env::var("LOG_DIR").ok().and_then(|dir| {
        let log_root = PathBuf::from(dir).join(service_name);
        fs::create_dir_all(&log_root).ok()?;
        let appender = tracing_appender::rolling::daily(&log_root, format!("{service_name}.log"));
        let (writer, guard) = tracing_appender::non_blocking(appender);
        file_guard = Some(guard);
        Some(fmt::layer().with_writer(writer))
    });

    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);

    TracingGuards {
        _file_guard: file_guard,
    }
}

pub fn env_or<T: FromStr>(key: &str, default: T) -> T {
    // Typed environment lookup with a fallback default.
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

pub async fn bind_listener(port: u16) -> TcpListener {
    // Bind on all interfaces for container compatibility.
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr).await.expect("bind listener")
}

pub async fn shutdown_signal() {
    // Handle ctrl-c and SIGTERM to allow graceful shutdown.
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("sigterm handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
    }
}
