use std::{
    fs::OpenOptions,
    net::SocketAddr,
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
};
use axum_server::Handle;
use clap::Parser;
use tower_http::trace::TraceLayer;

#[cfg(debug_assertions)]
use tower_livereload::LiveReloadLayer;

use tracing_subscriber::{
    EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt,
};

use pennywise::{AppState, CsvFile, build_router, graceful_shutdown, logging_middleware};

/// The web server for pennywise.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The port to serve the app from.
    #[arg(short, long, env, default_value_t = 8000)]
    port: u16,

    /// File path to the CSV file holding expenses. Created if it does not exist.
    #[arg(long, env, default_value = "data.csv")]
    expenses_path: PathBuf,

    /// File path to the CSV file holding income. Created if it does not exist.
    #[arg(long, env, default_value = "income.csv")]
    income_path: PathBuf,

    /// The directory to serve static files, such as CSS and JavaScript, from.
    #[arg(long, env, default_value = "static")]
    static_dir: PathBuf,

    /// The canonical name of the local timezone, e.g. "Pacific/Auckland".
    ///
    /// Used to fill in today's date when a form leaves the date empty.
    #[arg(long, env, default_value = "Etc/UTC")]
    timezone: String,

    /// File path to write debug logs to.
    #[arg(long, env, default_value = "debug.log")]
    log_path: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(error) = setup_logging(&args.log_path) {
        eprintln!(
            "Could not open the log file {}: {error}",
            args.log_path.display()
        );
        return ExitCode::FAILURE;
    }

    let state = match AppState::new(
        Arc::new(CsvFile::new(&args.expenses_path)),
        Arc::new(CsvFile::new(&args.income_path)),
        &args.timezone,
    ) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!("Could not set up the app: {error}");
            return ExitCode::FAILURE;
        }
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = build_router(state, &args.static_dir)
        .layer(middleware::from_fn(logging_middleware));
    let router = add_tracing_layer(router);

    #[cfg(debug_assertions)]
    let router = router.layer(LiveReloadLayer::new());

    tracing::info!("HTTP server listening on {}", addr);
    if let Err(error) = axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
    {
        tracing::error!("Server stopped unexpectedly: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn setup_logging(log_path: &Path) -> std::io::Result<()> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(filter::LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
