use memograph::api::routes::create_router;
use memograph::cli::Cli;
use memograph::cli::output::Output;
use memograph::{AppState, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let output = if cli.no_color {
        Output::no_color()
    } else {
        Output::new()
    };

    // Load .env before the log filter so RUST_LOG from the file applies.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    output.banner();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let state = AppState::from_config(config);

    output.info("Providers:");
    output.kv("search", state.config.search_provider().name());
    output.kv(
        "generator",
        &format!(
            "{} ({})",
            state.config.generator_provider().name(),
            state.generator.model_name()
        ),
    );
    output.kv("manager AUM", state.config.aum_provider().name());
    output.newline();

    let addr = format!(
        "{}:{}",
        state.config.server.host, state.config.server.port
    );
    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    output.success(&format!("Listening on http://{}", addr));
    tracing::info!("memograph-server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
