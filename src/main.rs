use punchlog::{commands::Cli, libs::messages::macros::is_debug_mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Debug mode is decided once, so the environment must be complete first.
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "punchlog=debug".into()))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu()
}
