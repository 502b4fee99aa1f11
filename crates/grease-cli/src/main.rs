//! grease-cli
//!
//! Generates grease pencil strokes and writes them as json documents or svg images.

// Modules
pub(crate) mod circle;
pub(crate) mod cli;
pub(crate) mod validators;

// Renames
extern crate nalgebra as na;

fn main() -> anyhow::Result<()> {
    setup_tracing()?;
    cli::run()
}

fn setup_tracing() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .map_err(|e| anyhow::anyhow!("setting up tracing subscriber failed, Err: {e:?}"))
}
