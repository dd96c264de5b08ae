use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use quaint::{router, ServiceConfig};

/// On-demand placeholder image HTTP service
#[derive(Parser, Debug)]
#[command(name = "quaint", version, about)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = quaint::DEFAULT_BIND)]
    bind: String,

    /// TTF font used to rasterize placeholder text
    #[arg(long, default_value = quaint::DEFAULT_FONT)]
    font: PathBuf,

    /// Background bitmap composited behind the text (optional at runtime)
    #[arg(long, default_value = quaint::DEFAULT_BACKGROUND)]
    background: PathBuf,

    /// Foreground color used when the request omits `fg`
    #[arg(long, default_value = quaint::DEFAULT_FG)]
    fg: String,

    /// Background color used when the request omits `bg`
    #[arg(long, default_value = quaint::DEFAULT_BG)]
    bg: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Arc::new(ServiceConfig {
        bind: args.bind,
        background_path: args.background,
        font_path: args.font,
        default_fg: args.fg,
        default_bg: args.bg,
    });

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    log::info!("starting quaint on {}", config.bind);
    axum::serve(listener, router(config))
        .await
        .context("server terminated")?;

    Ok(())
}
