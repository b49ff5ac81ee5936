mod config;
mod generate_cmd;
mod serve_cmd;

#[cfg(test)]
mod test_util;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use herald_core::generator::Generator;
use herald_core::model::{AnthropicClient, ModelClient};

#[derive(Parser)]
#[command(name = "herald", about = "Campaign blueprint generator for lead-gen teams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter herald config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
        /// Port to listen on
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
    /// Generate one blueprint from a brief JSON file (use "-" for stdin)
    Generate {
        /// Path to the brief JSON file
        file: String,
        /// Pretty-print the response JSON
        #[arg(long)]
        pretty: bool,
    },
}

/// Execute the `herald init` command: write a starter config file.
fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    config::save_config(&config::ConfigFile::starter())?;

    println!("Config written to {}", path.display());
    println!();
    println!(
        "Set {} (or model.api_key in the file) to enable the model path;",
        config::API_KEY_ENV
    );
    println!("without a key, herald serves deterministic fallback plans.");

    Ok(())
}

/// Build the shared generator from resolved configuration.
///
/// A missing credential is expected degraded mode: the generator runs with
/// no model client and every request takes the fallback path.
fn build_generator() -> anyhow::Result<Arc<Generator>> {
    let resolved = config::HeraldConfig::resolve()?;

    let model: Option<Arc<dyn ModelClient>> = match resolved.model_config {
        Some(model_config) => {
            tracing::info!(model = %model_config.model, "model client configured");
            Some(Arc::new(AnthropicClient::new(&model_config)?))
        }
        None => {
            tracing::info!("no model credential found; running in fallback mode");
            None
        }
    };

    Ok(Arc::new(Generator::new(model)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Serve { bind, port } => {
            let generator = build_generator()?;
            serve_cmd::run_serve(generator, &bind, port).await?;
        }
        Commands::Generate { file, pretty } => {
            let generator = build_generator()?;
            generate_cmd::run_generate(&generator, &file, pretty).await?;
        }
    }

    Ok(())
}
