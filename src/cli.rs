use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{export, serve};

#[derive(Parser)]
#[command(name = "premium-pulse")]
#[command(about = "Health insurance market dashboard API server and CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Print all dashboard datasets as one JSON document on stdout
    ///
    /// Useful for embedding the figures into a statically generated page
    /// without running the server.
    Export {
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Export { pretty } => {
                export(pretty)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_bind_address(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Serve { bind_address } => bind_address,
            _ => panic!("expected serve command"),
        }
    }

    // Single test so the BIND_ADDRESS mutation cannot race a parallel
    // default-value check.
    #[test]
    fn serve_bind_address_resolution_order() {
        assert_eq!(parsed_bind_address(&["premium-pulse", "serve"]), "0.0.0.0:3000");

        unsafe { std::env::set_var("BIND_ADDRESS", "127.0.0.1:8080") };
        assert_eq!(parsed_bind_address(&["premium-pulse", "serve"]), "127.0.0.1:8080");

        // Explicit flag wins over the environment
        assert_eq!(
            parsed_bind_address(&["premium-pulse", "serve", "--bind-address", "0.0.0.0:9000"]),
            "0.0.0.0:9000"
        );
        unsafe { std::env::remove_var("BIND_ADDRESS") };
    }
}
