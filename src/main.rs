//! Server entry point: parse flags, init tracing, serve until ctrl-c.

use std::net::SocketAddr;

use clap::Parser;

use drepana::api::start_api_server;
use drepana::config;

#[derive(Parser, Debug)]
#[command(
    name = "drepana-server",
    about = "Sickle-cell-disease awareness API server",
    version
)]
struct Cli {
    /// Address to bind, e.g. 127.0.0.1:8750
    #[arg(long, default_value = config::DEFAULT_BIND)]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    drepana::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let mut server = start_api_server(cli.bind).await?;
    tracing::info!(addr = %server.info.server_addr, "listening");

    tokio::signal::ctrl_c().await?;
    server.shutdown();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_is_used_when_flag_absent() {
        let cli = Cli::try_parse_from(["drepana-server"]).unwrap();
        assert_eq!(cli.bind.port(), 8750);
    }

    #[test]
    fn explicit_bind_is_respected() {
        let cli = Cli::try_parse_from(["drepana-server", "--bind", "0.0.0.0:9000"]).unwrap();
        assert_eq!(cli.bind.port(), 9000);
    }

    #[test]
    fn unparseable_bind_is_a_cli_error() {
        let err = Cli::try_parse_from(["drepana-server", "--bind", "not-an-address"]);
        assert!(err.is_err());
    }
}
