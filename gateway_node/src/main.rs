use anyhow::Result;
use clap::Parser;
use fuelgate_node::api::{create_gateway_router, AppState};
use fuelgate_node::eth::EthClient;
use fuelgate_node::fuel::FuelClient;
use log::info;

/// FuelGate Gateway Arguments
#[derive(Parser)]
#[clap(name = "fuelgate")]
#[clap(about = "HTTP gateway for the Fuel GraphQL API and Ethereum JSON-RPC")]
struct Args {
    /// Port to listen on
    #[clap(long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let fuel = FuelClient::mainnet();
    let eth = EthClient::mainnet()?;
    info!("Fuel backend: {}", fuel.endpoint());

    let app = create_gateway_router(AppState { fuel, eth });

    let addr = format!("0.0.0.0:{}", args.port);
    info!("Starting gateway on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
