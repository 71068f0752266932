use clap::Parser;
use konsultasi::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    konsultasi::run(cli).await
}
