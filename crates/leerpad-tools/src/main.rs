mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;

#[tokio::main]
async fn main() -> Result<()> {
    leerpad_utils::tracing::setup()?;
    let opt = opt::Cli::parse();
    cli::exec(opt.command).await
}
