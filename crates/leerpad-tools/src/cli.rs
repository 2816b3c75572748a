pub(crate) mod opt;

mod compile;
mod schema;
mod validate;

use crate::cli::opt::Commands;
use anyhow::Error;

pub(crate) async fn exec(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Schema(schema) => schema::exec(schema),
        Commands::Validate(validate) => validate::exec(validate).await,
        Commands::Compile(compile) => compile::exec(compile).await,
    }
}
