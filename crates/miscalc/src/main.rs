#![allow(unused)]

use crate::prelude::*;
use clap::Parser;

mod calculator;
mod error;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Calculator test-fixture service with one golden and several deliberately faulty engines"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Calculation engine variant to install (golden, swapped or zero)
    #[clap(long, env = "MISCALC_ENGINE", global = true, default_value = "golden")]
    engine: miscalc_core::calculator::Variant,

    /// Whether to display additional information.
    #[clap(long, env = "MISCALC_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Calculator operations (HTTP service and one-shot evaluation)
    Calculator(crate::calculator::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Calculator(sub_app) => crate::calculator::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
