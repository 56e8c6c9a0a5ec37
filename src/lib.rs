pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod convert;
pub mod error;
pub mod logging;
pub mod output;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
