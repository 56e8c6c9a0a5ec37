use tracing::debug;

use crate::api::client::first_profile_set;
use crate::cli::Cli;
use crate::context::AppContext;
use crate::convert;
use crate::error::AppResult;
use crate::output;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        base_url, profile, ..
    } = cli;

    let ctx = AppContext::bootstrap(base_url, profile)?;
    debug!(base_url = ctx.client.base_url(), "context ready");

    let document = ctx.client.fetch_profiles().await?;
    let profile_set = first_profile_set(document)?;

    // Built in full before anything reaches stdout.
    let autotune = match ctx.profile.as_deref() {
        Some(name) => convert::convert_named_profile(&profile_set, name)?,
        None => convert::convert_profile(&profile_set)?,
    };

    output::json::print(&autotune)
}
