use crate::api::NightscoutClient;
use crate::config::{self, AppPaths};
use crate::error::AppResult;

#[derive(Debug)]
pub struct AppContext {
    pub profile: Option<String>,
    pub client: NightscoutClient,
}

impl AppContext {
    pub fn bootstrap(base_url: Option<String>, profile: Option<String>) -> AppResult<Self> {
        let paths = AppPaths::discover()?;
        Self::with_paths(&paths, base_url, profile)
    }

    pub fn with_paths(
        paths: &AppPaths,
        base_url: Option<String>,
        profile: Option<String>,
    ) -> AppResult<Self> {
        let settings = config::load_settings(paths)?;
        let source = paths.settings_file().display().to_string();
        let base_url = settings.base_url(base_url.as_deref(), &source)?;
        let profile = config::resolve_profile(profile.as_deref(), settings.profile.as_deref());
        let client = NightscoutClient::new(base_url);

        Ok(Self { profile, client })
    }
}
