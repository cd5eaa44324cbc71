use anyhow::Context;
use portal_client::ApiClient;
use portal_config::PortalConfig;
use portal_core::enums::Language;
use portal_store::{AuthStore, CaseStore, LocalStorage, SessionStore, TokenStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PortalConfig,
    pub storage: LocalStorage,
}

impl AppContext {
    /// Open the local data directory named by the config.
    pub fn init(config: PortalConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolved_data_dir()?;
        let storage = LocalStorage::open(data_dir.clone())
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        tracing::debug!(dir = %data_dir.display(), "opened local storage");

        Ok(Self { config, storage })
    }

    pub const fn language(&self) -> Language {
        self.config.general.language
    }

    pub fn auth(&self) -> AuthStore {
        AuthStore::new(self.storage.clone())
    }

    pub fn tokens(&self) -> TokenStore {
        TokenStore::new(self.storage.clone())
    }

    pub fn sessions(&self) -> SessionStore {
        SessionStore::new(self.storage.clone())
    }

    /// Case store owned by the signed-in user, or the anonymous user.
    pub fn cases(&self) -> anyhow::Result<CaseStore> {
        let store = CaseStore::open(self.storage.clone()).context("failed to load cases")?;
        Ok(match self.auth().current_user()? {
            Some(user) => store.with_user_id(user.id),
            None => store,
        })
    }

    /// HTTP client for the configured backend.
    pub fn api_client(&self) -> anyhow::Result<ApiClient> {
        if !self.config.api.is_configured() {
            anyhow::bail!(
                "API base URL is not configured; set api.base_url in .portal/config.toml or PORTAL_API__BASE_URL"
            );
        }
        ApiClient::new(self.config.api.clone(), self.tokens())
            .context("failed to build HTTP client")
    }
}

#[cfg(test)]
mod tests {
    use portal_config::PortalConfig;
    use portal_store::cases::ANONYMOUS_USER_ID;

    use super::AppContext;

    fn context_in(dir: &tempfile::TempDir) -> AppContext {
        let mut config = PortalConfig::default();
        config.storage.data_dir = dir.path().display().to_string();
        AppContext::init(config).expect("context should initialize")
    }

    #[test]
    fn cases_are_owned_by_signed_in_user() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = context_in(&dir);

        let anonymous = ctx
            .cases()
            .expect("store")
            .create_case("social_assistance", "المساعدة الاجتماعية")
            .expect("create");
        assert_eq!(anonymous.user_id, ANONYMOUS_USER_ID);

        let user = ctx.auth().login("28412345678", "citizen@example.qa").expect("login");
        let owned = ctx
            .cases()
            .expect("store")
            .create_case("housing_support", "الدعم السكني")
            .expect("create");
        assert_eq!(owned.user_id, user.id);
    }

    #[test]
    fn api_client_requires_base_url() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = context_in(&dir);

        let error = ctx.api_client().err().expect("missing base url");
        assert!(error.to_string().contains("PORTAL_API__BASE_URL"));
    }
}
