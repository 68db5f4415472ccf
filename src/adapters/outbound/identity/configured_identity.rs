use crate::hierarchy::domain::Identity;
use crate::ports::outbound::IdentityProvider;

/// Environment variable consulted when no `--user` is given
pub const USER_ENV_VAR: &str = "FAMILY_HIERARCHY_USER";

/// ConfiguredIdentityProvider adapter for a user id fixed at startup
///
/// The id is resolved once from, in order, the command line, the
/// `FAMILY_HIERARCHY_USER` environment variable and the config file.
/// Blank values count as absent.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredIdentityProvider {
    identity: Option<Identity>,
}

impl ConfiguredIdentityProvider {
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    /// Resolves the user from the CLI value, the environment and the config value.
    pub fn from_sources(cli_user: Option<&str>, config_user: Option<&str>) -> Self {
        let env_user = std::env::var(USER_ENV_VAR).ok();
        Self::resolve(cli_user, env_user.as_deref(), config_user)
    }

    fn resolve(
        cli_user: Option<&str>,
        env_user: Option<&str>,
        config_user: Option<&str>,
    ) -> Self {
        let uid = [cli_user, env_user, config_user]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|uid| !uid.is_empty());

        Self::new(uid.map(|uid| Identity::new(uid, None)))
    }
}

impl IdentityProvider for ConfiguredIdentityProvider {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
