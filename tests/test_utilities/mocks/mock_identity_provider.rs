use family_hierarchy::prelude::*;

/// Mock IdentityProvider returning a fixed user, or nobody
#[derive(Clone)]
pub struct MockIdentityProvider {
    identity: Option<Identity>,
}

impl MockIdentityProvider {
    pub fn signed_in(uid: &str) -> Self {
        Self {
            identity: Some(Identity::new(uid, None)),
        }
    }

    pub fn with_display_name(uid: &str, display_name: &str) -> Self {
        Self {
            identity: Some(Identity::new(uid, Some(display_name.to_string()))),
        }
    }

    pub fn signed_out() -> Self {
        Self { identity: None }
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
