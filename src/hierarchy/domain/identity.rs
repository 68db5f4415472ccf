/// A signed-in user as supplied by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    uid: String,
    display_name: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>, display_name: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name,
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Name used when greeting the user; falls back to the uid.
    pub fn greeting_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.uid)
    }
}
