/// Identity adapters supplying the signed-in user
mod configured_identity;

pub use configured_identity::{ConfiguredIdentityProvider, USER_ENV_VAR};
