use crate::hierarchy::domain::Identity;

/// IdentityProvider port supplying the signed-in user
///
/// Authentication itself happens outside this crate; the core only asks
/// whether somebody is signed in and who.
pub trait IdentityProvider {
    /// Returns the current identity, or `None` when nobody is signed in
    fn current_identity(&self) -> Option<Identity>;
}
