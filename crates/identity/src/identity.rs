//! The capability interface the engine evaluates principals through.

/// A principal being authorized: authenticated user or anonymous guest.
///
/// The rule engine consults exactly these three capabilities and nothing
/// else. Role names passed to [`Identity::is_in_role`] are already trimmed
/// and lower-cased by the engine; implementations should nevertheless match
/// case-insensitively so they behave the same when called directly.
pub trait Identity {
    /// Whether this principal is anonymous/unauthenticated.
    fn is_guest(&self) -> bool;

    /// The principal's identifier. Compared case-insensitively by the engine.
    fn name(&self) -> &str;

    /// Role-membership test for a single role name.
    fn is_in_role(&self, role: &str) -> bool;
}
