//! ULID-backed identities so parallel tests never share players.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("game");
/// let b = unique_str("game");
/// assert_ne!(a, b);
/// assert!(a.starts_with("game-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A fresh authenticated subject for a host or guest.
///
/// ```
/// use backend_test_support::unique_helpers::unique_player;
///
/// assert_ne!(unique_player("host"), unique_player("host"));
/// ```
pub fn unique_player(role: &str) -> String {
    unique_str(&format!("player-{role}"))
}
