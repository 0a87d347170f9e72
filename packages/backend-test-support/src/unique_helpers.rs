//! Test helpers for generating unique test data
//!
//! ULID-suffixed strings keep test fixtures (player names, game labels)
//! distinct across tests sharing one service instance.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let name1 = unique_str("player");
/// let name2 = unique_str("player");
/// assert_ne!(name1, name2);
/// assert!(name1.starts_with("player-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
