//! Registry of taken usernames

pub mod seed;

pub use seed::load_seed;

use std::collections::HashMap;

/// Built-in seed used when no seed file is configured
pub const DEFAULT_SEED: &[(&str, &str)] = &[("john_doe", "UID123"), ("admin", "UID001")];

/// Fold a username to the key used for every registry and counter lookup.
///
/// Only case is folded; whitespace and other characters are kept as-is.
pub fn canonicalize(name: &str) -> String {
    name.to_lowercase()
}

/// Exact-match set of taken usernames, each mapped to an opaque owner id.
///
/// Membership is fixed at construction, so a `Registry` can be shared by
/// reference across threads without locking.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    owners: HashMap<String, String>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with [`DEFAULT_SEED`]
    pub fn with_defaults() -> Self {
        Self::from_entries(DEFAULT_SEED.iter().copied())
    }

    /// Create a registry from `(username, owner)` pairs.
    ///
    /// Usernames are canonicalized; when two pairs fold to the same key the
    /// later one wins.
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut owners = HashMap::new();
        for (name, owner) in entries {
            let key = canonicalize(name.as_ref());
            if let Some(previous) = owners.insert(key, owner.into()) {
                tracing::warn!(
                    username = %name.as_ref(),
                    previous_owner = %previous,
                    "Duplicate username in seed, keeping the later owner"
                );
            }
        }

        tracing::debug!(entries = owners.len(), "Registry seeded");
        Self { owners }
    }

    /// Whether `name` (in any case) is taken
    pub fn is_taken(&self, name: &str) -> bool {
        self.owners.contains_key(&canonicalize(name))
    }

    /// Whether `candidate` is present without case folding
    pub fn contains_exact(&self, candidate: &str) -> bool {
        self.owners.contains_key(candidate)
    }

    /// Owner id of a taken username
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.owners.get(&canonicalize(name)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// All taken usernames in sorted order
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.owners.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let registry = Registry::with_defaults();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.usernames(), vec!["admin", "john_doe"]);
        assert_eq!(registry.owner_of("john_doe"), Some("UID123"));
        assert_eq!(registry.owner_of("ADMIN"), Some("UID001"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = Registry::with_defaults();
        assert!(registry.is_taken("john_doe"));
        assert!(registry.is_taken("John_Doe"));
        assert!(registry.is_taken("ADMIN"));
        assert!(!registry.is_taken("jane_smith"));
    }

    #[test]
    fn test_no_trimming() {
        let registry = Registry::with_defaults();
        assert!(!registry.is_taken(" admin"));
        assert!(!registry.is_taken("admin "));
        assert!(!registry.is_taken(""));
    }

    #[test]
    fn test_exact_lookup_skips_folding() {
        let registry = Registry::with_defaults();
        assert!(registry.contains_exact("admin"));
        assert!(!registry.contains_exact("Admin"));
    }

    #[test]
    fn test_seed_keys_are_canonical() {
        let registry = Registry::from_entries([("Alice", "U1"), ("ALICE", "U2"), ("bob", "U3")]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.owner_of("alice"), Some("U2"));
        assert!(registry.contains_exact("alice"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_taken("admin"));
    }
}
