//! Read-through identity cache.

use dashmap::DashMap;
use tracing::trace;

use relaymark_types::{Dialect, Identity, IdentityResolver, ResolveError};

/// Wraps a resolver and remembers its positive answers.
///
/// Safe to share between concurrent translations. Entries are keyed by
/// `(platform, identifier)`, so a racing re-resolution only ever replaces
/// an entry with an equally valid one; the last write wins. Misses and
/// failures are not cached, so a later call asks the inner resolver again.
#[derive(Debug, Default)]
pub struct CachingResolver<R> {
    inner: R,
    entries: DashMap<(Dialect, String), Identity>,
}

impl<R: IdentityResolver> CachingResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            entries: DashMap::new(),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of cached identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<R: IdentityResolver> IdentityResolver for CachingResolver<R> {
    fn resolve(
        &self,
        platform: Dialect,
        identifier: &str,
    ) -> Result<Option<Identity>, ResolveError> {
        let key = (platform, identifier.to_owned());
        if let Some(hit) = self.entries.get(&key) {
            trace!(%platform, identifier, "identity cache hit");
            return Ok(Some(hit.value().clone()));
        }
        let resolved = self.inner.resolve(platform, identifier)?;
        if let Some(identity) = &resolved {
            self.entries.insert(key, identity.clone());
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;

    #[derive(Default)]
    struct Counting {
        calls: AtomicUsize,
    }

    impl IdentityResolver for Counting {
        fn resolve(
            &self,
            _platform: Dialect,
            identifier: &str,
        ) -> Result<Option<Identity>, ResolveError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match identifier {
                "ghost" => Ok(None),
                "flaky" => Err(ResolveError::Unavailable("down".into())),
                _ => Ok(Some(Identity {
                    mention_token: format!("<@{}>", identifier.to_uppercase()),
                    profile_url: String::new(),
                    display_name: None,
                })),
            }
        }
    }

    fn calls(cache: &CachingResolver<Counting>) -> usize {
        cache.inner().calls.load(Ordering::SeqCst)
    }

    #[test]
    fn positive_answers_are_cached() {
        let cache = CachingResolver::new(Counting::default());
        let first = cache.resolve(Dialect::Slack, "octocat").unwrap();
        let second = cache.resolve(Dialect::Slack, "octocat").unwrap();
        assert_eq!(first, second);
        assert_eq!(calls(&cache), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn platform_is_part_of_the_key() {
        let cache = CachingResolver::new(Counting::default());
        cache.resolve(Dialect::Slack, "x").unwrap();
        cache.resolve(Dialect::GitHub, "x").unwrap();
        assert_eq!(calls(&cache), 2);
    }

    #[test]
    fn misses_and_failures_are_not_cached() {
        let cache = CachingResolver::new(Counting::default());
        assert_eq!(cache.resolve(Dialect::Slack, "ghost").unwrap(), None);
        assert_eq!(cache.resolve(Dialect::Slack, "ghost").unwrap(), None);
        assert!(cache.resolve(Dialect::Slack, "flaky").is_err());
        assert!(cache.resolve(Dialect::Slack, "flaky").is_err());
        assert_eq!(calls(&cache), 4);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_forgets() {
        let cache = CachingResolver::new(Counting::default());
        cache.resolve(Dialect::Slack, "a").unwrap();
        cache.clear();
        cache.resolve(Dialect::Slack, "a").unwrap();
        assert_eq!(calls(&cache), 2);
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(CachingResolver::new(Counting::default()));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.resolve(Dialect::Slack, "octocat").unwrap())
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_some());
        }
        assert_eq!(cache.len(), 1);
        assert!(calls(&cache) >= 1);
    }
}
