//! The in-memory store backing the GraphQL resolvers.
//!
//! A [`TweetStore`] owns an ordered list of tweets and a small user table
//! for the lifetime of the process. All access goes through a single mutex,
//! so resolver execution against the shared store is serialized even though
//! the HTTP layer accepts concurrent connections.

use std::sync::Mutex;

use crate::model::{Tweet, User};

#[derive(Default)]
struct Inner {
    tweets: Vec<Tweet>,
    users: Vec<User>,
    /// Next tweet id. Seeded at `tweets.len() + 1` and never decremented,
    /// so ids stay unique across deletions.
    next_id: u64,
}

pub struct TweetStore {
    inner: Mutex<Inner>,
}

impl TweetStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                tweets: Vec::new(),
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// A store pre-seeded with the fixture tweets and their authors.
    pub fn seeded() -> Self {
        let users = vec![
            User::new("1".into(), "alice".into(), "Alice".into())
                .with_last_name("Anderson".into()),
            User::new("2".into(), "bob".into(), "Bob".into()),
        ];
        let tweets = vec![
            Tweet::new("1".into(), "First Tweet".into()).with_author("1".into()),
            Tweet::new("2".into(), "Second Tweet".into()).with_author("2".into()),
        ];
        let next_id = tweets.len() as u64 + 1;

        Self {
            inner: Mutex::new(Inner {
                tweets,
                users,
                next_id,
            }),
        }
    }

    /// All tweets in insertion order, snapshot at call time.
    pub fn list(&self) -> Vec<Tweet> {
        self.inner.lock().unwrap().tweets.clone()
    }

    /// The first tweet whose id equals `id` exactly, if any.
    pub fn get(&self, id: &str) -> Option<Tweet> {
        let inner = self.inner.lock().unwrap();
        inner.tweets.iter().find(|t| t.id == id).cloned()
    }

    /// Append a new tweet and return it. The id is the stringified counter,
    /// which equals `len + 1` for any history without deletions.
    pub fn post(&self, text: String, author_id: String) -> Tweet {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let tweet = Tweet::new(id, text).with_author(author_id);
        inner.tweets.push(tweet.clone());
        tweet
    }

    /// Remove the tweet with the given id. Returns whether one was removed.
    /// Surviving tweets keep their ids; nothing is renumbered.
    pub fn delete(&self, id: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.tweets.len();
        inner.tweets.retain(|t| t.id != id);
        inner.tweets.len() < before
    }

    /// All known users.
    pub fn users(&self) -> Vec<User> {
        self.inner.lock().unwrap().users.clone()
    }

    /// Look a user up by id.
    pub fn user(&self, id: &str) -> Option<User> {
        let inner = self.inner.lock().unwrap();
        inner.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().tweets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TweetStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_assigns_sequential_ids() {
        let store = TweetStore::new();
        for n in 1..=5 {
            let tweet = store.post(format!("tweet {}", n), "1".into());
            assert_eq!(tweet.id, (store.len()).to_string());
            assert_eq!(tweet.id, n.to_string());
        }
    }

    #[test]
    fn test_post_on_seeded_store_continues_sequence() {
        let store = TweetStore::seeded();
        let tweet = store.post("Hi".into(), "42".into());
        assert_eq!(tweet.id, "3");
        assert_eq!(tweet.text, "Hi");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = TweetStore::new();
        store.post("a".into(), "1".into());
        store.post("b".into(), "1".into());
        store.post("c".into(), "2".into());

        let texts: Vec<_> = store.list().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_get_exact_match() {
        let store = TweetStore::seeded();
        let tweet = store.get("2").unwrap();
        assert_eq!(tweet.text, "Second Tweet");
        assert!(store.get("99").is_none());
        assert!(store.get(" 2").is_none());
    }

    #[test]
    fn test_delete_reports_removal() {
        let store = TweetStore::seeded();
        assert!(store.delete("1"));
        assert!(!store.delete("1"));
        assert_eq!(store.len(), 1);
        // Survivors keep their ids
        assert_eq!(store.list()[0].id, "2");
    }

    #[test]
    fn test_ids_stay_unique_after_delete() {
        let store = TweetStore::seeded();
        store.delete("1");
        let tweet = store.post("third".into(), "1".into());
        assert_ne!(tweet.id, "2");
        assert_eq!(tweet.id, "3");

        let ids: Vec<_> = store.list().into_iter().map(|t| t.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn test_user_lookup() {
        let store = TweetStore::seeded();
        let user = store.user("1").unwrap();
        assert_eq!(user.username, "alice");
        assert!(store.user("99").is_none());
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = TweetStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert!(store.users().is_empty());
    }
}
