//! URL-change observer that keeps the active locale in sync with the query string.
//!
//! The watcher is single-threaded: each notification recomputes the state
//! synchronously and hands it to every listener in subscription order, so the
//! last notification always wins.

use crate::locale::{LocaleData, parse_locale_data};
use crate::messages::{MessageBundle, MessageStore, MissingMessages, Translator};
use crate::query::QueryParams;
use std::sync::Arc;

/// Locale-derived state for the mounted view tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleState {
    pub data: LocaleData,
    pub messages: Arc<MessageBundle>,
    /// Set when the locale had no bundle and the default was used.
    pub fallback: Option<MissingMessages>,
}

impl LocaleState {
    /// Derive the state for a query string, logging a warning on bundle fallback.
    #[must_use]
    pub fn resolve(store: &MessageStore, query: &QueryParams) -> Self {
        let data = parse_locale_data(query.locale());
        let lookup = store.lookup(data.locale);
        if let Some(missing) = lookup.diagnostic {
            log::warn!("{missing}");
        }
        Self {
            data,
            messages: lookup.messages,
            fallback: lookup.diagnostic,
        }
    }

    #[must_use]
    pub fn translator(&self, store: &MessageStore) -> Translator {
        Translator::new(
            Arc::clone(&self.messages),
            Arc::clone(store.default_bundle()),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&LocaleState)>;

pub struct LocaleWatcher<'a> {
    store: &'a MessageStore,
    state: LocaleState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<'a> LocaleWatcher<'a> {
    /// Compute the initial state synchronously from the URL present at mount.
    #[must_use]
    pub fn new(store: &'a MessageStore, initial: &QueryParams) -> Self {
        Self {
            store,
            state: LocaleState::resolve(store, initial),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LocaleState {
        &self.state
    }

    #[must_use]
    pub fn translator(&self) -> Translator {
        self.state.translator(self.store)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&LocaleState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        before != self.listeners.len()
    }

    /// Handle one URL-change notification.
    pub fn notify(&mut self, query: &QueryParams) -> &LocaleState {
        self.state = LocaleState::resolve(self.store, query);
        log::debug!(
            "locale resolved to {} ({})",
            self.state.data.locale,
            self.state.data.country_code
        );
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    /// Convenience for notifications that carry a full URL.
    pub fn notify_url(&mut self, url: &str) -> &LocaleState {
        self.notify(&QueryParams::from_url(url))
    }
}

impl std::fmt::Debug for LocaleWatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleWatcher")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{DEFAULT_COUNTRY, Locale};
    use crate::messages::MessageBundle;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn initial_state_comes_from_mount_url() {
        let store = MessageStore::builtin().expect("bundles");
        let watcher = LocaleWatcher::new(&store, &QueryParams::parse("?locale=minion"));
        assert_eq!(watcher.state().data.locale, Locale::Minion);
        assert_eq!(watcher.state().messages.locale(), Locale::Minion);
        assert!(watcher.state().fallback.is_none());
    }

    #[test]
    fn listeners_see_every_notification_in_order() {
        let store = MessageStore::builtin().expect("bundles");
        let mut watcher = LocaleWatcher::new(&store, &QueryParams::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            watcher.subscribe(move |state| {
                seen.borrow_mut().push(format!("{tag}:{}", state.data.locale));
            });
        }
        watcher.notify_url("/?locale=minion");
        watcher.notify_url("/?locale=minion");
        watcher.notify_url("/?locale=nope");
        assert_eq!(
            *seen.borrow(),
            vec![
                "a:minion", "b:minion", "a:minion", "b:minion", "a:en-US", "b:en-US"
            ]
        );
        assert_eq!(watcher.state().data.country_code, DEFAULT_COUNTRY);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let store = MessageStore::builtin().expect("bundles");
        let mut watcher = LocaleWatcher::new(&store, &QueryParams::default());
        let count = Rc::new(RefCell::new(0_u32));
        let id = {
            let count = Rc::clone(&count);
            watcher.subscribe(move |_| *count.borrow_mut() += 1)
        };
        watcher.notify_url("/?locale=minion");
        assert!(watcher.unsubscribe(id));
        assert!(!watcher.unsubscribe(id));
        watcher.notify_url("/?locale=en-US");
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn fallback_is_reported_per_lookup() {
        let store = MessageStore::new(MessageBundle::empty(Locale::EnUs));
        let mut watcher = LocaleWatcher::new(&store, &QueryParams::parse("locale=minion"));
        assert!(watcher.state().fallback.is_some());
        let state = watcher.notify_url("?locale=en-US");
        assert!(state.fallback.is_none());
        assert_eq!(state.messages.locale(), Locale::EnUs);
    }
}
