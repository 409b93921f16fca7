//! Process-wide UI state container.
//!
//! `AdminStore` holds the two pieces of shared mutable UI state the
//! navigation model depends on: the current route and the sidebar collapse
//! flag. Both follow single-writer semantics: any reader may call the
//! accessors, mutation happens only through the entry points below, and
//! every write synchronously notifies all subscribers before returning, so
//! dependent state is consistent before the next interaction is processed.

use tracing::debug;

/// Event emitted to subscribers after a store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The current route changed to the contained value.
    RouteChanged(String),
    /// The sidebar collapse flag changed to the contained value.
    SidebarCollapsed(bool),
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Injectable UI state store with synchronous subscriber notification.
pub struct AdminStore {
    current_route: String,
    sidebar_collapsed: bool,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for AdminStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminStore")
            .field("current_route", &self.current_route)
            .field("sidebar_collapsed", &self.sidebar_collapsed)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl AdminStore {
    /// Creates a store with the given initial route and collapse flag.
    pub fn new(initial_route: impl Into<String>, sidebar_collapsed: bool) -> Self {
        Self {
            current_route: initial_route.into(),
            sidebar_collapsed,
            subscribers: Vec::new(),
        }
    }

    /// The route currently being displayed.
    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    /// Whether the sidebar is in collapsed density.
    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    /// Registers a subscriber invoked synchronously after every mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Sets the current route and notifies subscribers. Setting the route
    /// it already has is a no-op from the router's perspective but still
    /// notifies, matching re-navigation to the same leaf.
    pub fn set_current_route(&mut self, route: impl Into<String>) {
        let route = route.into();
        debug!(%route, "route updated");
        self.current_route = route.clone();
        self.notify(StoreEvent::RouteChanged(route));
    }

    /// Sets the collapse flag and notifies subscribers when it changed.
    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        if self.sidebar_collapsed == collapsed {
            return;
        }
        self.sidebar_collapsed = collapsed;
        debug!(collapsed, "sidebar collapse flag updated");
        self.notify(StoreEvent::SidebarCollapsed(collapsed));
    }

    /// Flips the collapse flag; returns the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        let next = !self.sidebar_collapsed;
        self.set_sidebar_collapsed(next);
        next
    }

    fn notify(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn route_mutation_notifies_synchronously() {
        let seen: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut store = AdminStore::new("/dashboard", false);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        store.set_current_route("/images/list");
        assert_eq!(store.current_route(), "/images/list");
        assert_eq!(&*seen.borrow(), &[StoreEvent::RouteChanged("/images/list".into())]);
    }

    #[test]
    fn collapse_toggle_notifies_and_flips() {
        let seen: Rc<RefCell<Vec<StoreEvent>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut store = AdminStore::new("/dashboard", false);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        assert!(store.toggle_sidebar());
        assert!(!store.toggle_sidebar());
        assert_eq!(
            &*seen.borrow(),
            &[StoreEvent::SidebarCollapsed(true), StoreEvent::SidebarCollapsed(false)]
        );
    }

    #[test]
    fn redundant_collapse_write_is_silent() {
        let count: Rc<RefCell<usize>> = Rc::default();
        let sink = Rc::clone(&count);

        let mut store = AdminStore::new("/dashboard", true);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set_sidebar_collapsed(true);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn renavigation_to_same_route_still_notifies() {
        let count: Rc<RefCell<usize>> = Rc::default();
        let sink = Rc::clone(&count);

        let mut store = AdminStore::new("/storage", false);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.set_current_route("/storage");
        store.set_current_route("/storage");
        assert_eq!(*count.borrow(), 2);
    }
}
