//! Typed state machines for widget interaction states
//!
//! A flat table of `(state, event) -> state` edges plus per-state entry
//! listeners. Events without an edge from the current state are dropped.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

/// Callback run when a state is entered
pub type EntryListener = Box<dyn FnMut() + Send>;

/// One edge of the transition table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from: S,
    pub event: E,
    pub to: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self { from, event, to }
    }
}

pub struct StateMachine<S, E> {
    current: S,
    edges: FxHashMap<(S, E), S>,
    entry_listeners: FxHashMap<S, Vec<EntryListener>>,
    history: Vec<(S, E, S)>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// Build a machine from its transition table
    ///
    /// When two transitions share a `(from, event)` pair the first one wins.
    pub fn new(initial: S, transitions: impl IntoIterator<Item = Transition<S, E>>) -> Self {
        let mut edges = FxHashMap::default();
        for t in transitions {
            edges.entry((t.from, t.event)).or_insert(t.to);
        }

        Self {
            current: initial,
            edges,
            entry_listeners: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    /// Every transition taken so far as (from, event, to)
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Feed an event and return the resulting state
    pub fn send(&mut self, event: E) -> S {
        let from = self.current;
        let Some(&to) = self.edges.get(&(from, event)) else {
            return from;
        };

        self.current = to;
        self.history.push((from, event, to));
        debug!(?from, ?event, ?to, "state transition");

        if let Some(listeners) = self.entry_listeners.get_mut(&to) {
            for listener in listeners.iter_mut() {
                listener();
            }
        }
        to
    }

    /// Run `listener` every time `state` is entered
    pub fn on_enter<F: FnMut() + Send + 'static>(&mut self, state: S, listener: F) {
        self.entry_listeners
            .entry(state)
            .or_default()
            .push(Box::new(listener));
    }
}
