//! # Instance Registry
//!
//! Holders for the catalog's shared instances. A [`Holder`] is a lazily
//! initialised, access-guarded slot: the first [`Holder::acquire`] builds the
//! value, every later call returns that same value.
//!
//! ## Discard on Reuse
//!
//! `acquire` takes the construction input on every call, but only the first
//! call uses it. Later inputs are dropped without an error; the held value is
//! returned unchanged. This is the behavior the singleton and flyweight
//! demonstrations exist to show, so it is kept and logged at debug level
//! rather than reported.
//!
//! ## Scoping
//!
//! Holders live on a [`Registry`] value rather than in free statics, so tests
//! and API instances own isolated registries. A process that wants one
//! instance overall keeps one registry for its lifetime, as the CLI does.
//!
//! Check-and-set goes through `once_cell::sync::OnceCell`, so concurrent first
//! calls still produce exactly one instance.

use crate::model::House;
use once_cell::sync::OnceCell;
use std::sync::Arc;

pub struct Holder<T> {
    name: &'static str,
    slot: OnceCell<Arc<T>>,
}

impl<T> Holder<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceCell::new(),
        }
    }

    /// Returns the held instance, building it with `init(input)` if the slot
    /// is empty. When the slot is already filled `input` is discarded.
    pub fn acquire<I, F>(&self, input: I, init: F) -> Arc<T>
    where
        I: std::fmt::Debug,
        F: FnOnce(I) -> T,
    {
        let shown = format!("{:?}", input);
        let mut built = false;
        let held = self.slot.get_or_init(|| {
            built = true;
            Arc::new(init(input))
        });
        if built {
            tracing::debug!(holder = self.name, input = %shown, "constructed held instance");
        } else {
            tracing::debug!(holder = self.name, input = %shown, "holder already set, input discarded");
        }
        Arc::clone(held)
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.slot.get().cloned()
    }

    pub fn is_set(&self) -> bool {
        self.slot.get().is_some()
    }
}

/// The scoped owner of every held instance in the catalog.
pub struct Registry {
    house: Holder<House>,
    shared_house: Holder<House>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub const fn new() -> Self {
        Self {
            house: Holder::new("house"),
            shared_house: Holder::new("shared_house"),
        }
    }

    /// Singleton accessor. The first call decides the room count; the
    /// `rooms` argument of every later call is discarded.
    pub fn house(&self, rooms: u32) -> Arc<House> {
        self.house.acquire(rooms, House::new)
    }

    /// Flyweight accessor. Independent of [`Registry::house`]: only build a
    /// house when none is held yet.
    pub fn shared_house(&self, rooms: u32) -> Arc<House> {
        self.shared_house.acquire(rooms, House::new)
    }

    pub fn held_house(&self) -> Option<Arc<House>> {
        self.house.get()
    }
}
