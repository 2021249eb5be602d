//! # Catalog Index
//!
//! Static metadata for every pattern in the book: its id, family, a one-line
//! summary and a short commentary. The order of [`ENTRIES`] is the order the
//! demonstrations run in when the whole catalog is executed.
//!
//! Pattern ids are kebab-case (`abstract-factory`) and parse
//! case-insensitively.

use crate::error::{CatalogError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Creational,
    Structural,
    Behavioral,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::Creational => "creational",
            Family::Structural => "structural",
            Family::Behavioral => "behavioral",
        };
        f.write_str(s)
    }
}

impl FromStr for Family {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "creational" => Ok(Family::Creational),
            "structural" => Ok(Family::Structural),
            "behavioral" | "behavioural" => Ok(Family::Behavioral),
            other => Err(CatalogError::Config(format!("Unknown family: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternId {
    Constructor,
    Singleton,
    Factory,
    AbstractFactory,
    Module,
    Mixin,
    Facade,
    Flyweight,
    Decorator,
    Mvc,
    Mvp,
    Observer,
    State,
    Iterator,
    Strategy,
    Memento,
}

impl PatternId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternId::Constructor => "constructor",
            PatternId::Singleton => "singleton",
            PatternId::Factory => "factory",
            PatternId::AbstractFactory => "abstract-factory",
            PatternId::Module => "module",
            PatternId::Mixin => "mixin",
            PatternId::Facade => "facade",
            PatternId::Flyweight => "flyweight",
            PatternId::Decorator => "decorator",
            PatternId::Mvc => "mvc",
            PatternId::Mvp => "mvp",
            PatternId::Observer => "observer",
            PatternId::State => "state",
            PatternId::Iterator => "iterator",
            PatternId::Strategy => "strategy",
            PatternId::Memento => "memento",
        }
    }

    pub fn entry(&self) -> &'static PatternEntry {
        // ENTRIES is laid out in declaration order
        &ENTRIES[*self as usize]
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        ENTRIES
            .iter()
            .map(|e| e.id)
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| CatalogError::UnknownPattern(s.to_string()))
    }
}

#[derive(Debug, Serialize)]
pub struct PatternEntry {
    pub id: PatternId,
    pub family: Family,
    pub summary: &'static str,
    pub notes: &'static str,
}

pub static ENTRIES: &[PatternEntry] = &[
    PatternEntry {
        id: PatternId::Constructor,
        family: Family::Creational,
        summary: "Create new instances through a constructor",
        notes: "A constructor sets every field from its arguments. A specialization \
                reuses the base constructor and then adds its own fields.",
    },
    PatternEntry {
        id: PatternId::Singleton,
        family: Family::Creational,
        summary: "Reuse the one instance of a type if it exists",
        notes: "The first request builds the instance; every later request gets the \
                same instance back and its arguments are discarded.",
    },
    PatternEntry {
        id: PatternId::Factory,
        family: Family::Creational,
        summary: "Let a factory pick which variant to build",
        notes: "Callers ask for a category and a name, the factory decides which role \
                and tag the new instance gets.",
    },
    PatternEntry {
        id: PatternId::AbstractFactory,
        family: Family::Creational,
        summary: "Choose the factory from an attribute of the request",
        notes: "A department label decides which concrete factory handles the request.",
    },
    PatternEntry {
        id: PatternId::Module,
        family: Family::Structural,
        summary: "Expose a small public surface over private code",
        notes: "Only what the module exports is reachable; its helpers stay private.",
    },
    PatternEntry {
        id: PatternId::Mixin,
        family: Family::Structural,
        summary: "Attach behavior to a type after it is defined",
        notes: "A trait implemented elsewhere gives every existing and future instance \
                a new action without touching the type's definition.",
    },
    PatternEntry {
        id: PatternId::Facade,
        family: Family::Structural,
        summary: "Hide complex code behind one simple call",
        notes: "The caller sees a single function; the steps behind it live out of sight.",
    },
    PatternEntry {
        id: PatternId::Flyweight,
        family: Family::Structural,
        summary: "Share what already exists instead of building more",
        notes: "Instances are created only when none is held yet, which saves memory \
                when many callers want the same thing.",
    },
    PatternEntry {
        id: PatternId::Decorator,
        family: Family::Structural,
        summary: "Extend a value by wrapping it",
        notes: "Each wrapper implements the same interface and adds to what the wrapped \
                value reports.",
    },
    PatternEntry {
        id: PatternId::Mvc,
        family: Family::Structural,
        summary: "Separate data, presentation and manipulation",
        notes: "The model describes data, the view renders it and the controller \
                changes the model.",
    },
    PatternEntry {
        id: PatternId::Mvp,
        family: Family::Structural,
        summary: "Route every view interaction through a presenter",
        notes: "Like MVC, but the view cannot reach the model; the presenter holds \
                the logic and pushes display values to the view.",
    },
    PatternEntry {
        id: PatternId::Observer,
        family: Family::Behavioral,
        summary: "Subscribe to changes",
        notes: "Listeners register with a subject and are notified on every change.",
    },
    PatternEntry {
        id: PatternId::State,
        family: Family::Behavioral,
        summary: "Hold state and re-render when it changes",
        notes: "Behavior depends on the current state; each transition triggers a \
                fresh render.",
    },
    PatternEntry {
        id: PatternId::Iterator,
        family: Family::Behavioral,
        summary: "Walk a collection without exposing its layout",
        notes: "The collection hands out a cursor that yields items one at a time.",
    },
    PatternEntry {
        id: PatternId::Strategy,
        family: Family::Behavioral,
        summary: "Swap interchangeable algorithms of the same kind",
        notes: "The caller is configured with a strategy and never branches on which \
                one it got.",
    },
    PatternEntry {
        id: PatternId::Memento,
        family: Family::Behavioral,
        summary: "Capture state in another form and restore it later",
        notes: "State is converted into a snapshot (here JSON) without losing meaning, \
                so it can be restored exactly.",
    },
];

pub fn entries(family: Option<Family>) -> impl Iterator<Item = &'static PatternEntry> {
    ENTRIES
        .iter()
        .filter(move |e| family.map_or(true, |f| e.family == f))
}
