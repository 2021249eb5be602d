//! # Demonstrations
//!
//! One module per pattern. Each module owns the creation or access routine
//! that embodies its pattern and a `run` function that performs the example
//! invocations, returning what it built as a [`CmdResult`].
//!
//! Demonstrations never call each other's `run`, never print, and share
//! nothing but the [`Registry`] handed in through [`Context`].

use crate::catalog::{PatternEntry, PatternId};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::registry::Registry;
use serde::Serialize;

pub mod abstract_factory;
pub mod config;
pub mod constructor;
pub mod decorator;
pub mod facade;
pub mod factory;
pub mod flyweight;
pub mod iterator;
pub mod memento;
pub mod mixin;
pub mod module;
pub mod mvc;
pub mod mvp;
pub mod observer;
pub mod singleton;
pub mod state;
pub mod strategy;

/// What a demonstration is allowed to see.
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub config: &'a CatalogConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A named value a demonstration produced, kept in serialized form so
/// results from different patterns fit in one list.
#[derive(Debug, Clone, Serialize)]
pub struct Exhibit {
    pub label: String,
    pub value: serde_json::Value,
}

impl Exhibit {
    pub fn new<T: Serialize>(label: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            value: serde_json::to_value(value)?,
        })
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exhibits: Vec<Exhibit>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<&'static PatternEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub settings: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn for_pattern(pattern: PatternId) -> Self {
        Self {
            pattern: Some(pattern),
            ..Self::default()
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn exhibit<T: Serialize>(&mut self, label: impl Into<String>, value: &T) -> Result<()> {
        self.exhibits.push(Exhibit::new(label, value)?);
        Ok(())
    }

    pub fn with_entries(mut self, entries: Vec<&'static PatternEntry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_settings(mut self, settings: Vec<(String, String)>) -> Self {
        self.settings = settings;
        self
    }

    pub fn exhibit_value(&self, label: &str) -> Option<&serde_json::Value> {
        self.exhibits
            .iter()
            .find(|e| e.label == label)
            .map(|e| &e.value)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Context;
    use crate::config::CatalogConfig;
    use crate::registry::Registry;

    pub struct Fixture {
        pub registry: Registry,
        pub config: CatalogConfig,
    }

    impl Fixture {
        pub fn new() -> Self {
            Self {
                registry: Registry::new(),
                config: CatalogConfig::default(),
            }
        }

        pub fn ctx(&self) -> Context<'_> {
            Context {
                registry: &self.registry,
                config: &self.config,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhibits_are_looked_up_by_label() {
        let mut result = CmdResult::for_pattern(PatternId::Constructor);
        result.exhibit("answer", &42).unwrap();
        assert_eq!(result.exhibit_value("answer").unwrap(), 42);
        assert!(result.exhibit_value("missing").is_none());
    }

    #[test]
    fn empty_sections_are_not_serialized() {
        let result = CmdResult::for_pattern(PatternId::Mixin);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "pattern": "mixin" }));
    }
}
