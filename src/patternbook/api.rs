//! # API Facade
//!
//! The API layer is a **thin facade** over the demonstrations. It is the
//! single entry point for running patterns, browsing the catalog and using
//! the creation routines directly, whatever UI sits on top.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** a [`PatternId`] to the matching `commands::<pattern>::run`
//! - **Owns** the [`Registry`] and [`CatalogConfig`] the demonstrations see
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no pattern logic of its own.
//!
//! ## Registry Ownership
//!
//! Each `CatalogApi` owns its own registry, so two API values never share a
//! singleton. Running the singleton demonstration twice on the same API
//! keeps returning the house from the first run.

use crate::catalog::{self, Family, PatternId};
use crate::commands::{self, abstract_factory, factory, Context};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::model::{Car, Employee, House, Shoe, Suv};
use crate::registry::Registry;
use std::path::PathBuf;
use std::sync::Arc;

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, Exhibit, MessageLevel};

pub struct CatalogApi {
    registry: Registry,
    config: CatalogConfig,
    config_dir: Option<PathBuf>,
}

impl Default for CatalogApi {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl CatalogApi {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
            config_dir: None,
        }
    }

    /// Loads config from `dir` and remembers it as the place `config` writes to.
    pub fn from_config_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        let config = CatalogConfig::load(&dir)?;
        Ok(Self {
            registry: Registry::new(),
            config,
            config_dir: Some(dir),
        })
    }

    pub fn current_config(&self) -> &CatalogConfig {
        &self.config
    }

    fn ctx(&self) -> Context<'_> {
        Context {
            registry: &self.registry,
            config: &self.config,
        }
    }

    pub fn list_patterns(&self, family: Option<Family>) -> CmdResult {
        CmdResult::default().with_entries(catalog::entries(family).collect())
    }

    pub fn show_pattern(&self, id: PatternId) -> CmdResult {
        let mut result = CmdResult::for_pattern(id).with_entries(vec![id.entry()]);
        result.add_message(CmdMessage::info(id.entry().notes));
        result
    }

    pub fn run_pattern(&self, id: PatternId) -> Result<CmdResult> {
        tracing::info!(pattern = %id, "running demonstration");
        let ctx = self.ctx();
        match id {
            PatternId::Constructor => commands::constructor::run(&ctx),
            PatternId::Singleton => commands::singleton::run(&ctx),
            PatternId::Factory => commands::factory::run(&ctx),
            PatternId::AbstractFactory => commands::abstract_factory::run(&ctx),
            PatternId::Module => commands::module::run(&ctx),
            PatternId::Mixin => commands::mixin::run(&ctx),
            PatternId::Facade => commands::facade::run(&ctx),
            PatternId::Flyweight => commands::flyweight::run(&ctx),
            PatternId::Decorator => commands::decorator::run(&ctx),
            PatternId::Mvc => commands::mvc::run(&ctx),
            PatternId::Mvp => commands::mvp::run(&ctx),
            PatternId::Observer => commands::observer::run(&ctx),
            PatternId::State => commands::state::run(&ctx),
            PatternId::Iterator => commands::iterator::run(&ctx),
            PatternId::Strategy => commands::strategy::run(&ctx),
            PatternId::Memento => commands::memento::run(&ctx),
        }
    }

    pub fn run_patterns(&self, ids: &[PatternId]) -> Result<Vec<CmdResult>> {
        ids.iter().map(|id| self.run_pattern(*id)).collect()
    }

    /// Runs every demonstration in catalog order.
    pub fn run_all(&self) -> Result<Vec<CmdResult>> {
        let ids: Vec<PatternId> = catalog::entries(None).map(|e| e.id).collect();
        self.run_patterns(&ids)
    }

    pub fn car(&self, doors: u32, engine: &str, color: &str) -> Car {
        Car::new(doors, engine, color)
    }

    pub fn suv(&self, doors: u32, engine: &str, color: &str) -> Suv {
        Suv::new(doors, engine, color)
    }

    /// Singleton access; `rooms` is discarded once a house is held.
    pub fn house(&self, rooms: u32) -> Arc<House> {
        self.registry.house(rooms)
    }

    pub fn developer(&self, category: &str, name: &str) -> Result<Employee> {
        factory::DeveloperFactory.create_developer(category, name)
    }

    pub fn sales_person(&self, threshold: i64, name: &str) -> Employee {
        factory::SalesPersonFactory::from_config(&self.config).create_sales_person(threshold, name)
    }

    pub fn employee(&self, department: &str, name: &str) -> Result<Employee> {
        abstract_factory::EmployeeManufacturer::new(
            factory::DeveloperFactory,
            factory::SalesPersonFactory::from_config(&self.config),
        )
        .manufacture(department, name)
    }

    pub fn aftersale(&self, shoe: &Shoe) -> String {
        use crate::commands::mixin::Aftersale;
        shoe.apply_aftersale()
    }

    /// Shows or updates configuration. Updates are written to the config
    /// directory and take effect for later calls on this API.
    pub fn config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => crate::config::config_dir()?,
        };
        let (config, result) = commands::config::run(&dir, action)?;
        self.config = config;
        Ok(result)
    }
}
