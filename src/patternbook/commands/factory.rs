//! Category-keyed and threshold-keyed factories.
//!
//! Callers never build an [`Employee`] directly; they name a category (or pass
//! a threshold) and the factory picks the variant and its tag.
//!
//! The sales factory has two dispatch modes, see [`SalesDispatch`]. The
//! literal mode keeps the catalog's historical outcome, where the switch
//! compared a computed boolean against the raw threshold and so only the
//! default branch could ever match. The comparison mode is the intended
//! `threshold > cutoff` rule.

use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::config::{CatalogConfig, SalesDispatch};
use crate::error::{CatalogError, Result};
use crate::model::{Employee, Language, SalesLevel};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Frontend,
    Backend,
}

impl Category {
    pub fn language(&self) -> Language {
        match self {
            Category::Frontend => Language::Js,
            Category::Backend => Language::Php,
        }
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            other => Err(CatalogError::UnrecognizedCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DeveloperFactory;

impl DeveloperFactory {
    pub fn create_developer(&self, category: &str, name: &str) -> Result<Employee> {
        let category: Category = category.parse()?;
        tracing::debug!(?category, employee = name, "creating developer");
        Ok(Employee::developer(name, category.language()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SalesPersonFactory {
    dispatch: SalesDispatch,
    cutoff: i64,
}

impl Default for SalesPersonFactory {
    fn default() -> Self {
        Self::from_config(&CatalogConfig::default())
    }
}

impl SalesPersonFactory {
    pub fn new(dispatch: SalesDispatch, cutoff: i64) -> Self {
        Self { dispatch, cutoff }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.sales_dispatch, config.senior_cutoff)
    }

    pub fn create_sales_person(&self, threshold: i64, name: &str) -> Employee {
        let level = self.level_for(threshold);
        tracing::debug!(dispatch = %self.dispatch, threshold, %level, "creating sales person");
        Employee::sales_person(name, level)
    }

    pub fn level_for(&self, threshold: i64) -> SalesLevel {
        match self.dispatch {
            // No case label can equal the threshold, so the default branch wins.
            SalesDispatch::Literal => SalesLevel::Junior,
            SalesDispatch::Comparison => {
                if threshold > self.cutoff {
                    SalesLevel::Senior
                } else {
                    SalesLevel::Junior
                }
            }
        }
    }
}

pub fn run(ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Factory);
    let developers = DeveloperFactory;
    let sales = SalesPersonFactory::from_config(ctx.config);

    for (category, name) in [("frontend", "Alice"), ("backend", "Bob")] {
        let dev = developers.create_developer(category, name)?;
        result.add_message(CmdMessage::info(format!("{} => {}", category, dev)));
        result.exhibit(name, &dev)?;
    }

    if let Err(e) = developers.create_developer("mobile", "Mallory") {
        result.add_message(CmdMessage::warning(format!("mobile => {}", e)));
    }

    let carol = sales.create_sales_person(12, "Carol");
    result.add_message(CmdMessage::info(format!(
        "threshold 12 ({} dispatch) => {}",
        ctx.config.sales_dispatch, carol
    )));
    result.exhibit("Carol", &carol)?;

    Ok(result)
}
