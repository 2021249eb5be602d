//! Behavior attached to [`Shoe`] after its definition.
//!
//! `Shoe` lives in `model.rs` and knows nothing about aftersales. The trait
//! below is implemented for it here, so every shoe, existing or new, gains
//! `apply_aftersale` once this module is in scope.

use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::model::Shoe;

pub trait Aftersale {
    fn apply_aftersale(&self) -> String;
}

impl Aftersale for Shoe {
    fn apply_aftersale(&self) -> String {
        format!("An aftersale has been applied for a shoe from {}", self.brand)
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Mixin);

    let airforce = Shoe::new("nike", "white");
    result.add_message(CmdMessage::info(airforce.apply_aftersale()));
    result.exhibit("airforce", &airforce)?;

    Ok(result)
}
