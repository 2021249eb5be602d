use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;

pub trait Shipping {
    fn name(&self) -> &'static str;
    fn cost_cents(&self, weight_grams: u32) -> u32;
}

pub struct Flat;
pub struct PerKilo(pub u32);
pub struct FreeOver {
    pub threshold_grams: u32,
    pub otherwise: u32,
}

impl Shipping for Flat {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn cost_cents(&self, _weight_grams: u32) -> u32 {
        500
    }
}

impl Shipping for PerKilo {
    fn name(&self) -> &'static str {
        "per-kilo"
    }

    fn cost_cents(&self, weight_grams: u32) -> u32 {
        // Started kilos count as whole ones
        weight_grams.div_ceil(1000) * self.0
    }
}

impl Shipping for FreeOver {
    fn name(&self) -> &'static str {
        "free-over"
    }

    fn cost_cents(&self, weight_grams: u32) -> u32 {
        if weight_grams > self.threshold_grams {
            0
        } else {
            self.otherwise
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Quote {
    pub strategy: &'static str,
    pub cost_cents: u32,
}

/// Prices a parcel with whatever strategy it is given.
pub fn quote(strategy: &dyn Shipping, weight_grams: u32) -> Quote {
    Quote {
        strategy: strategy.name(),
        cost_cents: strategy.cost_cents(weight_grams),
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Strategy);
    let strategies: [&dyn Shipping; 3] = [
        &Flat,
        &PerKilo(300),
        &FreeOver {
            threshold_grams: 2000,
            otherwise: 700,
        },
    ];

    let quotes: Vec<Quote> = strategies.iter().map(|s| quote(*s, 2500)).collect();
    for q in &quotes {
        result.add_message(CmdMessage::info(format!(
            "2500g via {}: {} cents",
            q.strategy, q.cost_cents
        )));
    }
    result.exhibit("quotes", &quotes)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_parcel_different_prices() {
        assert_eq!(quote(&Flat, 2500).cost_cents, 500);
        assert_eq!(quote(&PerKilo(300), 2500).cost_cents, 900);
        assert_eq!(quote(&PerKilo(300), 2000).cost_cents, 600);
        let free = FreeOver {
            threshold_grams: 2000,
            otherwise: 700,
        };
        assert_eq!(quote(&free, 2500).cost_cents, 0);
        assert_eq!(quote(&free, 2000).cost_cents, 700);
    }
}
