use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;

pub trait Coffee {
    fn cost_cents(&self) -> u32;
    fn description(&self) -> String;
}

pub struct Espresso;

impl Coffee for Espresso {
    fn cost_cents(&self) -> u32 {
        250
    }

    fn description(&self) -> String {
        "espresso".to_string()
    }
}

pub struct WithMilk<C>(pub C);

impl<C: Coffee> Coffee for WithMilk<C> {
    fn cost_cents(&self) -> u32 {
        self.0.cost_cents() + 50
    }

    fn description(&self) -> String {
        format!("{} with milk", self.0.description())
    }
}

pub struct WithSugar<C>(pub C);

impl<C: Coffee> Coffee for WithSugar<C> {
    fn cost_cents(&self) -> u32 {
        self.0.cost_cents() + 20
    }

    fn description(&self) -> String {
        format!("{} with sugar", self.0.description())
    }
}

#[derive(Debug, Serialize)]
struct Order {
    description: String,
    cost_cents: u32,
}

impl Order {
    fn of(coffee: &dyn Coffee) -> Self {
        Self {
            description: coffee.description(),
            cost_cents: coffee.cost_cents(),
        }
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Decorator);

    let plain = Espresso;
    let dressed = WithSugar(WithMilk(Espresso));
    let orders: [(&str, &dyn Coffee); 2] = [("plain", &plain), ("dressed", &dressed)];
    for (label, coffee) in orders {
        let order = Order::of(coffee);
        result.add_message(CmdMessage::info(format!(
            "{}: {} cents",
            order.description, order.cost_cents
        )));
        result.exhibit(label, &order)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_stack() {
        let coffee = WithMilk(WithSugar(WithMilk(Espresso)));
        assert_eq!(coffee.cost_cents(), 250 + 50 + 20 + 50);
        assert_eq!(
            coffee.description(),
            "espresso with milk with sugar with milk"
        );
    }

    #[test]
    fn run_prices_both_orders() {
        let fixture = crate::commands::test_support::Fixture::new();
        let result = run(&fixture.ctx()).unwrap();
        assert_eq!(result.exhibit_value("plain").unwrap()["cost_cents"], 250);
        assert_eq!(result.exhibit_value("dressed").unwrap()["cost_cents"], 320);
    }
}
