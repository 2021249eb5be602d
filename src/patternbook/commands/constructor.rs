use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::model::{Car, Suv};

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Constructor);

    let civic = Car::new(4, "v6", "red");
    result.add_message(CmdMessage::info(format!(
        "civic: {} doors, {} engine, {}",
        civic.doors, civic.engine, civic.color
    )));
    result.exhibit("civic", &civic)?;

    let cx5 = Suv::new(4, "v8", "black");
    result.add_message(CmdMessage::info(format!(
        "cx5: {} doors, {} engine, {}, {} wheels",
        cx5.doors, cx5.engine, cx5.color, cx5.wheels
    )));
    result.exhibit("cx5", &cx5)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::model::SUV_WHEELS;

    #[test]
    fn car_keeps_arguments_verbatim() {
        for (doors, engine, color) in [(2, "v4", "blue"), (0, "", ""), (9, "electric", "matte black")] {
            let car = Car::new(doors, engine, color);
            assert_eq!(car.doors, doors);
            assert_eq!(car.engine, engine);
            assert_eq!(car.color, color);
        }
    }

    #[test]
    fn suv_adds_fixed_wheels_over_base_fields() {
        for doors in [2, 4, 5] {
            let suv = Suv::new(doors, "v8", "black");
            assert_eq!(suv.car, Car::new(doors, "v8", "black"));
            assert_eq!(suv.wheels, SUV_WHEELS);
        }
    }

    #[test]
    fn run_exhibits_both_vehicles() {
        let fixture = Fixture::new();
        let result = run(&fixture.ctx()).unwrap();

        assert_eq!(result.exhibit_value("civic").unwrap()["engine"], "v6");
        let cx5 = result.exhibit_value("cx5").unwrap();
        assert_eq!(cx5["color"], "black");
        assert_eq!(cx5["wheels"], 4);
    }
}
