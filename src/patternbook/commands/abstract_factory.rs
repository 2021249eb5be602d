use crate::catalog::PatternId;
use crate::commands::factory::{DeveloperFactory, SalesPersonFactory};
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::model::Employee;

/// Threshold every sales request is forwarded with.
pub const SALES_THRESHOLD: i64 = 12;

/// Picks a concrete factory from the department label. Only `"sales"` is
/// recognized; every other label goes to the developer factory as a
/// frontend request.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmployeeManufacturer {
    developers: DeveloperFactory,
    sales: SalesPersonFactory,
}

impl EmployeeManufacturer {
    pub fn new(developers: DeveloperFactory, sales: SalesPersonFactory) -> Self {
        Self { developers, sales }
    }

    pub fn manufacture(&self, department: &str, name: &str) -> Result<Employee> {
        match department {
            "sales" => Ok(self.sales.create_sales_person(SALES_THRESHOLD, name)),
            _ => self.developers.create_developer("frontend", name),
        }
    }
}

pub fn run(ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::AbstractFactory);
    let manufacturer =
        EmployeeManufacturer::new(DeveloperFactory, SalesPersonFactory::from_config(ctx.config));

    let sales_guy = manufacturer.manufacture("sales", "Bill")?;
    result.add_message(CmdMessage::info(format!("sales => {}", sales_guy)));
    result.exhibit("sales_guy", &sales_guy)?;

    let dev = manufacturer.manufacture("dev", "David")?;
    result.add_message(CmdMessage::info(format!("dev => {}", dev)));
    result.exhibit("dev", &dev)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::Fixture;
    use crate::config::SalesDispatch;
    use crate::model::{Developer, Language, SalesLevel, SalesPerson};

    #[test]
    fn sales_goes_to_sales_factory_as_junior() {
        let employee = EmployeeManufacturer::default()
            .manufacture("sales", "Bill")
            .unwrap();
        assert_eq!(
            employee,
            Employee::SalesPerson(SalesPerson {
                name: "Bill".into(),
                level: SalesLevel::Junior,
            })
        );
    }

    #[test]
    fn other_departments_get_frontend_developers() {
        for department in ["dev", "Sales", "", "marketing"] {
            let employee = EmployeeManufacturer::default()
                .manufacture(department, "David")
                .unwrap();
            assert_eq!(
                employee,
                Employee::Developer(Developer {
                    name: "David".into(),
                    language: Language::Js,
                })
            );
        }
    }

    #[test]
    fn comparison_dispatch_makes_bill_senior() {
        let manufacturer = EmployeeManufacturer::new(
            DeveloperFactory,
            SalesPersonFactory::new(SalesDispatch::Comparison, 10),
        );
        let employee = manufacturer.manufacture("sales", "Bill").unwrap();
        assert!(matches!(
            employee,
            Employee::SalesPerson(SalesPerson { level: SalesLevel::Senior, .. })
        ));
    }

    #[test]
    fn run_exhibits_bill_and_david() {
        let fixture = Fixture::new();
        let result = run(&fixture.ctx()).unwrap();

        let bill = result.exhibit_value("sales_guy").unwrap();
        assert_eq!(bill["name"], "Bill");
        assert_eq!(bill["level"], "junior");

        let david = result.exhibit_value("dev").unwrap();
        assert_eq!(david["name"], "David");
        assert_eq!(david["language"], "JS");
    }
}
