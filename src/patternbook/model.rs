use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed wheel count every [`Suv`] is built with.
pub const SUV_WHEELS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub doors: u32,
    pub engine: String,
    pub color: String,
}

impl Car {
    pub fn new(doors: u32, engine: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            doors,
            engine: engine.into(),
            color: color.into(),
        }
    }
}

/// A [`Car`] specialization: the base fields come from `Car::new`, then the
/// wheel count is set on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suv {
    #[serde(flatten)]
    pub car: Car,
    pub wheels: u32,
}

impl Suv {
    pub fn new(doors: u32, engine: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            car: Car::new(doors, engine, color),
            wheels: SUV_WHEELS,
        }
    }
}

impl std::ops::Deref for Suv {
    type Target = Car;

    fn deref(&self) -> &Car {
        &self.car
    }
}

/// The singleton-held entity. `id` is assigned once at construction so two
/// handles can be compared by identity in rendered output.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    pub id: Uuid,
    pub rooms: u32,
}

impl House {
    pub(crate) fn new(rooms: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            rooms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "JS")]
    Js,
    #[serde(rename = "PHP")]
    Php,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Js => write!(f, "JS"),
            Language::Php => write!(f, "PHP"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesLevel {
    Senior,
    Junior,
}

impl fmt::Display for SalesLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SalesLevel::Senior => write!(f, "senior"),
            SalesLevel::Junior => write!(f, "junior"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesPerson {
    pub name: String,
    pub level: SalesLevel,
}

/// Role entities. Constructors are crate-private: callers go through the
/// factories in `commands::factory`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Employee {
    Developer(Developer),
    SalesPerson(SalesPerson),
}

impl Employee {
    pub(crate) fn developer(name: impl Into<String>, language: Language) -> Self {
        Employee::Developer(Developer {
            name: name.into(),
            language,
        })
    }

    pub(crate) fn sales_person(name: impl Into<String>, level: SalesLevel) -> Self {
        Employee::SalesPerson(SalesPerson {
            name: name.into(),
            level,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Employee::Developer(d) => &d.name,
            Employee::SalesPerson(s) => &s.name,
        }
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Employee::Developer(d) => write!(f, "{} ({} developer)", d.name, d.language),
            Employee::SalesPerson(s) => write!(f, "{} ({} sales)", s.name, s.level),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    pub brand: String,
    pub color: String,
}

impl Shoe {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suv_derefs_to_base_car() {
        let suv = Suv::new(4, "v8", "black");
        assert_eq!(suv.engine, "v8");
        assert_eq!(suv.wheels, SUV_WHEELS);
    }

    #[test]
    fn employee_serializes_with_role_tag() {
        let dev = Employee::developer("David", Language::Js);
        let json = serde_json::to_value(&dev).unwrap();
        assert_eq!(json["role"], "developer");
        assert_eq!(json["language"], "JS");

        let sales = Employee::sales_person("Bill", SalesLevel::Junior);
        let json = serde_json::to_value(&sales).unwrap();
        assert_eq!(json["role"], "sales_person");
        assert_eq!(json["level"], "junior");
    }

    #[test]
    fn suv_serializes_flat() {
        let json = serde_json::to_value(Suv::new(4, "v8", "black")).unwrap();
        assert_eq!(json["doors"], 4);
        assert_eq!(json["wheels"], 4);
    }
}
