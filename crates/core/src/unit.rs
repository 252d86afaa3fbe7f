use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed vocabulary of quantity units recognized next to a number
/// in an item description. The token as printed on the receipt is kept,
/// so `ea` and `each` stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Lb,
    Oz,
    Kg,
    G,
    Ea,
    Each,
    Bag,
    Doz,
    Ct,
}

impl Unit {
    pub fn token(self) -> &'static str {
        match self {
            Unit::Lb => "lb",
            Unit::Oz => "oz",
            Unit::Kg => "kg",
            Unit::G => "g",
            Unit::Ea => "ea",
            Unit::Each => "each",
            Unit::Bag => "bag",
            Unit::Doz => "doz",
            Unit::Ct => "ct",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lb" => Ok(Unit::Lb),
            "oz" => Ok(Unit::Oz),
            "kg" => Ok(Unit::Kg),
            "g" => Ok(Unit::G),
            "ea" => Ok(Unit::Ea),
            "each" => Ok(Unit::Each),
            "bag" => Ok(Unit::Bag),
            "doz" => Ok(Unit::Doz),
            "ct" => Ok(Unit::Ct),
            other => Err(format!("Unknown unit: '{other}'")),
        }
    }
}
