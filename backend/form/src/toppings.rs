//! # Toppings
//!
//! Static catalog. Ids are stable and shared with whatever consumes the payload,
//! so new toppings only ever get appended.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToppingId(pub u32);

impl Display for ToppingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: ToppingId,
    pub label: &'static str,
}

const CATALOG: [Topping; 5] = [
    Topping { id: ToppingId(1), label: "Pepperoni" },
    Topping { id: ToppingId(2), label: "Green Peppers" },
    Topping { id: ToppingId(3), label: "Pineapple" },
    Topping { id: ToppingId(4), label: "Mushrooms" },
    Topping { id: ToppingId(5), label: "Ham" },
];

/// Catalog in display order.
pub fn catalog() -> &'static [Topping] {
    &CATALOG
}

pub fn lookup(id: ToppingId) -> Option<&'static Topping> {
    CATALOG.iter().find(|topping| topping.id == id)
}

pub fn is_known(id: ToppingId) -> bool {
    lookup(id).is_some()
}
