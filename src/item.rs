//! Shopping list entries and the value types they are built from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Identifier of an item within the list.
///
/// Not guaranteed unique: under [`IdScheme::ListLength`] an id can be
/// issued again after a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    pub fn new(value: u32) -> Option<Self> {
        NonZeroU32::new(value).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Parse user-entered text. Surrounding whitespace is ignored; zero,
    /// negative and non-numeric text yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<NonZeroU32>().ok().map(Self)
    }

    /// Editor commit rule: anything unparsable becomes 1.
    pub fn parse_or_default(text: &str) -> Self {
        Self::parse(text).unwrap_or(Self::ONE)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: Quantity,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }
}

/// How ids are chosen for newly added items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdScheme {
    /// `id = items.len() + 1` at insertion time. Ids may repeat after
    /// deletions.
    #[default]
    ListLength,
    /// One more than the highest id ever issued in this session.
    Monotonic,
}
