use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Soda,
    DietSoda,
    Chips,
    Cookie,
    Sandwich,
    Wrap,
    CandyBar,
    PopTart,
    Water,
    FruitJuice,
    SportsDrink,
    Gum,
}

impl Selection {
    /// Every selection a machine can stock, in panel order.
    pub const ALL: [Selection; 12] = [
        Selection::Soda,
        Selection::DietSoda,
        Selection::Chips,
        Selection::Cookie,
        Selection::Sandwich,
        Selection::Wrap,
        Selection::CandyBar,
        Selection::PopTart,
        Selection::Water,
        Selection::FruitJuice,
        Selection::SportsDrink,
        Selection::Gum,
    ];
}
