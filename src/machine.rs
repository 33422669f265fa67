use crate::catalog::{Catalog, Item};
use crate::error::VendError;
use crate::selection::Selection;
use rust_decimal::Decimal;

/// A single retail dispenser: a catalog of sellable items plus the money
/// deposited so far.
///
/// The machine is the only writer of item quantities. Every `vend` call
/// either completes fully or leaves the machine untouched; the `&mut self`
/// receivers serialize the check-then-mutate sequence, so a multi-caller
/// deployment only needs to wrap the machine in its own lock.
pub struct Machine {
    catalog: Catalog,
    balance: Decimal,
}

impl Machine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_balance(catalog, Decimal::ZERO)
    }

    /// Creates a machine that already holds a deposited balance.
    pub fn with_balance(catalog: Catalog, balance: Decimal) -> Self {
        Self { catalog, balance }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Current price and stock for a selection, for display purposes.
    pub fn item_for(&self, selection: Selection) -> Option<&Item> {
        self.catalog.lookup(selection)
    }

    /// Adds money to the deposited balance. Negative amounts are rejected.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), VendError> {
        if amount < Decimal::ZERO {
            return Err(VendError::NegativeDeposit);
        }
        self.balance += amount;
        Ok(())
    }

    /// Attempts to dispense `quantity` units of `selection` against the
    /// current stock and balance.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure:
    /// quantity validity, selection lookup, stock, funds. No state changes
    /// until every check has passed, so a failed call of any kind leaves
    /// balance and catalog exactly as they were.
    pub fn vend(&mut self, selection: Selection, quantity: u32) -> Result<(), VendError> {
        if quantity == 0 {
            return Err(VendError::InvalidQuantity);
        }

        let item = *self
            .catalog
            .lookup(selection)
            .ok_or(VendError::InvalidSelection)?;

        if item.quantity < quantity {
            return Err(VendError::OutOfStock);
        }

        let total = item.price * Decimal::from(quantity);
        if self.balance < total {
            return Err(VendError::InsufficientFunds {
                required: total - self.balance,
            });
        }

        self.balance -= total;
        self.catalog.update(
            selection,
            Item {
                price: item.price,
                quantity: item.quantity - quantity,
            },
        );
        Ok(())
    }
}
