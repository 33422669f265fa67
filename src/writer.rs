use crate::machine::Machine;
use crate::selection::Selection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StateRow {
    selection: Selection,
    price: Decimal,
    quantity: u32,
}

/// Writes a machine's remaining inventory as CSV, in panel order.
pub struct StateWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StateWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_state(&mut self, machine: &Machine) -> Result<(), csv::Error> {
        for selection in Selection::ALL {
            if let Some(item) = machine.item_for(selection) {
                self.writer.serialize(StateRow {
                    selection,
                    price: item.price,
                    quantity: item.quantity,
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
