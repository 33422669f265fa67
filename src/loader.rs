use crate::catalog::{Catalog, Item};
use crate::error::CatalogError;
use crate::selection::Selection;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct InventoryRow {
    selection: Selection,
    price: Decimal,
    quantity: u32,
}

/// Reads an inventory CSV (`selection,price,quantity`) into a catalog.
///
/// The whole inventory is validated up front: any unparsable row, negative
/// price, duplicate selection, or empty inventory fails the load, so a
/// machine is never constructed from partial stock data.
pub struct InventoryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InventoryReader<R> {
    /// Creates a new `InventoryReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        let mut items = HashMap::new();
        for row in self.reader.into_deserialize::<InventoryRow>() {
            let row = row.map_err(|e| CatalogError::MalformedData(e.to_string()))?;
            if row.price < Decimal::ZERO {
                return Err(CatalogError::MalformedData(format!(
                    "negative price for {:?}",
                    row.selection
                )));
            }
            let item = Item {
                price: row.price,
                quantity: row.quantity,
            };
            if items.insert(row.selection, item).is_some() {
                return Err(CatalogError::MalformedData(format!(
                    "duplicate selection {:?}",
                    row.selection
                )));
            }
        }
        if items.is_empty() {
            return Err(CatalogError::MalformedData(
                "inventory contains no items".to_string(),
            ));
        }
        Ok(Catalog::new(items))
    }
}

/// Loads the catalog backing a machine from an inventory file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|_| CatalogError::ResourceNotFound(path.to_path_buf()))?;
    InventoryReader::new(file).into_catalog()
}
