//! CSV export of the inventory.

use std::io;
use std::iter::FusedIterator;

use crate::item::Item;

/// Column names of the export, in order.
pub const CSV_HEADER: [&str; 4] = ["id", "name", "quantity", "unit price"];

/// One row of the export (header or item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord([String; 4]);

impl CsvRecord {
    pub fn header() -> Self {
        Self(CSV_HEADER.map(String::from))
    }

    /// Numbers in decimal; the unit price with six fractional digits.
    pub fn from_item(item: &Item) -> Self {
        Self([
            item.id.to_string(),
            item.name.to_string(),
            item.quantity.to_string(),
            format!("{:.6}", item.unit_price),
        ])
    }

    pub fn fields(&self) -> &[String; 4] {
        &self.0
    }

    /// Comma-joined line without a terminator.
    pub fn to_line(&self) -> String {
        self.0.join(",")
    }
}

/// Lazy sequence of export records: the header, then one record per item in
/// insertion order.
///
/// Built from a snapshot, so later store mutations never show up in an export
/// that was already taken.
#[derive(Debug)]
pub struct CsvExport {
    header_pending: bool,
    items: std::vec::IntoIter<Item>,
}

impl CsvExport {
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            header_pending: true,
            items: items.into_iter(),
        }
    }

    /// Serialize every remaining record with a `csv` writer.
    pub fn write_to<W: io::Write>(self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);
        for record in self {
            wtr.write_record(record.fields())?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn into_bytes(self) -> Result<Vec<u8>, csv::Error> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(buf)
    }
}

impl Iterator for CsvExport {
    type Item = CsvRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_pending {
            self.header_pending = false;
            return Some(CsvRecord::header());
        }
        self.items.next().map(|item| CsvRecord::from_item(&item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len() + usize::from(self.header_pending);
        (n, Some(n))
    }
}

impl ExactSizeIterator for CsvExport {}

impl FusedIterator for CsvExport {}
