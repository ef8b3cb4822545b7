use crate::domain::payment::{Gateway, PaymentRequest};
use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw shape of one CSV row before domain checks.
///
/// The amount is parsed from its text form so `150.00` keeps its scale and
/// long values are not rounded through a float.
#[derive(Debug, Deserialize)]
struct PaymentRow {
    gateway: Gateway,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    card_number: String,
}

/// Turns a `gateway, amount, card_number` CSV source into validated
/// [`PaymentRequest`]s.
///
/// Every bad row yields its own error, tagged with the source line, and the
/// stream carries on with the next row.
pub struct PaymentRequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl PaymentRequestReader<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(File::open(path)?))
    }
}

impl<R: Read> PaymentRequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Reads the header, then lazily validates one request per record.
    pub fn requests(mut self) -> Result<impl Iterator<Item = Result<PaymentRequest>>> {
        let headers = self.reader.headers()?.clone();
        Ok(self
            .reader
            .into_records()
            .map(move |record| -> Result<PaymentRequest> {
                let record = record?;
                let line = record.position().map_or(0, |p| p.line());
                let row: PaymentRow = record.deserialize(Some(&headers))?;
                PaymentRequest::new(row.gateway, row.amount, row.card_number).map_err(|e| {
                    match e {
                        Error::ValidationError(reason) => Error::InvalidRow { line, reason },
                        other => other,
                    }
                })
            }))
    }
}
