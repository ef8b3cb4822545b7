#![allow(dead_code)]

use paykit::TransactionId;
use paykit::domain::ports::{
    CardValidator, LoggerBox, PaymentGatewayFactory, PaymentLogger, PaymentProcessor,
    ProcessorBox, ValidatorBox,
};
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// What a `SpyFactory` and the components it handed out have been asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub validators_created: usize,
    pub processors_created: usize,
    pub loggers_created: usize,
    pub validations: usize,
    pub processed: Vec<(Decimal, String)>,
    pub messages: Vec<String>,
}

/// A gateway family whose validator returns a fixed verdict and which records
/// every interaction.
pub struct SpyFactory {
    accept: bool,
    calls: Arc<Mutex<Calls>>,
}

impl SpyFactory {
    pub fn new(accept: bool) -> (Self, Arc<Mutex<Calls>>) {
        let calls = Arc::new(Mutex::new(Calls::default()));
        (
            Self {
                accept,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

struct SpyValidator {
    accept: bool,
    calls: Arc<Mutex<Calls>>,
}

impl CardValidator for SpyValidator {
    fn validate_card(&self, _card_number: &str) -> bool {
        self.calls.lock().unwrap().validations += 1;
        self.accept
    }
}

struct SpyProcessor {
    calls: Arc<Mutex<Calls>>,
}

impl PaymentProcessor for SpyProcessor {
    fn process_transaction(&self, amount: Decimal, card_number: &str) -> TransactionId {
        let mut calls = self.calls.lock().unwrap();
        calls.processed.push((amount, card_number.to_string()));
        TransactionId::new(format!("SPY-{:08}", calls.processed.len()))
    }
}

struct SpyLogger {
    calls: Arc<Mutex<Calls>>,
}

impl PaymentLogger for SpyLogger {
    fn log(&self, message: &str) {
        self.calls.lock().unwrap().messages.push(message.to_string());
    }
}

impl PaymentGatewayFactory for SpyFactory {
    fn name(&self) -> &'static str {
        "Spy"
    }

    fn create_validator(&self) -> ValidatorBox {
        self.calls.lock().unwrap().validators_created += 1;
        Box::new(SpyValidator {
            accept: self.accept,
            calls: self.calls.clone(),
        })
    }

    fn create_processor(&self) -> ProcessorBox {
        self.calls.lock().unwrap().processors_created += 1;
        Box::new(SpyProcessor {
            calls: self.calls.clone(),
        })
    }

    fn create_logger(&self) -> LoggerBox {
        self.calls.lock().unwrap().loggers_created += 1;
        Box::new(SpyLogger {
            calls: self.calls.clone(),
        })
    }
}

/// Writes `gateway, amount, card_number` rows to a temporary CSV file.
pub fn payments_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "gateway, amount, card_number").unwrap();
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
    file
}
