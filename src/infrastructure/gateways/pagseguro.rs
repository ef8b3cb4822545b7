use super::{emit_log, next_transaction_id};
use crate::domain::payment::TransactionId;
use crate::domain::ports::{
    CardValidator, LoggerBox, PaymentGatewayFactory, PaymentLogger, PaymentProcessor,
    ProcessorBox, ValidatorBox,
};
use rust_decimal::Decimal;
use tracing::debug;

const NAME: &str = "PagSeguro";
const CARD_LENGTH: usize = 16;
const ID_PREFIX: &str = "PAGSEG";

/// Accepts any card number with exactly 16 characters.
#[derive(Debug)]
pub struct PagSeguroValidator {
    card_length: usize,
}

impl Default for PagSeguroValidator {
    fn default() -> Self {
        Self {
            card_length: CARD_LENGTH,
        }
    }
}

impl CardValidator for PagSeguroValidator {
    fn validate_card(&self, card_number: &str) -> bool {
        debug!(gateway = NAME, "validating card");
        card_number.chars().count() == self.card_length
    }
}

#[derive(Debug)]
pub struct PagSeguroProcessor {
    id_prefix: &'static str,
}

impl Default for PagSeguroProcessor {
    fn default() -> Self {
        Self {
            id_prefix: ID_PREFIX,
        }
    }
}

impl PaymentProcessor for PagSeguroProcessor {
    fn process_transaction(&self, amount: Decimal, _card_number: &str) -> TransactionId {
        debug!(gateway = NAME, %amount, "processing R$ {amount}");
        next_transaction_id(self.id_prefix)
    }
}

#[derive(Debug)]
pub struct PagSeguroLogger {
    gateway: &'static str,
}

impl Default for PagSeguroLogger {
    fn default() -> Self {
        Self { gateway: NAME }
    }
}

impl PaymentLogger for PagSeguroLogger {
    fn log(&self, message: &str) {
        emit_log(self.gateway, message);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PagSeguroFactory;

impl PaymentGatewayFactory for PagSeguroFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn create_validator(&self) -> ValidatorBox {
        Box::new(PagSeguroValidator::default())
    }

    fn create_processor(&self) -> ProcessorBox {
        Box::new(PagSeguroProcessor::default())
    }

    fn create_logger(&self) -> LoggerBox {
        Box::new(PagSeguroLogger::default())
    }
}
