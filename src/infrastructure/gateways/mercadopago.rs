use super::{emit_log, next_transaction_id};
use crate::domain::payment::TransactionId;
use crate::domain::ports::{
    CardValidator, LoggerBox, PaymentGatewayFactory, PaymentLogger, PaymentProcessor,
    ProcessorBox, ValidatorBox,
};
use rust_decimal::Decimal;
use tracing::debug;

const NAME: &str = "MercadoPago";
const CARD_LENGTH: usize = 16;
const CARD_PREFIX: char = '5';
const ID_PREFIX: &str = "MP";

/// Accepts 16-character card numbers starting with `5`.
///
/// Strictly narrower than the PagSeguro rule: every number accepted here is
/// also accepted there.
#[derive(Debug)]
pub struct MercadoPagoValidator {
    card_length: usize,
    required_prefix: char,
}

impl Default for MercadoPagoValidator {
    fn default() -> Self {
        Self {
            card_length: CARD_LENGTH,
            required_prefix: CARD_PREFIX,
        }
    }
}

impl CardValidator for MercadoPagoValidator {
    fn validate_card(&self, card_number: &str) -> bool {
        debug!(gateway = NAME, "validating card");
        card_number.chars().count() == self.card_length
            && card_number.starts_with(self.required_prefix)
    }
}

#[derive(Debug)]
pub struct MercadoPagoProcessor {
    id_prefix: &'static str,
}

impl Default for MercadoPagoProcessor {
    fn default() -> Self {
        Self {
            id_prefix: ID_PREFIX,
        }
    }
}

impl PaymentProcessor for MercadoPagoProcessor {
    fn process_transaction(&self, amount: Decimal, _card_number: &str) -> TransactionId {
        debug!(gateway = NAME, %amount, "processing R$ {amount}");
        next_transaction_id(self.id_prefix)
    }
}

#[derive(Debug)]
pub struct MercadoPagoLogger {
    gateway: &'static str,
}

impl Default for MercadoPagoLogger {
    fn default() -> Self {
        Self { gateway: NAME }
    }
}

impl PaymentLogger for MercadoPagoLogger {
    fn log(&self, message: &str) {
        emit_log(self.gateway, message);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MercadoPagoFactory;

impl PaymentGatewayFactory for MercadoPagoFactory {
    fn name(&self) -> &'static str {
        NAME
    }

    fn create_validator(&self) -> ValidatorBox {
        Box::new(MercadoPagoValidator::default())
    }

    fn create_processor(&self) -> ProcessorBox {
        Box::new(MercadoPagoProcessor::default())
    }

    fn create_logger(&self) -> LoggerBox {
        Box::new(MercadoPagoLogger::default())
    }
}
