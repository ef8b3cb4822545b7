use super::payment::TransactionId;
use rust_decimal::Decimal;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait CardValidator: Send + Sync {
    fn validate_card(&self, card_number: &str) -> bool;
}

#[cfg_attr(test, automock)]
pub trait PaymentProcessor: Send + Sync {
    fn process_transaction(&self, amount: Decimal, card_number: &str) -> TransactionId;
}

#[cfg_attr(test, automock)]
pub trait PaymentLogger: Send + Sync {
    fn log(&self, message: &str);
}

pub type ValidatorBox = Box<dyn CardValidator>;
pub type ProcessorBox = Box<dyn PaymentProcessor>;
pub type LoggerBox = Box<dyn PaymentLogger>;

/// Produces the validator, processor and logger of one payment gateway.
///
/// Every implementation must hand out components of its own variant only, so
/// that a caller holding a single factory can never mix rules from two
/// gateways. Each `create_*` call returns a freshly constructed instance.
#[cfg_attr(test, automock)]
pub trait PaymentGatewayFactory: Send + Sync {
    fn name(&self) -> &'static str;
    fn create_validator(&self) -> ValidatorBox;
    fn create_processor(&self) -> ProcessorBox;
    fn create_logger(&self) -> LoggerBox;
}

pub type GatewayFactoryBox = Box<dyn PaymentGatewayFactory>;
