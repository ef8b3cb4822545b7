use crate::domain::payment::PaymentOutcome;
use crate::domain::ports::GatewayFactoryBox;
use rust_decimal::Decimal;

pub const REJECTED_MESSAGE: &str = "Card validation failed.";

/// Runs payments through whichever gateway family it was built with.
///
/// The service owns nothing but the factory, so every call is independent and
/// all three components of a call always come from the same gateway.
pub struct PaymentService {
    factory: GatewayFactoryBox,
}

impl PaymentService {
    /// Creates a new `PaymentService` bound to one gateway factory.
    ///
    /// Switching gateways means building a new service.
    pub fn new(factory: GatewayFactoryBox) -> Self {
        Self { factory }
    }

    /// Name of the installed gateway.
    pub fn gateway(&self) -> &'static str {
        self.factory.name()
    }

    /// Validates the card and, only if it is accepted, charges it once.
    ///
    /// A rejected card is logged and reported as [`PaymentOutcome::Rejected`];
    /// the processor is never invoked on that path.
    pub fn process_payment(&self, amount: Decimal, card_number: &str) -> PaymentOutcome {
        let validator = self.factory.create_validator();
        let processor = self.factory.create_processor();
        let logger = self.factory.create_logger();

        if !validator.validate_card(card_number) {
            logger.log(REJECTED_MESSAGE);
            return PaymentOutcome::Rejected;
        }

        let transaction_id = processor.process_transaction(amount, card_number);
        logger.log(&format!(
            "Transaction processed successfully: {transaction_id}"
        ));
        PaymentOutcome::Approved { transaction_id }
    }
}
