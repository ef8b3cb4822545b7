use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

/// The payment gateways a caller can select.
///
/// Adding a gateway means adding a variant here and a factory under
/// `infrastructure::gateways`; nothing in the application layer changes.
#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone, Copy, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Gateway {
    #[value(name = "pagseguro")]
    PagSeguro,
    #[value(name = "mercadopago")]
    MercadoPago,
}

impl Gateway {
    pub const ALL: [Gateway; 2] = [Gateway::PagSeguro, Gateway::MercadoPago];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gateway::PagSeguro => "pagseguro",
            Gateway::MercadoPago => "mercadopago",
        }
    }
}

impl fmt::Display for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier handed back by a gateway processor, e.g. `MP-0a1b2c3d`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a single payment attempt.
///
/// A rejected card is an expected business outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved { transaction_id: TransactionId },
    Rejected,
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        match self {
            PaymentOutcome::Approved { transaction_id } => Some(transaction_id),
            PaymentOutcome::Rejected => None,
        }
    }
}

/// A payment to be charged through a specific gateway.
///
/// Construction rejects non-positive amounts and blank card numbers. Whether
/// the card itself is acceptable is left to the gateway's validator.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentRequest {
    gateway: Gateway,
    amount: Decimal,
    card_number: String,
}

impl PaymentRequest {
    pub fn new(gateway: Gateway, amount: Decimal, card_number: impl Into<String>) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(Error::ValidationError(format!(
                "amount must be positive, got {amount}"
            )));
        }
        let card_number = card_number.into();
        if card_number.trim().is_empty() {
            return Err(Error::ValidationError("card number is empty".to_string()));
        }
        Ok(Self {
            gateway,
            amount,
            card_number,
        })
    }

    pub fn gateway(&self) -> Gateway {
        self.gateway
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn card_number(&self) -> &str {
        &self.card_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_request_keeps_amount_scale() {
        let request = PaymentRequest::new(Gateway::MercadoPago, dec!(200.00), "5234567890123456")
            .unwrap();
        assert_eq!(request.gateway(), Gateway::MercadoPago);
        assert_eq!(request.amount().to_string(), "200.00");
        assert_eq!(request.card_number(), "5234567890123456");
    }

    #[test]
    fn test_request_rejects_non_positive_amounts() {
        for amount in [dec!(0.00), dec!(-1.50)] {
            assert!(matches!(
                PaymentRequest::new(Gateway::PagSeguro, amount, "1234567890123456"),
                Err(Error::ValidationError(_))
            ));
        }
    }

    #[test]
    fn test_request_rejects_blank_card_number() {
        assert!(matches!(
            PaymentRequest::new(Gateway::PagSeguro, dec!(1.00), "  "),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn test_outcome_accessors() {
        let approved = PaymentOutcome::Approved {
            transaction_id: TransactionId::new("PAGSEG-00000001"),
        };
        assert!(approved.is_approved());
        assert_eq!(
            approved.transaction_id().map(TransactionId::as_str),
            Some("PAGSEG-00000001")
        );

        assert!(!PaymentOutcome::Rejected.is_approved());
        assert!(PaymentOutcome::Rejected.transaction_id().is_none());
    }
}
