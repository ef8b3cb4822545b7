//! Concrete payment gateway families.
//!
//! Each submodule provides one `PaymentGatewayFactory` together with the
//! validator, processor and logger it hands out.

pub mod mercadopago;
pub mod pagseguro;

use crate::domain::payment::{Gateway, TransactionId};
use crate::domain::ports::GatewayFactoryBox;
use chrono::Local;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

pub use mercadopago::MercadoPagoFactory;
pub use pagseguro::PagSeguroFactory;

impl Gateway {
    /// Returns a fresh factory for this gateway.
    pub fn factory(self) -> GatewayFactoryBox {
        match self {
            Gateway::PagSeguro => Box::new(PagSeguroFactory),
            Gateway::MercadoPago => Box::new(MercadoPagoFactory),
        }
    }
}

static SEQUENCE: AtomicU32 = AtomicU32::new(0);
static SEED: OnceLock<u32> = OnceLock::new();

/// Issues a process-unique id such as `PAGSEG-3f09a1c2`.
///
/// The suffix is a per-process sequence number pushed through a bijection on
/// `u32` (odd multiplier, then xor with a random seed), so the first 2^32 ids
/// never repeat.
pub(crate) fn next_transaction_id(prefix: &str) -> TransactionId {
    let seed = *SEED.get_or_init(rand::random::<u32>);
    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let suffix = sequence.wrapping_mul(0x9E37_79B1) ^ seed;
    TransactionId::new(format!("{prefix}-{suffix:08x}"))
}

/// Emits a gateway log line as a timestamped `tracing` event.
pub(crate) fn emit_log(gateway: &'static str, message: &str) {
    let timestamp = Local::now().to_rfc3339();
    tracing::info!(gateway, %timestamp, "{message}");
}
