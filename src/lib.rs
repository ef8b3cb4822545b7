//! Payment gateway families and a validated sales report builder.
//!
//! - [`domain::ports`] defines the gateway roles and the factory that produces
//!   a matched set of them.
//! - [`infrastructure::gateways`] holds the PagSeguro and MercadoPago families.
//! - [`application::payment_service`] runs validate, process, log against any
//!   installed family.
//! - [`domain::report_builder`] stages a [`domain::report::SalesReport`] and
//!   refuses to finalize one without columns;
//!   [`application::report_director`] offers named presets.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::payment_service::PaymentService;
pub use application::report_director::{ReportDirector, ReportPreset};
pub use domain::payment::{Gateway, PaymentOutcome, PaymentRequest, TransactionId};
pub use domain::report::SalesReport;
pub use domain::report_builder::SalesReportBuilder;
pub use error::{Error, Result};
