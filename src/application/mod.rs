//! Application layer orchestrating the domain.
//!
//! `PaymentService` drives one gateway's validator, processor and logger
//! through a payment. `ReportDirector` drives a `SalesReportBuilder` through
//! named presets without ever finalizing it.

pub mod payment_service;
pub mod report_director;
