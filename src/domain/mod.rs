//! Domain layer: the gateway ports, payment values and the sales report model.

pub mod payment;
pub mod ports;
pub mod report;
pub mod report_builder;
