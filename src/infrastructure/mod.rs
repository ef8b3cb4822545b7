//! Infrastructure layer: concrete gateway implementations behind the domain ports.

pub mod gateways;
