//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckUseCase` - Load the SPDX reference set and validate every manifest

pub mod check;

pub use check::{CheckOptions, CheckReport, CheckUseCase};
