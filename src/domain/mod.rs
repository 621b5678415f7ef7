//! Domain Layer
//!
//! Pure license-checking logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - License list records, the reference set, manifests, findings
//! - `value_objects/` - The manifest `license` field shape
//! - `services/` - Validator
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
