//! Service layer for cloud vendor records.
//! - `VendorStore` is the persistence contract consumed by the HTTP layer.
//! - File-backed and SeaORM-backed implementations share the same semantics.
//! - Validation rules live with the entity in the `models` crate.

pub mod errors;
pub mod storage;
pub mod vendor;

pub use errors::ServiceError;
pub use vendor::{VendorStore, SUCCESS};
