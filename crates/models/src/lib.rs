//! Entity definitions and field validation for cloud vendor records.

pub mod errors;
pub mod validation;
pub mod db;
pub mod cloud_vendor;

pub use cloud_vendor::CloudVendor;
pub use validation::{FieldErrors, Validatable, ValidationBuilder};
