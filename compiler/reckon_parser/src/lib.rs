//! Front half of the Reckon pipeline.
//!
//! [`validator`] rejects structurally broken input before any parsing work is
//! done, and [`shunting_yard`] turns a token stream into postfix order.

pub mod error;
pub mod shunting_yard;
pub mod validator;

pub use error::{ConversionError, ValidationError};
pub use shunting_yard::{to_rpn, Converter};
pub use validator::{validate, Classification, ValidationResult, Validator};


// Integration tests are in the tests/ directory
