//! Field normalizers.
//!
//! Every normalizer is a pure, total function from raw cell text to its
//! canonical form. A value that cannot be cleaned becomes an empty string
//! (or `"0"` for points); none of them fail.
//!
//! - **phone**: country-code stripping, digits only
//! - **name**: punctuation removal and per-word capitalization
//! - **email**: lowercase, whitespace removal, shape validation
//! - **datetime**: many date shapes to `YYYY-MM-DD`
//! - **gender**: synonym folding to Male/Female/Other
//! - **numeric**: points and bill-number validation
//! - **tags**: comma-separated tag cleanup

pub mod datetime;
pub mod email;
pub mod gender;
pub mod name;
pub mod numeric;
pub mod phone;
pub mod tags;
mod text;

// Re-export commonly used items
pub use datetime::{normalize_date, parse_date};
pub use email::normalize_email;
pub use gender::normalize_gender;
pub use name::normalize_name;
pub use numeric::{is_numeric, normalize_points};
pub use phone::normalize_phone;
pub use tags::normalize_tags;
