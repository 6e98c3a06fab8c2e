//! Contact column-mapping inference from header text.
//!
//! When a caller leaves every contact field unmapped, the header row is
//! scanned once before any data row. Each field takes the 1-based position
//! of the first header containing one of its keywords (case-insensitive).
//! Unmatched fields stay unmapped. One column may serve several fields.
//!
//! # Example
//!
//! ```ignore
//! use tabmap_transform::inference::infer_mapping;
//!
//! let headers = vec!["Customer Name".to_string(), "Mobile No".to_string()];
//! let mapping = infer_mapping(&headers);
//! assert_eq!(mapping.phone, Some(2));
//! assert_eq!(mapping.name, Some(1));
//! ```

use tabmap_model::{ColumnMapping, ContactField};
use tracing::debug;

/// Build a mapping from header text alone.
pub fn infer_mapping(headers: &[String]) -> ColumnMapping {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let mut mapping = ColumnMapping::default();
    for field in ContactField::ALL {
        let position = lowered
            .iter()
            .position(|header| field.keywords().iter().any(|kw| header.contains(kw)));
        if let Some(idx) = position {
            mapping.set(field, Some(idx as i64 + 1));
        }
    }
    mapping
}

/// Fill `mapping` from the headers if the caller supplied nothing usable.
///
/// Returns true when inference ran. A mapping with any field set is left
/// untouched.
pub fn ensure_mapping(mapping: &mut ColumnMapping, headers: &[String]) -> bool {
    if !mapping.is_unset() {
        return false;
    }
    *mapping = infer_mapping(headers);
    debug!(
        phone = ?mapping.phone,
        name = ?mapping.name,
        email = ?mapping.email,
        birthday = ?mapping.birthday,
        anniversary = ?mapping.anniversary,
        gender = ?mapping.gender,
        points = ?mapping.points,
        tags = ?mapping.tags,
        "inferred contact mapping from headers"
    );
    true
}
