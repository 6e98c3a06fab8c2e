//! Caller-supplied column positions.
//!
//! Column numbers are 1-based. Zero, negative, or absent numbers mean "not
//! mapped" and always read as an empty cell.

use serde::{Deserialize, Deserializer, Serialize};

/// Column numbers for the transaction pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionColumns {
    #[serde(default, deserialize_with = "column_number")]
    pub mobile: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub bill_number: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub bill_amount: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub order_time: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub points_earned: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub points_redeemed: Option<i64>,
}

/// Logical contact fields, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Phone,
    Name,
    Email,
    Birthday,
    Anniversary,
    Gender,
    Points,
    Tags,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::Phone,
        ContactField::Name,
        ContactField::Email,
        ContactField::Birthday,
        ContactField::Anniversary,
        ContactField::Gender,
        ContactField::Points,
        ContactField::Tags,
    ];

    /// Lowercase header fragments that identify this field.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Phone => &["phone", "mobile", "contact"],
            Self::Name => &["name", "customer"],
            Self::Email => &["email", "mail"],
            Self::Birthday => &["birth", "dob"],
            Self::Anniversary => &["anniversary", "anniv"],
            Self::Gender => &["gender", "sex"],
            Self::Points => &["point", "score"],
            Self::Tags => &["tag", "category", "group"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Name => "name",
            Self::Email => "email",
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::Gender => "gender",
            Self::Points => "points",
            Self::Tags => "tags",
        }
    }
}

/// Column numbers for the contact pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default, deserialize_with = "column_number")]
    pub phone: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub name: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub email: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub birthday: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub anniversary: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub gender: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub points: Option<i64>,
    #[serde(default, deserialize_with = "column_number")]
    pub tags: Option<i64>,
}

impl ColumnMapping {
    pub fn get(&self, field: ContactField) -> Option<i64> {
        match field {
            ContactField::Phone => self.phone,
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Birthday => self.birthday,
            ContactField::Anniversary => self.anniversary,
            ContactField::Gender => self.gender,
            ContactField::Points => self.points,
            ContactField::Tags => self.tags,
        }
    }

    pub fn set(&mut self, field: ContactField, column: Option<i64>) {
        let slot = match field {
            ContactField::Phone => &mut self.phone,
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Birthday => &mut self.birthday,
            ContactField::Anniversary => &mut self.anniversary,
            ContactField::Gender => &mut self.gender,
            ContactField::Points => &mut self.points,
            ContactField::Tags => &mut self.tags,
        };
        *slot = column;
    }

    /// True when no field carries a usable (positive) column number.
    pub fn is_unset(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| !matches!(self.get(*field), Some(n) if n > 0))
    }
}

/// Accepts a number, a numeric string, an empty string, or null.
fn column_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<Raw>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Float(n)) if n.is_finite() && n.fract() == 0.0 => Some(n as i64),
        Some(Raw::Float(_)) => None,
        Some(Raw::Text(text)) => text.trim().parse::<i64>().ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_is_unset() {
        assert!(ColumnMapping::default().is_unset());
        let zeroed = ColumnMapping {
            phone: Some(0),
            name: Some(-1),
            ..ColumnMapping::default()
        };
        assert!(zeroed.is_unset());
        let set = ColumnMapping {
            email: Some(3),
            ..ColumnMapping::default()
        };
        assert!(!set.is_unset());
    }

    #[test]
    fn set_and_get_round_through_every_field() {
        let mut mapping = ColumnMapping::default();
        for (idx, field) in ContactField::ALL.iter().enumerate() {
            mapping.set(*field, Some(idx as i64 + 1));
        }
        for (idx, field) in ContactField::ALL.iter().enumerate() {
            assert_eq!(mapping.get(*field), Some(idx as i64 + 1));
        }
    }

    #[test]
    fn keywords_are_lowercase() {
        for field in ContactField::ALL {
            for keyword in field.keywords() {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }
}
