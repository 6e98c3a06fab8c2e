//! Output record schemas.

use serde::{Deserialize, Serialize};

/// A record with a fixed, ordered output schema.
pub trait OutputRecord {
    /// Header line for this schema, in output order.
    const HEADER: &'static [&'static str];

    /// Field values in the same order as [`Self::HEADER`].
    fn fields(&self) -> Vec<&str>;
}

/// Transaction type written for every kept transaction row.
pub const PURCHASE: &str = "purchase";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub mobile: String,
    pub txn_type: String,
    pub bill_number: String,
    pub bill_amount: String,
    pub order_time: String,
    pub points_earned: String,
    pub points_redeemed: String,
}

impl OutputRecord for TransactionRecord {
    const HEADER: &'static [&'static str] = &[
        "mobile",
        "txn_type",
        "bill_number",
        "bill_amount",
        "order_time",
        "points_earned",
        "points_redeemed",
    ];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.mobile.as_str(),
            self.txn_type.as_str(),
            self.bill_number.as_str(),
            self.bill_amount.as_str(),
            self.order_time.as_str(),
            self.points_earned.as_str(),
            self.points_redeemed.as_str(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub phone_number: String,
    pub name: String,
    pub email: String,
    pub birthday: String,
    pub anniversary: String,
    pub gender: String,
    /// Integer-valued, kept as its decimal string.
    pub points: String,
    pub tags: String,
}

impl OutputRecord for ContactRecord {
    const HEADER: &'static [&'static str] = &[
        "phone_number",
        "name",
        "email",
        "birthday",
        "anniversary",
        "gender",
        "points",
        "tags",
    ];

    fn fields(&self) -> Vec<&str> {
        vec![
            self.phone_number.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.birthday.as_str(),
            self.anniversary.as_str(),
            self.gender.as_str(),
            self.points.as_str(),
            self.tags.as_str(),
        ]
    }
}
