//! Transaction row mapping.

use tabmap_ingest::{ColumnAccess, SourceRow, SourceTable};
use tabmap_model::{PURCHASE, Pipeline, ProcessError, TransactionColumns, TransactionRecord};

use crate::batch::{MappedBatch, RowOutcome, collect_batch};
use crate::normalization::is_numeric;

/// Map every data row to a transaction record.
///
/// Rows whose six mapped fields are all empty are dropped. Bill number and
/// bill amount are cleared when they are not numeric.
pub fn map_transactions(
    table: &SourceTable,
    columns: &TransactionColumns,
) -> Result<MappedBatch<TransactionRecord>, ProcessError> {
    collect_batch(table, Pipeline::Transactions, |row| {
        match map_transaction_row(row, columns) {
            Some(record) => RowOutcome::Kept(record),
            None => RowOutcome::Empty,
        }
    })
}

/// Build one record, or `None` when the row carries nothing.
pub fn map_transaction_row(
    row: &SourceRow,
    columns: &TransactionColumns,
) -> Option<TransactionRecord> {
    let mobile = row.value_at(columns.mobile);
    let bill_number = numeric_or_empty(row.value_at(columns.bill_number));
    let bill_amount = numeric_or_empty(row.value_at(columns.bill_amount));
    let order_time = row.value_at(columns.order_time);
    let points_earned = row.value_at(columns.points_earned);
    let points_redeemed = row.value_at(columns.points_redeemed);

    let all_empty = [
        &mobile,
        &bill_number,
        &bill_amount,
        &order_time,
        &points_earned,
        &points_redeemed,
    ]
    .iter()
    .all(|value| value.is_empty());
    if all_empty {
        return None;
    }

    Some(TransactionRecord {
        mobile,
        txn_type: PURCHASE.to_string(),
        bill_number,
        bill_amount,
        order_time,
        points_earned,
        points_redeemed,
    })
}

fn numeric_or_empty(value: String) -> String {
    if value.is_empty() || is_numeric(&value) {
        value
    } else {
        String::new()
    }
}
