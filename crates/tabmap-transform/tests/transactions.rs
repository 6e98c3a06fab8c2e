use tabmap_ingest::{KeyedRow, SourceRow, SourceTable};
use tabmap_model::{ProcessError, RowError, TransactionColumns};
use tabmap_transform::map_transactions;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn keyed_table(headers: &[&str], rows: &[&[&str]]) -> SourceTable {
    let headers = strings(headers);
    let rows = rows
        .iter()
        .map(|cells| Ok(SourceRow::Keyed(KeyedRow::from_headers(&headers, strings(cells)))))
        .collect();
    SourceTable::new(headers, rows)
}

#[test]
fn maps_selected_columns_in_row_order() {
    let table = keyed_table(
        &["Name", "Mobile", "Amount"],
        &[&["Alice", "9876543210", "150"], &["Bob", "", "200"]],
    );
    let columns = TransactionColumns {
        mobile: Some(2),
        bill_amount: Some(3),
        ..TransactionColumns::default()
    };

    let batch = map_transactions(&table, &columns).expect("mapped");
    assert_eq!(batch.records.len(), 2);
    assert_eq!(batch.records[0].mobile, "9876543210");
    assert_eq!(batch.records[0].bill_amount, "150");
    assert_eq!(batch.records[0].txn_type, "purchase");
    assert_eq!(batch.records[1].mobile, "");
    assert_eq!(batch.records[1].bill_amount, "200");
    assert_eq!(batch.stats.rows_read, 2);
    assert_eq!(batch.stats.records, 2);
}

#[test]
fn row_with_only_bill_amount_is_kept() {
    let table = keyed_table(&["Amount"], &[&["99.5"]]);
    let columns = TransactionColumns {
        bill_amount: Some(1),
        ..TransactionColumns::default()
    };
    let batch = map_transactions(&table, &columns).expect("mapped");
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].bill_amount, "99.5");
}

#[test]
fn empty_rows_are_counted_and_dropped() {
    let table = keyed_table(
        &["Mobile", "Amount"],
        &[&["", ""], &["9876543210", "10"], &["", "abc"]],
    );
    let columns = TransactionColumns {
        mobile: Some(1),
        bill_amount: Some(2),
        ..TransactionColumns::default()
    };
    let batch = map_transactions(&table, &columns).expect("mapped");
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.stats.skipped_empty, 2);
}

#[test]
fn no_data_rows_is_empty_source() {
    let table = keyed_table(&["Mobile"], &[]);
    let err = map_transactions(&table, &TransactionColumns::default()).unwrap_err();
    assert!(matches!(err, ProcessError::EmptySource));
}

#[test]
fn nothing_mapped_is_insufficient_data() {
    let table = keyed_table(&["Mobile"], &[&["9876543210"]]);
    let err = map_transactions(&table, &TransactionColumns::default()).unwrap_err();
    assert_eq!(err.code(), "INSUFFICIENT_DATA");
}

#[test]
fn undecodable_rows_do_not_stop_the_batch() {
    let headers = strings(&["Mobile"]);
    let table = SourceTable::new(
        headers.clone(),
        vec![
            Err(RowError::Decode {
                line: 2,
                reason: "invalid UTF-8 in field 1".to_string(),
            }),
            Ok(SourceRow::Keyed(KeyedRow::from_headers(
                &headers,
                strings(&["9876543210"]),
            ))),
        ],
    );
    let columns = TransactionColumns {
        mobile: Some(1),
        ..TransactionColumns::default()
    };
    let batch = map_transactions(&table, &columns).expect("mapped");
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.stats.rejected, 1);
    assert_eq!(batch.rejected.len(), 1);
}
