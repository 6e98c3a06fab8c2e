//! Contact row mapping with cleaning and phone deduplication.

use tabmap_ingest::{ColumnAccess, SourceRow, SourceTable};
use tabmap_model::{ColumnMapping, ContactRecord, NormalizationOptions, Pipeline, ProcessError};

use crate::batch::{MappedBatch, RowOutcome, collect_batch};
use crate::dedupe::DedupSet;
use crate::inference::ensure_mapping;
use crate::normalization::{
    normalize_date, normalize_email, normalize_gender, normalize_name, normalize_phone,
    normalize_points, normalize_tags,
};

/// Per-request contact mapping state.
#[derive(Debug)]
pub struct ContactMapper<'a> {
    mapping: ColumnMapping,
    seen: DedupSet,
    options: &'a NormalizationOptions,
}

impl<'a> ContactMapper<'a> {
    pub fn new(mapping: ColumnMapping, options: &'a NormalizationOptions) -> Self {
        Self {
            mapping,
            seen: DedupSet::new(),
            options,
        }
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Map one row. The phone is the dedup key: a row whose phone is empty
    /// or already seen is skipped without touching the dedup set.
    pub fn map_row(&mut self, row: &SourceRow) -> RowOutcome<ContactRecord> {
        let mapping = self.mapping;
        let phone_number = normalize_phone(&row.value_at(mapping.phone), &self.options.phone);
        if phone_number.is_empty() {
            return RowOutcome::MissingPhone;
        }
        if !self.seen.insert(&phone_number) {
            return RowOutcome::Duplicate;
        }

        let order = self.options.date_order;
        RowOutcome::Kept(ContactRecord {
            phone_number,
            name: normalize_name(&row.value_at(mapping.name)),
            email: normalize_email(&row.value_at(mapping.email)),
            birthday: normalize_date(&row.value_at(mapping.birthday), order),
            anniversary: normalize_date(&row.value_at(mapping.anniversary), order),
            gender: normalize_gender(&row.value_at(mapping.gender)),
            points: normalize_points(&row.value_at(mapping.points)),
            tags: normalize_tags(&row.value_at(mapping.tags)),
        })
    }
}

/// Map every data row to a cleaned, deduplicated contact record.
///
/// If `mapping` has no usable column it is filled in place from the header
/// row before the first data row is read, so the caller can see what was
/// inferred.
pub fn map_contacts(
    table: &SourceTable,
    mapping: &mut ColumnMapping,
    options: &NormalizationOptions,
) -> Result<MappedBatch<ContactRecord>, ProcessError> {
    ensure_mapping(mapping, &table.headers);
    let mut mapper = ContactMapper::new(*mapping, options);
    collect_batch(table, Pipeline::Contacts, |row| mapper.map_row(row))
}
