use anyhow::Result;
use tabmap_model::{
    ColumnMapping, ContactField, DateOrder, NormalizationOptions, TransactionColumns,
};
use tabmap_report::WriterOptions;
use tracing::debug;

use tabmap_cli::pipeline::{
    OutputConfig, SourceInput, load_mapping_file, run_contacts, run_transactions,
};
use tabmap_cli::types::RunReport;

use crate::cli::{ContactArgs, SourceArgs, TransactionArgs};

pub fn run_transactions_command(args: &TransactionArgs) -> Result<RunReport> {
    let columns = TransactionColumns {
        mobile: args.mobile,
        bill_number: args.bill_number,
        bill_amount: args.bill_amount,
        order_time: args.order_time,
        points_earned: args.points_earned,
        points_redeemed: args.points_redeemed,
    };
    run_transactions(&source_input(&args.source), &columns, &output_config(&args.source))
}

pub fn run_contacts_command(args: &ContactArgs) -> Result<RunReport> {
    let mapping = contact_mapping(args)?;
    let options = normalization_options(args);
    run_contacts(
        &source_input(&args.source),
        mapping,
        &options,
        &output_config(&args.source),
    )
}

fn source_input(args: &SourceArgs) -> SourceInput {
    SourceInput {
        path: args.input.clone(),
        file_type: args.file_type.clone(),
    }
}

fn output_config(args: &SourceArgs) -> OutputConfig {
    OutputConfig {
        dir: args.output_dir.clone(),
        writer: if args.raw_output {
            WriterOptions::raw()
        } else {
            WriterOptions::default()
        },
    }
}

/// Mapping file first, then any column flags on top.
fn contact_mapping(args: &ContactArgs) -> Result<ColumnMapping> {
    let mut mapping = match &args.mapping_file {
        Some(path) => load_mapping_file(path)?,
        None => ColumnMapping::default(),
    };
    let flags = [
        (ContactField::Phone, args.phone),
        (ContactField::Name, args.name),
        (ContactField::Email, args.email),
        (ContactField::Birthday, args.birthday),
        (ContactField::Anniversary, args.anniversary),
        (ContactField::Gender, args.gender),
        (ContactField::Points, args.points),
        (ContactField::Tags, args.tags),
    ];
    for (field, column) in flags {
        if column.is_some() {
            mapping.set(field, column);
        }
    }
    debug!(?mapping, "contact mapping from arguments");
    Ok(mapping)
}

fn normalization_options(args: &ContactArgs) -> NormalizationOptions {
    let mut options = NormalizationOptions::default();
    if !args.country_codes.is_empty() {
        options = options.with_country_codes(args.country_codes.clone());
    }
    let national_length = (args.national_length > 0).then_some(args.national_length);
    options = options.with_national_length(national_length);
    if args.month_first {
        options = options.with_date_order(DateOrder::MonthFirst);
    }
    options
}
