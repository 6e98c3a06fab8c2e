//! Delimited text serialization.

use std::io::Write;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tabmap_model::OutputRecord;

use crate::options::{QuoteMode, WriterOptions};

/// Write the schema header and then every record, in order.
pub fn write_records<W, R>(mut output: W, records: &[R], options: WriterOptions) -> Result<()>
where
    W: Write,
    R: OutputRecord,
{
    let text = render_records(records, options)?;
    output
        .write_all(text.as_bytes())
        .context("write delimited output")?;
    output.flush().context("flush delimited output")
}

/// Render the header and records to a string.
///
/// Lines end in `\n`. In raw mode the last line has no terminator.
pub fn render_records<R: OutputRecord>(records: &[R], options: WriterOptions) -> Result<String> {
    let quote_style = match options.quote_mode {
        QuoteMode::Rfc4180 => QuoteStyle::Necessary,
        QuoteMode::Raw => QuoteStyle::Never,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(false)
        .quote_style(quote_style)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(R::HEADER)
        .context("write header record")?;
    for record in records {
        writer
            .write_record(record.fields())
            .context("write output record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flush output buffer: {}", e.error()))?;
    let mut text = String::from_utf8(bytes).context("output is not UTF-8")?;
    if options.quote_mode == QuoteMode::Raw && text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
