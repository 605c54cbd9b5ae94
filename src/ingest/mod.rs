use csv::ReaderBuilder;
use log::debug;
use std::convert::TryFrom;
use std::str;

use crate::collection::{IngestedCollection, Question};
use crate::error::{MalformedKind, ParseError};

mod dialect;
mod layout;
mod row;


use self::dialect::Dialect;
use self::layout::{ColumnLayout, HEADER_LINE};
use self::row::RawRow;

// Line 1 of the upload is the collection title, so positions reported by
// the csv reader are offset by one file line.
const TITLE_LINES: u64 = 1;

/// Parses an uploaded file into a collection: line 1 is the title, line 2
/// the column header, every later line one question. Fails on the first
/// violation; no partial collection is ever returned.
pub fn parse(bytes: &[u8]) -> Result<IngestedCollection, ParseError> {
    let text = str::from_utf8(bytes).map_err(|_| ParseError::EmptyInput)?;
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (title, body) = split_title(text);
    if body.trim().is_empty() {
        return Err(ParseError::at(HEADER_LINE, MalformedKind::MissingHeader));
    }

    let dialect = Dialect::default();
    let mut reader = ReaderBuilder::new()
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .escape(Some(dialect.escape))
        .flexible(true) // field counts are checked against the layout instead
        .from_reader(body.as_bytes());

    let headers = reader.headers().map_err(|e| csv_failure(&e))?.clone();
    let layout = ColumnLayout::from_header(&headers)?;

    let mut questions = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_failure(&e))?;
        let line = record
            .position()
            .map(|p| p.line() + TITLE_LINES)
            .unwrap_or(index as u64 + TITLE_LINES + 2);
        let raw = RawRow::from_record(&record, &layout, line)?;
        questions.push(Question::try_from(raw)?);
    }

    if questions.is_empty() {
        return Err(ParseError::at(HEADER_LINE + 1, MalformedKind::NoQuestions));
    }

    debug!(
        "ingested {} questions under title {:?}",
        questions.len(),
        title
    );

    Ok(IngestedCollection {
        title: title.to_owned(),
        questions,
    })
}

// The title line never goes through the csv reader; delimiters or quotes in
// it are taken verbatim.
fn split_title(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(pos) => (text[..pos].trim(), &text[pos + 1..]),
        None => (text.trim(), ""),
    }
}

fn csv_failure(error: &csv::Error) -> ParseError {
    let line = match error.position() {
        Some(pos) => pos.line() + TITLE_LINES,
        None => HEADER_LINE,
    };
    ParseError::at(line, MalformedKind::Csv(error.to_string()))
}
