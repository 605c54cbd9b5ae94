use csv::StringRecord;
use std::convert::TryFrom;

use super::layout::{ColumnLayout, ColumnRole};
use crate::collection::{Answer, AnswerId, Question, QuestionId};
use crate::error::{MalformedKind, ParseError};

/// One data row, cells still raw text. `line` is the 1-based position in
/// the uploaded file, title line included.
#[derive(Debug)]
pub struct RawRow {
    pub line: u64,
    pub prompt: String,
    pub correct_index: String,
    pub options: Vec<String>,
}

impl RawRow {
    pub fn from_record(
        record: &StringRecord,
        layout: &ColumnLayout,
        line: u64,
    ) -> Result<RawRow, ParseError> {
        if record.len() != layout.width() {
            return Err(ParseError::at(
                line,
                MalformedKind::FieldCountMismatch {
                    expected: layout.width(),
                    found: record.len(),
                },
            ));
        }

        let mut prompt = String::new();
        let mut correct_index = String::new();
        let mut options = Vec::with_capacity(layout.option_count());
        for (role, cell) in layout.roles().zip(record.iter()) {
            match role {
                ColumnRole::Prompt => prompt = cell.to_owned(),
                ColumnRole::CorrectIndex => correct_index = cell.to_owned(),
                ColumnRole::AnswerOption => options.push(cell.to_owned()),
            }
        }

        Ok(RawRow {
            line,
            prompt,
            correct_index,
            options,
        })
    }
}

impl TryFrom<RawRow> for Question {
    type Error = ParseError;

    fn try_from(row: RawRow) -> Result<Question, ParseError> {
        // Whitespace around the index is tolerated, anything else is not.
        let index: usize = row.correct_index.trim().parse().map_err(|_| {
            ParseError::at(
                row.line,
                MalformedKind::CorrectIndexNotANumber {
                    value: row.correct_index.clone(),
                },
            )
        })?;

        let answers: Vec<Answer> = row
            .options
            .into_iter()
            .map(|text| Answer {
                id: AnswerId::new(),
                text,
            })
            .collect();

        let correct_answer_id = match answers.get(index) {
            Some(answer) => answer.id,
            None => {
                return Err(ParseError::at(
                    row.line,
                    MalformedKind::CorrectIndexOutOfRange {
                        index,
                        options: answers.len(),
                    },
                ));
            }
        };

        Ok(Question {
            id: QuestionId::new(),
            prompt: row.prompt,
            answers,
            correct_answer_id,
        })
    }
}
