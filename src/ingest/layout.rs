use csv::StringRecord;

use crate::error::{MalformedKind, ParseError};

pub const HEADER_LINE: u64 = 2;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ColumnRole {
    Prompt,
    CorrectIndex,
    AnswerOption,
}

/// Column-to-role mapping, validated once against the header row before any
/// data row is read. Roles are positional: prompt, correct-answer index,
/// then one column per answer option, left to right.
#[derive(Debug)]
pub struct ColumnLayout {
    roles: Vec<ColumnRole>,
}

impl ColumnLayout {
    pub fn from_header(header: &StringRecord) -> Result<ColumnLayout, ParseError> {
        let width = header.len();
        // Two reserved columns plus at least two answer options.
        if width < 4 {
            return Err(ParseError::at(
                HEADER_LINE,
                MalformedKind::TooFewColumns { found: width },
            ));
        }
        let mut roles = vec![ColumnRole::Prompt, ColumnRole::CorrectIndex];
        roles.resize(width, ColumnRole::AnswerOption);
        Ok(ColumnLayout { roles })
    }

    pub fn roles(&self) -> impl Iterator<Item = ColumnRole> + '_ {
        self.roles.iter().copied()
    }

    pub fn width(&self) -> usize {
        self.roles.len()
    }

    pub fn option_count(&self) -> usize {
        self.roles
            .iter()
            .filter(|role| **role == ColumnRole::AnswerOption)
            .count()
    }
}
