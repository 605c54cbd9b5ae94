use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct QuestionId(Uuid);

impl QuestionId {
    pub fn new() -> QuestionId {
        QuestionId(Uuid::new_v4())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AnswerId(Uuid);

impl AnswerId {
    pub fn new() -> AnswerId {
        AnswerId(Uuid::new_v4())
    }
}

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Answer {
    pub id: AnswerId,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub answers: Vec<Answer>,
    pub correct_answer_id: AnswerId,
}

impl Question {
    /// Straight out of the parser this is always `Some`; a caller editing
    /// the answer list can invalidate the designation.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == self.correct_answer_id)
    }

    pub fn is_correct_choice(&self, choice: AnswerId) -> bool {
        choice == self.correct_answer_id
    }

    pub fn shuffle_answers<R: Rng>(&mut self, rng: &mut R) {
        self.answers.shuffle(rng);
    }
}

/// Transient parse result: a title plus questions in file order. Not the
/// durable collection entity a store would assign its own identity to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct IngestedCollection {
    pub title: String,
    pub questions: Vec<Question>,
}

impl IngestedCollection {
    pub fn shuffle_questions<R: Rng>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
    }

    pub fn shuffle_answers<R: Rng>(&mut self, rng: &mut R) {
        for question in &mut self.questions {
            question.shuffle_answers(rng);
        }
    }
}
