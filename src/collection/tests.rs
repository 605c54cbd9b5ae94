use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use super::*;
use crate::ingest::parse;

fn sample() -> IngestedCollection {
    let input = "State Capitals
question,correctAnswer,option1,option2,option3,option4
Capital of Texas?,2,Dallas,Houston,Austin,El Paso
Capital of Ohio?,0,Columbus,Cleveland,Toledo,Akron
Capital of Maine?,3,Portland,Bangor,Lewiston,Augusta
";
    parse(input.as_bytes()).unwrap()
}

#[test]
fn correct_answer_returns_the_designated_option() {
    let collection = sample();
    assert_eq!(
        collection.questions[0].correct_answer().unwrap().text,
        "Austin"
    );
}

#[test]
fn checks_a_selected_answer() {
    let collection = sample();
    let question = &collection.questions[1];
    let correct = question.correct_answer().unwrap().id;
    let wrong = question.answers[1].id;
    assert!(question.is_correct_choice(correct));
    assert!(!question.is_correct_choice(wrong));
}

#[test]
fn correct_answer_is_none_after_destructive_edit() {
    let mut collection = sample();
    let mut question = collection.questions.remove(0);
    question.answers.clear();
    assert!(question.correct_answer().is_none());
}

#[test]
fn minted_ids_are_unique_across_the_collection() {
    let collection = sample();
    let mut seen = HashSet::new();
    for question in &collection.questions {
        assert!(seen.insert(question.id.to_string()));
        for answer in &question.answers {
            assert!(seen.insert(answer.id.to_string()));
        }
    }
}

#[test]
fn shuffling_answers_keeps_the_correct_designation() {
    let mut collection = sample();
    let expected: Vec<String> = collection
        .questions
        .iter()
        .map(|q| q.correct_answer().unwrap().text.clone())
        .collect();

    let mut rng = StdRng::seed_from_u64(42);
    collection.shuffle_answers(&mut rng);

    for (question, text) in collection.questions.iter().zip(expected) {
        assert_eq!(question.answers.len(), 4);
        assert_eq!(question.correct_answer().unwrap().text, text);
    }
}

#[test]
fn shuffling_questions_keeps_the_same_set() {
    let mut collection = sample();
    let before: HashSet<QuestionId> = collection.questions.iter().map(|q| q.id).collect();

    let mut rng = StdRng::seed_from_u64(7);
    collection.shuffle_questions(&mut rng);

    let after: HashSet<QuestionId> = collection.questions.iter().map(|q| q.id).collect();
    assert_eq!(before, after);
    assert_eq!(collection.questions.len(), 3);
}

#[test]
fn serializes_ids_as_strings() {
    let collection = sample();
    let value = serde_json::to_value(&collection).unwrap();
    assert_eq!(value["title"], "State Capitals");

    let question = &value["questions"][0];
    assert!(question["id"].is_string());
    assert!(question["correct_answer_id"].is_string());
    assert!(question["answers"][0]["id"].is_string());
    assert_eq!(question["answers"][2]["text"], "Austin");
}
