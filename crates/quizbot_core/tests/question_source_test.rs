use quizbot_core::{Question, QuestionBank, QuestionSource};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::sync::Arc;

fn bank_of(n: usize) -> Arc<QuestionBank> {
    let questions = (0..n)
        .map(|i| Question::new(format!("Q{}?", i), format!("A{}", i)))
        .collect();
    Arc::new(QuestionBank::new(questions).expect("Valid bank"))
}

#[test]
fn test_full_rotation_before_repeat() {
    for seed in 0..20 {
        let bank = bank_of(7);
        let mut source = QuestionSource::with_rng(bank, StdRng::seed_from_u64(seed));
        let mut asked = HashSet::new();

        let mut seen = HashSet::new();
        for _ in 0..7 {
            let q = source.draw(&mut asked).expect("Draw");
            assert!(seen.insert(q.prompt().clone()), "Repeated before rotation ended");
        }
        assert_eq!(seen.len(), 7);
        assert_eq!(asked.len(), 7);
    }
}

#[test]
fn test_rotation_restarts_after_exhaustion() {
    let bank = bank_of(3);
    let mut source = QuestionSource::with_rng(bank, StdRng::seed_from_u64(42));
    let mut asked = HashSet::new();

    for _ in 0..3 {
        source.draw(&mut asked).expect("Draw");
    }
    assert_eq!(asked.len(), 3);

    source.draw(&mut asked).expect("Draw");
    assert_eq!(asked.len(), 1);
}

#[test]
fn test_single_question_is_redrawn() {
    let bank = Arc::new(QuestionBank::new(vec![Question::new("2+2?", "4")]).expect("Valid bank"));
    let mut source = QuestionSource::with_rng(bank, StdRng::seed_from_u64(1));
    let mut asked = HashSet::new();

    let first = source.draw(&mut asked).expect("Draw");
    let second = source.draw(&mut asked).expect("Draw");
    assert_eq!(first.prompt(), "2+2?");
    assert_eq!(first, second);
    assert_eq!(asked.len(), 1);
}

#[test]
fn test_duplicate_prompts_do_not_stall() {
    let bank = Arc::new(
        QuestionBank::new(vec![
            Question::new("Dup?", "x"),
            Question::new("Dup?", "y"),
            Question::new("Solo?", "z"),
        ])
        .expect("Valid bank"),
    );
    let mut source = QuestionSource::with_rng(bank, StdRng::seed_from_u64(9));
    let mut asked = HashSet::new();

    for _ in 0..10 {
        source.draw(&mut asked).expect("Draw");
        assert!(asked.len() <= 2);
    }
}
