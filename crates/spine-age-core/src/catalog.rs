//! The fixed question catalog.
//!
//! Eleven questions in catalog order: three for Core and Posture, three for
//! Strength and Balance and five for Recovery and Lifestyle. Every question
//! names its option set explicitly.

use crate::model::{Category, OptionSet, Question, MAX_POINTS_PER_QUESTION};

pub static STIFFNESS: OptionSet = OptionSet {
    options: ["A) Yes / No stiffness", "B) Some stiffness", "C) Pain or difficulty"],
};

pub static ABILITY: OptionSet = OptionSet {
    options: ["A) Yes", "B) Somewhat", "C) No"],
};

pub static SORENESS_FREQUENCY: OptionSet = OptionSet {
    options: ["A) Rarely", "B) Sometimes", "C) Frequently"],
};

pub static HABIT_FREQUENCY: OptionSet = OptionSet {
    options: ["A) Yes / Consistently", "B) Sometimes", "C) No / Never"],
};

pub static BACK_PAIN_HISTORY: OptionSet = OptionSet {
    options: ["A) No", "B) Once", "C) Yes, more than once"],
};

static QUESTIONS: [Question; 11] = [
    Question {
        id: "morning-stiffness",
        text: "How do you feel when you get out of bed in the morning?",
        category: Category::CorePosture,
        options: &STIFFNESS,
        hint: Some("Think about the first ten minutes after waking up."),
    },
    Question {
        id: "deep-squat-hold",
        text: "Can you hold a deep squat for 60 seconds without discomfort?",
        category: Category::CorePosture,
        options: &STIFFNESS,
        hint: None,
    },
    Question {
        id: "thoracic-rotation",
        text: "Can you rotate your upper body and look fully over each shoulder without pain?",
        category: Category::CorePosture,
        options: &STIFFNESS,
        hint: Some("Keep your hips facing forward while you turn."),
    },
    Question {
        id: "jump-squats",
        text: "Can you perform 5 jump squats and box jumps (minimum 12-16 inches) without fear or back/knee pain?",
        category: Category::StrengthBalance,
        options: &ABILITY,
        hint: None,
    },
    Question {
        id: "standing-knee-drives",
        text: "Can you perform standing knee drives (15 per leg) and maintain posture without compensations?",
        category: Category::StrengthBalance,
        options: &ABILITY,
        hint: Some("Compensations include leaning back or rounding the lower back."),
    },
    Question {
        id: "single-leg-balance",
        text: "Can you stand on one leg (eyes closed) for at least 30 seconds on both legs?",
        category: Category::StrengthBalance,
        options: &ABILITY,
        hint: None,
    },
    Question {
        id: "back-soreness",
        text: "How often do you feel back soreness after long sitting or lifting?",
        category: Category::RecoveryLifestyle,
        options: &SORENESS_FREQUENCY,
        hint: None,
    },
    Question {
        id: "spine-decompression",
        text: "Do you do specific exercises to decompress your spine (e.g., hangs, McKenzie extensions)?",
        category: Category::RecoveryLifestyle,
        options: &HABIT_FREQUENCY,
        hint: Some("Dead hangs, McKenzie press-ups and similar extension work all count."),
    },
    Question {
        id: "supportive-mattress",
        text: "Do you sleep on a supportive mattress with good posture?",
        category: Category::RecoveryLifestyle,
        options: &HABIT_FREQUENCY,
        hint: None,
    },
    Question {
        id: "upright-posture",
        text: "Do you consciously maintain upright posture while working/sitting?",
        category: Category::RecoveryLifestyle,
        options: &HABIT_FREQUENCY,
        hint: None,
    },
    Question {
        id: "prolonged-back-pain",
        text: "Have you had back pain lasting more than a week in the past year?",
        category: Category::RecoveryLifestyle,
        options: &BACK_PAIN_HISTORY,
        hint: Some("Count separate episodes, not days."),
    },
];

/// All questions, in catalog order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Questions belonging to one category, in catalog order.
pub fn questions_in(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == category)
}

/// Highest achievable total score across the whole catalog.
pub fn max_total() -> u32 {
    QUESTIONS.len() as u32 * MAX_POINTS_PER_QUESTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerLabel;
    use std::collections::HashSet;

    #[test]
    fn catalog_shape() {
        assert_eq!(questions().len(), 11);
        assert_eq!(max_total(), 22);
        for category in Category::ALL {
            assert_eq!(
                questions_in(category).count() as u32,
                category.question_count(),
                "{category}"
            );
        }
    }

    #[test]
    fn categories_are_contiguous_in_catalog_order() {
        let order: Vec<Category> = questions().iter().map(|q| q.category).collect();
        let mut seen = Vec::new();
        for c in order {
            if seen.last() != Some(&c) {
                seen.push(c);
            }
        }
        assert_eq!(seen, Category::ALL.to_vec());
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), questions().len());
    }

    #[test]
    fn every_option_starts_with_its_label() {
        for q in questions() {
            for (label, text) in q.options.iter() {
                assert_eq!(
                    AnswerLabel::from_option_text(text).unwrap(),
                    label,
                    "{}: {text}",
                    q.id
                );
            }
        }
    }
}
