// src/models/quiz.rs

use serde::{Deserialize, Serialize};

use crate::{catalog::QuizQuestion, error::AppError};

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    /// Selected option index per question, in quiz order.
    pub answers: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub score: u32,
    pub feedback: String,
    pub total: u32,
}

/// DTO for sending a question to the client (excludes the correct answer).
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for PublicQuestion {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            question: q.prompt.clone(),
            options: q.options.clone(),
        }
    }
}

/// Feedback band keyed by the percentage of correct answers.
/// Each band includes its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Great,
    Good,
    KeepExploring,
}

impl FeedbackTier {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Great
        } else if percentage >= 40.0 {
            Self::Good
        } else {
            Self::KeepExploring
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You're a climate champion! 🌟",
            Self::Great => "Great job! You have solid climate knowledge! 👍",
            Self::Good => "Good effort! Keep learning about climate change! 📚",
            Self::KeepExploring => "Keep exploring! Every step towards climate awareness counts! 🌱",
        }
    }
}

/// Scores `answers` element-wise against `key`.
///
/// The submission must have exactly one answer per question.
pub fn score_submission(key: &[i64], answers: &[i64]) -> Result<QuizResult, AppError> {
    if answers.len() != key.len() {
        return Err(AppError::BadRequest(format!(
            "Expected {} answers, got {}",
            key.len(),
            answers.len()
        )));
    }

    let score = key.iter().zip(answers).filter(|(k, a)| k == a).count() as u32;
    let total = key.len() as u32;

    let percentage = if total == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(total) * 100.0
    };

    Ok(QuizResult {
        score,
        feedback: FeedbackTier::from_percentage(percentage).message().to_string(),
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: [i64; 5] = [2, 2, 1, 1, 2];

    #[test]
    fn perfect_submission() {
        let result = score_submission(&KEY, &[2, 2, 1, 1, 2]).unwrap();
        assert_eq!(result.score, 5);
        assert_eq!(result.total, 5);
        assert_eq!(result.feedback, FeedbackTier::Excellent.message());
    }

    #[test]
    fn all_wrong_submission() {
        let result = score_submission(&KEY, &[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback, FeedbackTier::KeepExploring.message());
    }

    #[test]
    fn tiers_follow_score() {
        let cases: [([i64; 5], FeedbackTier); 4] = [
            ([2, 2, 1, 1, 0], FeedbackTier::Excellent),
            ([2, 2, 1, 0, 0], FeedbackTier::Great),
            ([2, 2, 0, 0, 0], FeedbackTier::Good),
            ([2, 0, 0, 0, 0], FeedbackTier::KeepExploring),
        ];
        for (answers, tier) in cases {
            let result = score_submission(&KEY, &answers).unwrap();
            assert_eq!(result.feedback, tier.message(), "answers {:?}", answers);
        }
    }

    #[test]
    fn tier_bounds_are_inclusive() {
        assert_eq!(FeedbackTier::from_percentage(80.0), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::from_percentage(79.9), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(60.0), FeedbackTier::Great);
        assert_eq!(FeedbackTier::from_percentage(40.0), FeedbackTier::Good);
        assert_eq!(FeedbackTier::from_percentage(39.9), FeedbackTier::KeepExploring);
    }

    #[test]
    fn wrong_length_is_rejected() {
        match score_submission(&KEY, &[2, 2, 1, 1]) {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "Expected 5 answers, got 4"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
        assert!(score_submission(&KEY, &[2, 2, 1, 1, 2, 0]).is_err());
    }

    #[test]
    fn public_question_hides_answer() {
        let q = QuizQuestion {
            id: 9,
            prompt: "Which gas?".to_string(),
            options: vec!["CO2".to_string(), "Argon".to_string()],
            correct_answer: 0,
        };
        let json = serde_json::to_value(PublicQuestion::from(&q)).unwrap();
        assert_eq!(json["question"], "Which gas?");
        assert!(json.get("correct_answer").is_none());
    }
}
