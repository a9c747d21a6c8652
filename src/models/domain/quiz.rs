use serde::{Deserialize, Serialize};

/// One validated multiple-choice question. Instances only exist after the
/// quiz validator has accepted the model's output, so a constructed value
/// always has 4 options and a non-empty question and answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}
