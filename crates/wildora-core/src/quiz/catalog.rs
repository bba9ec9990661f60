//! Built-in quizzes.

use super::model::{Answer, Difficulty, Question, QuestionKind, QuizKind};

/// Questions for the given quiz.
pub fn questions_for(kind: QuizKind) -> Vec<Question> {
    match kind {
        QuizKind::Mixed => mixed_quiz(),
        QuizKind::Era => era_quiz(),
    }
}

fn mixed_quiz() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "What's your ideal Friday night?".to_string(),
            kind: QuestionKind::Era,
            difficulty: Difficulty::Easy,
            points: 5,
            answers: vec![
                Answer::era("Dancing at a glamorous party", "1989"),
                Answer::era("Plotting revenge in the shadows", "reputation"),
                Answer::era("Writing poetry by a fireplace", "folklore"),
            ],
        },
        Question {
            id: 2,
            prompt: "Complete the lyric: 'I stay out too late, got nothing in my brain...'"
                .to_string(),
            kind: QuestionKind::Lyrics,
            difficulty: Difficulty::Medium,
            points: 10,
            answers: vec![
                Answer::choice("That's what people say, mmm-hmm", true),
                Answer::choice("That's what lovers say, oh-oh", false),
                Answer::choice("That's what haters say, hey-hey", false),
                Answer::choice("That's what friends say, yeah-yeah", false),
            ],
        },
        Question {
            id: 3,
            prompt: "Which album was Taylor's first full pop album?".to_string(),
            kind: QuestionKind::Trivia,
            difficulty: Difficulty::Hard,
            points: 15,
            answers: vec![
                Answer::choice("Red", false),
                Answer::choice("1989", true),
                Answer::choice("Speak Now", false),
                Answer::choice("Fearless", false),
            ],
        },
        Question {
            id: 4,
            prompt: "Pick your dream aesthetic:".to_string(),
            kind: QuestionKind::Era,
            difficulty: Difficulty::Easy,
            points: 5,
            answers: vec![
                Answer::era("Cozy cabin with fairy lights", "folklore"),
                Answer::era("Neon lights and city nights", "midnights"),
                Answer::era("Pastel rainbow everything", "lover"),
            ],
        },
        Question {
            id: 5,
            prompt: "What does 'All Too Well (10 Minute Version)' reveal?".to_string(),
            kind: QuestionKind::Trivia,
            difficulty: Difficulty::Hard,
            points: 20,
            answers: vec![
                Answer::choice("The scarf was actually a metaphor", false),
                Answer::choice("More details about the relationship", true),
                Answer::choice("It was written in 2021", false),
                Answer::choice("It features a guest vocalist", false),
            ],
        },
    ]
}

fn era_quiz() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            prompt: "What's your ideal Friday night?".to_string(),
            kind: QuestionKind::Era,
            difficulty: Difficulty::Easy,
            points: 0,
            answers: vec![
                Answer::era("Dancing at a glamorous party", "1989"),
                Answer::era("Plotting revenge in the shadows", "reputation"),
                Answer::era("Writing poetry by a fireplace", "folklore"),
            ],
        },
        Question {
            id: 2,
            prompt: "Pick a color palette:".to_string(),
            kind: QuestionKind::Era,
            difficulty: Difficulty::Easy,
            points: 0,
            answers: vec![
                Answer::era("Bright blues and pastels", "1989"),
                Answer::era("Dark blacks and metallics", "reputation"),
                Answer::era("Earthy grays and browns", "folklore"),
            ],
        },
    ]
}
