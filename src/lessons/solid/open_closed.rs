use crate::domain::model::Topic;
use crate::domain::ports::{Console, Lesson};
use crate::utils::error::Result;
use async_trait::async_trait;

/// New question kinds implement this trait; `render_quiz` never changes.
pub trait Question: Send + Sync {
    fn description(&self) -> &str;
    fn choices(&self) -> Vec<String>;
}

pub struct BooleanQuestion {
    description: String,
}

impl BooleanQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for BooleanQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec!["1. True".to_string(), "2. False".to_string()]
    }
}

pub struct MultipleChoiceQuestion {
    description: String,
    options: Vec<String>,
}

impl MultipleChoiceQuestion {
    pub fn new<I, S>(description: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            description: description.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Question for MultipleChoiceQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {}", index + 1, option))
            .collect()
    }
}

pub struct TextQuestion {
    description: String,
}

impl TextQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for TextQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec!["Answer: __________".to_string()]
    }
}

pub fn render_quiz(questions: &[Box<dyn Question>], console: &dyn Console) {
    for question in questions {
        console.line(question.description());
        for choice in question.choices() {
            console.line(&choice);
        }
        console.blank();
    }
}

pub fn sample_quiz() -> Vec<Box<dyn Question>> {
    vec![
        Box::new(BooleanQuestion::new("This example is great.")),
        Box::new(MultipleChoiceQuestion::new(
            "What is your favourite language?",
            ["JavaScript", "Python", "Ruby", "Java"],
        )),
        Box::new(TextQuestion::new("Describe your favourite JS feature.")),
    ]
}

#[derive(Debug, Default)]
pub struct OpenClosedLesson;

#[async_trait]
impl Lesson for OpenClosedLesson {
    fn name(&self) -> &'static str {
        "solid-ocp"
    }

    fn topic(&self) -> Topic {
        Topic::Solid
    }

    fn summary(&self) -> &'static str {
        "Open/closed: each question type renders its own choices"
    }

    async fn run(&self, console: &dyn Console) -> Result<()> {
        render_quiz(&sample_quiz(), console);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Transcript;

    struct ScaleQuestion {
        description: String,
        max: u8,
    }

    impl Question for ScaleQuestion {
        fn description(&self) -> &str {
            &self.description
        }

        fn choices(&self) -> Vec<String> {
            vec![format!("Answer (1-{}): __", self.max)]
        }
    }

    #[test]
    fn test_multiple_choice_numbering_starts_at_one() {
        let question = MultipleChoiceQuestion::new("Pick one", ["a", "b"]);
        assert_eq!(question.choices(), vec!["1. a", "2. b"]);
    }

    #[test]
    fn test_new_question_kind_without_touching_render_quiz() {
        let transcript = Transcript::new();
        let questions: Vec<Box<dyn Question>> = vec![Box::new(ScaleQuestion {
            description: "How much do you like Rust?".to_string(),
            max: 10,
        })];

        render_quiz(&questions, &transcript);

        assert_eq!(
            transcript.into_lines(),
            vec!["How much do you like Rust?", "Answer (1-10): __", ""]
        );
    }

    #[tokio::test]
    async fn test_lesson_output() {
        let transcript = Transcript::new();
        OpenClosedLesson.run(&transcript).await.unwrap();

        assert_eq!(
            transcript.into_lines(),
            vec![
                "This example is great.",
                "1. True",
                "2. False",
                "",
                "What is your favourite language?",
                "1. JavaScript",
                "2. Python",
                "3. Ruby",
                "4. Java",
                "",
                "Describe your favourite JS feature.",
                "Answer: __________",
                "",
            ]
        );
    }
}
