use super::domain::{AnswerKind, Category, Question};

/// Fixed question set presented to every publication.
#[derive(Debug)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        Self::new(standard_questions())
    }

    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn questions_for_category(&self, category: Category) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.category == category)
            .collect()
    }

    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        // Journalistic Impact
        Question {
            key: "impact-1",
            category: Category::Impact,
            text: "How frequently does your publication release new content?",
            kind: AnswerKind::MultipleChoice,
            options: vec![
                "Daily",
                "Multiple times per week",
                "Weekly",
                "Bi-weekly",
                "Monthly or less",
            ],
            weight: 1.0,
        },
        Question {
            key: "impact-2",
            category: Category::Impact,
            text: "What is your average monthly readership/viewership?",
            kind: AnswerKind::MultipleChoice,
            options: vec![
                "Over 10,000",
                "5,000-10,000",
                "1,000-5,000",
                "500-1,000",
                "Under 500",
            ],
            weight: 1.5,
        },
        Question {
            key: "impact-3",
            category: Category::Impact,
            text: "How engaged is your audience (comments, shares, feedback)?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.2,
        },
        Question {
            key: "impact-4",
            category: Category::Impact,
            text: "Does your publication cover campus-wide issues that affect students?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.3,
        },
        Question {
            key: "impact-5",
            category: Category::Impact,
            text: "Have you broken any significant stories or investigations in the past year?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.4,
        },
        // Operational Resilience
        Question {
            key: "resilience-1",
            category: Category::Resilience,
            text: "How many active staff members do you have?",
            kind: AnswerKind::MultipleChoice,
            options: vec![
                "20+ members",
                "10-19 members",
                "5-9 members",
                "3-4 members",
                "1-2 members",
            ],
            weight: 1.3,
        },
        Question {
            key: "resilience-2",
            category: Category::Resilience,
            text: "Do you have established editorial workflows and processes?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.2,
        },
        Question {
            key: "resilience-3",
            category: Category::Resilience,
            text: "How reliable is your content production schedule?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.0,
        },
        Question {
            key: "resilience-4",
            category: Category::Resilience,
            text: "Do you have succession planning for leadership roles?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.4,
        },
        Question {
            key: "resilience-5",
            category: Category::Resilience,
            text: "How effectively do you retain staff members across semesters?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.1,
        },
        // Financial Health
        Question {
            key: "financial-1",
            category: Category::Financial,
            text: "What is your primary funding source?",
            kind: AnswerKind::MultipleChoice,
            options: vec![
                "Multiple diverse revenue streams",
                "Student fees + advertising",
                "Student fees only",
                "University funding",
                "No consistent funding",
            ],
            weight: 1.5,
        },
        Question {
            key: "financial-2",
            category: Category::Financial,
            text: "Can you cover basic operational costs (printing, web hosting, equipment)?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.3,
        },
        Question {
            key: "financial-3",
            category: Category::Financial,
            text: "Do you have a budget planning process?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.0,
        },
        Question {
            key: "financial-4",
            category: Category::Financial,
            text: "How sustainable is your current financial model?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.4,
        },
        Question {
            key: "financial-5",
            category: Category::Financial,
            text: "Do you actively seek new revenue opportunities?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.2,
        },
        // Experience & Education
        Question {
            key: "education-1",
            category: Category::Education,
            text: "What percentage of your staff has formal journalism education/training?",
            kind: AnswerKind::MultipleChoice,
            options: vec!["80-100%", "60-79%", "40-59%", "20-39%", "Less than 20%"],
            weight: 1.1,
        },
        Question {
            key: "education-2",
            category: Category::Education,
            text: "Do you provide regular training and skill development for staff?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.3,
        },
        Question {
            key: "education-3",
            category: Category::Education,
            text: "How experienced is your editorial leadership?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.4,
        },
        Question {
            key: "education-4",
            category: Category::Education,
            text: "Do you have mentorship programs or faculty advisors?",
            kind: AnswerKind::Boolean,
            options: Vec::new(),
            weight: 1.2,
        },
        Question {
            key: "education-5",
            category: Category::Education,
            text: "How well do you understand media law and ethics?",
            kind: AnswerKind::Scale,
            options: Vec::new(),
            weight: 1.5,
        },
    ]
}
