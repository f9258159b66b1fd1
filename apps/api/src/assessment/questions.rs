//! Question Bank — the static, ordered catalogue of assessment questions.
//!
//! Question ids are unique and ordering-significant: the controller walks a
//! tier's questions in ascending id order.

use serde::{Deserialize, Serialize};

/// Label of the sentinel option that unlocks a free-text supplement.
pub const OTHER_LABEL: &str = "Other";

/// One of the two independent assessment variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Class 10 stream selector.
    #[serde(alias = "class10")]
    Entry,
    /// Class 12 degree and career path finder.
    #[serde(alias = "class12")]
    Advanced,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Entry => "entry",
            Tier::Advanced => "advanced",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::Entry => "Class 10 Stream Selection",
            Tier::Advanced => "Class 12 Career Planning",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerShape {
    Single,
    Multiple,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
}

impl AnswerOption {
    pub fn is_other(&self) -> bool {
        self.label == OTHER_LABEL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    pub category: &'static str,
    pub tier: Tier,
    pub shape: AnswerShape,
    pub options: &'static [AnswerOption],
}

impl Question {
    pub fn option(&self, option_id: &str) -> Option<&'static AnswerOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// Resolves an option id to its label, falling back to the raw id.
    pub fn option_label<'a>(&self, option_id: &'a str) -> &'a str {
        self.option(option_id).map(|o| o.label).unwrap_or(option_id)
    }

    pub fn has_option(&self, option_id: &str) -> bool {
        self.option(option_id).is_some()
    }

    /// True when `option_id` names this question's "Other" sentinel.
    pub fn is_other(&self, option_id: &str) -> bool {
        self.option(option_id).is_some_and(AnswerOption::is_other)
    }
}

/// An ordered view over a static question catalogue.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    /// The bank shipped with the product.
    pub const fn standard() -> Self {
        Self::new(STANDARD_QUESTIONS)
    }

    pub fn get(&self, id: u32) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// The tier's questions in ascending id order.
    pub fn for_tier(&self, tier: Tier) -> Vec<&'static Question> {
        let mut filtered: Vec<&'static Question> =
            self.questions.iter().filter(|q| q.tier == tier).collect();
        filtered.sort_by_key(|q| q.id);
        filtered
    }
}

const fn opt(id: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption { id, label }
}

const HOBBY_OPTIONS: &[AnswerOption] = &[
    opt("a", "Reading/Writing"),
    opt("b", "Sports/Fitness"),
    opt("c", "Art/Drawing/Painting"),
    opt("d", "Music/Playing instruments"),
    opt("e", "Programming/Coding"),
    opt("f", "Building/Making things"),
    opt("g", "Debating/Public speaking"),
    opt("h", "Social media/Content creation"),
    opt("i", "Gaming"),
    opt("j", "Community service/Volunteering"),
    opt("k", "Cooking/Baking"),
    opt("l", "Nature/Gardening"),
    opt("m", OTHER_LABEL),
];

pub static STANDARD_QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        prompt: "Which subjects do you enjoy the most?",
        category: "interests",
        tier: Tier::Entry,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "Mathematics"),
            opt("b", "Physics"),
            opt("c", "Chemistry"),
            opt("d", "Biology"),
            opt("e", "Computer Science"),
            opt("f", "History"),
            opt("g", "Geography"),
            opt("h", "Political Science"),
            opt("i", "Economics"),
            opt("j", "Languages & Literature"),
            opt("k", "Art & Design"),
            opt("l", "Music"),
            opt("m", "Physical Education"),
            opt("n", OTHER_LABEL),
        ],
    },
    Question {
        id: 2,
        prompt: "Are you interested in how the human body works?",
        category: "interests",
        tier: Tier::Entry,
        shape: AnswerShape::Single,
        options: &[
            opt("a", "Very interested, I read about biology and health often"),
            opt("b", "Somewhat interested in human biology and health"),
            opt("c", "Only interested in specific aspects of human biology"),
            opt("d", "Not particularly interested in biology or health sciences"),
        ],
    },
    Question {
        id: 3,
        prompt: "What are your hobbies or interests?",
        category: "interests",
        tier: Tier::Entry,
        shape: AnswerShape::Multiple,
        options: HOBBY_OPTIONS,
    },
    Question {
        id: 4,
        prompt: "Additional interests (please specify)",
        category: "interests",
        tier: Tier::Entry,
        shape: AnswerShape::Text,
        options: &[],
    },
    Question {
        id: 5,
        prompt: "How do you prefer to learn new information?",
        category: "learning_style",
        tier: Tier::Entry,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "Reading books and articles"),
            opt("b", "Watching videos or demonstrations"),
            opt("c", "Hands-on practice and experiments"),
            opt("d", "Listening to lectures or audiobooks"),
            opt("e", "Group discussions and collaboration"),
            opt("f", "Teaching others what I've learned"),
        ],
    },
    Question {
        id: 6,
        prompt: "What kind of books or articles do you prefer reading?",
        category: "interests",
        tier: Tier::Entry,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "Science fiction/Fantasy"),
            opt("b", "Mystery/Thriller"),
            opt("c", "Biography/History"),
            opt("d", "Science/Technology"),
            opt("e", "Business/Finance"),
            opt("f", "Self-help/Psychology"),
            opt("g", "Comics/Graphic novels"),
            opt("h", "Poetry/Literature"),
            opt("i", "News/Current affairs"),
            opt("j", "I don't enjoy reading"),
            opt("k", OTHER_LABEL),
        ],
    },
    Question {
        id: 7,
        prompt: "What stream did you study in 11th and 12th?",
        category: "background",
        tier: Tier::Advanced,
        shape: AnswerShape::Single,
        options: &[
            opt("a", "Science (PCM - Physics, Chemistry, Math)"),
            opt("b", "Science (PCB - Physics, Chemistry, Biology)"),
            opt("c", "Science (PCMB - Physics, Chemistry, Math, Biology)"),
            opt("d", "Commerce with Math"),
            opt("e", "Commerce without Math"),
            opt("f", "Arts/Humanities"),
            opt("g", "Vocational"),
            opt("h", OTHER_LABEL),
        ],
    },
    Question {
        id: 8,
        prompt: "Are you currently preparing for any competitive exam?",
        category: "preparation",
        tier: Tier::Advanced,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "JEE (Engineering)"),
            opt("b", "NEET (Medical)"),
            opt("c", "CLAT (Law)"),
            opt("d", "CUET/Other University Entrance Exams"),
            opt("e", "CA Foundation"),
            opt("f", "NDA"),
            opt("g", "Design Entrance (NIFT/NID/UCEED)"),
            opt("h", "State-level Engineering/Medical Exams"),
            opt("i", "Not preparing for any specific exam"),
            opt("j", OTHER_LABEL),
        ],
    },
    Question {
        id: 9,
        prompt: "What are your hobbies or interests?",
        category: "interests",
        tier: Tier::Advanced,
        shape: AnswerShape::Multiple,
        options: HOBBY_OPTIONS,
    },
    Question {
        id: 10,
        prompt: "Additional interests (please specify)",
        category: "interests",
        tier: Tier::Advanced,
        shape: AnswerShape::Text,
        options: &[],
    },
    Question {
        id: 11,
        prompt: "What type of work environment do you prefer?",
        category: "preferences",
        tier: Tier::Advanced,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "Corporate/Private sector"),
            opt("b", "Government/Public sector"),
            opt("c", "Research/Academic environment"),
            opt("d", "Healthcare/Hospital setting"),
            opt("e", "Freelance/Self-employed"),
            opt("f", "Startup/Entrepreneurial setting"),
            opt("g", "Non-profit/NGO"),
            opt("h", "Field work/Outdoor environment"),
            opt("i", "Creative studio/Agency"),
            opt("j", "Remote/Work from home"),
        ],
    },
    Question {
        id: 12,
        prompt: "What are your location preferences for study/work?",
        category: "preferences",
        tier: Tier::Advanced,
        shape: AnswerShape::Multiple,
        options: &[
            opt("a", "Major metro cities (Delhi, Mumbai, Bangalore, etc.)"),
            opt("b", "Tier 2 cities (Pune, Jaipur, Lucknow, etc.)"),
            opt("c", "Smaller towns"),
            opt("d", "Rural areas"),
            opt("e", "Abroad/International"),
            opt("f", "No specific preference - flexible with location"),
            opt("g", OTHER_LABEL),
        ],
    },
];
