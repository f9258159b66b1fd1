//! Canned recommendation bundles keyed by interest category.

use crate::recommendation::models::{
    AdvancedRecommendation, EntryRecommendation, InterestCategory, NamedSuggestion,
};

struct EntryRow {
    stream: &'static str,
    alternate: &'static str,
    core: &'static str,
    optional: &'static str,
    boards: [&'static str; 3],
}

struct AdvancedRow {
    degrees: [(&'static str, &'static str); 3],
    careers: [(&'static str, &'static str); 3],
    exams: &'static str,
    tips: [&'static str; 4],
}

fn entry_row(category: InterestCategory) -> &'static EntryRow {
    match category {
        InterestCategory::Science => &EntryRow {
            stream: "Science",
            alternate: "Commerce",
            core: "Physics, Chemistry, Mathematics, English",
            optional: "Computer Science or Biology",
            boards: [
                "CBSE - Good for competitive exam preparation",
                "ICSE - Strong focus on English and practical learning",
                "State Board - If you plan to apply for state colleges",
            ],
        },
        InterestCategory::Arts => &EntryRow {
            stream: "Arts",
            alternate: "Humanities",
            core: "English, History, Fine Arts, Psychology",
            optional: "Music, Painting or Media Studies",
            boards: [
                "CBSE - Wide choice of creative and applied electives",
                "ICSE - Strong focus on English, literature and the arts",
                "State Board - If you plan to apply for state art colleges",
            ],
        },
        InterestCategory::Commerce => &EntryRow {
            stream: "Commerce",
            alternate: "Science",
            core: "Accountancy, Business Studies, Economics, English",
            optional: "Mathematics or Informatics Practices",
            boards: [
                "CBSE - Good for CA Foundation and CUET preparation",
                "ICSE - Strong focus on English and commercial studies",
                "State Board - If you plan to apply for state commerce colleges",
            ],
        },
        InterestCategory::Humanities => &EntryRow {
            stream: "Humanities",
            alternate: "Arts",
            core: "History, Political Science, Sociology, English",
            optional: "Psychology or Geography",
            boards: [
                "CBSE - Good for CUET and CLAT preparation",
                "ICSE - Strong focus on English and analytical writing",
                "State Board - If you plan to apply for state universities",
            ],
        },
    }
}

fn advanced_row(category: InterestCategory) -> &'static AdvancedRow {
    match category {
        InterestCategory::Science => &AdvancedRow {
            degrees: [
                (
                    "B.Tech Computer Science",
                    "Strong match based on your interests in technology",
                ),
                (
                    "B.Sc Data Science",
                    "Good option combining technology and analytics",
                ),
                (
                    "BCA (Bachelor of Computer Applications)",
                    "Alternative option with more flexibility",
                ),
            ],
            careers: [
                (
                    "Software Development",
                    "Building applications, websites, and systems",
                ),
                (
                    "Data Science & Analytics",
                    "Analyzing data to derive insights and make predictions",
                ),
                (
                    "Cybersecurity",
                    "Protecting systems and data from digital attacks",
                ),
            ],
            exams: "JEE Main, CUET, MHT-CET (for Maharashtra)",
            tips: [
                "Start JEE preparation at least 1-2 years before the exam",
                "Focus on NCERT textbooks and standard reference books",
                "Join a coaching program or use online resources",
                "Practice with previous years' question papers",
            ],
        },
        InterestCategory::Arts => &AdvancedRow {
            degrees: [
                (
                    "B.Des (Bachelor of Design)",
                    "Strong match for your creative and visual interests",
                ),
                (
                    "BFA (Bachelor of Fine Arts)",
                    "Focused training in painting, sculpture and applied art",
                ),
                (
                    "BA Mass Communication",
                    "Combines storytelling with media production",
                ),
            ],
            careers: [
                (
                    "UX/UI Design",
                    "Designing intuitive digital products and interfaces",
                ),
                (
                    "Graphic & Visual Design",
                    "Creating brand identities, illustrations and layouts",
                ),
                (
                    "Content Creation & Media",
                    "Producing video, writing and social media content",
                ),
            ],
            exams: "NID DAT, NIFT, UCEED, CUET",
            tips: [
                "Build a portfolio of your best creative work",
                "Practise sketching and observation drawing daily",
                "Solve previous years' NID and UCEED papers",
                "Follow design studios and critique their work",
            ],
        },
        InterestCategory::Commerce => &AdvancedRow {
            degrees: [
                (
                    "B.Com (Hons)",
                    "Strong match for your interest in business and finance",
                ),
                (
                    "BBA (Bachelor of Business Administration)",
                    "Broad grounding in management and entrepreneurship",
                ),
                (
                    "BMS (Bachelor of Management Studies)",
                    "Alternative option with a focus on analytics and strategy",
                ),
            ],
            careers: [
                (
                    "Chartered Accountancy",
                    "Auditing, taxation and financial reporting",
                ),
                (
                    "Investment Banking & Finance",
                    "Managing capital, deals and financial markets",
                ),
                (
                    "Management Consulting",
                    "Helping organisations solve business problems",
                ),
            ],
            exams: "CUET, IPMAT, CA Foundation, NPAT",
            tips: [
                "Register for CA Foundation early if you plan to pursue CA",
                "Strengthen quantitative aptitude and logical reasoning",
                "Read business news and annual reports regularly",
                "Practice with previous years' question papers",
            ],
        },
        InterestCategory::Humanities => &AdvancedRow {
            degrees: [
                (
                    "BA Psychology",
                    "Strong match for your interest in people and behaviour",
                ),
                (
                    "BA LLB (Integrated Law)",
                    "Five-year programme combining humanities and law",
                ),
                (
                    "BA Political Science",
                    "Foundation for public policy and civil services",
                ),
            ],
            careers: [
                (
                    "Civil Services",
                    "Administering public policy through IAS, IPS or IFS",
                ),
                ("Law", "Advising clients and arguing cases in court"),
                (
                    "Counselling Psychology",
                    "Supporting mental health and personal growth",
                ),
            ],
            exams: "CLAT, CUET, AILET",
            tips: [
                "Read a national newspaper daily for current affairs",
                "Practise reading comprehension and legal reasoning",
                "Write short essays to sharpen your arguments",
                "Practice with previous years' question papers",
            ],
        },
    }
}

pub fn entry_bundle(category: InterestCategory) -> EntryRecommendation {
    let row = entry_row(category);
    EntryRecommendation {
        recommended_stream: row.stream.to_string(),
        alternate_stream: row.alternate.to_string(),
        core_subjects: row.core.to_string(),
        optional_subjects: row.optional.to_string(),
        board_recommendations: row.boards.iter().map(|b| b.to_string()).collect(),
    }
}

pub fn advanced_bundle(category: InterestCategory) -> AdvancedRecommendation {
    let row = advanced_row(category);
    AdvancedRecommendation {
        recommended_degrees: named(&row.degrees),
        career_paths: named(&row.careers),
        entrance_exams: row.exams.to_string(),
        preparation_tips: row.tips.iter().map(|t| t.to_string()).collect(),
    }
}

fn named(pairs: &[(&str, &str)]) -> Vec<NamedSuggestion> {
    pairs
        .iter()
        .map(|(name, description)| NamedSuggestion::new(name, description))
        .collect()
}
