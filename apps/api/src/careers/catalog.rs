//! Static catalogue of career paths for the explorer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CareerCategory {
    Technology,
    Healthcare,
    Creative,
    Business,
    Government,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: u32,
    pub title: &'static str,
    pub category: CareerCategory,
    pub description: &'static str,
    pub education: &'static [&'static str],
    pub entrance_exams: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub outlook: &'static str,
    pub timeframe: &'static str,
    pub salary: &'static str,
}

pub static CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        id: 1,
        title: "Software Developer",
        category: CareerCategory::Technology,
        description: "Design, develop, and maintain software applications and systems.",
        education: &["B.Tech in Computer Science", "BCA", "B.Sc in Computer Science"],
        entrance_exams: &["JEE Main", "CUET", "State Engineering Entrances"],
        skills: &["Programming", "Problem Solving", "Algorithms", "Software Design"],
        outlook: "Excellent growth potential with high demand across industries",
        timeframe: "4-5 years of education + continuous learning",
        salary: "₹5-25 LPA depending on experience and specialization",
    },
    CareerPath {
        id: 2,
        title: "Data Scientist",
        category: CareerCategory::Technology,
        description: "Analyze and interpret complex data to help organizations make better decisions.",
        education: &["B.Tech + M.Tech", "B.Sc + M.Sc in Statistics/Math", "B.Tech + MBA"],
        entrance_exams: &["JEE Main/Advanced", "CUET", "CAT/MAT for MBA"],
        skills: &["Statistics", "Machine Learning", "Programming", "Data Visualization"],
        outlook: "Rapidly growing field with opportunities across multiple sectors",
        timeframe: "5-6 years of education + specialization",
        salary: "₹8-30 LPA depending on experience and industry",
    },
    CareerPath {
        id: 3,
        title: "Doctor",
        category: CareerCategory::Healthcare,
        description: "Diagnose and treat illnesses, injuries, and other health conditions.",
        education: &["MBBS", "MBBS + MD/MS", "MBBS + DNB"],
        entrance_exams: &["NEET UG", "NEET PG", "AIIMS PG"],
        skills: &["Medical Knowledge", "Critical Thinking", "Communication", "Empathy"],
        outlook: "Stable career with consistent demand and public service opportunities",
        timeframe: "5.5 years (MBBS) + 3 years (specialization)",
        salary: "₹8-80 LPA depending on specialization and sector",
    },
    CareerPath {
        id: 4,
        title: "UX/UI Designer",
        category: CareerCategory::Creative,
        description: "Design user experiences for websites, applications, and products.",
        education: &[
            "Bachelor's in Design",
            "B.Tech + Certification",
            "Bachelor's in Any Field + Specialization",
        ],
        entrance_exams: &["UCEED", "NID DAT", "CEED"],
        skills: &["Visual Design", "User Research", "Prototyping", "Interaction Design"],
        outlook: "Growing demand with the expansion of digital products and services",
        timeframe: "3-4 years education + portfolio building",
        salary: "₹4-25 LPA depending on experience and company",
    },
    CareerPath {
        id: 5,
        title: "Management Consultant",
        category: CareerCategory::Business,
        description: "Help organizations improve performance and solve business problems.",
        education: &["Bachelor's + MBA", "Engineering + MBA", "CA + MBA"],
        entrance_exams: &["CAT", "XAT", "GMAT"],
        skills: &["Problem Solving", "Business Acumen", "Analytics", "Communication"],
        outlook: "Prestigious career path with high earning potential and diverse experiences",
        timeframe: "5-6 years of education including MBA",
        salary: "₹10-40 LPA depending on firm and experience",
    },
    CareerPath {
        id: 6,
        title: "Civil Services Officer",
        category: CareerCategory::Government,
        description: "Implement and oversee government policies and programs.",
        education: &["Bachelor's Degree in Any Discipline", "Optional Master's"],
        entrance_exams: &["UPSC CSE", "State PCS", "UPSC ESE for Engineering Services"],
        skills: &["Administration", "Leadership", "Public Policy", "Communication"],
        outlook: "Highly respected position with job security and social impact",
        timeframe: "3-4 years education + 1-3 years preparation",
        salary: "₹6-15 LPA plus benefits and allowances",
    },
];

pub fn find_career(id: u32) -> Option<&'static CareerPath> {
    CAREER_PATHS.iter().find(|c| c.id == id)
}

/// Careers in `category`, or the whole catalogue when `None`.
pub fn careers_in(category: Option<CareerCategory>) -> Vec<&'static CareerPath> {
    CAREER_PATHS
        .iter()
        .filter(|c| category.map_or(true, |cat| c.category == cat))
        .collect()
}
