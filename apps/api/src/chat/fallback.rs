//! Canned counsellor replies used when the relay cannot reach the model.

use rand::Rng;

pub const CANNED_REPLIES: [&str; 6] = [
    "Based on your interests, engineering might be a great path for you. Top engineering entrance exams in India include JEE Main, JEE Advanced, and BITSAT. I recommend starting preparation at least 1-2 years in advance with NCERT books as your foundation.",
    "For medical aspirants, NEET-UG is the primary entrance exam in India. Besides MBBS, you might consider BDS, BAMS, or allied health sciences. For preparation, focus on NCERT textbooks and solve previous years' papers.",
    "Commerce offers diverse career paths like CA, CS, CMA, or MBA. For CA, register with ICAI and prepare for foundation exams. For MBA, aim for CAT, XAT, or NMAT after graduation. DU, SRCC, and Christ University offer excellent BCom programs.",
    "If you're interested in humanities or social sciences, consider DU, JNU, or Ashoka University. Prepare for CUET for admission to central universities. Career options include civil services (prepare for UPSC), law (take CLAT), journalism, or psychology.",
    "For computer science careers, focus on building practical skills alongside your degree. Consider BTech CSE (through JEE), BCA, or BSc Computer Science programs. Develop coding skills through platforms like Coursera, edX, or Codecademy.",
    "When choosing a stream after 10th, consider your interests and aptitude rather than peer pressure. Science opens doors to engineering, medicine, and research; Commerce to business, finance, and economics; Arts to law, civil services, and creative fields.",
];

/// Keyword → index into `CANNED_REPLIES`, in tie-break order.
const KEYWORDS: &[(&str, usize)] = &[
    ("engineer", 0),
    ("jee", 0),
    ("tech", 0),
    ("doctor", 1),
    ("medical", 1),
    ("neet", 1),
    ("commerce", 2),
    ("business", 2),
    ("accountant", 2),
    ("ca", 2),
    ("arts", 3),
    ("humanities", 3),
    ("social", 3),
    ("program", 4),
    ("coding", 4),
    ("computer", 4),
    ("software", 4),
    ("10th", 5),
    ("stream", 5),
    ("choose", 5),
];

/// Keywords shorter than this only match whole words.
const MIN_SUBSTRING_KEYWORD_LEN: usize = 3;

fn occurrences(haystack: &str, keyword: &str) -> usize {
    if keyword.len() < MIN_SUBSTRING_KEYWORD_LEN {
        haystack
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| *word == keyword)
            .count()
    } else {
        haystack.matches(keyword).count()
    }
}

/// Index of the best keyword match: highest occurrence count, earliest
/// keyword on ties. `None` when nothing matches.
pub fn match_reply(prompt: &str) -> Option<usize> {
    let lowered = prompt.to_lowercase();
    let mut best: Option<(usize, usize)> = None;
    for &(keyword, index) in KEYWORDS {
        let count = occurrences(&lowered, keyword);
        if count > best.map_or(0, |(score, _)| score) {
            best = Some((count, index));
        }
    }
    best.map(|(_, index)| index)
}

/// Picks a canned reply for `prompt`; uniformly random when no keyword matches.
pub fn canned_reply<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> &'static str {
    let index = match_reply(prompt).unwrap_or_else(|| rng.gen_range(0..CANNED_REPLIES.len()));
    CANNED_REPLIES[index]
}
