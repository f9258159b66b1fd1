//! Offline recommendation path: keyword counting plus canned bundles.
//!
//! Deterministic for a given answer set; used whenever the remote
//! generator is unavailable, times out or returns something unusable.

use crate::assessment::normalizer::NormalizedAnswer;
use crate::assessment::questions::Tier;
use crate::recommendation::models::{
    CategoryTally, GenerationOutcome, InterestCategory, InterestProfile, Recommendation,
    RecommendationSource,
};
use crate::recommendation::tables::{advanced_bundle, entry_bundle};

/// Counts, for each category, how many answers mention at least one of its
/// keywords (case-insensitive substring match).
pub fn profile_interests(answers: &[NormalizedAnswer]) -> InterestProfile {
    let mut tallies: Vec<CategoryTally> = InterestCategory::ALL
        .iter()
        .map(|&category| CategoryTally { category, count: 0 })
        .collect();

    for answer in answers {
        let lowered = answer.answer.to_lowercase();
        for tally in tallies.iter_mut() {
            if tally
                .category
                .keywords()
                .iter()
                .any(|kw| lowered.contains(kw))
            {
                tally.count += 1;
            }
        }
    }

    let analytical = tallies
        .iter()
        .find(|t| t.category == InterestCategory::Science)
        .map_or(0, |t| t.count);

    // Strictly-greater keeps the first category on ties; all-zero stays Science.
    let mut primary = InterestCategory::Science;
    let mut best = 0;
    for tally in &tallies {
        if tally.count > best {
            best = tally.count;
            primary = tally.category;
        }
    }

    InterestProfile {
        analytical,
        tallies,
        primary,
    }
}

pub fn recommend_for(tier: Tier, category: InterestCategory) -> Recommendation {
    match tier {
        Tier::Entry => Recommendation::Entry(entry_bundle(category)),
        Tier::Advanced => Recommendation::Advanced(advanced_bundle(category)),
    }
}

/// Full heuristic outcome, optionally carrying a fallback notice.
pub fn heuristic_outcome(
    tier: Tier,
    answers: &[NormalizedAnswer],
    notice: Option<&str>,
) -> GenerationOutcome {
    let profile = profile_interests(answers);
    GenerationOutcome {
        recommendation: recommend_for(tier, profile.primary),
        source: RecommendationSource::Heuristic,
        interest: Some(profile),
        notice: notice.map(str::to_string),
    }
}
