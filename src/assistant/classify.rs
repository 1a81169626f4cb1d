use super::topic::Topic;

/// Ordered trigger table. First containing match wins; order is the
/// original response chain's order and is load-bearing (an input holding
/// both "platform" and "care" resolves to Care).
///
/// Matching is plain case-insensitive substring containment — no
/// tokenization, no stemming, no ranking.
const TRIGGERS: &[(&str, Topic)] = &[
    ("care", Topic::Care),
    ("symptoms", Topic::Symptoms),
    ("predict", Topic::Prediction),
    ("treatment", Topic::Treatment),
    ("precaution", Topic::Precaution),
    ("causes", Topic::Causes),
    ("complications", Topic::Complications),
    ("genetics", Topic::Genetics),
    ("diet", Topic::Diet),
    ("exercise", Topic::Exercise),
    ("screening", Topic::Screening),
    ("how to use this system", Topic::PlatformUsage),
    ("platform", Topic::PlatformUsage),
    ("mental health", Topic::MentalHealth),
    ("support groups", Topic::SupportGroups),
    ("vaccinations", Topic::Vaccination),
    ("childbirth", Topic::Pregnancy),
    ("travel tips", Topic::Travel),
    ("pain management", Topic::PainManagement),
    ("school and work", Topic::SchoolWork),
    ("emergency", Topic::Emergency),
];

/// Classify a free-text query into a [`Topic`] using keyword triggers.
///
/// Total and pure: every input maps to exactly one topic, and the same
/// input always maps to the same topic. Inputs matching no trigger
/// (including empty input) map to [`Topic::Unmatched`].
pub fn classify(text: &str) -> Topic {
    let lower = text.to_lowercase();

    for (trigger, topic) in TRIGGERS {
        if lower.contains(trigger) {
            return *topic;
        }
    }

    Topic::Unmatched
}
