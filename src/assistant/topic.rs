use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown topic label.
#[derive(Debug, thiserror::Error)]
#[error("unknown topic: {0}")]
pub struct UnknownTopic(pub String);

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownTopic;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(UnknownTopic(s.into())),
                }
            }
        }
    };
}

str_enum!(Topic {
    Care => "care",
    Symptoms => "symptoms",
    Prediction => "prediction",
    Treatment => "treatment",
    Precaution => "precaution",
    Causes => "causes",
    Complications => "complications",
    Genetics => "genetics",
    Diet => "diet",
    Exercise => "exercise",
    Screening => "screening",
    PlatformUsage => "platform_usage",
    MentalHealth => "mental_health",
    SupportGroups => "support_groups",
    Vaccination => "vaccination",
    Pregnancy => "pregnancy",
    Travel => "travel",
    PainManagement => "pain_management",
    SchoolWork => "school_work",
    Emergency => "emergency",
    Unmatched => "unmatched",
});

impl Topic {
    /// Every topic the assistant can address, in trigger priority order,
    /// excluding the fallback.
    pub fn all_addressable() -> &'static [Topic] {
        &[
            Topic::Care,
            Topic::Symptoms,
            Topic::Prediction,
            Topic::Treatment,
            Topic::Precaution,
            Topic::Causes,
            Topic::Complications,
            Topic::Genetics,
            Topic::Diet,
            Topic::Exercise,
            Topic::Screening,
            Topic::PlatformUsage,
            Topic::MentalHealth,
            Topic::SupportGroups,
            Topic::Vaccination,
            Topic::Pregnancy,
            Topic::Travel,
            Topic::PainManagement,
            Topic::SchoolWork,
            Topic::Emergency,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn as_str_round_trips() {
        for topic in Topic::all_addressable() {
            assert_eq!(Topic::from_str(topic.as_str()).unwrap(), *topic);
        }
        assert_eq!(Topic::from_str("unmatched").unwrap(), Topic::Unmatched);
    }

    #[test]
    fn unknown_label_is_error() {
        assert!(Topic::from_str("telepathy").is_err());
    }

    #[test]
    fn addressable_excludes_fallback() {
        assert!(!Topic::all_addressable().contains(&Topic::Unmatched));
        assert_eq!(Topic::all_addressable().len(), 20);
    }
}
