//! Static copy for the informational page.
//!
//! The awareness page is fixed prose; rendering and styling belong to the
//! frontend. This module only exposes the structured text.

use serde::Serialize;

/// One titled block of the page.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

/// The whole informational page.
#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub title: &'static str,
    pub sections: &'static [Section],
}

/// The awareness page served at `GET /api/about`.
pub fn about_page() -> AboutPage {
    AboutPage {
        title: "About Sickle Cell Disease",
        sections: SECTIONS,
    }
}

const SECTIONS: &[Section] = &[
    Section {
        heading: "What is sickle cell?",
        paragraphs: &[
            "Sickle Cell Disease (SCD) is a hereditary blood disorder that affects the shape \
             and functionality of red blood cells. Normally, red blood cells are round and \
             flexible, allowing them to flow easily through blood vessels. However, in \
             individuals with SCD, these cells become rigid and shaped like a crescent or \
             \"sickle.\" This abnormal shape can block blood flow, causing severe pain, organ \
             damage, and an increased risk of infection.",
            "SCD is a lifelong condition that requires early diagnosis and proper management \
             to improve the quality of life for affected individuals. Timely intervention can \
             prevent complications and help manage symptoms effectively.",
        ],
    },
    Section {
        heading: "How our platform works",
        paragraphs: &[
            "Our platform harnesses the power of advanced technology to predict the presence \
             of sickle cell disease through uploaded images. Using data-driven insights and a \
             machine learning-based prediction model, our system analyzes specific features \
             from uploaded images to determine whether the condition is present.",
            "Image upload: users upload a relevant image, such as a microscopic view of blood \
             cells.",
            "Prediction: the system processes the image and predicts whether the condition is \
             Sickle Cell or Not Sickle Cell.",
            "Detailed insights: if the prediction indicates Sickle Cell, the platform provides \
             a breakdown of key features contributing to the diagnosis, personalized treatment \
             recommendations, and preventive measures to help manage the condition effectively.",
        ],
    },
    Section {
        heading: "Why use this platform",
        paragraphs: &[
            "Fast and accurate: leverages machine learning to provide a quick and reliable \
             prediction.",
            "Easy to use: upload an image and receive an instant diagnosis and detailed \
             guidance.",
            "Comprehensive support: offers critical information on treatments and precautions \
             for managing SCD.",
        ],
    },
    Section {
        heading: "Treatment options",
        paragraphs: &[
            "1. Pain management techniques.",
            "2. Blood transfusion and medication plans.",
            "3. Advanced options like hydroxyurea and bone marrow transplants.",
        ],
    },
    Section {
        heading: "Precautions",
        paragraphs: &[
            "1. Stay hydrated to reduce the risk of sickling.",
            "2. Avoid extreme temperatures and high altitudes.",
            "3. Maintain regular check-ups and a balanced diet.",
            "Our goal is to empower users with the knowledge and tools they need to take \
             control of their health.",
        ],
    },
];
