use super::topic::Topic;

/// Static Topic → canned paragraph table. No side effects, no computation.
///
/// Texts are the informational copy shipped with the awareness page; the
/// fallback covers [`Topic::Unmatched`].
pub fn response_for(topic: Topic) -> &'static str {
    match topic {
        Topic::Care => {
            "Caring for someone with Sickle Cell Disease involves regular medical checkups, \
             managing pain, staying hydrated, and avoiding extreme temperatures. Ensure they \
             take prescribed medications and maintain a healthy lifestyle. Encourage regular \
             communication with healthcare providers."
        }
        Topic::Symptoms => {
            "Common symptoms of Sickle Cell Disease include episodes of pain (called sickle \
             cell crises), fatigue, swelling in hands and feet, frequent infections, and \
             delayed growth or puberty. If these occur, consult a doctor."
        }
        Topic::Prediction => {
            "Prediction typically involves analyzing blood smear images for abnormalities in \
             red blood cell shape or using genetic testing. Our app can analyze uploaded \
             images to assess the likelihood of Sickle Cell Disease."
        }
        Topic::Treatment => {
            "Treatment for Sickle Cell Disease includes medications like hydroxyurea, blood \
             transfusions, and in severe cases, bone marrow transplants. Pain management and \
             infection prevention are also crucial parts of treatment."
        }
        Topic::Precaution => {
            "Here are some precautions for Sickle Cell Disease:\n\
             - Stay hydrated to reduce the risk of cell sickling.\n\
             - Avoid extreme temperatures (both hot and cold).\n\
             - Maintain a balanced diet and regular medical check-ups.\n\
             - Avoid high altitudes to reduce oxygen deprivation.\n\
             - Manage stress levels as it can trigger sickling episodes.\n\
             - Get sufficient rest and sleep for the body to recover.\n\
             - Avoid smoking and limit alcohol consumption to prevent complications."
        }
        Topic::Causes => {
            "Sickle Cell Disease is caused by a mutation in the HBB gene, which affects the \
             production of hemoglobin. This results in red blood cells becoming rigid and \
             sickle-shaped, leading to blockages in blood flow."
        }
        Topic::Complications => {
            "Complications of Sickle Cell Disease can include stroke, acute chest syndrome, \
             organ damage, chronic pain, and vision problems. Prompt treatment and preventive \
             care can help manage these risks."
        }
        Topic::Genetics => {
            "Sickle Cell Disease is inherited in an autosomal recessive pattern. A person \
             must inherit two defective copies of the HBB gene, one from each parent, to \
             develop the disease. If they inherit one copy, they are a carrier (sickle cell \
             trait)."
        }
        Topic::Diet => {
            "A healthy diet for someone with Sickle Cell Disease includes foods rich in folic \
             acid, iron, vitamins, and minerals. Focus on fruits, vegetables, lean proteins, \
             whole grains, and staying hydrated."
        }
        Topic::Exercise => {
            "Exercise is beneficial, but people with Sickle Cell Disease should avoid \
             overexertion and dehydration. Low-impact activities like walking, swimming, or \
             yoga are generally safe."
        }
        Topic::Screening => {
            "Newborn screening is a common way to detect Sickle Cell Disease early. This \
             involves a simple blood test. Prenatal genetic testing can also identify the \
             condition before birth."
        }
        Topic::PlatformUsage => {
            "1. First upload a clear microscopic image of your blood cells.\n\
             2. Then you get the result prediction.\n\
             3. If you want information about precautions or treatments, click on the \
             precaution or treatment button."
        }
        Topic::MentalHealth => {
            "Living with Sickle Cell Disease can affect mental health due to chronic pain and \
             stress. Support from mental health professionals, counseling, and connecting \
             with support groups can help."
        }
        Topic::SupportGroups => {
            "Support groups can provide emotional and social support for individuals with \
             Sickle Cell Disease and their families. Connecting with others who share similar \
             experiences can be very helpful."
        }
        Topic::Vaccination => {
            "Vaccinations are crucial for individuals with Sickle Cell Disease, as they are \
             more prone to infections. Stay updated on vaccines like influenza, pneumococcal, \
             and meningococcal vaccines."
        }
        Topic::Pregnancy => {
            "Pregnancy with Sickle Cell Disease requires special care to reduce risks to both \
             the mother and baby. Regular monitoring and consultation with a specialist are \
             important."
        }
        Topic::Travel => {
            "When traveling with Sickle Cell Disease, avoid high altitudes, stay hydrated, \
             and carry medical records. Ensure you have access to medical care at your \
             destination and take medications as prescribed."
        }
        Topic::PainManagement => {
            "Pain management in Sickle Cell Disease includes medications such as NSAIDs, \
             opioids for severe pain, and other strategies like warm compresses, hydration, \
             and relaxation techniques."
        }
        Topic::SchoolWork => {
            "Children and adults with Sickle Cell Disease may need accommodations at school \
             or work to manage fatigue and pain. Open communication with teachers or \
             employers can help create a supportive environment."
        }
        Topic::Emergency => {
            "Seek immediate medical attention if someone with Sickle Cell Disease experiences \
             severe chest pain, difficulty breathing, stroke symptoms, or extreme fatigue. \
             These could be signs of life-threatening complications."
        }
        Topic::Unmatched => {
            "I'm here to help with your queries about Sickle Cell Disease! Please ask about \
             symptoms, care, prediction, or treatments for specific answers."
        }
    }
}
