use super::{AnswerPayload, AnswerSource, ChatRequest, ExchangeError};

/// Keyword → answer table, checked in order; the first topic with a keyword
/// contained in the lowercased question wins.
const TOPICS: &[(&[&str], &str)] = &[
    (
        &["medicine", "medical"],
        "For Medicine at OAU, you'll need excellent grades in Biology, Chemistry, Physics, and English. The UTME cutoff mark is typically 200+, and you'll need to pass the Post-UTME screening. The course duration is 6 years. Would you like to know more about the application process or other requirements?",
    ),
    (
        &["apply", "application"],
        "To apply to OAU, you need to: 1) Register for UTME through JAMB, 2) Choose OAU as your first choice, 3) Meet the cutoff mark, 4) Register for Post-UTME screening, 5) Submit required documents. The application portal usually opens in March-April. Do you need help with any specific step?",
    ),
    (
        &["course", "program"],
        "OAU offers a wide range of courses across faculties including Arts, Sciences, Engineering, Law, Medicine, Agriculture, and more. Popular programs include Medicine, Law, Engineering, Computer Science, and Business Administration. What specific field interests you?",
    ),
    (
        &["campus", "life"],
        "OAU has a vibrant campus life! The university is located in Ile-Ife, Osun State, known for its beautiful campus with modern facilities. There are numerous student clubs, sports facilities, libraries, and cultural activities. The campus is safe and student-friendly. Would you like to know about accommodation options?",
    ),
    (
        &["scholarship", "financial"],
        "OAU offers various scholarships and financial aid options including merit-based scholarships, need-based grants, and external funding opportunities. There are also government scholarships like the Federal Government Scholarship Scheme. The financial aid office can help you explore all available options.",
    ),
    (
        &["requirement", "cutoff"],
        "Admission requirements vary by course, but generally include: 5 credits in relevant subjects (including English and Math), minimum UTME score (varies by course), and passing the Post-UTME screening. Some competitive courses like Medicine have higher requirements. What course are you interested in?",
    ),
];

const DEFAULT_ANSWER: &str = "Thank you for your question! I'm here to help you with any information about OAU admission, courses, campus life, or application processes. Could you please be more specific about what you'd like to know?";

/// An [`AnswerSource`] that answers from a fixed keyword table.
///
/// Stands in for the real backend in demos and tests. Answers arrive as the
/// detailed answer; the summary is the answer's first sentence.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedAnswers;

impl CannedAnswers {
    /// The canned text for `question`.
    pub fn answer_for(question: &str) -> &'static str {
        let lower = question.to_lowercase();
        TOPICS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map_or(DEFAULT_ANSWER, |&(_, answer)| answer)
    }
}

impl AnswerSource for CannedAnswers {
    fn ask(&self, request: &ChatRequest) -> Result<AnswerPayload, ExchangeError> {
        request.validate()?;
        let answer = Self::answer_for(&request.message);
        let summary = answer
            .split_inclusive(['.', '!', '?'])
            .next()
            .unwrap_or(answer)
            .trim();
        Ok(AnswerPayload {
            detailed_answer: Some(answer.to_string()),
            summary: Some(summary.to_string()),
        })
    }
}
