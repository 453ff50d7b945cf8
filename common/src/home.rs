//! Static content of the Home view.

use serde::{Deserialize, Serialize};

pub const TITLE: &str = "Govt Exam Preparation Portal";

pub const WELCOME: &str = "Welcome to your one-stop destination for Group 1, Group 2, and Group 3 exam preparation.";

/// Motivational quotes; one is picked for every Home render.
pub const QUOTES: [&str; 5] = [
    "\u{201c}Success is the sum of small efforts, repeated day in and day out.\u{201d} \u{2013} Robert Collier",
    "\u{201c}The future depends on what you do today.\u{201d} \u{2013} Mahatma Gandhi",
    "\u{201c}Push yourself, because no one else is going to do it for you.\u{201d}",
    "\u{201c}Dreams don\u{2019}t work unless you do.\u{201d} \u{2013} John C. Maxwell",
    "\u{201c}Believe you can and you're halfway there.\u{201d} \u{2013} Theodore Roosevelt",
];

pub const FEATURES_MARKDOWN: &str = "\
- **Study Resources**: Download PDFs categorized by Group 1, Group 2, and Group 3.
- **Practice Quizzes**: Attempt MCQs with instant feedback and track your progress.
- **Motivation Hub**: Daily quotes and tips to keep you inspired.
- **Announcements**: Stay updated with exam notifications and syllabus changes.
";

pub const TIP: &str = "Tip: Start with your group\u{2019}s resources, then test yourself with quizzes to measure progress!";

/// Payload of `GET /api/home`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeContent {
    pub title: String,
    pub welcome: String,
    pub quote: String,
    pub features_markdown: String,
    pub tip: String,
}

impl HomeContent {
    pub fn with_quote(quote: &str) -> Self {
        Self {
            title: TITLE.to_string(),
            welcome: WELCOME.to_string(),
            quote: quote.to_string(),
            features_markdown: FEATURES_MARKDOWN.to_string(),
            tip: TIP.to_string(),
        }
    }
}
