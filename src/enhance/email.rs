//! Email rewriting. Signal detection is deterministic keyword/length
//! testing; the supplied random source is consumed only for subject,
//! greeting, closing, and transition selection.

use rand::Rng;
use serde::Serialize;

const URGENT_KEYWORDS: &[&str] = &["urgent", "asap", "immediately", "critical", "emergency"];
const REQUEST_KEYWORDS: &[&str] = &["please", "could you", "would you", "can you", "request"];
const FOLLOW_UP_KEYWORDS: &[&str] = &["follow up", "following up", "checking in", "reminder"];
const THANK_YOU_KEYWORDS: &[&str] = &["thank", "thanks", "appreciate", "grateful"];
const MEETING_KEYWORDS: &[&str] = &["meeting", "call", "schedule", "calendar", "availability"];
const FORMAL_KEYWORDS: &[&str] = &["dear", "sincerely", "regards", "to whom it may concern"];

/// Messages longer than this read as formal correspondence even without
/// formal phrasing.
const FORMAL_LENGTH_THRESHOLD: usize = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailSignals {
    pub urgent: bool,
    pub request: bool,
    pub follow_up: bool,
    pub thank_you: bool,
    pub meeting: bool,
    pub formal: bool,
}

pub fn analyze_email(content: &str) -> EmailSignals {
    let text = content.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    EmailSignals {
        urgent: contains_any(URGENT_KEYWORDS),
        request: contains_any(REQUEST_KEYWORDS),
        follow_up: contains_any(FOLLOW_UP_KEYWORDS),
        thank_you: contains_any(THANK_YOU_KEYWORDS),
        meeting: contains_any(MEETING_KEYWORDS),
        formal: contains_any(FORMAL_KEYWORDS) || text.len() > FORMAL_LENGTH_THRESHOLD,
    }
}

const SUBJECTS_URGENT: &[&str] = &[
    "Time-Sensitive: Action Needed",
    "Urgent: Your Attention Required",
    "Quick Response Needed",
];
const SUBJECTS_MEETING: &[&str] = &[
    "Scheduling a Time to Connect",
    "Meeting Request",
    "Finding Time on Our Calendars",
];
const SUBJECTS_FOLLOW_UP: &[&str] = &[
    "Following Up on Our Conversation",
    "Checking In",
    "A Quick Follow-Up",
];
const SUBJECTS_THANK_YOU: &[&str] = &[
    "Thank You",
    "With Appreciation",
    "Grateful for Your Help",
];
const SUBJECTS_REQUEST: &[&str] = &[
    "A Quick Request",
    "Requesting Your Input",
    "Your Help Would Be Appreciated",
];
const SUBJECTS_GENERAL: &[&str] = &[
    "A Quick Note",
    "Touching Base",
    "An Update for You",
];

const GREETINGS_FORMAL: &[&str] = &["Dear colleague,", "Good day,", "Hello,"];
const GREETINGS_CASUAL: &[&str] = &["Hi there,", "Hello,", "Hi,"];

const CLOSINGS_FORMAL: &[&str] = &["Kind regards,", "Sincerely,", "Best regards,"];
const CLOSINGS_CASUAL: &[&str] = &["Best,", "Thanks,", "Cheers,"];

const TRANSITIONS: &[&str] = &[
    "I wanted to reach out regarding the following:",
    "I'm writing to share this with you:",
    "Here's what I'd like to cover:",
];

#[derive(Debug, Clone, Serialize)]
pub struct RewrittenEmail {
    pub subject: String,
    pub body: String,
}

pub fn rewrite_email<R: Rng + ?Sized>(content: &str, rng: &mut R) -> RewrittenEmail {
    let signals = analyze_email(content);

    // Subject pools are checked in priority order; urgency always wins.
    let subject_pool = if signals.urgent {
        SUBJECTS_URGENT
    } else if signals.meeting {
        SUBJECTS_MEETING
    } else if signals.follow_up {
        SUBJECTS_FOLLOW_UP
    } else if signals.thank_you {
        SUBJECTS_THANK_YOU
    } else if signals.request {
        SUBJECTS_REQUEST
    } else {
        SUBJECTS_GENERAL
    };

    let greeting_pool = if signals.formal {
        GREETINGS_FORMAL
    } else {
        GREETINGS_CASUAL
    };
    let closing_pool = if signals.formal {
        CLOSINGS_FORMAL
    } else {
        CLOSINGS_CASUAL
    };

    let subject = pick(rng, subject_pool);
    let greeting = pick(rng, greeting_pool);
    let transition = pick(rng, TRANSITIONS);
    let closing = pick(rng, closing_pool);

    let core = content.trim();
    let body = format!("{greeting}\n\n{transition}\n\n{core}\n\n{closing}");

    RewrittenEmail {
        subject: subject.to_string(),
        body,
    }
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, pool: &'a [&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}
