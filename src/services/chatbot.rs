//! Chatbot response selection: keyword triggers to canned replies.
//!
//! DESIGN
//! ======
//! Two bots share one selection rule: lowercase the input, walk an ordered
//! table of trigger phrases, and answer with the first trigger that appears
//! as a substring. When nothing matches, one reply is drawn from a small
//! fallback set. The learner bot screens for homework-answer requests before
//! the trigger walk and refuses them outright.
//!
//! Tables are slices, not maps: when an input contains several triggers the
//! earliest entry in the table wins. Random draws go through [`Chooser`] so
//! tests can pin every index of the fixed sets.

use rand::Rng;
use serde::{Deserialize, Serialize};

// =============================================================================
// CHOOSER
// =============================================================================

/// Picks one entry out of a fixed reply set.
pub trait Chooser: Send + Sync {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn choose(&self, len: usize) -> usize;
}

/// Uniform random choice backed by the thread-local RNG.
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Out-of-range picks wrap instead of panicking.
fn pick<T: Clone>(chooser: &dyn Chooser, options: &[T]) -> T {
    let index = chooser.choose(options.len()) % options.len();
    options[index].clone()
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotKind {
    General,
    Learner,
}

/// How a reply was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Matched,
    Refused,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    /// The trigger phrase that selected this reply, for `Matched` only.
    pub trigger: Option<&'static str>,
    pub text: String,
}

impl Reply {
    fn matched(trigger: &'static str, text: String) -> Self {
        Self { kind: ReplyKind::Matched, trigger: Some(trigger), text }
    }

    fn refused(text: String) -> Self {
        Self { kind: ReplyKind::Refused, trigger: None, text }
    }

    fn fallback(text: String) -> Self {
        Self { kind: ReplyKind::Fallback, trigger: None, text }
    }
}

/// What the learner bot knows about the person it is coaching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearnerProfile {
    pub learner_name: String,
    pub subjects: Vec<String>,
    pub weak_subjects: Vec<String>,
    pub current_marks: i32,
    pub target_marks: i32,
}

impl LearnerProfile {
    fn weak_joined(&self, sep: &str) -> String {
        self.weak_subjects.join(sep)
    }

    /// Subjects the learner takes that are not flagged weak, in profile order.
    #[must_use]
    pub fn strong_subjects(&self) -> Vec<&str> {
        self.subjects
            .iter()
            .filter(|s| !self.weak_subjects.contains(s))
            .map(String::as_str)
            .collect()
    }

    /// Percentage points between current and target marks.
    #[must_use]
    pub fn gap(&self) -> i32 {
        self.target_marks - self.current_marks
    }

    /// Weeks to close the gap at two points per week, rounded up.
    #[must_use]
    pub fn weeks_needed(&self) -> i32 {
        (self.gap() + 1).div_euclid(2)
    }

    /// Within ten points of target counts as on track.
    #[must_use]
    pub fn on_track(&self) -> bool {
        self.current_marks >= self.target_marks - 10
    }
}

/// A chatbot instance. The learner bot carries the profile its replies
/// are parameterized by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bot {
    General,
    Learner(LearnerProfile),
}

impl Bot {
    #[must_use]
    pub fn kind(&self) -> BotKind {
        match self {
            Self::General => BotKind::General,
            Self::Learner(_) => BotKind::Learner,
        }
    }

    /// Opening message shown before the user has typed anything.
    #[must_use]
    pub fn greeting(&self) -> String {
        match self {
            Self::General => GENERAL_GREETING.to_owned(),
            Self::Learner(profile) => format!(
                "Hi {}! I'm your study assistant. I'm here to help you understand concepts, plan your study time, and keep you accountable to your learning path. Let's improve your grades together. What do you need help with?",
                profile.learner_name
            ),
        }
    }

    /// Standing notice displayed above the transcript.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::General => None,
            Self::Learner(_) => Some(LEARNER_NOTICE),
        }
    }

    /// Quick questions offered before the first exchange.
    #[must_use]
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        match self {
            Self::General => SUGGESTED_QUESTIONS,
            Self::Learner(_) => &[],
        }
    }

    /// Select a reply for `input`. Total over all strings, including empty.
    pub fn respond(&self, input: &str, chooser: &dyn Chooser) -> Reply {
        match self {
            Self::General => general_reply(input, chooser),
            Self::Learner(profile) => learner_reply(profile, input, chooser),
        }
    }
}

// =============================================================================
// GENERAL BOT
// =============================================================================

const GENERAL_GREETING: &str = "Hi! I'm the LearnPath General Assistant. I can help you understand how the platform works, our features, and answer questions about getting started. What would you like to know?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "How does LearnPath work?",
    "What are study paths?",
    "How do I get started?",
    "What resources are available?",
    "How does the chatbot help?",
];

pub(crate) const GENERAL_RESPONSES: &[(&str, &str)] = &[
    (
        "how does learnpath work",
        "LearnPath is an educational platform that helps students and teachers succeed together. Students get personalized learning paths based on their school reports, while teachers can create and share videos, lesson plans, and track student progress.",
    ),
    (
        "what are study paths",
        "Study paths are personalized learning plans created by our AI based on your school report. They identify your weak subjects and recommend specific topics to focus on to improve your grades.",
    ),
    (
        "how do teachers upload videos",
        "Teachers can upload educational videos from their dashboard. Our AI automatically generates summaries, and learners can rate and comment on videos to create an engaging learning community.",
    ),
    (
        "what subjects are available",
        "LearnPath covers all major secondary subjects including Mathematics, English Literature, Biology, Chemistry, Physics, History, Geography, Computer Science, Economics, Business Studies, Physical Education, and Art & Design.",
    ),
    (
        "how do i get started",
        "Visit the Login page and choose whether you're a Learner or Teacher. Learners upload their school report to get personalized recommendations. Teachers select their subject specialization.",
    ),
    (
        "what is a learning path",
        "A learning path is a structured sequence of topics tailored to help you improve in specific subjects. It's created based on your current performance and recommends daily study time and weekly goals.",
    ),
    (
        "can i track my progress",
        "Yes! The Learner Dashboard shows your progress bar for each subject, current performance vs target grades, and an overall progress percentage through your learning path.",
    ),
    (
        "what resources are available",
        "We offer study materials (PDFs), video tutorials, interactive tools (grammar checker, math solver), podcasts, past exam papers, and online courses.",
    ),
    (
        "how does the chatbot help",
        "The Learner Assistant helps you understand concepts, plan study time, and stay accountable. It explains topics at your level and keeps you on track with your learning path.",
    ),
    (
        "what is the careers section",
        "The Careers section helps you explore career options, find bursaries you qualify for, and get links to university and college applications.",
    ),
];

pub(crate) const GENERAL_FALLBACKS: &[&str] = &[
    "That's a great question! Can you be more specific? For example, you could ask about study paths, how to get started, or what resources we offer.",
    "I'm here to help with platform questions. Try asking about features, getting started, or specific tools available on LearnPath.",
    "I want to give you accurate information. Could you rephrase your question about LearnPath's features or how to use the platform?",
];

fn general_reply(input: &str, chooser: &dyn Chooser) -> Reply {
    let lower = input.to_lowercase();

    if let Some(&(trigger, text)) = GENERAL_RESPONSES.iter().find(|(trigger, _)| lower.contains(trigger)) {
        return Reply::matched(trigger, text.to_owned());
    }

    Reply::fallback(pick(chooser, GENERAL_FALLBACKS).to_owned())
}

// =============================================================================
// LEARNER BOT
// =============================================================================

const LEARNER_NOTICE: &str =
    "I explain concepts but don't give homework answers. Let's build real understanding.";

/// Substrings that mark a request for answers rather than understanding.
pub const DISALLOWED_KEYWORDS: &[&str] =
    &["answer", "solution", "exam", "test", "assignment", "do my homework", "just give me"];

pub(crate) const REFUSALS: &[&str] = &[
    "I can't do your homework or give test answers. But I CAN help you understand the concepts. Tell me what part you're struggling with, and I'll explain it with an example.",
    "I don't work that way. Instead, let me help you learn the skill properly so you can answer questions confidently.",
    "That's not how this works. I'm here to build your understanding, not to give you shortcuts. What concept can I explain to you?",
];

type LearnerResponder = fn(&LearnerProfile) -> String;

pub(crate) const LEARNER_RESPONSES: &[(&str, LearnerResponder)] = &[
    ("how should i study", how_should_i_study),
    ("what should i focus on today", focus_today),
    ("i don't understand", dont_understand),
    ("can you explain", can_you_explain),
    ("how do i improve my marks", improve_marks),
    ("i'm procrastinating", procrastinating),
    ("what's my learning path", learning_path),
    ("am i on track", on_track),
];

/// True when the input asks for answers the learner bot will not give.
#[must_use]
pub fn is_disallowed(input: &str) -> bool {
    let lower = input.to_lowercase();
    DISALLOWED_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn learner_reply(profile: &LearnerProfile, input: &str, chooser: &dyn Chooser) -> Reply {
    if is_disallowed(input) {
        return Reply::refused(pick(chooser, REFUSALS).to_owned());
    }

    let lower = input.to_lowercase();
    if let Some(&(trigger, respond)) = LEARNER_RESPONSES.iter().find(|(trigger, _)| lower.contains(trigger)) {
        return Reply::matched(trigger, respond(profile));
    }

    Reply::fallback(pick(chooser, &learner_fallbacks(profile)))
}

pub(crate) fn learner_fallbacks(profile: &LearnerProfile) -> [String; 3] {
    [
        format!(
            "I understand. To help you better, tell me: Which subject are you working on right now? I can give you specific advice for {}.",
            profile.weak_joined(" or ")
        ),
        "Good question! I need more details. Are you asking about study strategies, a specific subject, or something else?"
            .to_owned(),
        "Let me help. Are you asking about:\n- How to study?\n- Your weak subjects?\n- Your learning path?\n- Something else?"
            .to_owned(),
    ]
}

fn how_should_i_study(p: &LearnerProfile) -> String {
    format!(
        "Based on your profile, here's what I recommend:\n\n\
         1. **Focus Areas**: Concentrate on {weak}\n\
         2. **Daily Time**: Allocate 45 minutes to weak subjects, 30 minutes to strong ones\n\
         3. **Strategy**: Use revision for familiar topics, fresh learning for new concepts\n\
         4. **Weekly Goal**: Aim to improve your average by 2-3% each week\n\n\
         You're currently at {current}% with a target of {target}%. You can reach that!",
        weak = p.weak_joined(", "),
        current = p.current_marks,
        target = p.target_marks,
    )
}

fn focus_today(p: &LearnerProfile) -> String {
    format!(
        "Based on your weak areas ({weak}), I recommend:\n\n\
         **Today's Focus**: Pick ONE weak subject\n\
         - Review the topic you learned recently\n\
         - Do 10 practice problems\n\
         - Identify what you struggled with\n\n\
         **This Week's Goal**: Complete all practice problems in two weak subjects\n\n\
         Focus beats multitasking. Pick one subject and commit to 45 minutes.",
        weak = p.weak_joined(", "),
    )
}

fn dont_understand(_: &LearnerProfile) -> String {
    "I can help! Tell me:\n1. Which subject?\n2. Which topic?\n3. What part confuses you?\n\n\
     Once you're specific, I can explain it step-by-step with examples."
        .to_owned()
}

fn can_you_explain(_: &LearnerProfile) -> String {
    "Yes! But first, I need to know:\n\n\
     1. **Which subject?** (Math, English, Science, etc.)\n\
     2. **Which topic?** (Algebra, Shakespeare, Photosynthesis, etc.)\n\
     3. **What part is confusing?**\n\n\
     Then I'll break it down into simple steps with examples you can understand."
        .to_owned()
}

fn improve_marks(p: &LearnerProfile) -> String {
    format!(
        "Here's the roadmap from {current}% to {target}%:\n\n\
         **Step 1**: Identify gaps (you're struggling in {weak})\n\
         **Step 2**: Create a daily routine (45 min weak subjects, 30 min strong)\n\
         **Step 3**: Practice consistently (10-15 problems daily)\n\
         **Step 4**: Review weekly (identify mistakes, learn from them)\n\
         **Step 5**: Track progress (you should see +1% improvement per week)\n\n\
         Discipline is key. No shortcuts.",
        current = p.current_marks,
        target = p.target_marks,
        weak = p.weak_joined(", "),
    )
}

fn procrastinating(_: &LearnerProfile) -> String {
    "Stop. Listen.\n\n\
     Procrastination won't make exams easier. It makes them harder.\n\n\
     **Here's what you do RIGHT NOW:**\n\
     1. Close other apps\n\
     2. Pick ONE subject\n\
     3. Set a timer for 25 minutes\n\
     4. Do 5 practice problems\n\n\
     That's it. Just start. Tell me when you're done."
        .to_owned()
}

fn learning_path(p: &LearnerProfile) -> String {
    format!(
        "Your personalized learning path:\n\n\
         **Weak Subjects** (focus here): {weak}\n\
         **Strong Subjects** (maintain): {strong}\n\n\
         **Weekly Plan**:\n\
         - Mon-Wed: Deep learning on weak subjects\n\
         - Thu: Practice problems\n\
         - Fri: Review and identify mistakes\n\
         - Sat-Sun: Light revision of strong subjects\n\n\
         This path is designed to bring your marks from {current}% to {target}%.",
        weak = p.weak_joined(", "),
        strong = p.strong_subjects().join(", "),
        current = p.current_marks,
        target = p.target_marks,
    )
}

fn on_track(p: &LearnerProfile) -> String {
    let verdict = if p.on_track() {
        "✓ You're on track! Keep momentum."
    } else {
        "✗ You're falling behind. Double your effort in weak areas."
    };
    format!(
        "Current status: {current}% (Target: {target}%)\n\n\
         You need to improve by {gap}% over the next {weeks} weeks.\n\n{verdict}",
        current = p.current_marks,
        target = p.target_marks,
        gap = p.gap(),
        weeks = p.weeks_needed(),
    )
}

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod tests;
