//! Static catalog content for the marketing and careers pages.
//!
//! Everything here is fixed at compile time and never mutated.

use serde::Serialize;

/// Subjects a teacher can specialize in at signup.
pub const TEACHER_SUBJECTS: &[&str] = &[
    "Mathematics",
    "English Language",
    "Science (Biology)",
    "Science (Chemistry)",
    "Science (Physics)",
    "History",
    "Geography",
    "Computer Science",
    "Economics",
    "Business Studies",
    "Physical Education",
    "Art & Design",
];

/// Filter tabs on the resources page. `All` disables filtering.
pub const RESOURCE_SUBJECTS: &[&str] =
    &["All", "Mathematics", "English", "Science", "History", "Geography", "Computer Science"];

// =============================================================================
// CAREERS PAGE
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Bursary {
    pub title: &'static str,
    pub provider: &'static str,
    pub amount: &'static str,
    pub deadline: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Career {
    pub title: &'static str,
    pub industry: &'static str,
    pub growth: &'static str,
    pub salary: &'static str,
    pub education: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct University {
    pub name: &'static str,
    pub location: &'static str,
    /// `Public` or `Private`.
    pub kind: &'static str,
}

pub const BURSARIES: &[Bursary] = &[
    Bursary {
        title: "STEM Excellence Grant",
        provider: "TechFuture Foundation",
        amount: "$5,000",
        deadline: "Oct 15, 2025",
        tags: &["Engineering", "Technology"],
    },
    Bursary {
        title: "Future Educators Scholarship",
        provider: "Global Teach Initiative",
        amount: "$3,500",
        deadline: "Nov 01, 2025",
        tags: &["Education", "Teaching"],
    },
    Bursary {
        title: "Arts & Culture Bursary",
        provider: "Creative Arts Council",
        amount: "$2,000",
        deadline: "Dec 10, 2025",
        tags: &["Arts", "Design"],
    },
];

pub const CAREERS: &[Career] = &[
    Career {
        title: "Software Developer",
        industry: "Technology",
        growth: "High (+22%)",
        salary: "$80k - $150k",
        education: "B.Sc. Computer Science",
    },
    Career {
        title: "Data Analyst",
        industry: "Business / Tech",
        growth: "Very High (+25%)",
        salary: "$65k - $110k",
        education: "Statistics / Mathematics",
    },
    Career {
        title: "Environmental Scientist",
        industry: "Science",
        growth: "Steady (+8%)",
        salary: "$50k - $90k",
        education: "B.Sc. Environmental Science",
    },
];

pub const UNIVERSITIES: &[University] = &[
    University { name: "Tech State University", location: "New York", kind: "Public" },
    University { name: "Global Institute of Technology", location: "Online / Hybrid", kind: "Private" },
    University { name: "City Arts College", location: "London", kind: "Public" },
    University { name: "Business Leadership School", location: "Chicago", kind: "Private" },
];

// =============================================================================
// RESOURCES PAGE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResourceKind {
    Pdf,
    Video,
    Tool,
    Podcast,
}

/// The one kind-specific attribute each resource carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceDetail {
    Size(&'static str),
    Duration(&'static str),
    Access(&'static str),
    Episodes(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub kind: ResourceKind,
    pub subjects: &'static [&'static str],
    pub description: &'static str,
    pub detail: ResourceDetail,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceCategory {
    pub category: &'static str,
    pub items: Vec<Resource>,
}

const fn resource(
    title: &'static str,
    kind: ResourceKind,
    subjects: &'static [&'static str],
    description: &'static str,
    detail: ResourceDetail,
) -> Resource {
    Resource { title, kind, subjects, description, detail }
}

const STUDY_MATERIALS: &[Resource] = &[
    resource(
        "GCSE Mathematics Complete Guide",
        ResourceKind::Pdf,
        &["Mathematics"],
        "Comprehensive study guide covering all GCSE Math topics",
        ResourceDetail::Size("12.5 MB"),
    ),
    resource(
        "English Literature Essay Templates",
        ResourceKind::Pdf,
        &["English"],
        "10 proven essay structures for literature analysis",
        ResourceDetail::Size("2.1 MB"),
    ),
    resource(
        "Science Practicals Guide",
        ResourceKind::Pdf,
        &["Science"],
        "Step-by-step guides for all required practicals",
        ResourceDetail::Size("8.7 MB"),
    ),
];

const VIDEO_TUTORIALS: &[Resource] = &[
    resource(
        "Algebra Masterclass Series",
        ResourceKind::Video,
        &["Mathematics"],
        "12-part video series on algebraic equations",
        ResourceDetail::Duration("4.5 hours"),
    ),
    resource(
        "Shakespeare Analysis Workshop",
        ResourceKind::Video,
        &["English"],
        "Deep dive into Shakespeare's major works",
        ResourceDetail::Duration("3 hours"),
    ),
    resource(
        "Chemistry Reactions Explained",
        ResourceKind::Video,
        &["Science"],
        "Visual explanations of complex chemical reactions",
        ResourceDetail::Duration("2.5 hours"),
    ),
];

const INTERACTIVE_TOOLS: &[Resource] = &[
    resource(
        "Grammar Checker Tool",
        ResourceKind::Tool,
        &["English"],
        "AI-powered grammar and style improvement",
        ResourceDetail::Access("Online"),
    ),
    resource(
        "Math Problem Solver",
        ResourceKind::Tool,
        &["Mathematics"],
        "Step-by-step solutions for math problems",
        ResourceDetail::Access("Online"),
    ),
    resource(
        "Periodic Table Explorer",
        ResourceKind::Tool,
        &["Science"],
        "Interactive periodic table with element properties",
        ResourceDetail::Access("Online"),
    ),
];

const PODCASTS: &[Resource] = &[
    resource(
        "History in 10 Minutes",
        ResourceKind::Podcast,
        &["History"],
        "Daily history podcast covering key events",
        ResourceDetail::Episodes("200+"),
    ),
    resource(
        "Science Weekly",
        ResourceKind::Podcast,
        &["Science"],
        "Latest scientific discoveries explained simply",
        ResourceDetail::Episodes("150+"),
    ),
    resource(
        "Literature Discussions",
        ResourceKind::Podcast,
        &["English"],
        "Authors discussing famous literary works",
        ResourceDetail::Episodes("85+"),
    ),
];

const RESOURCE_CATEGORIES: &[(&str, &[Resource])] = &[
    ("Study Materials", STUDY_MATERIALS),
    ("Video Tutorials", VIDEO_TUTORIALS),
    ("Interactive Tools", INTERACTIVE_TOOLS),
    ("Podcasts & Audio", PODCASTS),
];

/// Resource categories, optionally narrowed to one subject.
///
/// `None`, a blank subject, or `All` returns everything. Otherwise only items
/// tagged with the subject (case-insensitive) are kept and categories left
/// empty are dropped.
#[must_use]
pub fn resources(subject: Option<&str>) -> Vec<ResourceCategory> {
    let filter = subject
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"));

    RESOURCE_CATEGORIES
        .iter()
        .map(|&(category, items)| ResourceCategory {
            category,
            items: items
                .iter()
                .filter(|item| filter.is_none_or(|wanted| item.subjects.iter().any(|s| s.eq_ignore_ascii_case(wanted))))
                .cloned()
                .collect(),
        })
        .filter(|category| !category.items.is_empty())
        .collect()
}

// =============================================================================
// SERVICES PAGES
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const STUDENT_SERVICES: &[Service] = &[
    Service {
        title: "Interactive Learning",
        description: "Access video tutorials, quizzes, and interactive simulations for various subjects.",
        features: &["Video Library", "Practice Quizzes", "Virtual Labs"],
    },
    Service {
        title: "Career Guidance",
        description: "Explore potential career paths based on your interests and strengths.",
        features: &["Career Aptitude Tests", "Job Profiles", "Industry Insights"],
    },
    Service {
        title: "Goal Tracking",
        description: "Set academic goals and track your progress throughout the semester.",
        features: &["Goal Setting Wizard", "Progress Dashboard", "Milestone Rewards"],
    },
    Service {
        title: "Bursary Finder",
        description: "Automatically match with bursaries and scholarships you qualify for.",
        features: &["Smart Matching", "Application Tracker", "Deadline Alerts"],
    },
    Service {
        title: "Study Planner",
        description: "Create personalized study schedules to prepare for exams efficiently.",
        features: &["Exam Countdown", "Daily Tasks", "Study Reminders"],
    },
    Service {
        title: "College Applications",
        description: "Streamline your university and college application process.",
        features: &["Requirement Lists", "Document Storage", "Status Tracker"],
    },
];

pub const TEACHER_SERVICES: &[Service] = &[
    Service {
        title: "Classroom Management",
        description: "Organize student records, attendance, and behavior tracking in one central dashboard.",
        features: &["Attendance Tracking", "Behavior Logs", "Student Profiles"],
    },
    Service {
        title: "Lesson Planning",
        description: "Create, store, and share comprehensive lesson plans aligned with curriculum standards.",
        features: &["Curriculum Mapping", "Resource Attachment", "Collaboration Tools"],
    },
    Service {
        title: "Assessment & Analytics",
        description: "Track student performance with visual analytics and generate automated progress reports.",
        features: &["Gradebook", "Performance Graphs", "Report Card Generation"],
    },
    Service {
        title: "Schedule & Events",
        description: "Manage your timetable, exam schedules, and school events efficiently.",
        features: &["Interactive Calendar", "Exam Scheduler", "Event Reminders"],
    },
    Service {
        title: "Professional Development",
        description: "Access training modules and resources to enhance your teaching skills.",
        features: &["Webinars", "Certification Courses", "Peer Community"],
    },
    Service {
        title: "Admin Tools",
        description: "Quick access to administrative requests, leave applications, and policy documents.",
        features: &["Leave Management", "Policy Library", "Help Desk"],
    },
];

// =============================================================================
// ABOUT PAGE
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub bio: &'static str,
    pub credentials: &'static [&'static str],
}

pub const ADMIN: AdminInfo = AdminInfo {
    name: "Dr. Sarah Johnson",
    role: "System Administrator & Founder",
    email: "admin@learnpath.com",
    bio: "Dr. Sarah Johnson founded LearnPath with a vision to democratize access to quality education resources. With over 15 years of experience in EdTech, she oversees the platform's strategic direction and ensures data integrity and user safety.",
    credentials: &["Ph.D. in Educational Technology", "M.Sc. Computer Science", "Certified Systems Architect"],
};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
