//! Built-in FAQ rule table.
//!
//! Order matters: the first matching rule wins, and the short greeting
//! keywords come last.

/// Placeholder replaced with the owner's name in every answer.
pub const OWNER: &str = "{owner}";

/// One keyword rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    /// Short topic name, used for logging and tests
    pub topic: &'static str,
    /// At least one must occur (empty means no constraint)
    pub any: &'static [&'static str],
    /// Every one must occur
    pub all: &'static [&'static str],
    /// Answer template
    pub answer: &'static str,
}

impl Rule {
    /// Whether this rule matches an already lowercased question.
    pub fn matches(&self, question: &str) -> bool {
        let any = self.any.is_empty() || self.any.iter().any(|k| question.contains(k));
        any && self.all.iter().all(|k| question.contains(k))
    }
}

/// Answer when no rule matches.
pub const FALLBACK: &str = "I can tell you about {owner}'s:

  - Professional experience
  - Technical skills
  - Machine learning work and projects
  - Achievements and awards
  - Education
  - Availability and how to get in touch

What would you like to know?";

/// The built-in rules, in match order.
///
/// Keywords are plain substrings, so short ones like "ai" also hit inside
/// longer words ("available", "email").
pub const BUILTIN_RULES: &[Rule] = &[
    Rule {
        topic: "experience",
        any: &["experience", "work", "job"],
        all: &[],
        answer: "{owner} works as a senior software engineer, with several years of \
                 professional experience in backend development, machine learning and \
                 embedded systems.",
    },
    Rule {
        topic: "skills",
        any: &["skill", "technology", "tech stack"],
        all: &[],
        answer: "{owner}'s core skills:

  - Languages: Python, TypeScript, C
  - Backend: REST APIs, FastAPI, Flask
  - Machine learning: model training, predictive maintenance
  - Cloud: containers and managed cloud platforms",
    },
    Rule {
        topic: "python",
        any: &["python"],
        all: &[],
        answer: "{owner} writes Python every day: backend services with FastAPI, Flask and \
                 Django, and machine learning with TensorFlow, PyTorch and scikit-learn.",
    },
    Rule {
        topic: "machine-learning",
        any: &["machine learning", "ml", "ai", "artificial intelligence"],
        all: &[],
        answer: "{owner} built a predictive maintenance model that cut equipment downtime, \
                 and works with both supervised and unsupervised learning.",
    },
    Rule {
        topic: "projects",
        any: &["project"],
        all: &[],
        answer: "Highlights from {owner}'s projects:

  - A predictive maintenance model that cut equipment downtime
  - An editor extension for static analysis checks
  - Cloud-native APIs
  - An algorithm visualizer",
    },
    Rule {
        topic: "achievements",
        any: &["achievement", "award", "recognition"],
        all: &[],
        answer: "{owner}'s achievements:

  - Star performer award every quarter
  - Lower equipment downtime through predictive models
  - Measurable system performance improvements",
    },
    Rule {
        topic: "education",
        any: &["education", "degree", "study", "university"],
        all: &[],
        answer: "{owner} holds a bachelor's degree in electronics and communication and is \
                 currently studying for a master's degree in web engineering.",
    },
    Rule {
        topic: "why-hire",
        any: &["hire", "should"],
        all: &["why"],
        answer: "Why work with {owner}:

  - Consistent, recognized performance
  - Measurable impact in production systems
  - Comfortable from ML models to deployed APIs
  - Always learning",
    },
    Rule {
        topic: "contact",
        any: &["contact", "email", "reach", "phone"],
        all: &[],
        answer: "The contact section of the portfolio lists how to reach {owner}. \
                 Messages about opportunities and collaborations are welcome.",
    },
    Rule {
        topic: "location",
        any: &["location", "where", "based"],
        all: &[],
        answer: "{owner} is currently based in Germany.",
    },
    Rule {
        topic: "availability",
        any: &["available", "looking", "job", "opportunity"],
        all: &[],
        answer: "Yes, {owner} is open to new opportunities in backend development, \
                 machine learning and cloud architecture.",
    },
    Rule {
        topic: "cloud",
        any: &["aws", "azure", "cloud"],
        all: &[],
        answer: "{owner} has deployed Python backend APIs on AWS and Azure and packages \
                 services with Docker.",
    },
    Rule {
        topic: "employer",
        any: &["bosch"],
        all: &[],
        answer: "{owner} worked at Bosch Global Software Technologies as a senior software \
                 engineer, on machine learning, backend and embedded projects.",
    },
    Rule {
        topic: "frameworks",
        any: &["fastapi", "flask", "django"],
        all: &[],
        answer: "{owner} builds production REST APIs with FastAPI, Flask and Django.",
    },
    Rule {
        topic: "greeting",
        any: &["hi", "hello", "hey"],
        all: &[],
        answer: "Hello! I can answer questions about {owner}'s experience, skills, \
                 projects and achievements. What would you like to know?",
    },
    Rule {
        topic: "thanks",
        any: &["thank", "thanks"],
        all: &[],
        answer: "You're welcome! Ask me anything else about {owner}.",
    },
];
