//! Portfolio content
//!
//! Every piece of copy on the site lives here: profile, resume data, project
//! records, contact links, and the scripted chat rules. Views render this data
//! and never hardcode their own.

use crate::bot::rules::{ResponseRule, RuleBook};
use crate::types::project::Project;

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub bio: &'static [&'static str],
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100
    pub level: u8,
}

pub struct Experience {
    pub position: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

pub struct ContactLink {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Rafael Molina",
    role: "Backend Developer",
    location: "Venezuela",
    avatar: "https://img.heroui.chat/image/avatar?w=200&h=200&u=42",
    bio: &[
        "I'm a passionate software engineer based in Venezuela, dedicated to creating \
         innovative solutions that make a difference. When I'm not coding, you can find \
         me exploring new technologies.",
        "My expertise lies in designing efficient database schemas, implementing security \
         best practices, and optimizing application performance. I'm constantly exploring \
         new technologies and methodologies to stay at the forefront of backend development.",
    ],
};

pub const HERO_HEADLINE: (&str, &str) = ("Building the backbone of ", "innovation");

pub const HERO_TAGLINE: &str = "I'm passionate about creating reliable, scalable, and \
    efficient backend solutions that power tomorrow's technologies.";

pub const SKILLS: &[Skill] = &[
    Skill { name: "Node.js", level: 90 },
    Skill { name: "Python", level: 85 },
    Skill { name: "Go", level: 75 },
    Skill { name: "SQL/NoSQL", level: 90 },
    Skill { name: "Docker", level: 80 },
    Skill { name: "AWS/GCP", level: 85 },
];

pub const EXPERIENCE: &[Experience] = &[Experience {
    position: "Senior Software Engineer",
    company: "Yummy",
    period: "2021 - Present",
    responsibilities: &[
        "Leading development of scalable chatbots integrated with AI models and real world applications",
        "Optimizing the performance of the chatbot by implementing caching strategies and optimizing database queries",
        "Developing and maintaining RESTful APIs for seamless integration with external systems",
        "Collaborating with cross-functional teams to define, design, and ship new features",
        "Architecting and implementing highly scalable and fault-tolerant systems",
    ],
}];

pub const EDUCATION: &[Education] = &[Education {
    degree: "Electrical Engineering Studies",
    institution: "University",
    period: "3 Years",
    description: "Focused on core electrical engineering principles, circuit design, and systems analysis.",
}];

pub const INTERESTS: &[&str] = &[
    "Open Source",
    "Tech Podcasts",
    "Hiking",
    "Reading",
    "Photography",
    "Chess",
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/rafael-molina-6649ab66/",
    },
    ContactLink {
        label: "GitHub",
        url: "https://github.com/AboveZtars",
    },
    ContactLink {
        label: "X / Twitter",
        url: "https://x.com/spoonkycat",
    },
    ContactLink {
        label: "Email",
        url: "mailto:rafael@molina-aquino.com",
    },
];

/// Project records seeding the gallery, in their original display order
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "WinkGPT",
            description: "A Chatbot to order any kind of products from any store, made in Whatsapp.",
            image: "/projects/winkgpt2.png",
            technologies: &[
                "BunJS",
                "Whatsapp",
                "Postgres",
                "Redis",
                "Langchain",
                "OpenAI",
                "DigitalOcean",
            ],
            link: Some("https://www.instagram.com/wink.vzla/"),
            github_link: None,
            demo_link: None,
        },
        Project {
            id: 2,
            title: "Yuri AI",
            description: "A simple chatbot to help you request a ride from Yummy Rides in \
                Venezuela and ask questions about yummy rides. Build specifically to be used \
                in Whatsapp.",
            image: "/projects/yummyyuri.png",
            technologies: &["NodeJS", "MomentoCache", "Whatsapp", "StackAi", "OpenAI"],
            link: Some("https://api.whatsapp.com/send?phone=584241905742"),
            github_link: None,
            demo_link: None,
        },
        Project {
            id: 3,
            title: "RutasVe",
            description: "An App to help you find the best routes to travel in Venezuela \
                using the public transport system.",
            image: "/projects/map.png",
            technologies: &["NodeJS", "React", "TailwindCSS", "NestJS", "Postgres"],
            link: Some("https://routefinder-venezuela.lovable.app/services"),
            github_link: None,
            demo_link: None,
        },
    ]
}

pub const WELCOME: &str = "Hi there! I'm Rafael's AI assistant. How can I help you today?";

pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Tell me about Rafa experience",
    "What technologies does Rafa work with?",
    "What are the career goals of Rafa?",
    "How can I contact Rafa?",
];

/// The scripted dialogue table
///
/// Rules are checked in this order and the first match wins; the greeting rule
/// sits last so a question mentioning both "hi" and a topic gets the topical
/// answer.
pub fn rule_book() -> RuleBook {
    RuleBook::new(
        vec![
            ResponseRule {
                keywords: &["experience", "work"],
                reply: "Rafael has over 8 years of experience in backend development, \
                    specializing in Node.js, Python, and Go. He's currently working as a \
                    Senior Software Engineer at Yummy, where he leads the development of \
                    scalable chatbots integrated with AI models.",
            },
            ResponseRule {
                keywords: &["technologies", "tech stack", "skills"],
                reply: "Rafael is proficient in Node.js, Python, Go, SQL/NoSQL databases, \
                    Docker, and cloud platforms like AWS and GCP. He's particularly skilled \
                    in designing efficient database schemas and implementing security best \
                    practices.",
            },
            ResponseRule {
                keywords: &["contact", "email", "reach"],
                reply: "You can contact Rafael through LinkedIn, GitHub, or via email. Just \
                    click on the respective icons in the footer section of this website.",
            },
            ResponseRule {
                keywords: &["goals", "future", "career"],
                reply: "Rafael aims to continue growing as a backend developer while \
                    exploring new technologies. He's particularly interested in AI \
                    integration, distributed systems, and contributing to open-source \
                    projects.",
            },
            ResponseRule {
                keywords: &["hello", "hi", "hey"],
                reply: "Hello! I'm Rafael's virtual assistant. Feel free to ask me anything \
                    about his experience, skills, or projects!",
            },
        ],
        "That's an interesting question! Rafael would be happy to discuss this further. \
         Feel free to reach out to him directly using the contact information in the footer.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), projects().len());
    }

    #[test]
    fn test_every_suggested_question_has_a_scripted_answer() {
        let book = rule_book();
        let fallback = book.respond("completely unrelated gibberish qqq");
        for question in SUGGESTED_QUESTIONS {
            assert_ne!(book.respond(question), fallback, "no rule matched: {question}");
        }
    }

    #[test]
    fn test_rule_keywords_are_lowercase() {
        // The matcher folds the input only, so the table must be lowercase
        let book = rule_book();
        for question in ["EXPERIENCE?", "Tech Stack", "HeLLo"] {
            assert_ne!(book.respond(question), book.respond("qqq"));
        }
    }
}
