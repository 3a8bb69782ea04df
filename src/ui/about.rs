//! About/resume section

use crate::content;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    let profile = &content::PROFILE;

    rsx! {
        div { class: "about",
            h2 { class: "section-title", "About Me" }

            div { class: "card about-card",
                div { class: "about-top",
                    div { class: "about-profile",
                        img { class: "avatar", src: "{profile.avatar}", alt: "{profile.name}" }
                        h3 { "{profile.name}" }
                        p { class: "muted", "{profile.role}" }
                        p { class: "muted small", "\u{1F4CD} {profile.location}" }
                    }

                    div { class: "about-bio",
                        h4 { class: "about-heading", "Biography" }
                        for paragraph in profile.bio {
                            p { "{paragraph}" }
                        }
                    }
                }

                hr { class: "divider" }

                h4 { class: "about-heading", "Professional Experience" }
                for job in content::EXPERIENCE {
                    div { class: "experience",
                        div { class: "experience-head",
                            span { class: "experience-title", "{job.position} @ {job.company}" }
                            span { class: "muted small", "{job.period}" }
                        }
                        ul {
                            for item in job.responsibilities {
                                li { "{item}" }
                            }
                        }
                    }
                }

                hr { class: "divider" }

                h4 { class: "about-heading", "Education" }
                for edu in content::EDUCATION {
                    div { class: "education",
                        div { class: "experience-head",
                            span { class: "experience-title", "{edu.degree}" }
                            span { class: "muted small", "{edu.period}" }
                        }
                        p { class: "muted", "{edu.description}" }
                    }
                }

                hr { class: "divider" }

                h4 { class: "about-heading", "Skills" }
                div { class: "skills",
                    for skill in content::SKILLS {
                        div { class: "skill",
                            span { class: "skill-name", "{skill.name}" }
                            div { class: "skill-track",
                                div {
                                    class: "skill-fill",
                                    style: "width: {skill.level}%;",
                                }
                            }
                            span { class: "muted small", "{skill.level}%" }
                        }
                    }
                }

                hr { class: "divider" }

                h4 { class: "about-heading", "Personal Interests" }
                div { class: "interests",
                    for interest in content::INTERESTS {
                        div { class: "interest-chip", "{interest}" }
                    }
                }
            }
        }
    }
}
