use dioxus::prelude::*;

use super::marketing::{blurb, Blurb, BlurbGrid, Hero};
use crate::routes::Route;

const CORE: &[Blurb] = &[
    blurb(
        "AI-Powered Resume Analysis",
        "Advanced machine learning algorithms analyze resumes and extract key skills, experience, and qualifications with industry-leading accuracy.",
    ),
    blurb(
        "Comprehensive Skill Assessment",
        "Identify skill gaps and receive data-driven recommendations for professional development and career advancement.",
    ),
    blurb(
        "Intelligent Matching System",
        "Sophisticated algorithms connect the right talent with the right opportunities based on skills, preferences, and career goals.",
    ),
    blurb(
        "Professional Networking Hub",
        "Build meaningful connections with industry professionals, mentors, and peers in a secure, professional environment.",
    ),
];

const TOOLS: &[Blurb] = &[
    blurb("Resume Builder Pro", "Professional templates with AI-powered content suggestions"),
    blurb("Advanced Search Engine", "Powerful filtering and discovery capabilities"),
    blurb("Secure Messaging", "Enterprise-grade communication platform"),
    blurb("Interview Management", "Streamlined scheduling with automated workflows"),
    blurb("Achievement Tracking", "Milestone tracking with digital credentialing"),
];

#[component]
pub fn Features() -> Element {
    rsx! {
        Hero {
            eyebrow: "Advanced Technology",
            title: "Everything you need to get hired or hire",
            subtitle: "Analysis, matching and networking in one place.",
            Link { to: Route::Auth {}, class: "button hero-cta", "Try it free" }
        }
        BlurbGrid { heading: "Core capabilities", items: CORE }
        BlurbGrid { heading: "Everyday tools", items: TOOLS }
    }
}
