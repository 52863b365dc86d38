use dioxus::prelude::*;

use super::marketing::{blurb, Blurb, BlurbGrid, FigureStrip, Hero};
use crate::config::app_config;
use crate::routes::Route;

const HIGHLIGHTS: &[Blurb] = &[
    blurb(
        "AI-Powered Matching",
        "Profiles are matched to internships and roles by skills, goals and availability.",
    ),
    blurb(
        "Career Growth",
        "Mentors, projects and learning paths that move careers forward.",
    ),
    blurb(
        "Secure Platform",
        "Your data stays yours, shared only with the people you choose.",
    ),
    blurb(
        "Personalized Experience",
        "Every role gets a dashboard built around what it needs to do next.",
    ),
];

const FIGURES: &[(&str, &str)] = &[
    ("50K+", "Active Users"),
    ("10K+", "Job Opportunities"),
    ("95%", "Success Rate"),
    ("500+", "Partner Companies"),
];

#[component]
pub fn Home() -> Element {
    let site = &app_config().site;

    rsx! {
        Hero {
            eyebrow: "Career Development Platform",
            title: "{site.brand}: Grow Your Career",
            subtitle: "{site.tagline}",
            Link { to: Route::Auth {}, class: "button hero-cta", "Get Started" }
            Link { to: Route::HowItWorks {}, class: "hero-secondary", "See how it works" }
        }
        FigureStrip { figures: FIGURES }
        BlurbGrid { heading: "Why SkillSyncer", items: HIGHLIGHTS }
    }
}
