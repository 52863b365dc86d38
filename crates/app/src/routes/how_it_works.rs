use dioxus::prelude::*;

use super::marketing::{blurb, Blurb, BlurbGrid, FigureStrip, Hero};
use crate::routes::Route;

const STEPS: &[Blurb] = &[
    blurb("1. Create Your Profile", "Set up your professional identity"),
    blurb("2. Upload & Analyze", "Let AI optimize your content"),
    blurb("3. Smart Matching", "Find perfect opportunities"),
    blurb("4. Connect & Grow", "Build meaningful relationships"),
];

const AUDIENCES: &[Blurb] = &[
    blurb(
        "Students & Graduates",
        "Launch your career with internships and entry-level positions",
    ),
    blurb(
        "Professionals",
        "Advance your career with better opportunities and connections",
    ),
    blurb("Employers", "Find and hire the best talent for your organization"),
];

const FIGURES: &[(&str, &str)] = &[
    ("50K+", "Active Users"),
    ("95%", "Match Accuracy"),
    ("24h", "Average Response"),
    ("99.9%", "Platform Uptime"),
];

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        Hero {
            eyebrow: "Simple 4-Step Process",
            title: "From sign-up to offer",
            subtitle: "A proven process that keeps every step visible.",
            Link { to: Route::Auth {}, class: "button hero-cta", "Create your profile" }
        }
        BlurbGrid { heading: "How it works", items: STEPS }
        FigureStrip { figures: FIGURES }
        BlurbGrid { heading: "Who it's for", items: AUDIENCES }
    }
}
