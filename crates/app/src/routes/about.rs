use dioxus::prelude::*;

use super::marketing::{blurb, Blurb, BlurbGrid, FigureStrip, Hero};
use crate::routes::Route;

const AUDIENCES: &[Blurb] = &[
    blurb(
        "Students",
        "Discover internships, projects, and mentorship opportunities tailored to your skills and career goals.",
    ),
    blurb(
        "Employers",
        "Find top talent, post opportunities, and build relationships with future professionals.",
    ),
    blurb(
        "Mentors",
        "Share your expertise, guide the next generation, and make a meaningful impact on careers.",
    ),
    blurb(
        "Admins",
        "Manage the platform, oversee operations, and ensure quality experiences for all users.",
    ),
];

const VALUES: &[Blurb] = &[
    blurb(
        "Mission",
        "To revolutionize career development by connecting talent with opportunities through AI-powered matching and personalized guidance.",
    ),
    blurb(
        "Vision",
        "A world where every individual can discover and pursue their ideal career path with the right support and opportunities.",
    ),
    blurb(
        "Innovation",
        "Continuously evolving our platform with cutting-edge technology to provide smarter, more effective career solutions.",
    ),
    blurb(
        "Impact",
        "Building a global community that empowers millions of professionals to achieve their career aspirations.",
    ),
];

const FIGURES: &[(&str, &str)] = &[("50K+", "Active Users"), ("10K+", "Opportunities Posted")];

#[component]
pub fn About() -> Element {
    rsx! {
        Hero {
            eyebrow: "About Us",
            title: "Built for every step of a career",
            subtitle: "One platform for the people looking, hiring, guiding and running it all.",
            Link { to: Route::Contact {}, class: "button hero-cta", "Talk to us" }
        }
        BlurbGrid { heading: "Who it serves", items: AUDIENCES }
        FigureStrip { figures: FIGURES }
        BlurbGrid { heading: "What drives us", items: VALUES }
    }
}
