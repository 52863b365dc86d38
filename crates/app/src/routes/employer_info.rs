use dioxus::prelude::*;

use super::marketing::{blurb, Blurb, BlurbGrid, Hero};
use crate::routes::Route;

const CAPABILITIES: &[Blurb] = &[
    blurb(
        "Post Internships & Projects",
        "Create detailed job postings for internships and project-based work with custom requirements and skill specifications.",
    ),
    blurb(
        "AI-Powered Resume Matching",
        "Our advanced AI algorithms automatically match the best candidates to your job postings based on skills, experience, and compatibility.",
    ),
    blurb(
        "Applicant Management",
        "Streamlined dashboard to review, filter, and manage all applications with integrated communication tools.",
    ),
    blurb(
        "Analytics & Insights",
        "Get detailed analytics on your job postings, application rates, and candidate quality to optimize your hiring process.",
    ),
    blurb(
        "Targeted Recruitment",
        "Reach the right candidates with precision targeting based on skills, location, education, and career interests.",
    ),
    blurb(
        "Verified Candidates",
        "All candidates go through our verification process ensuring you connect with genuine, qualified professionals.",
    ),
];

const BENEFITS: &[Blurb] = &[
    blurb(
        "Save Time",
        "Reduce hiring time by 60% with AI-powered matching and automated screening processes.",
    ),
    blurb(
        "Cost Effective",
        "Lower recruitment costs with our efficient platform and pay-per-success pricing model.",
    ),
    blurb(
        "Higher Quality Hires",
        "Access to pre-screened, skill-verified candidates increases hiring success rates.",
    ),
];

#[component]
pub fn EmployerInfo() -> Element {
    rsx! {
        Hero {
            eyebrow: "For Employers",
            title: "Connect • Hire • Grow",
            subtitle: "AI-powered precision for internship and early-career hiring.",
            Link { to: Route::Auth {}, class: "button hero-cta", "Start hiring" }
        }
        BlurbGrid { heading: "Employer platform", items: CAPABILITIES }
        BlurbGrid { heading: "Why employers choose us", items: BENEFITS }
    }
}
