use chrono::Datelike;
use dioxus::prelude::*;

use crate::config::app_config;
use crate::routes::Route;

#[component]
pub fn SiteFooter() -> Element {
    let site = &app_config().site;
    let year = chrono::Local::now().year();
    let mailto = format!("mailto:{}", site.support_email);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./footer.css") }

        footer { class: "site-footer",
            div { class: "site-footer-grid",
                div {
                    p { class: "site-footer-brand", "{site.brand}" }
                    p { class: "site-footer-tagline", "{site.tagline}" }
                }
                nav { class: "site-footer-links",
                    span { class: "site-footer-heading", "Company" }
                    Link { to: Route::About {}, "About" }
                    Link { to: Route::Contact {}, "Contact" }
                    Link { to: Route::EmployerInfo {}, "For Employers" }
                }
                nav { class: "site-footer-links",
                    span { class: "site-footer-heading", "Platform" }
                    Link { to: Route::Features {}, "Features" }
                    Link { to: Route::HowItWorks {}, "How It Works" }
                    Link { to: Route::Auth {}, "Sign In" }
                }
                div { class: "site-footer-links",
                    span { class: "site-footer-heading", "Support" }
                    a { href: "{mailto}", "{site.support_email}" }
                }
            }
            p { class: "site-footer-copyright", "© {year} {site.brand}. All rights reserved." }
        }
    }
}
