pub mod footer;
pub mod navbar;

pub use footer::SiteFooter;
pub use navbar::SiteNavbar;
