pub mod config;
pub mod error;

// Session and routing
pub mod chrome;
pub mod guard;
pub mod role;
pub mod session;

// Dashboard content
pub mod dashboard;
pub mod greeting;
pub mod requests;

pub use chrome::*;
pub use config::*;
pub use dashboard::*;
pub use error::*;
pub use guard::*;
pub use requests::*;
pub use role::*;
pub use session::*;
