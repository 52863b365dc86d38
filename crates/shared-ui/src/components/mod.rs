// Standalone components
pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_card;

// Primitive wrappers
pub mod label;
pub mod navbar;
pub mod separator;

// Dashboard layout
pub mod sidebar;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use page_header::*;
pub use separator::*;
pub use sidebar::*;
pub use skeleton::*;
pub use stat_card::*;
