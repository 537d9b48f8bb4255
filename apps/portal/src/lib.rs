pub mod pages;
pub mod render;
pub mod router;
pub mod session;

pub use pages::{resolve, Page};
pub use render::render;
pub use router::{NavigationHistory, Route};
pub use session::PortalSession;
