pub mod menu;
pub mod viewport;

pub use menu::Menu;
pub use viewport::Viewport;
