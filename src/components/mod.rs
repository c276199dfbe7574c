// Shared render pieces drawn around and over the active screen

pub mod footer;
pub mod help_overlay;
pub mod sidebar;
pub mod space_indicator;
pub mod transition_overlay;

pub use footer::Footer;
pub use help_overlay::HelpOverlay;
pub use sidebar::Sidebar;
pub use space_indicator::SpaceIndicator;
pub use transition_overlay::TransitionOverlay;
