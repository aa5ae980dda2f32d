pub mod admin_panel;
pub mod gradient_background;
pub mod loot_modal;

pub use admin_panel::AdminPanel;
pub use gradient_background::GradientBackground;
pub use loot_modal::LootModal;
