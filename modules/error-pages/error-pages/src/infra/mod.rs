//! In-process collaborators used when the module runs on its own.

pub mod navigation;
pub mod render;
pub mod store;
pub mod widgets;

pub use navigation::StaticNavigation;
pub use render::JsonPageRenderer;
pub use store::InMemoryIncidentStore;
pub use widgets::StaticNewsSliderFactory;
