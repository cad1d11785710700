pub mod actions;
pub mod app;
pub mod cloud_view;
pub mod control_panel;
pub mod keyword_table;
pub mod theme;
pub mod top_bar;

pub use actions::{
    ActionQueue,
    UiAction,
};
pub use app::WordCloudApp;
