pub mod app;
pub mod calc;
pub mod ui;
pub mod utils;
pub mod view_model;

pub use app::App;
pub use view_model::{HoldingsState, HoldingsViewModel, RetryAction};
