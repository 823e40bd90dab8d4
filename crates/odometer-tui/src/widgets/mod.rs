mod counter;
mod status_bar;

pub use counter::CounterWidget;
pub use status_bar::StatusBarWidget;
