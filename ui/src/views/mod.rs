mod monitor;
pub use monitor::Monitor;

mod about;
pub use about::About;
