mod manager;
mod persistence;

pub use manager::DayTracker;
pub use persistence::{export_csv, load_day, save_day};
