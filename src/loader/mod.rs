pub mod scenario;

pub use scenario::{load_scenario, parse_scenario, save_scenario};
