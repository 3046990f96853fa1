pub mod connected;

pub use connected::{is_connected, is_path_between, Connected};
