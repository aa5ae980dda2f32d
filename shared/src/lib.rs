pub mod availability;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod inventory;
pub mod rotation;
pub mod selector;
pub mod shared_wheel_game;
pub mod storage;

pub use error::SpinError;
