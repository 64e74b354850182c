pub mod config;
pub mod error;
pub mod menu;
pub mod role;
pub mod view;

pub use config::*;
pub use error::*;
pub use menu::*;
pub use role::*;
pub use view::*;
