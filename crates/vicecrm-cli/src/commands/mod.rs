pub mod backup;
pub mod get;
pub mod logo;
pub mod reset;
pub mod set;
pub mod show;
pub mod utils;
