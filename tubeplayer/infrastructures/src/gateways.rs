pub mod pickers;
pub mod repositories;
