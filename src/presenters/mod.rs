pub mod file;
#[cfg(feature = "gui")]
pub mod pixels;
pub mod status;
