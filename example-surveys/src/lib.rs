pub mod introversion;
pub mod weekend;

// Re-export introversion script
pub use introversion::{TITLE, introversion_script, introversion_session};

// Re-export weekend script
pub use weekend::weekend_script;
