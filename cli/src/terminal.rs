pub mod colors;
pub mod format;
pub mod histogram;
pub mod logging;
pub mod print;
pub mod progress;
