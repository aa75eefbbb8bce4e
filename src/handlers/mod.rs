pub mod api;
pub mod audio;
pub mod credits;
pub mod synthesize;
pub mod voices;
