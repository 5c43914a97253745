pub mod advice;
pub mod config;
pub mod profile;
pub mod swatch;

pub use advice::{ColorAdvice, ColorPairing, PairingKind};
pub use config::AppConfig;
pub use profile::UserStyleProfile;
pub use swatch::ColorSwatch;
