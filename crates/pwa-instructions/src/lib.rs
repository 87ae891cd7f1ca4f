//! Localized install instructions for progressive web apps
//!
//! Resolves the text shown in an "install this app" prompt for a given
//! platform and locale, and guesses the platform from a user-agent string.

pub mod instructions;
pub mod locales;
pub mod platform;
pub mod types;

pub use instructions::{get_install_instructions, resolve_text, InstructionOptions};
pub use locales::{locale_preset, Locale};
pub use platform::{detect_platform, InstallSignals, Platform, PlatformTag};
pub use types::{
    InstallInstructions, InstructionOverrides, InstructionText, IosStepOverrides, IosSteps, Step,
    TwoStepOverrides, TwoSteps,
};
