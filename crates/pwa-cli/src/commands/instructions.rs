use clap::Args;
use colored::Colorize;
use pwa_instructions::{
    get_install_instructions, InstallInstructions, InstructionOptions, InstructionOverrides, Locale,
    Platform, PlatformTag,
};
use pwa_manifest::manifest_writer::read_json_file;
use std::path::{Path, PathBuf};

use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone)]
pub struct InstructionsCommand {
    /// Target platform (ios, macos_safari, android, desktop, other)
    pub platform: String,

    /// Locale code (en, pt-BR, es)
    #[arg(short, long)]
    pub locale: Option<String>,

    /// JSON file with text overrides
    #[arg(long, value_name = "FILE")]
    pub overrides: Option<PathBuf>,

    /// Print the resolved instructions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn handle_instructions(cmd: InstructionsCommand, _opts: &GlobalOpts) -> Result<(), CliError> {
    logger::debug("Handling instructions command");

    let tag = PlatformTag::from(cmd.platform.as_str());
    if let PlatformTag::Unrecognized(raw) = &tag {
        logger::warn(&format!(
            "Unrecognized platform '{}'; expected one of {}",
            raw,
            Platform::ALL.map(Platform::as_str).join(", ")
        ));
    }
    if let Some(code) = cmd.locale.as_deref() {
        if Locale::from_code(code).is_none() {
            logger::warn(&format!("Unknown locale '{}', falling back to en", code));
        }
    }

    let overrides = cmd.overrides.as_deref().map(load_overrides).transpose()?;
    let options = build_options(cmd.locale, overrides);
    let instructions = get_install_instructions(tag, options.as_ref());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&instructions)?);
    } else {
        print!("{}", render(&instructions));
    }
    Ok(())
}

fn load_overrides(path: &Path) -> Result<InstructionOverrides, CliError> {
    logger::debug(&format!("Reading overrides from {}", path.display()));
    Ok(read_json_file(path)?)
}

/// Options for the resolver; a locale selects the localized form
pub fn build_options(
    locale: Option<String>,
    overrides: Option<InstructionOverrides>,
) -> Option<InstructionOptions> {
    match (locale, overrides) {
        (Some(locale), overrides) => Some(InstructionOptions::Localized { locale, overrides }),
        (None, Some(overrides)) => Some(InstructionOptions::Legacy(overrides)),
        (None, None) => None,
    }
}

/// Human-readable instructions
pub fn render(instructions: &InstallInstructions) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", instructions.title.bold()));
    out.push_str(&format!("{}\n", instructions.subtitle.dimmed()));

    if !instructions.steps.is_empty() {
        out.push('\n');
    }
    for step in &instructions.steps {
        out.push_str(&format!("  {}. {}\n", step.number, step.title.bold()));
        out.push_str(&format!("     {}\n", step.description));
    }

    out.push('\n');
    out.push_str(&format!(
        "[{}]  [{}]\n",
        instructions.button_text, instructions.got_it_text
    ));
    out
}
