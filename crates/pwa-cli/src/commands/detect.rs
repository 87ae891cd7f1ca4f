use clap::Args;
use pwa_instructions::detect_platform;

use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone)]
pub struct DetectCommand {
    /// Browser user-agent string
    pub user_agent: String,
}

pub fn handle_detect(cmd: DetectCommand, _opts: &GlobalOpts) -> Result<(), CliError> {
    logger::debug(&format!("Detecting platform for '{}'", cmd.user_agent));
    println!("{}", detect_platform(&cmd.user_agent));
    Ok(())
}
