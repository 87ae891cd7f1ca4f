use clap::Args;
use colored::Colorize;
use pwa_config::discovery::DEFAULT_MANIFEST_LOCATION;
use pwa_config::scaffold::{icon_folder_of, icons_from_folder, ICON_SIZE_CHOICES, RECOMMENDED_ICON_SIZES};
use pwa_config::{config_path, find_manifest, PwaConfig, CONFIG_FILENAME};
use pwa_manifest::{generate_manifest, merge_manifest, Display, ManifestConfig, ManifestDocument};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::errors::CliError;
use crate::logger;
use crate::prompt::{hex_color, required, Prompter};
use crate::GlobalOpts;

/// Skip confirmation prompts when set
pub const INIT_YES_ENV: &str = "PWA_INIT_YES";

#[derive(Args, Debug, Clone, Default)]
pub struct InitCommand {
    /// Build manifest.json interactively instead of pwa.config.json
    #[arg(long)]
    pub manifest: bool,

    /// Manifest location relative to the project root (with --manifest)
    #[arg(long, value_name = "PATH", requires = "manifest")]
    pub manifest_path: Option<PathBuf>,

    /// Accept every default and skip confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Values collected for a new manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestAnswers {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub theme_color: String,
    pub background_color: String,
    pub icon_folder: String,
    pub icon_sizes: Vec<String>,
}

impl ManifestAnswers {
    pub fn to_manifest_config(&self) -> ManifestConfig {
        let sizes: Vec<&str> = self.icon_sizes.iter().map(String::as_str).collect();
        let mut config = ManifestConfig::new(
            self.name.trim(),
            self.short_name.trim(),
            self.description.trim(),
            self.start_url.trim(),
        );
        config.display = Some(Display::Standalone);
        config.theme_color = Some(self.theme_color.trim().to_string());
        config.background_color = Some(self.background_color.trim().to_string());
        config.icons = icons_from_folder(self.icon_folder.trim(), &sizes);
        config
    }
}

pub fn handle_init(cmd: InitCommand, opts: &GlobalOpts) -> Result<(), CliError> {
    logger::debug("Handling init command");

    let accept_defaults = cmd.yes || std::env::var(INIT_YES_ENV).is_ok();
    if accept_defaults {
        logger::debug("Skipping prompts (--yes or PWA_INIT_YES set)");
    }

    let root = super::project_root(opts)?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout(), accept_defaults);

    if cmd.manifest {
        init_manifest(&root, cmd.manifest_path.as_deref(), &mut prompter).map(|_| ())
    } else {
        init_config(&root, &mut prompter).map(|_| ())
    }
}

/// Write the starter `pwa.config.json`. Returns `None` when the user keeps
/// an existing file.
pub fn init_config<R: BufRead, W: Write>(
    root: &Path,
    prompter: &mut Prompter<R, W>,
) -> Result<Option<PathBuf>, CliError> {
    let path = config_path(root);

    if path.exists()
        && !prompter.confirm(&format!("File '{}' already exists. Overwrite?", CONFIG_FILENAME))?
    {
        logger::info("Operation cancelled by user");
        println!("Operation cancelled.");
        return Ok(None);
    }

    PwaConfig::template().save(&path)?;
    logger::success(&format!("Created {}", path.display()));

    println!();
    println!("{}  {} created successfully!", "✔".green(), CONFIG_FILENAME);
    println!();
    println!("Next steps:");
    println!("  1. Edit {} with your app details", CONFIG_FILENAME.bold());
    println!("  2. Generate the manifest: pwa update");
    println!("  3. Print the head tags: pwa meta");
    Ok(Some(path))
}

/// Where `init --manifest` writes: an explicit path, an existing manifest,
/// or `public/manifest.json` (the root when `public/` can't be created)
pub fn manifest_target(root: &Path, explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return root.join(path);
    }
    if let Some(found) = find_manifest(root) {
        println!("Found existing manifest at: {}", found.display());
        return found;
    }

    let target = root.join(DEFAULT_MANIFEST_LOCATION);
    let Some(parent) = target.parent() else {
        return target;
    };
    match fs::create_dir_all(parent) {
        Ok(()) => target,
        Err(e) => {
            logger::warn(&format!(
                "Could not create {}: {}; using the project root",
                parent.display(),
                e
            ));
            root.join("manifest.json")
        }
    }
}

/// Ask for every manifest value, defaulting to what `existing` has
pub fn ask_manifest<R: BufRead, W: Write>(
    existing: &ManifestDocument,
    prompter: &mut Prompter<R, W>,
) -> Result<ManifestAnswers, CliError> {
    let current = |key: &str, fallback: &str| -> String {
        existing
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
            .to_string()
    };

    let name = prompter.text("App name (full name):", &current("name", "My App"), required("App name"))?;
    let short_default = current("short_name", name.trim());
    let short_name = prompter.text(
        "App short name (max 12 characters recommended):",
        &short_default,
        required("Short name"),
    )?;
    let description = prompter.text(
        "App description:",
        &current("description", "My awesome progressive web app"),
        required("Description"),
    )?;
    let start_url = prompter.text(
        "Start URL (usually '/' for root):",
        &current("start_url", "/"),
        required("Start URL"),
    )?;
    let theme_color = prompter.text(
        "Theme color (hex, e.g. #000000):",
        &current("theme_color", "#000000"),
        hex_color,
    )?;
    let background_color = prompter.text(
        "Background color (hex, e.g. #ffffff):",
        &current("background_color", "#ffffff"),
        hex_color,
    )?;
    let icon_folder = prompter.text(
        "Icon folder path (e.g. /icons):",
        &icon_folder_of(existing),
        required("Icon folder path"),
    )?;
    let icon_sizes = prompter.multiselect(
        "Icon sizes (numbers or values, comma separated):",
        ICON_SIZE_CHOICES,
        RECOMMENDED_ICON_SIZES,
    )?;

    Ok(ManifestAnswers {
        name,
        short_name,
        description,
        start_url,
        theme_color,
        background_color,
        icon_folder,
        icon_sizes,
    })
}

/// Build a manifest interactively and write it, keeping any members the
/// answers don't cover
pub fn init_manifest<R: BufRead, W: Write>(
    root: &Path,
    explicit: Option<&Path>,
    prompter: &mut Prompter<R, W>,
) -> Result<PathBuf, CliError> {
    let target = manifest_target(root, explicit);

    let existing = if target.is_file() {
        pwa_manifest::read_from_path(&target).unwrap_or_else(|e| {
            logger::warn(&format!("Could not parse existing manifest, starting fresh: {}", e));
            ManifestDocument::new()
        })
    } else {
        ManifestDocument::new()
    };

    println!();
    println!("Let's set up your PWA manifest!");
    println!();

    let answers = ask_manifest(&existing, prompter)?;
    let fresh = generate_manifest(&answers.to_manifest_config());
    let manifest = merge_manifest(&existing, &fresh);

    pwa_manifest::write_to_path(&manifest, &target)?;

    logger::success(&format!("Wrote {}", target.display()));
    println!();
    println!("{}  Manifest created successfully!", "✔".green());
    println!("Location: {}", target.display());
    println!();
    println!("Next steps:");
    println!("  1. Make sure your icon files exist at the specified paths");
    println!("  2. Update any additional fields if needed");
    println!("  3. Test your PWA installation");
    Ok(target)
}
