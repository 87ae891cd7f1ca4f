use clap::Args;
use colored::Colorize;
use pwa_config::{config_path, resolve_manifest_path, PwaConfig};
use pwa_manifest::merge::is_app_specific;
use pwa_manifest::{changed_fields, generate_manifest, merge_manifest, ManifestDocument};
use std::path::{Path, PathBuf};

use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone, Default)]
pub struct UpdateCommand {
    /// Manifest location relative to the project root
    #[arg(long, value_name = "PATH")]
    pub manifest_path: Option<PathBuf>,

    /// Print the merged manifest instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Outcome of reconciling the manifest with `pwa.config.json`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub manifest_path: PathBuf,
    pub manifest: ManifestDocument,
    pub updated_fields: Vec<String>,
    pub changed_fields: Vec<String>,
    pub created: bool,
}

pub fn handle_update(cmd: UpdateCommand, opts: &GlobalOpts) -> Result<(), CliError> {
    logger::debug("Handling update command");
    let root = super::project_root(opts)?;
    let report = reconcile(&root, cmd.manifest_path.as_deref(), cmd.dry_run)?;

    if cmd.dry_run {
        println!("{}", serde_json::to_string_pretty(&report.manifest)?);
        println!();
        println!("{}", "Dry run: manifest not written".dimmed());
    } else if report.created {
        logger::success(&format!("Created {}", report.manifest_path.display()));
    } else {
        logger::success(&format!("Successfully updated {}", report.manifest_path.display()));
    }

    println!("Updated fields: {}", report.updated_fields.join(", "));
    if report.changed_fields.is_empty() {
        println!("{}", "No changes".dimmed());
    } else {
        println!("Changed fields: {}", report.changed_fields.join(", ").bold());
    }
    Ok(())
}

/// Generate from the project config, merge into the manifest on disk and
/// write the result unless `dry_run`
pub fn reconcile(
    root: &Path,
    explicit: Option<&Path>,
    dry_run: bool,
) -> Result<UpdateReport, CliError> {
    let config = PwaConfig::load(&config_path(root))?;
    let manifest_path = resolve_manifest_path(root, explicit)?;

    let created = !manifest_path.is_file();
    let existing = if created {
        logger::info(&format!("Creating new manifest at: {}", manifest_path.display()));
        ManifestDocument::new()
    } else {
        match pwa_manifest::read_from_path(&manifest_path) {
            Ok(existing) => {
                logger::info(&format!("Found existing manifest at: {}", manifest_path.display()));
                existing
            }
            Err(e) => {
                logger::warn(&format!(
                    "Could not parse existing manifest, creating new one: {}",
                    e
                ));
                ManifestDocument::new()
            }
        }
    };

    let fresh = generate_manifest(&config.to_manifest_config());
    let merged = merge_manifest(&existing, &fresh);
    let changed = changed_fields(&existing, &merged);

    if !dry_run {
        pwa_manifest::write_to_path(&merged, &manifest_path)?;
    }

    Ok(UpdateReport {
        updated_fields: fresh
            .keys()
            .filter(|key| is_app_specific(key))
            .cloned()
            .collect(),
        changed_fields: changed,
        manifest: merged,
        manifest_path,
        created,
    })
}
