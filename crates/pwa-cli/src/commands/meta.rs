use clap::Args;
use pwa_config::{config_path, PwaConfig};
use pwa_manifest::{generate_meta_tags, meta_tags_object, meta_tags_to_html};

use crate::errors::CliError;
use crate::logger;
use crate::GlobalOpts;

#[derive(Args, Debug, Clone, Default)]
pub struct MetaCommand {
    /// Print tag descriptors as JSON
    #[arg(long, conflicts_with = "object")]
    pub json: bool,

    /// Print the structured links/meta object as JSON
    #[arg(long)]
    pub object: bool,
}

pub fn handle_meta(cmd: MetaCommand, opts: &GlobalOpts) -> Result<(), CliError> {
    logger::debug("Handling meta command");
    let root = super::project_root(opts)?;
    let config = PwaConfig::load(&config_path(&root))?;
    println!("{}", render_meta(&config, &cmd)?);
    Ok(())
}

pub fn render_meta(config: &PwaConfig, cmd: &MetaCommand) -> Result<String, CliError> {
    let meta_config = config.to_meta_tags_config();
    if cmd.object {
        return Ok(serde_json::to_string_pretty(&meta_tags_object(&meta_config))?);
    }

    let tags = generate_meta_tags(&meta_config);
    logger::debug(&format!("Projected {} head tags", tags.len()));
    if cmd.json {
        Ok(serde_json::to_string_pretty(&tags)?)
    } else {
        Ok(meta_tags_to_html(&tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_markup() {
        let Ok(html) = render_meta(&PwaConfig::template(), &MetaCommand::default()) else {
            panic!("render failed");
        };
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines[0], r#"<link rel="manifest" href="/manifest.json" />"#);
        assert!(lines.contains(&r##"<meta name="theme-color" content="#000000" />"##));
        assert!(lines.contains(&r#"<meta name="apple-mobile-web-app-status-bar-style" content="default" />"#));
    }

    #[test]
    fn test_json_descriptors() {
        let cmd = MetaCommand {
            json: true,
            object: false,
        };
        let Ok(out) = render_meta(&PwaConfig::template(), &cmd) else {
            panic!("render failed");
        };
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(value[0]["tag"], "link");
        assert_eq!(value[0]["attributes"]["rel"], "manifest");
    }

    #[test]
    fn test_object_form() {
        let cmd = MetaCommand {
            json: false,
            object: true,
        };
        let Ok(out) = render_meta(&PwaConfig::template(), &cmd) else {
            panic!("render failed");
        };
        let value: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert!(value["links"].is_array());
        assert!(value["meta"].is_array());
    }
}
