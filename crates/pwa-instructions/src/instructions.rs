//! Install instruction resolution
//!
//! Text is resolved in three layers, last applied wins:
//!
//! 1. built-in English defaults
//! 2. the selected locale preset (replaces the defaults wholesale)
//! 3. caller overrides, merged field by field
//!
//! The resolved bundle is then projected onto the steps of one platform.
//! Nothing here fails: unknown locales fall back to English and unknown
//! platforms get an empty step list.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::locales::Locale;
use crate::platform::{Platform, PlatformTag};
use crate::types::{InstallInstructions, InstructionOverrides, InstructionText, Step, TwoSteps};

/// How a caller customizes instruction text.
///
/// When read from JSON, the presence of a `locale` key selects
/// [`InstructionOptions::Localized`]; anything else is a bare override bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InstructionOptions {
    Localized {
        locale: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        overrides: Option<InstructionOverrides>,
    },
    Legacy(InstructionOverrides),
}

impl Default for InstructionOptions {
    fn default() -> Self {
        InstructionOptions::Legacy(InstructionOverrides::default())
    }
}

impl InstructionOptions {
    pub fn locale(locale: impl Into<String>) -> Self {
        InstructionOptions::Localized {
            locale: locale.into(),
            overrides: None,
        }
    }

    pub fn with_overrides(self, overrides: InstructionOverrides) -> Self {
        match self {
            InstructionOptions::Localized { locale, .. } => InstructionOptions::Localized {
                locale,
                overrides: Some(overrides),
            },
            InstructionOptions::Legacy(_) => InstructionOptions::Legacy(overrides),
        }
    }
}

/// Resolve the full text bundle for `options`
pub fn resolve_text(options: Option<&InstructionOptions>) -> InstructionText {
    match options {
        None => Locale::En.preset().clone(),
        Some(InstructionOptions::Legacy(overrides)) => {
            let mut text = Locale::En.preset().clone();
            text.apply_overrides(overrides);
            text
        }
        Some(InstructionOptions::Localized { locale, overrides }) => {
            let preset = Locale::from_code(locale).unwrap_or_else(|| {
                debug!("Unknown locale '{}', falling back to en", locale);
                Locale::En
            });
            let mut text = preset.preset().clone();
            if let Some(overrides) = overrides {
                text.apply_overrides(overrides);
            }
            text
        }
    }
}

/// Install instructions for `platform`, customized by `options`
pub fn get_install_instructions(
    platform: impl Into<PlatformTag>,
    options: Option<&InstructionOptions>,
) -> InstallInstructions {
    let text = resolve_text(options);

    let platform = match platform.into() {
        PlatformTag::Known(platform) => platform,
        PlatformTag::Unrecognized(tag) => {
            debug!("Unrecognized platform '{}', returning no steps", tag);
            return InstallInstructions {
                platform: Platform::Other,
                steps: Vec::new(),
                title: text.title,
                subtitle: text.subtitle,
                button_text: text.button_text,
                got_it_text: text.got_it_text,
            };
        }
    };

    let (subtitle, steps) = match platform {
        Platform::Ios => (
            text.subtitle,
            vec![
                step(1, &text.ios.step1_title, &text.ios.step1_desc),
                step(2, &text.ios.step2_title, &text.ios.step2_desc),
                step(3, &text.ios.step3_title, &text.ios.step3_desc),
            ],
        ),
        Platform::MacosSafari => (text.subtitle_macos, two_step_list(&text.macos)),
        Platform::Android => (text.subtitle, two_step_list(&text.android)),
        Platform::Desktop | Platform::Other => (text.subtitle, two_step_list(&text.desktop)),
    };

    InstallInstructions {
        platform,
        steps,
        title: text.title,
        subtitle,
        button_text: text.button_text,
        got_it_text: text.got_it_text,
    }
}

fn step(number: u32, title: &str, description: &str) -> Step {
    Step {
        number,
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn two_step_list(steps: &TwoSteps) -> Vec<Step> {
    vec![
        step(1, &steps.step1_title, &steps.step1_desc),
        step(2, &steps.step2_title, &steps.step2_desc),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IosStepOverrides;

    #[test]
    fn test_ios_has_three_numbered_steps() {
        let instructions = get_install_instructions(Platform::Ios, None);
        assert_eq!(instructions.platform, Platform::Ios);
        let numbers: Vec<u32> = instructions.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(instructions.steps[0].title, "Tap the Share icon");
    }

    #[test]
    fn test_step_counts_per_platform() {
        for (platform, count) in [
            (Platform::Ios, 3),
            (Platform::Android, 2),
            (Platform::MacosSafari, 2),
            (Platform::Desktop, 2),
            (Platform::Other, 2),
        ] {
            assert_eq!(
                get_install_instructions(platform, None).steps.len(),
                count,
                "{platform}"
            );
        }
    }

    #[test]
    fn test_macos_uses_dock_subtitle() {
        let instructions = get_install_instructions(Platform::MacosSafari, None);
        assert!(instructions.subtitle.contains("Dock"));
        assert_eq!(instructions.steps[0].title, "Click the File menu");
    }

    #[test]
    fn test_other_shares_desktop_steps_but_keeps_tag() {
        let desktop = get_install_instructions(Platform::Desktop, None);
        let other = get_install_instructions(Platform::Other, None);
        assert_eq!(other.platform, Platform::Other);
        assert_eq!(desktop.platform, Platform::Desktop);
        assert_eq!(desktop.steps, other.steps);
    }

    #[test]
    fn test_unrecognized_tag_degrades_to_empty_other() {
        let instructions = get_install_instructions("blackberry", None);
        assert_eq!(instructions.platform, Platform::Other);
        assert!(instructions.steps.is_empty());
        assert_eq!(instructions.title, "Install App");
    }

    #[test]
    fn test_legacy_overrides_on_english() {
        let overrides = InstructionOverrides {
            title: Some("Custom Title".into()),
            subtitle: Some("Custom Subtitle".into()),
            button_text: Some("Custom Button".into()),
            got_it_text: Some("Custom Got It".into()),
            ios: Some(IosStepOverrides {
                step1_title: Some("Custom Step 1".into()),
                step1_desc: Some("Custom Description 1".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let options = InstructionOptions::Legacy(overrides);
        let instructions = get_install_instructions(Platform::Ios, Some(&options));

        assert_eq!(instructions.title, "Custom Title");
        assert_eq!(instructions.subtitle, "Custom Subtitle");
        assert_eq!(instructions.button_text, "Custom Button");
        assert_eq!(instructions.got_it_text, "Custom Got It");
        assert_eq!(instructions.steps[0].title, "Custom Step 1");
        assert_eq!(instructions.steps[0].description, "Custom Description 1");
        assert_eq!(instructions.steps[1].title, "Scroll down the menu");
    }

    #[test]
    fn test_overriding_step_title_keeps_description() {
        let options = InstructionOptions::Legacy(InstructionOverrides {
            ios: Some(IosStepOverrides {
                step1_title: Some("Only the title".into()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let instructions = get_install_instructions(Platform::Ios, Some(&options));
        assert_eq!(instructions.steps[0].title, "Only the title");
        assert_eq!(
            instructions.steps[0].description,
            "In Safari's bar, tap the share icon (square with arrow pointing up)"
        );
    }

    #[test]
    fn test_locale_selection() {
        let es = InstructionOptions::locale("es");
        assert_eq!(
            get_install_instructions(Platform::Ios, Some(&es)).steps[0].title,
            "Toca el ícono de Compartir"
        );

        let invalid = InstructionOptions::locale("invalid");
        let fallback = get_install_instructions(Platform::Ios, Some(&invalid));
        assert_eq!(fallback.steps[0].title, "Tap the Share icon");
        assert_eq!(fallback.button_text, "Install App");
    }

    #[test]
    fn test_locale_with_overrides_touches_only_overridden_keys() {
        let options = InstructionOptions::locale("pt-BR").with_overrides(InstructionOverrides {
            title: Some("X".into()),
            ..Default::default()
        });
        let instructions = get_install_instructions(Platform::Ios, Some(&options));
        assert_eq!(instructions.title, "X");
        assert_eq!(instructions.button_text, "Instalar App");
        assert_eq!(instructions.steps[0].title, "Toque no ícone Compartilhar");
    }

    #[test]
    fn test_locale_preset_replaces_english_entirely() {
        let options = InstructionOptions::locale("pt-BR");
        let instructions = get_install_instructions(Platform::MacosSafari, Some(&options));
        assert_eq!(instructions.subtitle, "Adicione ao Dock para acesso rápido");
        assert_eq!(instructions.steps[0].title, "Clique no menu Arquivo");
    }
}
