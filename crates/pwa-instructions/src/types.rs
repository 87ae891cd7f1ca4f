//! Instruction text bundles and resolved instruction types

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Step texts for the three-step iOS flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IosSteps {
    pub step1_title: String,
    pub step1_desc: String,
    pub step2_title: String,
    pub step2_desc: String,
    pub step3_title: String,
    pub step3_desc: String,
}

/// Step texts for the two-step flows (Android, macOS Safari, desktop)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoSteps {
    pub step1_title: String,
    pub step1_desc: String,
    pub step2_title: String,
    pub step2_desc: String,
}

/// A complete instruction text bundle; every locale preset is one of these
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionText {
    pub title: String,
    pub subtitle: String,
    pub subtitle_macos: String,
    pub button_text: String,
    pub got_it_text: String,
    pub ios: IosSteps,
    pub android: TwoSteps,
    pub macos: TwoSteps,
    pub desktop: TwoSteps,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IosStepOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step1_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step1_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step2_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step2_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step3_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step3_desc: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoStepOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step1_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step1_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step2_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step2_desc: Option<String>,
}

/// Partial bundle applied key by key on top of a preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructionOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_macos: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub got_it_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosStepOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<TwoStepOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macos: Option<TwoStepOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop: Option<TwoStepOverrides>,
}

fn apply(target: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        value.clone_into(target);
    }
}

impl IosSteps {
    fn apply(&mut self, overrides: &IosStepOverrides) {
        apply(&mut self.step1_title, overrides.step1_title.as_deref());
        apply(&mut self.step1_desc, overrides.step1_desc.as_deref());
        apply(&mut self.step2_title, overrides.step2_title.as_deref());
        apply(&mut self.step2_desc, overrides.step2_desc.as_deref());
        apply(&mut self.step3_title, overrides.step3_title.as_deref());
        apply(&mut self.step3_desc, overrides.step3_desc.as_deref());
    }
}

impl TwoSteps {
    fn apply(&mut self, overrides: &TwoStepOverrides) {
        apply(&mut self.step1_title, overrides.step1_title.as_deref());
        apply(&mut self.step1_desc, overrides.step1_desc.as_deref());
        apply(&mut self.step2_title, overrides.step2_title.as_deref());
        apply(&mut self.step2_desc, overrides.step2_desc.as_deref());
    }
}

impl InstructionText {
    /// Layer `overrides` on top of this bundle.
    ///
    /// Nested step groups merge field by field, so overriding one step title
    /// keeps the sibling description.
    pub fn apply_overrides(&mut self, overrides: &InstructionOverrides) {
        apply(&mut self.title, overrides.title.as_deref());
        apply(&mut self.subtitle, overrides.subtitle.as_deref());
        apply(&mut self.subtitle_macos, overrides.subtitle_macos.as_deref());
        apply(&mut self.button_text, overrides.button_text.as_deref());
        apply(&mut self.got_it_text, overrides.got_it_text.as_deref());
        if let Some(ios) = &overrides.ios {
            self.ios.apply(ios);
        }
        if let Some(android) = &overrides.android {
            self.android.apply(android);
        }
        if let Some(macos) = &overrides.macos {
            self.macos.apply(macos);
        }
        if let Some(desktop) = &overrides.desktop {
            self.desktop.apply(desktop);
        }
    }
}

/// One numbered install step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: u32,
    pub title: String,
    pub description: String,
}

/// Display-ready install instructions for a single platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallInstructions {
    pub platform: Platform,
    pub steps: Vec<Step>,
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub got_it_text: String,
}
