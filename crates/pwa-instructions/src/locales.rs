//! Built-in locale presets for install instruction text

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{InstructionText, IosSteps, TwoSteps};

/// Locales with a built-in preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "es")]
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::PtBr, Locale::Es];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::PtBr => "pt-BR",
            Locale::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }

    /// The complete text bundle for this locale
    pub fn preset(self) -> &'static InstructionText {
        match self {
            Locale::En => &EN,
            Locale::PtBr => &PT_BR,
            Locale::Es => &ES,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Preset for `code`, falling back to English for unknown codes
pub fn locale_preset(code: &str) -> &'static InstructionText {
    Locale::from_code(code).unwrap_or_default().preset()
}

fn two_steps(step1: (&str, &str), step2: (&str, &str)) -> TwoSteps {
    TwoSteps {
        step1_title: step1.0.to_string(),
        step1_desc: step1.1.to_string(),
        step2_title: step2.0.to_string(),
        step2_desc: step2.1.to_string(),
    }
}

fn ios_steps(step1: (&str, &str), step2: (&str, &str), step3: (&str, &str)) -> IosSteps {
    IosSteps {
        step1_title: step1.0.to_string(),
        step1_desc: step1.1.to_string(),
        step2_title: step2.0.to_string(),
        step2_desc: step2.1.to_string(),
        step3_title: step3.0.to_string(),
        step3_desc: step3.1.to_string(),
    }
}

static EN: Lazy<InstructionText> = Lazy::new(|| InstructionText {
    title: "Install App".to_string(),
    subtitle: "Add to your home screen for quick access".to_string(),
    subtitle_macos: "Add to Dock for quick access".to_string(),
    button_text: "Install App".to_string(),
    got_it_text: "Got it!".to_string(),
    ios: ios_steps(
        (
            "Tap the Share icon",
            "In Safari's bar, tap the share icon (square with arrow pointing up)",
        ),
        (
            "Scroll down the menu",
            "In the sheet that opens, drag down to see more options",
        ),
        (
            "Tap 'Add to Home Screen'",
            "Then tap 'Add' in the top right corner",
        ),
    ),
    android: two_steps(
        (
            "Open browser menu",
            "Tap the three dots in the top right corner",
        ),
        ("Install app", "Tap \"Install app\" or \"Add to Home Screen\""),
    ),
    macos: two_steps(
        ("Click the File menu", "In Safari's menu bar, click 'File'"),
        ("Add to Dock", "Click 'Add to Dock' to create a shortcut"),
    ),
    desktop: two_steps(
        (
            "Click the browser menu",
            "Click the three dots in the top right corner",
        ),
        ("Install app", "Click 'Install App' or 'Install app'"),
    ),
});

static PT_BR: Lazy<InstructionText> = Lazy::new(|| InstructionText {
    title: "Instalar App".to_string(),
    subtitle: "Adicione à tela inicial para acesso rápido".to_string(),
    subtitle_macos: "Adicione ao Dock para acesso rápido".to_string(),
    button_text: "Instalar App".to_string(),
    got_it_text: "Entendi!".to_string(),
    ios: ios_steps(
        (
            "Toque no ícone Compartilhar",
            "Na barra do Safari, toque no ícone de compartilhar (quadrado com seta para cima)",
        ),
        (
            "Role o menu para baixo",
            "Na janela que abrir, arraste para baixo para ver mais opções",
        ),
        (
            "Toque em 'Adicionar à Tela de Início'",
            "Em seguida, toque em 'Adicionar' no canto superior direito",
        ),
    ),
    android: two_steps(
        (
            "Abra o menu do navegador",
            "Toque nos três pontos no canto superior direito",
        ),
        (
            "Instalar app",
            "Toque em \"Instalar app\" ou \"Adicionar à tela inicial\"",
        ),
    ),
    macos: two_steps(
        (
            "Clique no menu Arquivo",
            "Na barra de menus do Safari, clique em 'Arquivo'",
        ),
        (
            "Adicionar ao Dock",
            "Clique em 'Adicionar ao Dock' para criar um atalho",
        ),
    ),
    desktop: two_steps(
        (
            "Clique no menu do navegador",
            "Clique nos três pontos no canto superior direito",
        ),
        (
            "Instalar app",
            "Clique em 'Instalar App' ou 'Instalar aplicativo'",
        ),
    ),
});

static ES: Lazy<InstructionText> = Lazy::new(|| InstructionText {
    title: "Instalar App".to_string(),
    subtitle: "Añade a tu pantalla de inicio para acceso rápido".to_string(),
    subtitle_macos: "Añade al Dock para acceso rápido".to_string(),
    button_text: "Instalar App".to_string(),
    got_it_text: "¡Entendido!".to_string(),
    ios: ios_steps(
        (
            "Toca el ícono de Compartir",
            "En la barra de Safari, toca el ícono de compartir (cuadrado con flecha hacia arriba)",
        ),
        (
            "Desplázate en el menú",
            "En la ventana que se abre, arrastra hacia abajo para ver más opciones",
        ),
        (
            "Toca 'Añadir a pantalla de inicio'",
            "Luego toca 'Añadir' en la esquina superior derecha",
        ),
    ),
    android: two_steps(
        (
            "Abre el menú del navegador",
            "Toca los tres puntos en la esquina superior derecha",
        ),
        (
            "Instalar app",
            "Toca \"Instalar app\" o \"Añadir a pantalla de inicio\"",
        ),
    ),
    macos: two_steps(
        (
            "Haz clic en el menú Archivo",
            "En la barra de menús de Safari, haz clic en 'Archivo'",
        ),
        (
            "Añadir al Dock",
            "Haz clic en 'Añadir al Dock' para crear un acceso directo",
        ),
    ),
    desktop: two_steps(
        (
            "Haz clic en el menú del navegador",
            "Haz clic en los tres puntos en la esquina superior derecha",
        ),
        (
            "Instalar app",
            "Haz clic en 'Instalar App' o 'Instalar aplicación'",
        ),
    ),
});
