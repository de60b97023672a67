use serde::{Deserialize, Serialize};

/// UI locale handling
///
/// A fixed mapping from a locale code to the label strings shown to the
/// user. Three locales are supported; the strings are presentational only
/// and have nothing to do with the translation logic itself.
/// Supported UI locales
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UiLocale {
    /// Slovak (default)
    #[default]
    Sk,
    /// English
    En,
    /// German
    De,
}

impl std::fmt::Display for UiLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = match self {
            UiLocale::Sk => "sk",
            UiLocale::En => "en",
            UiLocale::De => "de",
        };
        write!(f, "{}", code)
    }
}

/// Label strings for one locale
#[derive(Debug, Clone, Copy)]
pub struct LocaleStrings {
    /// Shown while the input workbook is being read
    pub loading_file: &'static str,
    /// Label for the selected source column
    pub source_column: &'static str,
    /// Label for the source language code
    pub source_language: &'static str,
    /// Label for the selected target languages
    pub target_languages: &'static str,
    /// Shown while the translation run is in progress
    pub translating: &'static str,
    /// Completion message; `{seconds}` is replaced with the elapsed time
    pub success_translation: &'static str,
    /// Shown when the output workbook has been written
    pub output_saved: &'static str,
}

static SK: LocaleStrings = LocaleStrings {
    loading_file: "Načítavam XLSX alebo XLS súbor",
    source_column: "Zdrojový stĺpec",
    source_language: "Zdrojový jazyk",
    target_languages: "Cieľové jazyky",
    translating: "Prekladám",
    success_translation: "Preklad dokončený za {seconds} sekúnd.",
    output_saved: "Preložený XLSX súbor uložený",
};

static EN: LocaleStrings = LocaleStrings {
    loading_file: "Loading XLSX or XLS file",
    source_column: "Source column",
    source_language: "Source language",
    target_languages: "Target languages",
    translating: "Translating",
    success_translation: "Translation completed in {seconds} seconds.",
    output_saved: "Translated XLSX file saved",
};

static DE: LocaleStrings = LocaleStrings {
    loading_file: "XLSX oder XLS-Datei wird geladen",
    source_column: "Quellspalte",
    source_language: "Ausgangssprache",
    target_languages: "Zielsprachen",
    translating: "Übersetze",
    success_translation: "Übersetzung abgeschlossen in {seconds} Sekunden.",
    output_saved: "Übersetzte XLSX-Datei gespeichert",
};

/// Resolve the label set for a locale
pub fn strings(locale: UiLocale) -> &'static LocaleStrings {
    match locale {
        UiLocale::Sk => &SK,
        UiLocale::En => &EN,
        UiLocale::De => &DE,
    }
}

/// Format the completion message with the elapsed seconds
pub fn format_success(locale: UiLocale, seconds: f64) -> String {
    strings(locale)
        .success_translation
        .replace("{seconds}", &format!("{:.2}", seconds))
}
