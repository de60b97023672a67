use anyhow::{Result, Context, anyhow};
use log::{warn, info, debug};
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::column_detector::{self, ColumnDetection};
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::locales;
use crate::translation_service::TranslationService;
use crate::workbook::{self, SheetTable};
use crate::workbook_writer;

// @module: Application controller driving the translation pipeline

/// The effective run inputs after merging detection defaults with the
/// user's overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Selections {
    /// Column holding the source text
    pub source_column: String,
    /// Source language code passed to the provider
    pub source_language: String,
    /// Target language codes, in selection order
    pub target_languages: Vec<String>,
}

/// Main application controller for spreadsheet translation
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the main workflow: load the workbook, resolve selections,
    /// translate, and write the styled output artifact.
    pub async fn run(
        &self,
        input_file: PathBuf,
        output_file: PathBuf,
        force_overwrite: bool,
    ) -> Result<()> {
        let strings = locales::strings(self.config.ui_locale);
        let start_time = Instant::now();

        FileManager::validate_input(&input_file)?;

        if output_file.exists() && !force_overwrite {
            warn!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_file
            );
            return Ok(());
        }

        info!("{}: {:?}", strings.loading_file, input_file);
        let document = workbook::load_workbook(&input_file)
            .with_context(|| format!("Failed to load workbook: {:?}", input_file))?;
        debug!(
            "Loaded {} translation rows, {} configuration rows",
            document.translations.row_count(),
            document.configuration.row_count()
        );

        let selections = self.resolve_selections(&document.translations)?;
        info!("{}: {}", strings.source_column, selections.source_column);
        info!(
            "{}: {}",
            strings.source_language,
            language_utils::describe_code(&selections.source_language)
        );
        info!(
            "{}: {}",
            strings.target_languages,
            if selections.target_languages.is_empty() {
                "-".to_string()
            } else {
                selections.target_languages.join(", ")
            }
        );

        if selections.target_languages.is_empty() {
            warn!("No target languages selected, output will be an unmodified copy");
        }

        let service = TranslationService::new(
            self.config.translation.clone(),
            self.config.flagging.clone(),
        )?;

        let progress = Self::create_progress_bar(
            document.translations.row_count() as u64,
            strings.translating,
        );

        let translated = service
            .translate_table(
                &document.translations,
                &selections.source_column,
                &selections.source_language,
                &selections.target_languages,
                Some(&progress),
            )
            .await
            .context("Translation run failed")?;
        progress.finish_and_clear();

        if !translated.flags.is_empty() {
            warn!(
                "{} cell(s) flagged for review in the output",
                translated.flags.len()
            );
        }

        if let Some(parent) = output_file.parent() {
            if !parent.as_os_str().is_empty() {
                FileManager::ensure_dir(parent)?;
            }
        }
        workbook_writer::write_workbook(
            &translated.table,
            &document.configuration,
            &translated.flags,
            &self.config.style,
            &output_file,
        )
        .with_context(|| format!("Failed to write output workbook: {:?}", output_file))?;

        info!(
            "{}",
            locales::format_success(self.config.ui_locale, start_time.elapsed().as_secs_f64())
        );
        info!("{}: {:?}", strings.output_saved, output_file);

        Ok(())
    }

    /// Detection-only mode: list the language columns the detector sees and
    /// the defaults it would pick, without translating anything.
    pub fn detect(&self, input_file: &Path) -> Result<ColumnDetection> {
        FileManager::validate_input(input_file)?;
        let document = workbook::load_workbook(input_file)
            .with_context(|| format!("Failed to load workbook: {:?}", input_file))?;

        let detection = column_detector::detect_columns(&document.translations);

        info!("Detected language columns:");
        for column in &detection.language_columns {
            info!(
                "  {} -> {}",
                column.name,
                language_utils::describe_code(&column.code)
            );
        }
        info!(
            "Default source column: {} ({})",
            detection.source_column, detection.source_language
        );
        info!(
            "Target candidates: {}",
            detection
                .target_candidates(&detection.source_language)
                .join(", ")
        );

        Ok(detection)
    }

    /// Merge detector defaults with configured overrides.
    ///
    /// An overridden source column must exist in the table. The source
    /// language falls back to the code carried by the effective source
    /// column, then to the detector default. Target languages default to
    /// every detected candidate; an explicit selection is deduplicated in
    /// order and codes equal to the source are dropped.
    pub fn resolve_selections(&self, table: &SheetTable) -> Result<Selections> {
        let detection = column_detector::detect_columns(table);

        let source_column = if self.config.source_column.is_empty() {
            detection.source_column.clone()
        } else {
            if table.column_index(&self.config.source_column).is_none() {
                return Err(anyhow!(
                    "Configured source column not found in translation sheet: {}",
                    self.config.source_column
                ));
            }
            self.config.source_column.clone()
        };

        let source_language = if !self.config.source_language.is_empty() {
            self.config.source_language.clone()
        } else {
            column_detector::language_code(&source_column)
                .map(|code| code.to_string())
                .unwrap_or_else(|| detection.source_language.clone())
        };

        let target_languages = if self.config.target_languages.is_empty() {
            detection.target_candidates(&source_language)
        } else {
            let mut selected = Vec::new();
            for code in &self.config.target_languages {
                if code == &source_language {
                    warn!("Skipping target language equal to source: {}", code);
                    continue;
                }
                if !selected.contains(code) {
                    selected.push(code.clone());
                }
            }
            selected
        };

        Ok(Selections {
            source_column,
            source_language,
            target_languages,
        })
    }

    fn create_progress_bar(rows: u64, message: &'static str) -> ProgressBar {
        let bar = ProgressBar::new(rows);
        if let Ok(style) =
            ProgressStyle::with_template("{msg} [{bar:40.green/white}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("█▓░"));
        }
        bar.set_message(message);
        bar
    }
}
