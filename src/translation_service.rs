use anyhow::{Result, anyhow};
use log::{debug, warn};
use std::collections::HashSet;
use indicatif::ProgressBar;

use crate::app_config::{FlaggingConfig, TranslationConfig, TranslationProvider as ConfigTranslationProvider};
use crate::errors::{ProviderError, TranslationError, WorkbookError};
use crate::providers::Provider;
use crate::providers::google::{Google, GoogleRequest};
use crate::providers::libretranslate::{LibreTranslate, LibreTranslateRequest};
use crate::providers::mock::{MockProvider, MockRequest};
use crate::workbook::{CellValue, SheetTable};

// @module: Translation engine for tabular content

/// Marker written into a cell whose translation call failed
pub const ERROR_MARKER_PREFIX: &str = "[CHYBA]";

/// Naming template for destination columns created during a run
pub fn new_column_name(code: &str) -> String {
    format!("Translation ({})", code)
}

/// Set of (row index, column name) pairs marking cells that need visual
/// emphasis in the output. Produced by the engine, consumed by the writer.
pub type CellFlags = HashSet<(usize, String)>;

/// Outcome of translating one (row, target language) pair
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutcome {
    /// Text to write into the destination cell
    pub text: String,
    /// Whether the cell should be visually emphasized
    pub flagged: bool,
    /// The underlying service error, when the call failed
    pub error: Option<String>,
}

/// The translated copy of the input table plus the flag set
#[derive(Debug)]
pub struct TranslatedTable {
    /// Mutated clone of the input table
    pub table: SheetTable,
    /// Cells requiring the alert style
    pub flags: CellFlags,
}

/// A destination column resolved for one target language
#[derive(Debug, Clone, PartialEq)]
struct Destination {
    /// Target language code
    code: String,
    /// Column index in the output table
    column: usize,
    /// Column name (for the flag set)
    name: String,
}

// @enum: Available translation provider implementations
enum TranslationProviderImpl {
    // @variant: Google translate web endpoint
    Google {
        // @field: Client instance
        client: Google,
    },

    // @variant: LibreTranslate API service
    LibreTranslate {
        // @field: Client instance
        client: LibreTranslate,
    },

    // @variant: Deterministic mock for tests
    Mock {
        // @field: Client instance
        client: MockProvider,
    },
}

// @struct: Translation service
pub struct TranslationService {
    // @field: Provider implementation
    provider: TranslationProviderImpl,

    // @field: Suspicious output flagging configuration
    flagging: FlaggingConfig,
}

impl TranslationService {
    /// Create a service from the translation and flagging configuration
    pub fn new(config: TranslationConfig, flagging: FlaggingConfig) -> Result<Self> {
        let provider_config = config
            .active_provider_config()
            .ok_or_else(|| anyhow!("No provider configuration found for '{}'", config.provider))?;

        let provider = match config.provider {
            ConfigTranslationProvider::Google => TranslationProviderImpl::Google {
                client: Google::new(provider_config.endpoint.clone(), provider_config.timeout_secs),
            },
            ConfigTranslationProvider::LibreTranslate => TranslationProviderImpl::LibreTranslate {
                client: LibreTranslate::new(
                    provider_config.endpoint.clone(),
                    provider_config.api_key.clone(),
                    provider_config.timeout_secs,
                ),
            },
        };

        Ok(Self { provider, flagging })
    }

    /// Create a service backed by a mock provider (tests and dry runs)
    pub fn with_mock(client: MockProvider, flagging: FlaggingConfig) -> Self {
        Self {
            provider: TranslationProviderImpl::Mock { client },
            flagging,
        }
    }

    /// Translate one text through the configured provider
    pub async fn translate_text(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        match &self.provider {
            TranslationProviderImpl::Google { client } => {
                let request = GoogleRequest {
                    text: text.to_string(),
                    source_language: source_language.to_string(),
                    target_language: target_language.to_string(),
                };
                let response = client.complete(request).await?;
                Ok(Google::extract_text(&response))
            }
            TranslationProviderImpl::LibreTranslate { client } => {
                let request = LibreTranslateRequest {
                    text: text.to_string(),
                    source_language: source_language.to_string(),
                    target_language: target_language.to_string(),
                };
                let response = client.complete(request).await?;
                Ok(LibreTranslate::extract_text(&response))
            }
            TranslationProviderImpl::Mock { client } => {
                let request = MockRequest {
                    text: text.to_string(),
                    source_language: source_language.to_string(),
                    target_language: target_language.to_string(),
                };
                let response = client.complete(request).await?;
                Ok(MockProvider::extract_text(&response))
            }
        }
    }

    /// Test the connection to the configured provider
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        match &self.provider {
            TranslationProviderImpl::Google { client } => client.test_connection().await,
            TranslationProviderImpl::LibreTranslate { client } => client.test_connection().await,
            TranslationProviderImpl::Mock { client } => client.test_connection().await,
        }
    }

    /// Translate the source column of a table into the target languages.
    ///
    /// The input table is cloned; mutation happens only on the clone. Rows
    /// are processed in table order, target languages in selection order,
    /// one provider call per (row, target) pair, no retry. A failed call is
    /// contained in its cell as an error marker and does not abort the run.
    /// The progress bar, when given, is ticked once per completed row.
    pub async fn translate_table(
        &self,
        table: &SheetTable,
        source_column: &str,
        source_language: &str,
        target_languages: &[String],
        progress: Option<&ProgressBar>,
    ) -> Result<TranslatedTable, TranslationError> {
        let source_index = table
            .column_index(source_column)
            .ok_or_else(|| WorkbookError::UnknownColumn(source_column.to_string()))?;

        let mut output = table.clone();
        let destinations = Self::resolve_destinations(&mut output, target_languages);
        let mut flags: CellFlags = HashSet::new();

        for row in 0..output.row_count() {
            let source_text = output.cell(row, source_index).as_text();

            for destination in &destinations {
                let outcome = self
                    .translate_cell(&source_text, source_language, &destination.code)
                    .await;

                if let Some(error) = &outcome.error {
                    warn!(
                        "Translation failed for row {}, language '{}': {}",
                        row, destination.code, error
                    );
                }
                if outcome.flagged {
                    flags.insert((row, destination.name.clone()));
                }
                output.set_cell(row, destination.column, CellValue::Text(outcome.text));
            }

            if let Some(bar) = progress {
                bar.inc(1);
            }
        }

        Ok(TranslatedTable {
            table: output,
            flags,
        })
    }

    /// Translate one cell and classify the result
    async fn translate_cell(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> CellOutcome {
        match self
            .translate_text(text, source_language, target_language)
            .await
        {
            Ok(translated) => {
                let flagged = self.is_suspicious(&translated);
                CellOutcome {
                    text: translated,
                    flagged,
                    error: None,
                }
            }
            Err(e) => CellOutcome {
                text: format!("{} {}", ERROR_MARKER_PREFIX, e),
                flagged: true,
                error: Some(e.to_string()),
            },
        }
    }

    /// Resolve every target language to a destination column, creating
    /// missing columns exactly once. An existing column is reused when its
    /// header, case-insensitively, ends with "(<code>)"; otherwise a new
    /// column is appended at the end of the column list.
    fn resolve_destinations(table: &mut SheetTable, target_languages: &[String]) -> Vec<Destination> {
        let mut destinations = Vec::with_capacity(target_languages.len());

        for code in target_languages {
            let suffix = format!("({})", code.to_lowercase());
            let existing = table
                .columns
                .iter()
                .position(|name| name.to_lowercase().ends_with(&suffix));

            let column = match existing {
                Some(index) => {
                    debug!("Reusing column '{}' for language '{}'", table.columns[index], code);
                    index
                }
                None => {
                    let name = new_column_name(code);
                    debug!("Creating column '{}' for language '{}'", name, code);
                    table.add_column(name)
                }
            };

            destinations.push(Destination {
                code: code.clone(),
                column,
                name: table.columns[column].clone(),
            });
        }

        destinations
    }

    /// Case-insensitive substring check against the configured word list
    fn is_suspicious(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.flagging
            .suspicious_words
            .iter()
            .any(|word| lowered.contains(&word.to_lowercase()))
    }
}
