use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DossierError, Result};

/// Top-level configuration for the Dossier assistant.
///
/// Loaded from a TOML file. Each section corresponds to one stage of the
/// ingest/ask pipeline; every field has a default so a partial (or missing)
/// file still produces a working configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub summary: SummaryConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub followup: FollowupConfig,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            chunking: ChunkingConfig::default(),
            retrieval: RetrievalConfig::default(),
            summary: SummaryConfig::default(),
            chat: ChatConfig::default(),
            followup: FollowupConfig::default(),
        }
    }
}

impl DossierConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DossierConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| DossierError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Document chunking parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk length in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks. Must stay below
    /// `chunk_size`; the chunker rejects the configuration otherwise.
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
        }
    }
}

/// Retrieval and context-assembly parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Number of nearest chunks retrieved per question.
    pub top_k: usize,
    /// Character budget for the assembled context block.
    pub max_context_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_context_chars: 4000,
        }
    }
}

/// Document summarization parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Character budget for text submitted to the model for summarization.
    pub max_input_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 2000,
        }
    }
}

/// Conversational behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Include prior session turns in the prompt.
    pub memory_enabled: bool,
    /// Maximum question length in characters.
    pub max_question_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            memory_enabled: true,
            max_question_chars: 2000,
        }
    }
}

/// Follow-up suggestion extraction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowupConfig {
    /// Maximum number of suggestions returned per answer.
    pub max_suggestions: usize,
    /// Character budget for the answer text submitted to the model.
    pub max_answer_chars: usize,
    /// Minimum length of a cleaned suggestion line; shorter lines are noise.
    pub min_suggestion_chars: usize,
}

impl Default for FollowupConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 3,
            max_answer_chars: 1000,
            min_suggestion_chars: 10,
        }
    }
}
