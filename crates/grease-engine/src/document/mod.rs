// Imports
use crate::{EngineConfig, GreasePencil};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The scene: a time cursor and the grease pencil data block assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename = "document")]
pub struct Document {
    #[serde(rename = "frame_current")]
    frame_current: i32,
    #[serde(rename = "grease_pencil")]
    grease_pencil: Option<GreasePencil>,
    #[serde(skip)]
    config: EngineConfig,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            frame_current: 1,
            grease_pencil: None,
            config: EngineConfig::default(),
        }
    }
}

impl Document {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn frame_current(&self) -> i32 {
        self.frame_current
    }

    pub fn set_frame_current(&mut self, frame_current: i32) {
        self.frame_current = frame_current;
    }

    pub fn grease_pencil(&self) -> Option<&GreasePencil> {
        self.grease_pencil.as_ref()
    }

    pub fn grease_pencil_mut(&mut self) -> Option<&mut GreasePencil> {
        self.grease_pencil.as_mut()
    }

    /// The assigned grease pencil data block, creating and assigning a new one when there is none.
    pub fn grease_pencil_or_create(&mut self) -> &mut GreasePencil {
        let data_block_name = &self.config.data_block_name;

        self.grease_pencil.get_or_insert_with(|| {
            debug!("creating new grease pencil data block \"{data_block_name}\"");
            GreasePencil::new(data_block_name.clone())
        })
    }

    /// Serializes the document to a pretty printed json string.
    pub fn save_as_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing document to json failed")
    }

    /// Loads a document from a json string.
    ///
    /// The point records of every stroke are re-synchronized with its points and transform while loading.
    pub fn load_from_json(json: &str, config: EngineConfig) -> anyhow::Result<Self> {
        let mut document: Self =
            serde_json::from_str(json).context("deserializing document from json failed")?;
        document.config = config;
        Ok(document)
    }
}
