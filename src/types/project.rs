use serde::{Deserialize, Serialize};

use super::{Metadata, ThreadManifest};
use crate::{Error, Result};

/// A project: a workspace holding conversations, tools and knowledge.
///
/// On the wire a project is one flat JSON object. [`Metadata`] and
/// [`ProjectManifest`] are flattened into it alongside the project's own
/// fields. Projects form a forest through `parent_id`; the server owns the
/// referential integrity of that link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(flatten)]
    pub metadata: Metadata,
    #[serde(flatten)]
    pub manifest: ProjectManifest,
    /// The assistant this project was created from.
    #[serde(
        rename = "assistantID",
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub assistant_id: Option<String>,
    /// Whether the project is managed through the editor. Always emitted.
    #[serde(default)]
    pub editor: bool,
    #[serde(
        rename = "parentID",
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub parent_id: Option<String>,
    /// Owner of the project.
    #[serde(
        rename = "userID",
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub user_id: Option<String>,
}

/// User-editable configuration of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    #[serde(flatten)]
    pub thread: ThreadManifest,
}

impl Project {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(id),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.manifest.thread.name = Some(name.into());
        self
    }

    pub fn with_assistant_id(mut self, assistant_id: impl Into<String>) -> Self {
        self.assistant_id = Some(assistant_id.into());
        self
    }

    pub fn with_parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_editor(mut self, editor: bool) -> Self {
        self.editor = editor;
        self
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn name(&self) -> Option<&str> {
        self.manifest.thread.name.as_deref().filter(|name| !name.is_empty())
    }

    /// True when the project has no parent. An empty parent id counts as none.
    pub fn is_root(&self) -> bool {
        super::is_none_or_empty(&self.parent_id)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let project: Self = serde_json::from_str(json).map_err(Error::Decode)?;
        tracing::debug!(id = %project.id(), "decoded project");
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::Encode)
    }
}
