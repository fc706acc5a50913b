use serde::{Deserialize, Serialize};

/// Conversation settings shared by threads and the projects built on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadManifest {
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons: Option<AgentIcons>,
    /// System prompt applied to every conversation.
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub prompt: Option<String>,
    /// Tool references enabled for the thread.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub introduction_message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub starter_messages: Vec<String>,
}

/// Icon URLs for light and dark themes, expanded and collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentIcons {
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub icon: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub icon_dark: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub collapsed: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::empty_as_none",
        skip_serializing_if = "super::is_none_or_empty"
    )]
    pub collapsed_dark: Option<String>,
}
