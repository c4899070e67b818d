use serde::Serialize;

/// Wrapper every command renders through: the payload plus optional
/// follow-up suggestions shown beneath it in plain mode.
#[derive(Debug, Serialize)]
pub struct CommandResult<T>
where
    T: Serialize,
{
    pub content: T,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Guidance>,
}

#[derive(Debug, Serialize)]
pub struct Guidance {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: Some(command.into()),
        }
    }
}

impl<T> CommandResult<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self {
            content,
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, guide: Guidance) -> Self {
        self.suggestions.push(guide);
        self
    }
}
