/// The in-progress draft behind the compose field.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    draft: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft verbatim.
    pub fn update(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Take the trimmed draft and clear the buffer.
    ///
    /// A blank draft yields `None` and is left as it was.
    pub fn consume_and_clear(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }
        let content = trimmed.to_string();
        self.draft.clear();
        Some(content)
    }

    pub fn as_str(&self) -> &str {
        &self.draft
    }

    pub fn is_blank(&self) -> bool {
        self.draft.trim().is_empty()
    }
}
