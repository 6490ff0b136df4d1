//! Render state threaded through one render pass
//!
//! Passed by value into every recursive call. A rule that needs a flag for
//! its children hands them a modified copy; siblings and ancestors never see it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    pub within_text: bool,
    pub within_link: bool,
    pub within_list: bool,
    pub within_quote: bool,
    pub within_heading: bool,
    pub within_paragraph_with_image: bool,
    /// Position of the current node among its siblings
    pub key: usize,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: usize) -> Self {
        self.key = key;
        self
    }

    pub fn within_text(mut self) -> Self {
        self.within_text = true;
        self
    }

    pub fn within_link(mut self) -> Self {
        self.within_link = true;
        self
    }

    pub fn within_list(mut self) -> Self {
        self.within_list = true;
        self
    }

    pub fn within_quote(mut self) -> Self {
        self.within_quote = true;
        self
    }

    pub fn within_heading(mut self) -> Self {
        self.within_heading = true;
        self
    }

    pub fn within_paragraph_with_image(mut self) -> Self {
        self.within_paragraph_with_image = true;
        self
    }

    /// The key as attached to UI elements
    pub fn element_key(&self) -> String {
        self.key.to_string()
    }
}
