//! Heading plus optional description composite.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Where the description renders relative to the heading.
pub enum DescriptionPlacement {
    /// Description follows the heading (default).
    AfterHeading,
    /// Description precedes the heading (inverted).
    BeforeHeading,
}

impl Default for DescriptionPlacement {
    fn default() -> Self {
        Self::AfterHeading
    }
}

impl DescriptionPlacement {
    /// Stable attribute token for the placement.
    pub fn token(self) -> &'static str {
        match self {
            Self::AfterHeading => "after",
            Self::BeforeHeading => "before",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A block header: a heading with an optional, repositionable description.
pub struct BlockHeader {
    heading: String,
    description: Option<String>,
    placement: DescriptionPlacement,
}

impl BlockHeader {
    /// Creates a header with no description.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            description: None,
            placement: DescriptionPlacement::default(),
        }
    }

    /// Creates a header with an initial description.
    pub fn with_description(heading: impl Into<String>, description: impl Into<String>) -> Self {
        let mut header = Self::new(heading);
        header.description = Some(description.into());
        header
    }

    /// Appends text to the description, lazily creating an empty
    /// description first when none exists.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.description.get_or_insert_with(String::new).push_str(text);
        self
    }

    /// Moves the description before the heading. Idempotent; does nothing
    /// while no description exists.
    pub fn invert(&mut self) -> &mut Self {
        if self.description.is_some() {
            self.placement = DescriptionPlacement::BeforeHeading;
        }
        self
    }

    /// Replaces the heading text.
    pub fn set_heading(&mut self, heading: impl Into<String>) -> &mut Self {
        self.heading = heading.into();
        self
    }

    /// The heading text.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// The description text, if one has been created.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current description placement.
    pub fn placement(&self) -> DescriptionPlacement {
        self.placement
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_text_lazily_creates_description() {
        let mut header = BlockHeader::new("Reports");
        assert_eq!(header.description(), None);

        header.append_text("quarterly").append_text(" summary");
        assert_eq!(header.description(), Some("quarterly summary"));
    }

    #[test]
    fn invert_is_idempotent_and_requires_description() {
        let mut header = BlockHeader::new("Reports");
        header.invert();
        assert_eq!(header.placement(), DescriptionPlacement::AfterHeading);

        header.append_text("details");
        header.invert().invert();
        assert_eq!(header.placement(), DescriptionPlacement::BeforeHeading);
    }

    #[test]
    fn constructor_description_is_kept() {
        let header = BlockHeader::with_description("Reports", "all regions");
        assert_eq!(header.description(), Some("all regions"));
        assert_eq!(header.heading(), "Reports");
    }

    #[test]
    fn set_heading_replaces_text() {
        let mut header = BlockHeader::new("Reports");
        header.set_heading("Archive");
        assert_eq!(header.heading(), "Archive");
    }
}
