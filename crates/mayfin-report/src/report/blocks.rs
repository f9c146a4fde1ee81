//! Abstract content blocks handed to the document renderer.
//!
//! Blocks carry plain text plus structured emphasis and tone descriptors;
//! renderer-specific markup never appears here.

use crate::rules::Tone;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingLevel {
    /// Document title on the cover.
    Title,
    /// Numbered major section.
    Section,
    /// Sub-section inside a major section.
    Subsection,
}

/// Marker style for a bullet list. The renderer owns the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulletMarker {
    Check,
    Caution,
    Square,
    Arrow,
    Dot,
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulletItem {
    pub text: String,
    /// Tone of the item's marker, when rule-derived (sector risks).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl BulletItem {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyValueRow {
    pub label: String,
    pub value: String,
}

impl KeyValueRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<String>,
    /// Subtotal and result rows render emphasized.
    pub strong: bool,
}

impl TableRow {
    pub fn plain(cells: Vec<String>) -> Self {
        Self {
            cells,
            strong: false,
        }
    }

    pub fn strong(cells: Vec<String>) -> Self {
        Self {
            cells,
            strong: true,
        }
    }
}

/// One element of the ordered report story.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Paragraph {
        text: String,
    },
    StatusBanner {
        text: String,
        tone: Tone,
    },
    KeyValueTable {
        rows: Vec<KeyValueRow>,
    },
    Table {
        header: Vec<String>,
        rows: Vec<TableRow>,
    },
    BulletList {
        marker: BulletMarker,
        items: Vec<BulletItem>,
    },
    PageBreak,
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Title,
            text: text.into(),
        }
    }

    pub fn section(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Section,
            text: text.into(),
        }
    }

    pub fn subsection(text: impl Into<String>) -> Self {
        Self::Heading {
            level: HeadingLevel::Subsection,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn banner(text: impl Into<String>, tone: Tone) -> Self {
        Self::StatusBanner {
            text: text.into(),
            tone,
        }
    }
}
