//! Core of the MayFin financing-analysis report generator.
//!
//! The library turns a [`record::ReportRecord`] into a [`report::ReportStory`]:
//! an ordered sequence of abstract content blocks (headings, tables, bullet
//! lists, status banners, page breaks) plus page chrome and document metadata.
//! Page layout, typography and pagination belong to the document renderer
//! behind the [`render::DocumentRenderer`] seam; the core never deals in
//! pixels, fonts or page numbers.

pub mod config;
pub mod error;
pub mod format;
pub mod record;
pub mod render;
pub mod report;
pub mod rules;
pub mod sample;
