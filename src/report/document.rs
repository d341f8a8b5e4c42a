//! In-memory fixed-layout document: pages of positioned text and boxes.
//!
//! Templates and rendered reports share this type. A rendered report is a
//! clone of the template with field texts appended, so the template itself
//! is never modified and can be reused across renders.

use crate::errors::{AppError, AppResult};
use crate::report::pdf::PdfManager;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Pages a timesheet template must have.
pub const TEMPLATE_PAGES: usize = 2;

/// Layout version shared by the bundled template and the standard field
/// map. Files that omit `version` get this one.
pub const LAYOUT_VERSION: u32 = 1;

pub(crate) fn default_layout_version() -> u32 {
    LAYOUT_VERSION
}

const BUNDLED_TEMPLATE: &str = include_str!("../../assets/timesheet_template.yaml");

fn default_page_w() -> f32 {
    612.0
}
fn default_page_h() -> f32 {
    792.0
}
fn default_text_size() -> f32 {
    10.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_text_size")]
    pub font_size: f32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxItem {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_page_w")]
    pub width: f32,
    #[serde(default = "default_page_h")]
    pub height: f32,
    #[serde(default)]
    pub texts: Vec<TextItem>,
    #[serde(default)]
    pub boxes: Vec<BoxItem>,
}

impl Page {
    pub fn place(&mut self, x: f32, y: f32, font_size: f32, text: impl Into<String>) {
        self.texts.push(TextItem {
            x,
            y,
            font_size,
            text: text.into(),
        });
    }

    /// Text placed exactly at `(x, y)`, if any.
    pub fn text_at(&self, x: f32, y: f32) -> Option<&str> {
        self.texts
            .iter()
            .rev()
            .find(|t| (t.x - x).abs() < f32::EPSILON && (t.y - y).abs() < f32::EPSILON)
            .map(|t| t.text.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "default_layout_version")]
    pub version: u32,
    pub pages: Vec<Page>,
}

impl Document {
    pub fn ensure_template_shape(&self) -> AppResult<()> {
        if self.pages.len() != TEMPLATE_PAGES {
            return Err(AppError::TemplateInvalid(format!(
                "expected {} pages, found {}",
                TEMPLATE_PAGES,
                self.pages.len()
            )));
        }
        if let Some((i, _)) = self
            .pages
            .iter()
            .enumerate()
            .find(|(_, p)| p.width <= 0.0 || p.height <= 0.0)
        {
            return Err(AppError::TemplateInvalid(format!(
                "page {i} has a non-positive size"
            )));
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let doc: Document = serde_yaml::from_str(content)
            .map_err(|e| AppError::TemplateInvalid(e.to_string()))?;
        doc.ensure_template_shape()?;
        Ok(doc)
    }

    /// Serialize to PDF bytes (Helvetica, one content stream per page).
    pub fn to_pdf(&self) -> Vec<u8> {
        let mut pdf = PdfManager::new();
        for page in &self.pages {
            pdf.write_page(page);
        }
        pdf.finish()
    }
}

/// Where the template comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Bundled,
    File(PathBuf),
}

impl TemplateSource {
    pub fn from_config(path: Option<&str>) -> Self {
        match path {
            Some(p) if !p.trim().is_empty() => {
                TemplateSource::File(crate::utils::path::expand_tilde(p.trim()))
            }
            _ => TemplateSource::Bundled,
        }
    }
}

/// Load and check a template. A configured file that does not exist is
/// `TemplateNotFound`; a template without exactly two pages is
/// `TemplateInvalid`.
pub fn load_template(source: &TemplateSource) -> AppResult<Document> {
    match source {
        TemplateSource::Bundled => Document::from_yaml(BUNDLED_TEMPLATE),
        TemplateSource::File(path) => load_template_file(path),
    }
}

fn load_template_file(path: &Path) -> AppResult<Document> {
    if !path.is_file() {
        return Err(AppError::TemplateNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Document::from_yaml(&content)
}
