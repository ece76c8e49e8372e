use crate::constants::{DEFAULT_OUTPUT_NAME, PDF_EXTENSION, mm_to_pt};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything generation needs besides the images themselves
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct GenerateOptions {
    /// JPEG quality applied to every page
    pub quality: Quality,
    /// Output file name without extension
    pub output_name: String,
    pub paper_size: PaperSize,
    pub orientation: Orientation,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            quality: Quality::default(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            paper_size: PaperSize::default(),
            orientation: Orientation::default(),
        }
    }
}

impl GenerateOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SnapError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SnapError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.output_name.trim().is_empty() {
            return Err(SnapError::Config("Output name is empty".to_string()));
        }

        if self.output_name.contains(['/', '\\']) {
            return Err(SnapError::Config(format!(
                "Output name '{}' must not contain path separators",
                self.output_name
            )));
        }

        let (w, h) = self.paper_size.dimensions_mm();
        if !(w > 0.0 && h > 0.0) {
            return Err(SnapError::Config(format!(
                "Paper size must be positive, got {} x {} mm",
                w, h
            )));
        }

        Ok(())
    }

    /// Output file name: the name verbatim plus the PDF extension
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.output_name, PDF_EXTENSION)
    }

    /// Page size in points with orientation applied
    pub fn page_size(&self) -> PageSize {
        let (w_mm, h_mm) = self
            .paper_size
            .dimensions_with_orientation(self.orientation);
        PageSize::new(mm_to_pt(w_mm), mm_to_pt(h_mm))
    }
}
