use std::fs;
use std::path::{Path, PathBuf};

use epd_dither::Converter;

use crate::error::AppError;
use crate::models::{AppConfig, DisplaySpec};
use crate::rendering::{save_preview, Artifacts};
use crate::services::image_loader::{is_supported, load_image};

/// Files generated for one input image
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub source: PathBuf,
    pub header: PathBuf,
    pub preview: Option<PathBuf>,
    pub symbol: String,
    pub packed_len: usize,
}

/// An input that could not be converted
#[derive(Debug, Clone, PartialEq)]
pub struct FailedFile {
    pub input: PathBuf,
    pub error: String,
}

/// Report of a directory conversion
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    /// Entries that are not files or have an unsupported extension
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts image files into C source/header pairs
pub struct ConversionService {
    config: AppConfig,
    converter: Converter,
    spec: DisplaySpec,
    preview_dir: Option<PathBuf>,
}

impl ConversionService {
    /// Validate the configuration once; every file then uses the same settings.
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let converter = config.converter()?;
        let spec = config.display_spec()?;
        Ok(Self {
            config,
            converter,
            spec,
            preview_dir: None,
        })
    }

    /// Also write a PNG of every quantized frame into `dir`
    pub fn with_preview_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.preview_dir = Some(dir.into());
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn display_spec(&self) -> &DisplaySpec {
        &self.spec
    }

    /// Convert a single image into `<stem>.c` and `<stem>.h` inside `out_dir`
    pub fn convert_file(&self, path: &Path, out_dir: &Path) -> Result<ConvertedFile, AppError> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::InvalidFileName(path.to_path_buf()))?;

        let image = load_image(path, &self.spec)?;
        let conversion = self.converter.convert(image)?;

        let artifacts = Artifacts::render(
            stem,
            &self.config.symbol_suffix,
            conversion.packed(),
            &self.spec,
        )?;
        let (source, header) = artifacts.write_to(out_dir)?;

        let preview = match &self.preview_dir {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                let preview_path = dir.join(format!("{stem}.png"));
                save_preview(conversion.image(), &preview_path)?;
                Some(preview_path)
            }
            None => None,
        };

        tracing::info!(
            input = %path.display(),
            output = %source.display(),
            symbol = %artifacts.symbol,
            bytes = conversion.packed().len(),
            "Generated"
        );

        Ok(ConvertedFile {
            input: path.to_path_buf(),
            source,
            header,
            preview,
            symbol: artifacts.symbol,
            packed_len: conversion.packed().len(),
        })
    }

    /// Convert every supported image directly inside `in_dir`.
    ///
    /// Entries are processed in file name order. A file that fails is logged
    /// and recorded in the report; the remaining files are still converted.
    pub fn convert_dir(&self, in_dir: &Path, out_dir: &Path) -> Result<BatchReport, AppError> {
        fs::create_dir_all(out_dir)?;

        let mut entries: Vec<PathBuf> = fs::read_dir(in_dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort();

        let mut report = BatchReport::default();
        for path in entries {
            if !path.is_file() || !is_supported(&path, &self.config.extensions) {
                tracing::debug!(path = %path.display(), "Skipping");
                report.skipped.push(path);
                continue;
            }

            match self.convert_file(&path, out_dir) {
                Ok(converted) => report.converted.push(converted),
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to convert");
                    report.failed.push(FailedFile {
                        input: path,
                        error: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Batch finished"
        );
        Ok(report)
    }
}
