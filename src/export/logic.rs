// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{render_csv, render_json};
use crate::export::model::week_to_rows;
use crate::export::notify_export_success;
use crate::models::{CalculationResult, DayInput};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Render `result` as JSON or CSV.
    pub fn render(
        result: &CalculationResult,
        days: &[DayInput],
        format: ExportFormat,
    ) -> AppResult<String> {
        match format {
            ExportFormat::Json => render_json(result),
            ExportFormat::Csv => render_csv(&week_to_rows(result, days)),
            ExportFormat::Text => Err(AppError::InvalidExportFormat(
                format.as_str().to_string(),
            )),
        }
    }

    /// Write the export to `file` (absolute path) or to stdout when `None`.
    pub fn export(
        result: &CalculationResult,
        days: &[DayInput],
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let content = Self::render(result, days, format)?;

        let Some(file) = file else {
            println!("{content}");
            return Ok(());
        };

        let path = Path::new(file);
        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }
}
