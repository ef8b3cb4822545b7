use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// An immutable sales report configuration.
///
/// Only obtainable through [`SalesReportBuilder::build`](super::report_builder::SalesReportBuilder::build),
/// which guarantees at least one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub(crate) title: String,
    pub(crate) format: String,
    pub(crate) start_date: DateTime<Utc>,
    pub(crate) end_date: DateTime<Utc>,
    pub(crate) header: Option<String>,
    pub(crate) footer: Option<String>,
    pub(crate) chart: Option<String>,
    pub(crate) columns: Vec<String>,
    pub(crate) filters: Vec<String>,
    pub(crate) orientation: String,
    pub(crate) watermark: Option<String>,
}

impl SalesReport {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn include_header(&self) -> bool {
        self.header.is_some()
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn include_footer(&self) -> bool {
        self.footer.is_some()
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn include_chart(&self) -> bool {
        self.chart.is_some()
    }

    pub fn chart(&self) -> Option<&str> {
        self.chart.as_deref()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn orientation(&self) -> &str {
        &self.orientation
    }

    /// The watermark, if one was set. An empty watermark is kept here but
    /// skipped when rendering.
    pub fn watermark(&self) -> Option<&str> {
        self.watermark.as_deref()
    }

    /// Renders every field as display lines, in a fixed order.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Report: {} ===", self.title)?;
        writeln!(
            f,
            "Format: {} | Orientation: {}",
            self.format, self.orientation
        )?;
        writeln!(
            f,
            "Period: {} to {}",
            self.start_date.format("%Y-%m-%d"),
            self.end_date.format("%Y-%m-%d")
        )?;
        if let Some(header) = &self.header {
            writeln!(f, "[HEADER]: {header}")?;
        }
        if let Some(watermark) = self.watermark.as_deref().filter(|w| !w.is_empty()) {
            writeln!(f, "[WATERMARK]: {watermark}")?;
        }
        writeln!(f, "Columns: {}", self.columns.join(", "))?;
        if !self.filters.is_empty() {
            writeln!(f, "Filters: {}", self.filters.join(", "))?;
        }
        if let Some(chart) = &self.chart {
            writeln!(f, "[CHART]: {chart}")?;
        }
        if let Some(footer) = &self.footer {
            writeln!(f, "[FOOTER]: {footer}")?;
        }
        Ok(())
    }
}
