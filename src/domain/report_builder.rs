use super::report::SalesReport;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

pub const DEFAULT_FORMAT: &str = "PDF";
pub const DEFAULT_ORIENTATION: &str = "Portrait";

/// Staging area for a [`SalesReport`].
///
/// Every setter consumes the builder and hands it back, so calls chain and
/// any staging state can be forked with `clone()`. Nothing is validated until
/// [`build`](Self::build); the builder accepts contradictory values such as an
/// end date before the start date as given.
#[derive(Debug, Clone)]
pub struct SalesReportBuilder {
    title: String,
    format: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    header: Option<String>,
    footer: Option<String>,
    chart: Option<String>,
    columns: Vec<String>,
    filters: Vec<String>,
    orientation: String,
    watermark: Option<String>,
}

impl SalesReportBuilder {
    /// Starts a report with the given title. The period defaults to the
    /// creation instant for both ends.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            title: title.into(),
            format: DEFAULT_FORMAT.to_string(),
            start_date: now,
            end_date: now,
            header: None,
            footer: None,
            chart: None,
            columns: Vec::new(),
            filters: Vec::new(),
            orientation: DEFAULT_ORIENTATION.to_string(),
            watermark: None,
        }
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn period(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// Enables the header. There is no way to disable it again.
    pub fn header(mut self, text: impl Into<String>) -> Self {
        self.header = Some(text.into());
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Enables the chart; a later call replaces the chart kind.
    pub fn chart(mut self, kind: impl Into<String>) -> Self {
        self.chart = Some(kind.into());
        self
    }

    /// Appends a column. Duplicates are kept.
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn filter(mut self, name: impl Into<String>) -> Self {
        self.filters.push(name.into());
        self
    }

    pub fn orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = orientation.into();
        self
    }

    pub fn watermark(mut self, text: impl Into<String>) -> Self {
        self.watermark = Some(text.into());
        self
    }

    /// Snapshots the staged fields into an immutable [`SalesReport`].
    ///
    /// Fails when no column has been added. The builder is left untouched, so
    /// it can be extended and built again; every successful call returns an
    /// independent report.
    pub fn build(&self) -> Result<SalesReport> {
        if self.columns.is_empty() {
            return Err(Error::ValidationError(
                "a report needs at least one column".to_string(),
            ));
        }

        Ok(SalesReport {
            title: self.title.clone(),
            format: self.format.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            header: self.header.clone(),
            footer: self.footer.clone(),
            chart: self.chart.clone(),
            columns: self.columns.clone(),
            filters: self.filters.clone(),
            orientation: self.orientation.clone(),
            watermark: self.watermark.clone(),
        })
    }
}
