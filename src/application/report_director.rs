use crate::domain::report_builder::SalesReportBuilder;

/// Named report presets.
///
/// Presets only configure the builder; callers still decide when to `build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportPreset {
    MonthlySales,
    SimpleList,
}

impl ReportPreset {
    pub fn apply(self, builder: SalesReportBuilder) -> SalesReportBuilder {
        match self {
            ReportPreset::MonthlySales => ReportDirector::monthly_sales(builder),
            ReportPreset::SimpleList => ReportDirector::simple_list(builder),
        }
    }
}

pub struct ReportDirector;

impl ReportDirector {
    pub fn monthly_sales(builder: SalesReportBuilder) -> SalesReportBuilder {
        builder
            .format("PDF")
            .header("Monthly Sales Report")
            .column("Product")
            .column("Quantity")
            .column("Total R$")
            .chart("Bar")
            .footer("Internal Use - Confidential")
    }

    pub fn simple_list(builder: SalesReportBuilder) -> SalesReportBuilder {
        builder
            .format("Excel")
            .column("Name")
            .column("Email")
            .orientation("Landscape")
    }
}
