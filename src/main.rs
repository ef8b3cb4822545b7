use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use paykit::domain::payment::{Gateway, PaymentOutcome, PaymentRequest};
use paykit::interfaces::csv::payment_reader::PaymentRequestReader;
use paykit::{PaymentService, ReportPreset, SalesReportBuilder};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Charge a single card through one gateway
    Pay {
        #[arg(long, value_enum, default_value = "pagseguro")]
        gateway: Gateway,
        #[arg(long)]
        amount: Decimal,
        #[arg(long)]
        card: String,
    },
    /// Process a CSV of `gateway, amount, card_number` rows
    Batch {
        /// Input payment requests CSV file
        input: PathBuf,
    },
    /// Build and print a sales report
    Report(ReportArgs),
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    title: String,
    /// Preset applied before any of the explicit options below
    #[arg(long, value_enum)]
    preset: Option<ReportPreset>,
    #[arg(long)]
    format: Option<String>,
    #[arg(long, requires = "end")]
    start: Option<NaiveDate>,
    #[arg(long, requires = "start")]
    end: Option<NaiveDate>,
    #[arg(long)]
    header: Option<String>,
    #[arg(long)]
    footer: Option<String>,
    #[arg(long)]
    chart: Option<String>,
    #[arg(long)]
    orientation: Option<String>,
    #[arg(long)]
    watermark: Option<String>,
    #[arg(long = "column")]
    columns: Vec<String>,
    #[arg(long = "filter")]
    filters: Vec<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "info" });

    match cli.command {
        Command::Pay {
            gateway,
            amount,
            card,
        } => {
            let request = PaymentRequest::new(gateway, amount, card).into_diagnostic()?;
            let service = PaymentService::new(request.gateway().factory());
            let outcome = service.process_payment(request.amount(), request.card_number());
            println!("{}", render_outcome(&outcome));
        }
        Command::Batch { input } => run_batch(input)?,
        Command::Report(args) => run_report(args)?,
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

fn render_outcome(outcome: &PaymentOutcome) -> String {
    match outcome {
        PaymentOutcome::Approved { transaction_id } => format!("approved,{transaction_id}"),
        PaymentOutcome::Rejected => "rejected".to_string(),
    }
}

fn run_batch(input: PathBuf) -> Result<()> {
    let requests = PaymentRequestReader::from_path(input)
        .and_then(PaymentRequestReader::requests)
        .into_diagnostic()?;

    // One service per gateway; each payment still gets a fresh component set.
    let mut services: HashMap<Gateway, PaymentService> = HashMap::new();
    for request in requests {
        match request {
            Ok(request) => {
                let gateway = request.gateway();
                let service = services
                    .entry(gateway)
                    .or_insert_with(|| PaymentService::new(gateway.factory()));
                let outcome = service.process_payment(request.amount(), request.card_number());
                println!(
                    "{},{},{}",
                    gateway,
                    request.amount(),
                    render_outcome(&outcome)
                );
            }
            Err(e) => {
                eprintln!("Error reading payment request: {}", e);
            }
        }
    }

    Ok(())
}

fn run_report(args: ReportArgs) -> Result<()> {
    let mut builder = SalesReportBuilder::new(args.title);
    if let Some(preset) = args.preset {
        builder = preset.apply(builder);
    }
    if let Some(format) = args.format {
        builder = builder.format(format);
    }
    if let (Some(start), Some(end)) = (args.start, args.end) {
        builder = builder.period(start_of_day(start), start_of_day(end));
    }
    if let Some(header) = args.header {
        builder = builder.header(header);
    }
    if let Some(footer) = args.footer {
        builder = builder.footer(footer);
    }
    if let Some(chart) = args.chart {
        builder = builder.chart(chart);
    }
    if let Some(orientation) = args.orientation {
        builder = builder.orientation(orientation);
    }
    if let Some(watermark) = args.watermark {
        builder = builder.watermark(watermark);
    }
    builder = args.columns.into_iter().fold(builder, |b, c| b.column(c));
    builder = args.filters.into_iter().fold(builder, |b, f| b.filter(f));

    let report = builder.build().into_diagnostic()?;
    if args.json {
        println!("{}", report.to_json().into_diagnostic()?);
    } else {
        print!("{report}");
    }

    Ok(())
}

fn start_of_day(date: NaiveDate) -> chrono::DateTime<chrono::Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
