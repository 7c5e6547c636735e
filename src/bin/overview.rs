use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use business_overview::{
    ApiClient, ClientConfig, Employee, FetchOutcome, Invoice, NotificationKind, NotificationStore,
    Payment, Period, Project, Sale, Task,
    aggregation::{
        InvoiceSummary, PaymentSummary, ProjectSummary, SalesSummary, aggregate_invoices,
        aggregate_payments, aggregate_projects, aggregate_sales,
    },
    charts::{OverviewChart, category_bar_chart, category_count_chart, time_series_line_chart},
    logging::{DEFAULT_LOG_FILTER, setup_logging},
    tasks::{TaskOverview, analyze_tasks},
    timezone::today_in,
};

/// Fetches business records for a month and prints the overview as JSON.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The API root URL, e.g. "https://example.com/api".
    #[arg(long, env = "OVERVIEW_API_URL")]
    api_url: String,

    /// The month to report on, from 1 to 12. Invoices are reported in full.
    #[arg(short, long)]
    month: u8,

    /// The year to report on.
    #[arg(short, long)]
    year: i32,

    /// The canonical timezone used to decide what "today" is for task deadlines.
    #[arg(long, default_value = "UTC")]
    timezone: String,

    /// Which overview to produce.
    #[arg(long, value_enum, default_value_t = ReportKind::All)]
    report: ReportKind,

    /// Include ECharts options for each overview.
    #[arg(long)]
    charts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    Projects,
    Sales,
    Payments,
    Invoices,
    Tasks,
    All,
}

impl ReportKind {
    fn includes(self, other: ReportKind) -> bool {
        self == ReportKind::All || self == other
    }
}

/// One overview plus whether its data could be fetched.
#[derive(Serialize)]
struct Section<S> {
    fetch_failed: bool,
    errors: Vec<String>,
    summary: S,
}

#[derive(Serialize, Default)]
struct Report {
    period: String,
    projects: Option<Section<ProjectSummary>>,
    sales: Option<Section<SalesSummary>>,
    payments: Option<Section<PaymentSummary>>,
    invoices: Option<Section<InvoiceSummary>>,
    tasks: Option<Section<TaskOverview>>,
    charts: Vec<OverviewChart>,
    notifications: Vec<business_overview::Notification>,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging(DEFAULT_LOG_FILTER);

    let args = Args::parse();

    match run(args).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<String, business_overview::Error> {
    let client = ApiClient::new(ClientConfig::new(&args.api_url))?;
    let report = build_report(&client, &args).await?;

    serde_json::to_string_pretty(&report)
        .map_err(|error| business_overview::Error::JSONSerializationError(error.to_string()))
}

async fn build_report(
    client: &ApiClient,
    args: &Args,
) -> Result<Report, business_overview::Error> {
    let period = Period::new(args.month, args.year)?;
    let mut notifications = NotificationStore::new(16);
    let mut report = Report {
        period: period.label(),
        ..Default::default()
    };

    tracing::info!("Building {:?} overview for {}", args.report, period.label());

    if args.report.includes(ReportKind::Projects) {
        let projects = client.fetch_in_period::<Project>(period).await;
        let summary = aggregate_projects(projects.records());
        if args.charts {
            report.charts.push(OverviewChart::new(
                "budget-by-type",
                &category_bar_chart("Budget by type", &summary.budget_by_type),
            ));
            report.charts.push(OverviewChart::new(
                "projects-by-status",
                &category_count_chart("Projects by status", &summary.status_series),
            ));
        }
        report.projects = Some(section(&mut notifications, "projects", &[&projects], summary));
    }

    if args.report.includes(ReportKind::Sales) {
        let sales = client.fetch_in_period::<Sale>(period).await;
        let summary = aggregate_sales(sales.records());
        if args.charts {
            report.charts.push(OverviewChart::new(
                "gross-by-client",
                &category_bar_chart("Gross sales by client", &summary.gross_by_client),
            ));
            report.charts.push(OverviewChart::new(
                "sales-over-time",
                &time_series_line_chart("Sales over time", &summary.gross_over_time),
            ));
        }
        report.sales = Some(section(&mut notifications, "sales", &[&sales], summary));
    }

    if args.report.includes(ReportKind::Payments) {
        let payments = client.fetch_in_period::<Payment>(period).await;
        let summary = aggregate_payments(payments.records());
        if args.charts {
            report.charts.push(OverviewChart::new(
                "payments-by-method",
                &category_bar_chart("Payments by method", &summary.amount_by_method),
            ));
        }
        report.payments = Some(section(&mut notifications, "payments", &[&payments], summary));
    }

    if args.report.includes(ReportKind::Invoices) {
        // Every invoice counts, whatever month it was issued in.
        let invoices = client.fetch::<Invoice>().await;
        let summary = aggregate_invoices(invoices.records());
        if args.charts {
            report.charts.push(OverviewChart::new(
                "invoices-by-status",
                &category_bar_chart("Invoices by status", &summary.amount_by_status),
            ));
        }
        report.invoices = Some(section(&mut notifications, "invoices", &[&invoices], summary));
    }

    if args.report.includes(ReportKind::Tasks) {
        let today = today_in(&args.timezone)?;
        let (tasks, employees) = tokio::join!(client.fetch::<Task>(), client.fetch::<Employee>());
        let summary = analyze_tasks(tasks.records(), employees.records(), today);
        if args.charts {
            report.charts.push(OverviewChart::new(
                "employee-workload",
                &category_count_chart("Estimated hours per employee", &summary.workload_series),
            ));
            report.charts.push(OverviewChart::new(
                "task-deadlines",
                &category_count_chart("Tasks by deadline", &summary.deadline_counts),
            ));
        }
        let outcomes: [&dyn Failure; 2] = [&tasks, &employees];
        report.tasks = Some(section(&mut notifications, "tasks", &outcomes, summary));
    }

    report.notifications = notifications.notifications().to_vec();

    Ok(report)
}

/// The failure side of a [FetchOutcome], regardless of its record type.
trait Failure {
    fn failure(&self) -> Option<String>;
}

impl<R> Failure for FetchOutcome<R> {
    fn failure(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

fn section<S>(
    notifications: &mut NotificationStore,
    name: &str,
    outcomes: &[&dyn Failure],
    summary: S,
) -> Section<S> {
    let errors: Vec<String> = outcomes
        .iter()
        .filter_map(|outcome| outcome.failure())
        .collect();

    for error in &errors {
        notifications.publish(
            NotificationKind::Error,
            format!("Could not load {name}: {error}"),
        );
    }

    Section {
        fetch_failed: !errors.is_empty(),
        errors,
        summary,
    }
}
