// Plan Binder Application
// Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use plan_binder::models::plan::PageOrder;
use plan_binder::services::imposition;
use plan_binder::services::pdf::{PdfExportOptions, PdfExportService};
use plan_binder::services::plan::PlanService;
use plan_binder::ui::PlannerApp;

#[derive(Debug, Parser)]
#[command(name = "plan-binder")]
#[command(about = "View and print day-by-day plans in reading or booklet order")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open a plan document in the interactive viewer
    View {
        /// Path to the plan document
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Export a plan document to PDF without opening the viewer
    Export {
        /// Path to the plan document
        #[arg(short, long)]
        input: PathBuf,
        /// Path to the PDF output
        #[arg(short, long)]
        output: PathBuf,
        /// Page order for the export; anything but "booklet" means reading order
        #[arg(long, default_value = "reading")]
        order: String,
    },
    /// Write a starter plan document
    Init {
        /// If provided, where to write the starter plan. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::View { input } => run_view(input),
        Command::Export {
            input,
            output,
            order,
        } => run_export(input, output, &order),
        Command::Init { output } => run_init(output),
    }
}

fn run_view(input: PathBuf) -> Result<()> {
    log::info!("Starting Plan Binder viewer");

    let plan = PlanService::load(&input)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Plan Binder",
        native_options,
        Box::new(move |cc| Ok(Box::new(PlannerApp::new(cc, plan, input)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start viewer: {e}"))
}

fn run_export(input: PathBuf, output: PathBuf, order: &str) -> Result<()> {
    let mut plan = PlanService::load(&input)?;

    // A freshly loaded plan is in reading order, so booklet is one toggle away
    if PageOrder::from_label(order) == PageOrder::Booklet {
        imposition::toggle_plan(&mut plan);
    }

    let options = PdfExportOptions {
        title: plan.title.clone(),
        ..Default::default()
    };
    PdfExportService::export_pages(&plan.pages, &output, &options)
}

fn run_init(output: Option<PathBuf>) -> Result<()> {
    let plan = PlanService::starter_plan();

    match output {
        Some(path) => PlanService::save(&plan, &path),
        None => {
            println!("{}", PlanService::to_toml(&plan)?);
            Ok(())
        }
    }
}
