use compute_sales::args::Args;
use compute_sales::engine::compute_total_sales;
use compute_sales::errors::LoadError;
use compute_sales::loader::{PriceCatalogue, SalesRecord};
use compute_sales::report::Report;
use env_logger::Env;
use log::{error, warn};
use std::process;
use std::time::Instant;

fn report_load_failure(err: &LoadError) {
    error!("failed to load {}: {}", err.path().display(), err);
    println!("{}", err);
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let start = Instant::now();

    // Both documents are loaded before bailing out so that every load
    // failure is reported in a single run.
    let catalogue = PriceCatalogue::try_from(args.price_catalog_path);
    let sales = SalesRecord::try_from(args.sales_record_path);

    let (catalogue, sales) = match (catalogue, sales) {
        (Ok(catalogue), Ok(sales)) => (catalogue, sales),
        (catalogue, sales) => {
            for err in [catalogue.err(), sales.err()].iter().flatten() {
                report_load_failure(err);
            }
            process::exit(1);
        }
    };

    if catalogue.is_empty() {
        warn!("price catalogue has no usable entries, every sale will be unmatched");
    }
    if sales.is_empty() {
        warn!("sales record is empty, the total will be zero");
    }

    let summary = compute_total_sales(&catalogue, &sales);
    let report = Report::from_summary(summary, start.elapsed());

    println!("{}", report);
    if let Err(err) = report.write_to(&args.output_path) {
        error!("{}", err);
        eprintln!("failed to write output report: {}", err);
        process::exit(1);
    }
}
