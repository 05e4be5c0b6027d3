use crate::report::DEFAULT_OUTPUT_PATH;
use clap::{App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

pub const USAGE: &str = "Usage: compute_sales price_catalog.json sales_record.json";

pub struct Args {
    pub price_catalog_path: PathBuf,
    pub sales_record_path: PathBuf,
    pub output_path: PathBuf,
    pub verbose: bool,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("compute_sales")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Computes total sales from a price catalogue and a sales record")
        .arg(Arg::with_name("price_catalog_path")
            .takes_value(true).required(true).help("path of the JSON price catalogue"))
        .arg(Arg::with_name("sales_record_path")
            .takes_value(true).required(true).help("path of the JSON sales record"))
        .arg(Arg::with_name("output")
            .short("o").long("output").takes_value(true)
            .default_value(DEFAULT_OUTPUT_PATH).help("file the report is written to"))
        .arg(Arg::with_name("verbose")
            .short("v").long("verbose").help("log every sale as it is costed"))
}

impl Args {
    /// Parses the process arguments. Any invocation that does not parse,
    /// help and version requests included, prints the usage line and exits
    /// with status 1.
    pub fn parse() -> Self {
        match Self::try_parse_from(std::env::args_os()) {
            Ok(args) => args,
            Err(_) => {
                println!("{}", USAGE);
                process::exit(1);
            }
        }
    }

    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().get_matches_from_safe(iter)?;

        Ok(Self {
            price_catalog_path: matches.value_of_os("price_catalog_path").map(PathBuf::from).unwrap_or_default(),
            sales_record_path: matches.value_of_os("sales_record_path").map(PathBuf::from).unwrap_or_default(),
            output_path: matches.value_of_os("output").map(PathBuf::from).unwrap_or_default(),
            verbose: matches.is_present("verbose"),
        })
    }
}
