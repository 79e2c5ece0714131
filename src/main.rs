//! idml2html - IDML story and image extractor

use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::Level;

use idml2html::{EntryOrder, Options};

#[derive(Parser)]
#[command(name = "idml2html")]
#[command(version, about = "Extract stories and image links from an IDML package", long_about = None)]
#[command(after_help = "The package must be extracted beforehand into <IDML_FILE>_FILES/.

EXAMPLES:
    idml2html brochure.idml                     Archive order
    idml2html --order designmap brochure.idml   Document order from designmap.xml")]
struct Cli {
    /// IDML package to read
    #[arg(value_name = "IDML_FILE")]
    input: String,

    /// Order of stories and spreads
    #[arg(long, value_enum, default_value_t = EntryOrder::Archive)]
    order: EntryOrder,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

const EXIT_USAGE: u8 = 1;
const EXIT_RUNTIME: u8 = 2;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprint!("{}", e.render());
            println!("{}", Cli::command().render_usage());
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_logging(cli.verbose);

    let options = Options { order: cli.order };
    let mut out = BufWriter::new(io::stdout().lock());
    match idml2html::convert(&cli.input, &options, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(EXIT_RUNTIME)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
