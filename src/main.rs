use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use tracing::{debug, error, Level};
use tracing_subscriber::FmtSubscriber;

use packed_vector::Format;

// ----------------------------------------------------------------

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    // Parse command line arguments.
    let args = App::new("packvec")
        .version(VERSION)
        .about("Encodes and decodes packed vector formats")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("log_level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Logging verbosity")
                .takes_value(true)
                .possible_values(&["trace", "debug", "info", "warn", "error"])
                .default_value("warn"),
        )
        .subcommand(SubCommand::with_name("list").about("Lists the available formats"))
        .subcommand(
            SubCommand::with_name("encode")
                .about("Encodes floats, printing the packed value as hex")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(format_arg())
                .arg(
                    Arg::with_name("VALUES")
                        .help("Component values, one per component")
                        .required(true)
                        .multiple(true)
                        .index(2)
                        .validator(|s| {
                            s.parse::<f32>()
                                .map(|_| ())
                                .map_err(|_| format!("{:?} is not a number", s))
                        }),
                ),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("Decodes a hex packed value, printing its components")
                .arg(format_arg())
                .arg(
                    Arg::with_name("PACKED")
                        .help("Packed value in hex, e.g. FB64837D")
                        .required(true)
                        .index(2),
                ),
        )
        .get_matches();

    // Initialize logging.
    let level = match args.value_of("log_level") {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn format_arg<'a, 'b>() -> Arg<'a, 'b> {
    Arg::with_name("FORMAT")
        .help("Format name, e.g. Byte4 or ubyte4-normalized")
        .required(true)
        .index(1)
        .validator(|s| s.parse::<Format>().map(|_| ()).map_err(|e| e.to_string()))
}

fn run(args: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match args.subcommand() {
        ("list", _) => {
            for format in Format::ALL.iter() {
                println!(
                    "{:<18} {} components, {} bits",
                    format.name(),
                    format.arity(),
                    format.bits()
                );
            }
        }

        ("encode", Some(sub)) => {
            let format: Format = sub.value_of("FORMAT").unwrap_or_default().parse()?;
            let values = sub
                .values_of("VALUES")
                .into_iter()
                .flatten()
                .map(|s| s.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()?;
            debug!(%format, ?values, "encoding");

            let packed = format.encode(&values)?;
            println!("{}", format.format_packed(packed));
        }

        ("decode", Some(sub)) => {
            let format: Format = sub.value_of("FORMAT").unwrap_or_default().parse()?;
            let packed = format.parse_packed(sub.value_of("PACKED").unwrap_or_default())?;
            debug!(%format, packed, "decoding");

            let components: Vec<String> = format
                .decode(packed)
                .iter()
                .map(|n| n.to_string())
                .collect();
            println!("{}", components.join(" "));
        }

        _ => unreachable!(),
    }

    Ok(())
}
