use std::path::PathBuf;
use std::process;

use urpx::config::Config;
use urpx::debug;
use urpx::error::ErrorFormatter;
use urpx::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    config: Config,
    output_folder: PathBuf,
    inputs: Vec<PathBuf>,
    help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            config: Config::default(),
            output_folder: PathBuf::from("."),
            inputs: Vec::new(),
            help: false,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_cli_args(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {}", err);
            print_usage();
            process::exit(2);
        }
    };
    if cli.help {
        print_usage();
        return;
    }

    let config = cli.config;
    if config.debug {
        debug::enable_debug();
    }
    if !config.use_color {
        colored::control::set_override(false);
    }

    let session = match Session::from_paths(cli.inputs, cli.output_folder, config.format) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(&err).with_color(config.use_color).format());
            process::exit(2);
        }
    };

    let report = session.run();
    if report.is_success() {
        println!("{}", report.render(config.use_color));
    } else {
        eprintln!("{}", report.render(config.use_color));
        process::exit(1);
    }
}

fn parse_cli_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut index = 0usize;

    while index < args.len() {
        match args[index].as_str() {
            "-h" | "--help" => {
                cli.help = true;
                index += 1;
            }
            "--to" | "-t" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| format!("missing value for {}", args[index]))?;
                cli.config.format = value.parse()?;
                index += 2;
            }
            "--output" | "-o" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| format!("missing value for {}", args[index]))?;
                cli.output_folder = PathBuf::from(value);
                index += 2;
            }
            "--no-color" => {
                cli.config.use_color = false;
                index += 1;
            }
            "--debug" => {
                cli.config.debug = true;
                index += 1;
            }
            "--" => {
                cli.inputs
                    .extend(args[index + 1..].iter().map(PathBuf::from));
                break;
            }
            value if value.starts_with('-') && value.len() > 1 => {
                return Err(format!("unknown option '{}'", value));
            }
            value => {
                cli.inputs.push(PathBuf::from(value));
                index += 1;
            }
        }
    }

    Ok(cli)
}

fn print_usage() {
    println!("usage: urpx [options] <file.urpx|folder>...");
    println!();
    println!("Converts UR program archives to URScript or a readable outline.");
    println!();
    println!("options:");
    println!("  -t, --to <script|txt>   output format (default: script)");
    println!("  -o, --output <dir>      destination folder (default: .)");
    println!("      --no-color          disable coloured output");
    println!("      --debug             print debug output (or set URPX_DEBUG)");
    println!("  -h, --help              show this help");
}
