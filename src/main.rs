//! geojson2svg CLI
//!
//! Usage:
//!   geojson2svg [OPTIONS] [FILE]
//!
//! Options:
//!   -o, --out <FILE>                     Output file; `-` for stdout
//!       --viewport-size <W> <H>          Output view size in pixels
//!   -p, --precision <N>                  Digits after the decimal point
//!   -r, --radius <R>                     Default point radius
//!   -d, --attribute-dynamic <PATH[:KEY]> Feature property to copy onto each path
//!   -a, --attribute-static <NAME:VALUE>  Literal attribute for every path
//!   -c, --config <FILE>                  Options file (TOML format)
//!       --paths-only                     Emit path elements without the SVG envelope
//!   -h, --help                           Print help

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use log::info;

use geojson2svg::{
    convert_str, render_document, AttributeRule, ConversionOptions, SvgConfig, ViewportSpec,
};

#[derive(Parser, Debug)]
#[command(name = "geojson2svg", version)]
#[command(about = "Convert GeoJSON to SVG")]
struct Cli {
    /// Input file; `-` or absent reads stdin
    #[arg(default_value = "-")]
    input: String,

    /// Output file; `-` writes to stdout
    #[arg(short, long, default_value = "-")]
    out: String,

    /// Output view size in pixels
    #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    viewport_size: Option<Vec<u32>>,

    /// Number of digits after the decimal point
    #[arg(short, long)]
    precision: Option<u32>,

    /// Default point radius
    #[arg(short, long)]
    radius: Option<f64>,

    /// Feature property to add as path attribute, optionally renamed
    #[arg(short = 'd', long = "attribute-dynamic", value_name = "PATH[:KEY]")]
    attribute_dynamic: Vec<String>,

    /// Attribute name and literal value to add to every path
    #[arg(short = 'a', long = "attribute-static", value_name = "NAME:VALUE")]
    attribute_static: Vec<String>,

    /// Options file (TOML format); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit path elements only, one per line
    #[arg(long)]
    paths_only: bool,

    /// Omit the XML declaration and DOCTYPE
    #[arg(long)]
    no_standalone: bool,

    /// Do not indent or break lines inside the document
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    verbose: Verbosity<ErrorLevel>,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = build_options(cli)?;
    let svg_config = SvgConfig::new()
        .with_paths_only(cli.paths_only)
        .with_standalone(!cli.no_standalone)
        .with_pretty_print(!cli.compact);

    let source = read_input(&cli.input)?;
    let elements = convert_str(&source, &options)?;
    info!("converted {} feature(s)", elements.len());

    let output = render_document(&elements, options.viewport, &svg_config);
    write_output(&cli.out, &output)?;
    Ok(())
}

/// Options file first, then explicit flags on top
fn build_options(cli: &Cli) -> Result<ConversionOptions, Box<dyn std::error::Error>> {
    let mut options = match &cli.config {
        Some(path) => ConversionOptions::from_file(path)
            .map_err(|e| format!("loading options '{}': {}", path.display(), e))?,
        None => ConversionOptions::default(),
    };

    if let Some(size) = &cli.viewport_size {
        let [width, height] = size.as_slice() else {
            return Err("--viewport-size takes exactly WIDTH and HEIGHT".into());
        };
        options = options.with_viewport(ViewportSpec::new(*width, *height)?);
    }
    if let Some(precision) = cli.precision {
        options = options.with_precision(precision);
    }
    if let Some(radius) = cli.radius {
        options = options.with_point_radius(radius)?;
    }
    for token in &cli.attribute_dynamic {
        options = options.with_attribute(AttributeRule::parse_dynamic(token)?);
    }
    for token in &cli.attribute_static {
        options = options.with_attribute(AttributeRule::parse_static(token)?);
    }

    Ok(options)
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(input)
    }
}

fn write_output(out: &str, content: &str) -> io::Result<()> {
    if out == "-" {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", content)?;
        stdout.flush()
    } else {
        fs::write(out, format!("{}\n", content))
    }
}
