use std::env;
use std::path::PathBuf;

use vishash::image::io::{save_rgb_png, write_json_file};
use vishash::{load_options, render_file_with_report, RenderOptions};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

struct Cli {
    options: RenderOptions,
    input: PathBuf,
    output: PathBuf,
    json_out: Option<PathBuf>,
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args)? {
        Some(cli) => cli,
        None => {
            print_help();
            return Ok(());
        }
    };

    init_logger(cli.options.verbose);
    log::info!("computing hash of {}...", cli.input.display());

    let (img, report) = render_file_with_report(&cli.input, &cli.options)?;
    save_rgb_png(&cli.output, &img)?;
    if let Some(path) = &cli.json_out {
        write_json_file(path, &report)?;
        log::info!("JSON report written to {}", path.display());
    }

    log::info!("output image saved in {}", cli.output.display());
    Ok(())
}

/// Hand-rolled argument loop. Returns `None` when help was requested or no
/// input file was given.
fn parse_args(args: &[String]) -> Result<Option<Cli>, String> {
    let mut options = RenderOptions::default();
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut json_out: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-s" | "--size" => {
                let v = numeric_value(args, &mut i, "size")?;
                options.width = v;
                options.height = v;
            }
            "-w" | "--width" => options.width = numeric_value(args, &mut i, "width")?,
            "-h" | "--height" => options.height = numeric_value(args, &mut i, "height")?,
            "-j" | "--jobs" => options.njobs = numeric_value(args, &mut i, "njobs")?,
            "-K" => options.detail = numeric_value(args, &mut i, "K")? as i64,
            "-o" | "--output" => output = Some(PathBuf::from(flag_value(args, &mut i, "output")?)),
            "-c" | "--config" => {
                let path = PathBuf::from(flag_value(args, &mut i, "config")?);
                options = load_options(&path)?;
            }
            "--json" => json_out = Some(PathBuf::from(flag_value(args, &mut i, "json")?)),
            "-l" | "--logs" => options.verbose = true,
            "--help" => return Ok(None),
            _ if input.is_none() && !arg.starts_with('-') => input = Some(PathBuf::from(arg)),
            _ => return Err(format!("Unknown argument \"{arg}\"")),
        }
        i += 1;
    }

    let Some(input) = input else {
        return Ok(None);
    };
    options.validate()?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.hash.png", input.display())));
    Ok(Some(Cli {
        options,
        input,
        output,
        json_out,
    }))
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, name: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("Please specify the value of {name}."))
}

fn numeric_value(args: &[String], i: &mut usize, name: &str) -> Result<usize, String> {
    let raw = flag_value(args, i, name)?;
    let value: usize = raw
        .parse()
        .map_err(|_| format!("Invalid {name} parameter \"{raw}\""))?;
    if value == 0 {
        return Err(format!("Invalid {name} parameter \"{raw}\""));
    }
    Ok(value)
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn print_help() {
    let defaults = RenderOptions::default();
    println!("\nvishash");
    println!(
        "Computes an easily recognizable PNG image using only the data of a given file, \
such that any change in the file produces a completely different image. The image depends \
only on the file and the given parameters, which makes it a quick visual check that two \
files are identical."
    );
    println!("Usage : vishash <filename> [options]\n");
    println!("Optional parameters:");
    println!(
        " -s | --size   : Square image; size is the side length in pixels. (default: {})",
        defaults.height
    );
    println!(
        " -w | --width  : Width of the image in pixels. (default: {})",
        defaults.width
    );
    println!(
        " -h | --height : Height of the image in pixels. (default: {})",
        defaults.height
    );
    println!(
        " -K            : Level of detail; 50 is coarse, 300 is very fine. (default: {})",
        defaults.detail
    );
    println!(
        " -j | --jobs   : Maximal number of cores to use. (default: {})",
        defaults.njobs
    );
    println!(" -o | --output : Output path. (default: <filename>.hash.png)");
    println!(" -c | --config : Load options from a JSON file.");
    println!(" --json <path> : Write a timing/diagnostics report as JSON.");
    println!(" -l | --logs   : Display progress logs.");
    println!(" --help        : Display this help.");
}
