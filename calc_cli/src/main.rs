//! # Beam Calculator CLI
//!
//! Terminal front end for `calc_core`. Translates a JSON request (or answers to
//! interactive prompts) into a beam, runs the calculation and prints the
//! result summary followed by the JSON report.
//!
//! ## Usage
//!
//! ```text
//! calc_cli                               # interactive prompts
//! calc_cli request.json                  # run a JSON request
//! calc_cli request.json --field out.csv  # also write sampled diagrams as CSV
//! ```
//!
//! Set `RUST_LOG=info` (or `debug`) to see engine logging.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use calc_core::{analyze, AnalysisReport, BeamRequest, CalcError, LoadRequest, ReactionSet};

const USAGE: &str = "Usage: calc_cli [REQUEST.json] [--field OUT.csv]";

struct Options {
    request_path: Option<String>,
    field_path: Option<String>,
    show_help: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Options> {
    let mut options = Options {
        request_path: None,
        field_path: None,
        show_help: false,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--field" => match args.next() {
                Some(path) => options.field_path = Some(path),
                None => bail!("--field requires an output path\n{}", USAGE),
            },
            "-h" | "--help" => options.show_help = true,
            _ if options.request_path.is_none() && !arg.starts_with('-') => options.request_path = Some(arg),
            _ => bail!("Unexpected argument '{}'\n{}", arg, USAGE),
        }
    }
    Ok(options)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_request() -> BeamRequest {
    println!("Beam Calculator - Interactive Mode");
    println!("==================================");
    println!();

    let length = prompt_f64("Enter beam length (m) [5.0]: ", 5.0);
    let young_modulus = prompt_f64("Enter Young's modulus (Pa) [200e9]: ", 200e9);
    let moment_inertia = prompt_f64("Enter moment of inertia (m^4) [8.33e-6]: ", 8.33e-6);
    let support_type = prompt_line("Support type (cantilever/simply_supported) [simply_supported]: ")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "simply_supported".to_string());

    let kind = prompt_line("Load type (point/distributed) [point]: ").unwrap_or_default();
    let magnitude = prompt_f64("Load magnitude (N or N/m) [1000.0]: ", 1000.0);
    let position = prompt_f64(&format!("Load position (m) [{}]: ", length / 2.0), length / 2.0);
    let load = if kind.eq_ignore_ascii_case("distributed") {
        let loaded = prompt_f64("Loaded length (m) [1.0]: ", 1.0);
        LoadRequest::Distributed {
            magnitude,
            position,
            length: Some(loaded),
        }
    } else {
        LoadRequest::Point { magnitude, position }
    };

    BeamRequest {
        length,
        young_modulus,
        moment_inertia,
        support_type,
        loads: vec![load],
        sample_points: None,
    }
}

fn print_report(report: &AnalysisReport) {
    let summary = &report.summary;
    let props = &summary.beam_properties;

    println!("═══════════════════════════════════════");
    println!("  BEAM CALCULATION RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Support:  {}", props.support_type.display_name());
    println!("  Length:   {} m", props.length);
    println!("  EI:       {:.4e} N·m²", props.flexural_rigidity);
    println!(
        "  Loads:    {} point, {} distributed",
        summary.loads.point_loads.len(),
        summary.loads.distributed_loads.len()
    );
    println!();
    println!("Reactions:");
    match summary.reactions {
        ReactionSet::Cantilever { r_fixed, m_fixed } => {
            println!("  R_fixed = {:.2} N", r_fixed);
            println!("  M_fixed = {:.2} N·m", m_fixed);
        }
        ReactionSet::SimplySupported { r_a, r_b } => {
            println!("  R_A = {:.2} N", r_a);
            println!("  R_B = {:.2} N", r_b);
        }
    }
    println!();
    println!("Extremes:");
    println!("  |V|max = {:.2} N at x = {:.3} m", summary.max_shear, summary.max_shear_position);
    println!("  |M|max = {:.2} N·m at x = {:.3} m", summary.max_moment, summary.max_moment_position);
    println!(
        "  |δ|max = {:.6} m at x = {:.3} m",
        summary.max_deflection, summary.max_deflection_position
    );
    println!("═══════════════════════════════════════");
}

fn run(options: &Options) -> anyhow::Result<()> {
    if options.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let request = match &options.request_path {
        Some(path) => {
            let json = fs::read_to_string(path).with_context(|| format!("reading request file '{}'", path))?;
            BeamRequest::from_json(&json)?
        }
        None => prompt_request(),
    };

    let report = analyze(&request)?;
    print_report(&report);

    if let Some(path) = &options.field_path {
        fs::write(path, report.field.to_csv()?).with_context(|| format!("writing field to '{}'", path))?;
        println!();
        println!("Sampled field ({} points) written to {}", report.field.len(), path);
    }

    println!();
    println!("JSON Output (for API use):");
    println!("{}", serde_json::to_string_pretty(&report.summary)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let result = parse_args(std::env::args().skip(1)).and_then(|options| run(&options));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc_error) = e.downcast_ref::<CalcError>() {
                log::debug!("calculation rejected with {}", calc_error.error_code());
                if let Ok(json) = serde_json::to_string_pretty(calc_error) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
