use clap::Parser;
use serde::Serialize;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wnb::{
    calculate_cg, centrogram_outline, inside_envelope, resolve_loads, AircraftConfig,
    AircraftIndex, AircraftSource, AircraftType, CenterOfGravity, CentrogramAxis, ResolvedLoad,
    WnbError,
};

/// Weight and balance check of a light aircraft.
#[derive(Debug, Parser)]
#[command(name = "wnb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check the center of gravity of an aircraft against its centrogram")]
struct Cli {
    /// Weight and balance document of one aircraft
    #[arg(long, conflicts_with = "index")]
    config: Option<PathBuf>,
    /// Index listing several aircraft documents to choose from
    #[arg(long)]
    index: Option<PathBuf>,
    /// Horizontal axis of the printed centrogram: lever_arm or moment
    #[arg(long, default_value = "lever_arm")]
    xaxis: CentrogramAxis,
    /// Keep default loads instead of prompting for each one
    #[arg(long)]
    defaults: bool,
    /// Print the result as JSON; prompts, if any, go to stderr
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    aircraft: &'a str,
    loads: &'a [ResolvedLoad],
    center_of_gravity: CenterOfGravity,
    inside_centrogram: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let config = load_config(&cli, &mut input, &mut output)?;

    let loads = current_loads(&cli, &config, &mut input, &mut output)?;

    let cg = calculate_cg(&config, &loads)?;
    let inside = inside_envelope(&cg, config.centrogram())?;

    if cli.json {
        let report = Report {
            aircraft: config.display_name(),
            loads: &loads,
            center_of_gravity: cg,
            inside_centrogram: inside,
        };
        writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        display_result(&config, &cg, inside, cli.xaxis, &mut output)?;
    }

    Ok(if inside {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

/// Installs a compact stderr subscriber; `RUST_LOG` overrides the `warn` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn load_config(
    cli: &Cli,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<AircraftConfig, WnbError> {
    match (&cli.config, &cli.index) {
        (Some(path), _) => AircraftConfig::new(AircraftSource::File(path.clone())),
        (None, Some(index_path)) => {
            let index = AircraftIndex::from_file(index_path)?;
            let choice = choose_aircraft(&index, input, output)?;
            let path = index.config_path(index_path, choice)?;
            AircraftConfig::new(AircraftSource::File(path))
        }
        (None, None) => {
            info!("No configuration given, using the built-in Cessna 150");
            AircraftConfig::new(AircraftSource::Programmed(AircraftType::Cessna150))
        }
    }
}

/// Prompts until a valid 1-based entry of the index is chosen.
fn choose_aircraft(
    index: &AircraftIndex,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<usize, WnbError> {
    loop {
        writeln!(output, "Index")?;
        writeln!(output, "Title: {}", index.title)?;
        for (i, aircraft) in index.aircrafts.iter().enumerate() {
            writeln!(output, "{}: {}", i + 1, aircraft)?;
        }
        write!(output, "Aircraft: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(WnbError::InvalidConfig("no aircraft chosen".to_string()));
        }
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=index.aircrafts.len()).contains(&choice) => return Ok(choice),
            Ok(_) => writeln!(
                output,
                "Index out of range (must be in [1;{}])\n",
                index.aircrafts.len()
            )?,
            Err(_) => {}
        }
    }
}

/// Loads to evaluate: the defaults with `--defaults`, otherwise prompted for.
fn current_loads(
    cli: &Cli,
    config: &AircraftConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Vec<ResolvedLoad>, WnbError> {
    if cli.defaults {
        return Ok(resolve_loads(config));
    }
    if cli.json {
        // stdout carries only the report
        return input_loads(config, input, &mut io::stderr().lock());
    }
    display_config(config, output)?;
    input_loads(config, input, output)
}

/// Prompts for every load in turn; an empty answer keeps the default.
fn input_loads(
    config: &AircraftConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Vec<ResolvedLoad>, WnbError> {
    let mut loads = resolve_loads(config);
    for load in &mut loads {
        let default = load.definition.quantity().default;
        loop {
            write!(
                output,
                "{} {} (default: {:.1}): ",
                load.designation(),
                load.definition.quantity_name(),
                default
            )?;
            output.flush()?;

            let mut line = String::new();
            input.read_line(&mut line)?;
            let answer = line.trim();
            if answer.is_empty() {
                load.current_value = default;
                break;
            }
            match answer.parse::<f64>() {
                Ok(value) => {
                    load.current_value = value;
                    if !load.within_bounds() {
                        warn!(
                            "{} {} {} {} is outside its declared bounds",
                            load.designation(),
                            load.definition.quantity_name(),
                            value,
                            load.definition.unit()
                        );
                    }
                    break;
                }
                Err(_) => writeln!(output, "'{}' is not a number", answer)?,
            }
        }
    }
    writeln!(output)?;
    Ok(loads)
}

fn display_config(config: &AircraftConfig, output: &mut impl Write) -> io::Result<()> {
    if let Some(aircraft) = config.aircraft() {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        writeln!(output, "aircraft:")?;
        writeln!(output, "  designation: {}", field(&aircraft.designation))?;
        writeln!(output, "  type: {}", field(&aircraft.aircraft_type))?;
        writeln!(output, "  immat: {}", field(&aircraft.immat))?;
        writeln!(output, "  picture: {}", field(&aircraft.picture))?;
        writeln!(output, "  owner: {}", field(&aircraft.owner))?;
        writeln!(output, "  owner_picture: {}", field(&aircraft.owner_picture))?;
        writeln!(output, "  comment: {}", field(&aircraft.comment))?;
        writeln!(output)?;
    }
    Ok(())
}

fn display_result(
    config: &AircraftConfig,
    cg: &CenterOfGravity,
    inside: bool,
    axis: CentrogramAxis,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Centrogram ({} / mass (kg)):", axis.label())?;
    let outline = centrogram_outline(config.centrogram(), axis);
    for (point, (x, mass)) in config.centrogram().iter().zip(&outline) {
        writeln!(output, "  {}: ({:.3}, {:.1})", point.designation, x, mass)?;
    }

    let (x, mass) = cg.coordinates(axis);
    writeln!(output, "G:")?;
    writeln!(output, "  mass: {:.1} kg", cg.mass)?;
    writeln!(output, "  lever_arm: {:.3} m", cg.lever_arm)?;
    writeln!(output, "  moment: {:.1} kg.m", cg.moment)?;
    writeln!(output, "  plotted at: ({:.3}, {:.1})", x, mass)?;
    writeln!(output)?;

    if inside {
        writeln!(output, "G is inside centrogram")?;
    } else {
        writeln!(output, "!!! G is outside centrogram !!!")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_input_loads_keeps_defaults_on_empty_answers() {
        let config = AircraftConfig::cessna_150();
        let mut input = Cursor::new("\n\n60\n\nabc\n40\n");
        let mut output = Vec::new();

        let loads = input_loads(&config, &mut input, &mut output).unwrap();
        let values: Vec<f64> = loads.iter().map(|l| l.current_value).collect();
        assert_eq!(values, vec![520.0, 77.0, 60.0, 10.0, 40.0]);

        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Pilot mass (default: 77.0): "));
        assert!(prompts.contains("Fuel volume (default: 85.0): "));
        assert!(prompts.contains("'abc' is not a number"));
    }

    #[test]
    fn test_json_report_uses_prompted_loads() {
        let config = AircraftConfig::cessna_150();
        let cli = Cli::parse_from(["wnb", "--json"]);
        let mut input = Cursor::new("\n\n60\n\n\n");
        let mut output = Vec::new();

        let loads = current_loads(&cli, &config, &mut input, &mut output).unwrap();
        assert_eq!(loads[2].current_value, 60.0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_defaults_skip_prompts() {
        let config = AircraftConfig::cessna_150();
        let cli = Cli::parse_from(["wnb", "--defaults", "--json"]);
        let mut input = Cursor::new("60\n");
        let mut output = Vec::new();

        let loads = current_loads(&cli, &config, &mut input, &mut output).unwrap();
        assert_eq!(loads, resolve_loads(&config));
        assert!(output.is_empty());
    }

    #[test]
    fn test_choose_aircraft_reprompts_out_of_range() {
        let index = AircraftIndex {
            title: "Fleet".to_string(),
            aircrafts: vec!["a.yml".to_string(), "b.yml".to_string()],
        };
        let mut input = Cursor::new("x\n5\n2\n");
        let mut output = Vec::new();

        assert_eq!(choose_aircraft(&index, &mut input, &mut output).unwrap(), 2);
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Index out of range (must be in [1;2])"));
    }

    #[test]
    fn test_choose_aircraft_fails_at_end_of_input() {
        let index = AircraftIndex {
            title: "Fleet".to_string(),
            aircrafts: vec!["a.yml".to_string()],
        };
        let mut input = Cursor::new("");
        assert!(choose_aircraft(&index, &mut input, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_display_result_reports_outside() {
        let config = AircraftConfig::cessna_150();
        let mut loads = resolve_loads(&config);
        loads[2].current_value = 60.0;
        let cg = calculate_cg(&config, &loads).unwrap();
        let inside = inside_envelope(&cg, config.centrogram()).unwrap();

        let mut output = Vec::new();
        display_result(&config, &cg, inside, CentrogramAxis::LeverArm, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("!!! G is outside centrogram !!!"));
        assert!(text.contains("Pt1: (0.800, 250.0)"));
    }
}
