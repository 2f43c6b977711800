#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use charter::printer;
use charter::AxisRows;
use charter::Config;
use charter::ConfigKey;
use charter::Ticks;
use charter::XAxis;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::Shell;

const FALLBACK_WIDTH: usize = 80;

fn range_arguments() -> Vec<Arg> {
    return vec![
        Arg::new("values")
            .value_name("VALUES")
            .help("Data values. The range spans their minimum and maximum")
            .num_args(0..)
            .value_parser(value_parser!(f64)),
        Arg::new("min")
            .long("min")
            .help("Lower bound of the data range, overriding VALUES")
            .num_args(1)
            .value_parser(value_parser!(f64)),
        Arg::new("max")
            .long("max")
            .help("Upper bound of the data range, overriding VALUES")
            .num_args(1)
            .value_parser(value_parser!(f64)),
    ];
}

pub fn axis_command() -> Command {
    return Command::new("axis")
        .about("Draw an x axis for a data range")
        .allow_negative_numbers(true)
        .args(range_arguments())
        .arg(
            Arg::new("tick-values")
                .long("tick-values")
                .help("Comma separated tick values to use instead of computed ones")
                .num_args(1)
                .value_delimiter(',')
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("tick-labels")
                .long("tick-labels")
                .help("Comma separated tick labels to use instead of computed ones")
                .num_args(1)
                .value_delimiter(','),
        )
        .args(Config::arguments());
}

pub fn ticks_command() -> Command {
    return Command::new("ticks")
        .about("Print the tick values and labels computed for a data range")
        .allow_negative_numbers(true)
        .args(range_arguments())
        .arg(
            Arg::new("max-ticks")
                .long("max-ticks")
                .help("Maximum number of ticks to aim for")
                .num_args(1)
                .default_value("10")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .num_args(1)
                .default_value("text")
                .value_parser(PossibleValuesParser::new(["text", "json"])),
        );
}

pub fn command() -> Command {
    return Command::new("charter")
        .about("Unicode charts for the terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Log level written to stderr")
                .global(true)
                .num_args(1)
                .default_value("warn")
                .value_parser(PossibleValuesParser::new([
                    "off", "error", "warn", "info", "debug", "trace",
                ])),
        )
        .subcommand(axis_command())
        .subcommand(ticks_command())
        .subcommand(Command::new("config").about("Print the default configuration file"))
        .subcommand(
            Command::new("completions")
                .about("Print shell completions")
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .required(true)
                        .action(ArgAction::Set)
                        .value_parser(value_parser!(Shell)),
                ),
        );
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("axis", sub_matches)) => {
            Config::load(&axis_command(), vec![sub_matches]).await?;
            let color = Config::color_choice()?.enabled();
            println!("{}", render_axis(sub_matches, resolve_width()?, color)?);
        }
        Some(("ticks", sub_matches)) => {
            println!("{}", render_ticks(sub_matches)?);
        }
        Some(("config", _)) => {
            println!("{}", Config::serialize_default(&axis_command()));
        }
        Some(("completions", sub_matches)) => {
            let shell = *sub_matches
                .get_one::<Shell>("shell")
                .context("A shell is required")?;
            clap_complete::generate(shell, &mut command(), "charter", &mut io::stdout());
        }
        Some((name, _)) => bail!("Unknown command: {name}"),
        None => bail!("A command is required"),
    }

    return Ok(());
}

/// Data range from `--min`/`--max`, falling back to the extremes of VALUES.
pub fn resolve_range(matches: &ArgMatches) -> Result<(f64, f64)> {
    let values = matches
        .get_many::<f64>("values")
        .map(|values| values.copied().collect::<Vec<f64>>())
        .unwrap_or_default();

    let min = matches
        .get_one::<f64>("min")
        .copied()
        .or_else(|| values.iter().copied().reduce(f64::min));
    let max = matches
        .get_one::<f64>("max")
        .copied()
        .or_else(|| values.iter().copied().reduce(f64::max));

    let (Some(min), Some(max)) = (min, max) else {
        bail!("No data range given. Pass VALUES, or both --min and --max");
    };

    return Ok((min, max));
}

/// Configured width, then the terminal width, then a fixed fallback.
pub fn resolve_width() -> Result<usize> {
    if let Some(width) = Config::get_optional_usize(ConfigKey::Width)? {
        return Ok(width);
    }

    return match crossterm::terminal::size() {
        Ok((columns, _)) => Ok(usize::from(columns)),
        Err(err) => {
            log::debug!("Terminal size unavailable, using {FALLBACK_WIDTH}: {err}");
            Ok(FALLBACK_WIDTH)
        }
    };
}

/// Draws the axis described by `matches` using the loaded configuration.
pub fn render_axis(matches: &ArgMatches, width: usize, color: bool) -> Result<String> {
    let (min, max) = resolve_range(matches)?;
    let tick_values = matches
        .get_many::<f64>("tick-values")
        .map(|values| values.copied().collect::<Vec<f64>>());
    let tick_labels = matches
        .get_many::<String>("tick-labels")
        .map(|labels| labels.cloned().collect::<Vec<String>>());

    let xaxis = XAxis::builder(min, max)
        .width(width)
        .tick_padding(Config::get_usize(ConfigKey::TickPadding)?)
        .min_tick_margin(Config::get_usize(ConfigKey::MinTickMargin)?)
        .tick_values(tick_values)
        .tick_labels(tick_labels)
        .build()?;

    log::info!(
        "Drawing {} ticks across {width} columns",
        xaxis.number_of_xticks()
    );

    let rows = AxisRows::new(
        &xaxis,
        &Config::characters()?,
        Config::get_bool(ConfigKey::ShowTicks)?,
    );
    let lines = rows.lines(&Config::theme()?);

    return Ok(printer::render_to_string(&lines, color));
}

pub fn render_ticks(matches: &ArgMatches) -> Result<String> {
    let (min, max) = resolve_range(matches)?;
    let max_ticks = matches
        .get_one::<usize>("max-ticks")
        .copied()
        .context("--max-ticks is required")?;
    let ticks = Ticks::new(min, max, max_ticks)?;

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    if format == "json" {
        return Ok(serde_json::to_string_pretty(&ticks)?);
    }

    let mut lines = ticks
        .iter()
        .map(|(value, label)| format!("{value}\t{label}"))
        .collect::<Vec<String>>();
    if let Some(subtractor_label) = &ticks.axis_subtractor_label {
        lines.push(format!("+{subtractor_label}"));
    }

    return Ok(lines.join("\n"));
}
