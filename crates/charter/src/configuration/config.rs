#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::io::IsTerminal;
use std::path;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use strum::VariantNames;
use tokio::fs;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::Characters;
use crate::domain::models::Theme;
use crate::domain::models::ThemeName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    Width,
    TickPadding,
    MinTickMargin,
    XlineCharacter,
    XtickCharacter,
    XtickSpacingCharacter,
    ShowTicks,
    Theme,
    Color,
}

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn parse(s: &str) -> Option<ColorChoice> {
        return ColorChoice::iter().find(|e| e.to_string() == s);
    }

    /// Whether ANSI colors should be written to stdout.
    pub fn enabled(self) -> bool {
        return match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::Width => "",
            ConfigKey::TickPadding => "3",
            ConfigKey::MinTickMargin => "1",
            ConfigKey::XlineCharacter => "━",
            ConfigKey::XtickCharacter => "┳",
            ConfigKey::XtickSpacingCharacter => " ",
            ConfigKey::ShowTicks => "true",
            ConfigKey::Theme => "default",
            ConfigKey::Color => "auto",

            // Special
            ConfigKey::ConfigFile => return default_config_path().to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    /// Command-line arguments backing each configuration key. Defaults are
    /// only mentioned in the help text so unset flags never shadow the
    /// configuration file.
    pub fn arguments() -> Vec<Arg> {
        return ConfigKey::iter()
            .map(|key| {
                let help = match key {
                    ConfigKey::ConfigFile => "Path to the configuration file".to_string(),
                    ConfigKey::Width => {
                        "Width of the axis in characters. Defaults to the terminal width"
                            .to_string()
                    }
                    ConfigKey::TickPadding => format!(
                        "Characters on each side of a tick mark [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::MinTickMargin => format!(
                        "Minimum number of characters between two ticks [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::XlineCharacter => format!(
                        "Character used to draw the axis line [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::XtickCharacter => format!(
                        "Character used to draw a tick mark [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::XtickSpacingCharacter => {
                        "Character placed between tick labels [default: \" \"]".to_string()
                    }
                    ConfigKey::ShowTicks => format!(
                        "Whether tick marks are drawn on the axis line [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::Theme => format!(
                        "Color theme for the chart [default: {}]",
                        Config::default(key)
                    ),
                    ConfigKey::Color => format!(
                        "When to use colors in the output [default: {}]",
                        Config::default(key)
                    ),
                };

                let mut arg = Arg::new(key.to_string())
                    .long(key.to_string())
                    .env(format!(
                        "CHARTER_{}",
                        key.to_string().to_uppercase().replace('-', "_")
                    ))
                    .num_args(1)
                    .help(help);

                let possible_values: &[&'static str] = match key {
                    ConfigKey::ShowTicks => &["true", "false"],
                    ConfigKey::Theme => ThemeName::VARIANTS,
                    ConfigKey::Color => ColorChoice::VARIANTS,
                    _ => &[],
                };
                if !possible_values.is_empty() {
                    arg = arg.value_parser(PossibleValuesParser::new(possible_values.iter().copied()));
                }

                return arg;
            })
            .collect();
    }

    pub async fn load(cmd: &Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path)
                .await
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let doc = toml_str
                .parse::<toml_edit::Document>()
                .with_context(|| format!("Failed to parse {}", config_path.display()))?;

            for key in ConfigKey::iter() {
                if let Some(val) = doc.get(&key.to_string()) {
                    // Use clap value parsers to do validation.
                    let mut possible_values = vec![];
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        possible_values = arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();
                    }

                    let val_str = if let Some(val_int) = val.as_integer() {
                        val_int.to_string()
                    } else if let Some(val_bool) = val.as_bool() {
                        val_bool.to_string()
                    } else if let Some(val_str) = val.as_str() {
                        val_str.to_string()
                    } else {
                        bail!("config.toml has an unsupported value type for key '{key}'");
                    };

                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty() && !possible_values.contains(&val_str) {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    Config::set(key, &val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            width = Config::get(ConfigKey::Width),
            tick_padding = Config::get(ConfigKey::TickPadding),
            min_tick_margin = Config::get(ConfigKey::MinTickMargin),
            theme = Config::get(ConfigKey::Theme),
            "config"
        );

        return Ok(());
    }

    pub fn get_usize(key: ConfigKey) -> Result<usize> {
        let val = Config::get(key);
        return val
            .trim()
            .parse::<usize>()
            .with_context(|| format!("Invalid value for '{key}': {val:?} is not a positive integer"));
    }

    /// `None` when the key is unset.
    pub fn get_optional_usize(key: ConfigKey) -> Result<Option<usize>> {
        if Config::get(key).trim().is_empty() {
            return Ok(None);
        }

        return Config::get_usize(key).map(Some);
    }

    pub fn get_bool(key: ConfigKey) -> Result<bool> {
        let val = Config::get(key);
        return match val.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => bail!("Invalid value for '{key}': {val:?} is not true or false"),
        };
    }

    /// A drawing character, which must take up exactly one terminal column.
    pub fn get_character(key: ConfigKey) -> Result<String> {
        let val = Config::get(key);
        if val.width() != 1 {
            bail!("Invalid value for '{key}': {val:?} must be a single character");
        }

        return Ok(val);
    }

    pub fn characters() -> Result<Characters> {
        return Ok(Characters {
            xline: Config::get_character(ConfigKey::XlineCharacter)?,
            xtick: Config::get_character(ConfigKey::XtickCharacter)?,
            xtick_spacing: Config::get_character(ConfigKey::XtickSpacingCharacter)?,
        });
    }

    pub fn theme() -> Result<Theme> {
        let val = Config::get(ConfigKey::Theme);
        let Some(name) = ThemeName::parse(&val) else {
            bail!(
                "Invalid value for 'theme': {val:?}\nPossible values are: {}",
                ThemeName::VARIANTS.join(", ")
            );
        };

        return Ok(Theme::get(name));
    }

    pub fn color_choice() -> Result<ColorChoice> {
        let val = Config::get(ConfigKey::Color);
        let Some(choice) = ColorChoice::parse(&val) else {
            bail!(
                "Invalid value for 'color': {val:?}\nPossible values are: {}",
                ColorChoice::VARIANTS.join(", ")
            );
        };

        return Ok(choice);
    }

    pub fn serialize_default(cmd: &Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg.get_help().map(|e| e.to_string()).unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() || val.parse::<bool>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}

fn default_config_path() -> path::PathBuf {
    if let Ok(xdg_config_home) = env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return path::PathBuf::from(xdg_config_home).join("charter/config.toml");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = dirs::home_dir() {
            return home.join(".config/charter/config.toml");
        }
    }

    return dirs::config_dir()
        .unwrap_or_else(|| path::PathBuf::from("."))
        .join("charter/config.toml");
}
