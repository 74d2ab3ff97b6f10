use std::io;

use anyhow::Result;
use clap::Arg;
use clap::Command;
use clap_complete::generate;
use clap_complete::Shell;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::CommandType;

pub fn build() -> Command {
    return Command::new("shockctl")
        .about("Terminal control panel for OpenShock devices")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to the configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::ApiToken.to_string())
                .long(ConfigKey::ApiToken.to_string())
                .env("SHOCK_API_KEY")
                .help("OpenShock API token")
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::DeviceId.to_string())
                .long(ConfigKey::DeviceId.to_string())
                .env("SHOCK_ID")
                .help("Identifier of the device to control")
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::Endpoint.to_string())
                .long(ConfigKey::Endpoint.to_string())
                .help("Control endpoint of the OpenShock API")
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::CommandType.to_string())
                .long(ConfigKey::CommandType.to_string())
                .help("Command sent to the device on each dispatch")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    CommandType::VARIANTS.to_vec(),
                ))
                .num_args(1),
        )
        .arg(
            Arg::new(ConfigKey::DurationMs.to_string())
                .long(ConfigKey::DurationMs.to_string())
                .help("Duration of each dispatched command in milliseconds")
                .num_args(1),
        )
        .subcommand(Command::new("config").about("Print the default configuration file to stdout"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .short('s')
                        .long("shell")
                        .help("Which shell to generate completions for")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell))
                        .num_args(1),
                ),
        );
}

/// Parses the command line, runs any one-shot subcommand, and loads config.
/// Returns false when the process should exit without starting the UI loop.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(("config", _)) = matches.subcommand() {
        println!("{}", Config::serialize_default(build()));
        return Ok(false);
    }

    if let Some(("completions", submatches)) = matches.subcommand() {
        let shell = submatches
            .get_one::<Shell>("shell")
            .copied()
            .unwrap_or(Shell::Bash);
        let mut cmd = build();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(false);
    }

    Config::load(build(), vec![&matches]).await?;

    return Ok(true);
}
