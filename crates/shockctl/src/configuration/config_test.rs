use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::application::cli;
use crate::domain::models::Credentials;

// Config is a process-wide store, so the load/override/credential assertions
// live in one test to keep them from racing each other.
#[tokio::test]
async fn it_loads_defaults_files_and_overrides() {
    // Defaults only: no credentials, so the loop must never start.
    let cmd = cli::build();
    let matches = cmd.clone().get_matches_from(vec!["shockctl"]);
    Config::load(cmd, vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::Endpoint), DEFAULT_ENDPOINT);
    assert_eq!(Config::get(ConfigKey::CommandType), "shock");
    assert_eq!(Config::get(ConfigKey::DurationMs), "300");
    assert!(Credentials::from_config().is_err());

    // A config file with an invalid command-type is rejected outright.
    let mut bad_file = NamedTempFile::new().unwrap();
    writeln!(bad_file, "command-type = \"tickle\"").unwrap();
    let bad_path = bad_file.path().to_str().unwrap().to_string();

    let cmd = cli::build();
    let matches = cmd
        .clone()
        .get_matches_from(vec!["shockctl", "--config-file", &bad_path]);
    let res = Config::load(cmd, vec![&matches]).await;
    assert!(res.is_err());
    assert!(res.unwrap_err().to_string().contains("command-type"));

    // File values load, CLI flags win over the file.
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "api-token = \"file-token\"\ndevice-id = \"file-device\"\nduration-ms = 450\ncommand-type = \"vibrate\""
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cmd = cli::build();
    let matches = cmd.clone().get_matches_from(vec![
        "shockctl",
        "--config-file",
        &path,
        "--device-id",
        "cli-device",
    ]);
    Config::load(cmd, vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::ApiToken), "file-token");
    assert_eq!(Config::get(ConfigKey::DeviceId), "cli-device");
    assert_eq!(Config::get(ConfigKey::DurationMs), "450");
    assert_eq!(Config::get(ConfigKey::CommandType), "vibrate");
    assert_eq!(Config::get(ConfigKey::Endpoint), DEFAULT_ENDPOINT);

    let credentials = Credentials::from_config().unwrap();
    assert_eq!(credentials.api_token, "file-token");
    assert_eq!(credentials.device_id, "cli-device");
}

#[test]
fn it_serializes_the_default_config() {
    let toml_str = Config::serialize_default(cli::build());

    assert!(toml_str.contains("# api-token = \"\""));
    assert!(toml_str.contains("# device-id = \"\""));
    assert!(toml_str.contains(&format!("endpoint = \"{DEFAULT_ENDPOINT}\"")));
    assert!(toml_str.contains("duration-ms = 300"));
    assert!(toml_str.contains("command-type = \"shock\""));
    assert!(toml_str.contains("[possible values: shock, vibrate]"));
    assert!(!toml_str.contains("config-file"));
}

#[test]
fn it_displays_keys_in_kebab_case() {
    assert_eq!(ConfigKey::ApiToken.to_string(), "api-token");
    assert_eq!(ConfigKey::DeviceId.to_string(), "device-id");
    assert_eq!(ConfigKey::DurationMs.to_string(), "duration-ms");
    assert_eq!(ConfigKey::CommandType.to_string(), "command-type");
}
