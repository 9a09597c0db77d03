//! End-to-end overlay pipeline tests.
//!
//! These exercise the full precedence chain (default < file < environment <
//! flag) through `AppConf::update`, with the config file supplied through a
//! temp directory and the argument vector injected into the flag session.

use std::io::Write;
use std::path::PathBuf;

use serial_test::serial;

use confstack::{AppConf, ConfigError, OptionDef};

const PORT_VAR: &str = "TEST_CONFSTACK_PORT";

fn write_config(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("config.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"server": {{"port": 2000}}}}"#).unwrap();
    path
}

fn port_conf(config: Option<PathBuf>, args: &[&str]) -> AppConf {
    let mut conf = AppConf::new("Gizmo").with_args(args.iter().copied());
    if let Some(path) = config {
        conf = conf.with_conf_file(path);
    }
    conf.new_option(
        "port",
        OptionDef::new()
            .default_int(1000)
            .with_json("server.port")
            .with_env(PORT_VAR)
            .with_flag("port")
            .with_help("listen port"),
    )
    .unwrap();
    conf
}

#[test]
#[serial]
fn test_flag_wins_over_env_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    temp_env::with_var(PORT_VAR, Some("3000"), || {
        let mut conf = port_conf(Some(config.clone()), &["-port", "4000"]);
        conf.update().unwrap();
        assert_eq!(conf.get_int("port").unwrap(), 4000);
    });
}

#[test]
#[serial]
fn test_env_wins_over_file_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    temp_env::with_var(PORT_VAR, Some("3000"), || {
        let mut conf = port_conf(Some(config.clone()), &[]);
        conf.update().unwrap();
        assert_eq!(conf.get_int("port").unwrap(), 3000);
    });
}

#[test]
#[serial]
fn test_file_wins_over_default_without_env() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    temp_env::with_var(PORT_VAR, None::<&str>, || {
        let mut conf = port_conf(Some(config.clone()), &[]);
        conf.update().unwrap();
        assert_eq!(conf.get_int("port").unwrap(), 2000);
    });
}

#[test]
#[serial]
fn test_default_survives_with_no_sources() {
    temp_env::with_var(PORT_VAR, None::<&str>, || {
        let mut conf = port_conf(None, &[]);
        conf.update().unwrap();
        assert_eq!(conf.get_int("port").unwrap(), 1000);
        assert_eq!(conf.get_default_int("port").unwrap(), 1000);
    });
}

#[test]
#[serial]
fn test_second_update_fails_on_flag_guard() {
    temp_env::with_var(PORT_VAR, None::<&str>, || {
        let mut conf = port_conf(None, &["-port", "4000"]);
        conf.update().unwrap();
        let err = conf.update().unwrap_err();
        assert!(matches!(err, ConfigError::FlagsAlreadyParsed));
        assert_eq!(conf.get_int("port").unwrap(), 4000);
    });
}

#[test]
#[serial]
fn test_failed_env_overlay_keeps_file_effects() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    temp_env::with_var(PORT_VAR, Some("not-a-number"), || {
        let mut conf = port_conf(Some(config.clone()), &[]);
        let err = conf.update().unwrap_err();
        assert!(matches!(err, ConfigError::TypeConversion { .. }));
        // The file overlay ran before the failing env overlay.
        assert_eq!(conf.get_int("port").unwrap(), 2000);
    });
}

#[test]
fn test_independent_registries_have_independent_flag_sessions() {
    let mut first = port_conf(None, &["-port", "4000"]);
    let mut second = port_conf(None, &["-port", "5000"]);
    first.update_from_flags().unwrap();
    second.update_from_flags().unwrap();
    assert_eq!(first.get_int("port").unwrap(), 4000);
    assert_eq!(second.get_int("port").unwrap(), 5000);
}

#[test]
fn test_config_files_includes_explicit_existing_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let conf = AppConf::new("Gizmo")
        .with_conf_files([file.path().to_path_buf(), PathBuf::from("missing.json")]);
    let files = conf.config_files().unwrap();
    assert!(files.contains(&file.path().to_path_buf()));
    assert!(!files.contains(&PathBuf::from("missing.json")));
}
