use fragcat::config::{Options, OptionsBuilder, UserOptions};
use fragcat::constants::{DEFAULT_FILES_DIRECTORY, DEFAULT_TARGET_FILE};
use fragcat::{BuildMode, ConcatPlugin, Error, Hook};
use std::path::{Path, PathBuf};

#[test]
fn test_json_options_override_key_by_key() -> anyhow::Result<()> {
    let options = Options::from_json_str(
        r#"{ "filesDirectory": "./fragments/", "unknown": [1, 2, 3] }"#,
    )?;

    assert_eq!(options.files_directory(), Path::new("./fragments/"));
    assert_eq!(options.target_file(), Path::new(DEFAULT_TARGET_FILE));
    Ok(())
}

#[test]
fn test_json_options_malformed() {
    let result = Options::from_json_str("not json");
    assert!(matches!(result, Err(Error::Options(_))));
}

#[test]
fn test_builder_and_json_agree() -> anyhow::Result<()> {
    let from_builder = OptionsBuilder::new().target_file("out.js").build();
    let from_json = Options::from_json_str(r#"{"targetFile": "out.js"}"#)?;
    let from_user = Options::merged(UserOptions {
        files_directory: None,
        target_file: Some(PathBuf::from("out.js")),
    });

    assert_eq!(from_builder, from_json);
    assert_eq!(from_json, from_user);
    assert_eq!(from_user.files_directory(), Path::new(DEFAULT_FILES_DIRECTORY));
    Ok(())
}

#[test]
fn test_build_mode_selects_hooks() {
    let production = ConcatPlugin::new(
        Options::default(),
        BuildMode::from_env_value(Some("production")),
    );
    let development = ConcatPlugin::new(
        Options::default(),
        BuildMode::from_env_value(Some("development")),
    );

    assert_eq!(production.mode(), BuildMode::Production);
    assert_eq!(production.hooks(), &[Hook::Run]);
    assert_eq!(development.mode(), BuildMode::Watch);
    assert_eq!(development.hooks(), &[Hook::WatchRun, Hook::AfterCompile]);
}
