use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, names, stderr, stdout};

#[test]
fn test_custom_layout_from_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".deadkeysrc.json",
        r#"{
            "markerDir": "locales",
            "definitionPath": "en.json",
            "pluralMarker": "_other",
            "extensions": ["vue"],
            "excludedFile": "*.generated.vue"
        }"#,
    )?;
    test.write_file(
        "web/locales/en.json",
        r#"{"title": "", "title_other": "", "subtitle": "", "footer": ""}"#,
    )?;
    test.write_file("web/src/Page.vue", "{{ $t('title') }}")?;
    test.write_file("web/src/keys.generated.vue", "subtitle footer")?;
    test.write_file("web/src/legacy.ts", "subtitle")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Total keys: 3, unused keys: 2\n");
    assert_eq!(test.unused_names()?, names(&["subtitle", "footer"]));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".deadkeysrc.json", r#"{ "excludedFile": "[oops" }"#)?;
    test.write_definitions("app", r#"{"hello": ""}"#)?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("excludedFile"));
    assert!(!test.root().join("all_keys.json").exists());

    Ok(())
}

#[test]
fn test_unparsable_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".deadkeysrc.json", "{ not json")?;

    let output = test.scan_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to parse config file"));

    Ok(())
}
