mod common;

use anyhow::Result;
use common::RoutesFixture;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_config_file_in_invocation_dir_is_used() -> Result<()> {
    let fixture = RoutesFixture::without_routes_dir()?;
    fs::create_dir(fixture.path().join("tracks"))?;
    fs::write(fixture.path().join("tracks/a.gpx"), common::GPX_BODY)?;
    fs::write(
        fixture.path().join("routegen.toml"),
        "[manifest]\nroutes_dir = \"tracks\"\noutput = \"tracks.json\"\n",
    )?;

    fixture.cmd()?.assert().success();

    let written = fs::read_to_string(fixture.path().join("tracks.json"))?;
    assert!(written.contains("\"file\": \"tracks/a.gpx\""));
    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("b.gpx")?;
    fixture.add_route("a.gpx")?;
    let config = fixture.path().join("conf.toml");
    fs::write(&config, "[manifest]\nsort = true\n")?;

    fixture
        .cmd()?
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let written = fixture.read_manifest()?;
    assert!(written.find("a.gpx").unwrap() < written.find("b.gpx").unwrap());
    Ok(())
}

#[test]
fn test_config_from_env() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("a.gpx")?;
    fs::write(
        fixture.path().join("other.toml"),
        "[manifest]\noutput = \"other.json\"\n",
    )?;

    fixture
        .cmd()?
        .env("ROUTEGEN_CONFIG", "other.toml")
        .assert()
        .success();

    assert!(fixture.path().join("other.json").exists());
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let fixture = RoutesFixture::new()?;

    fixture
        .cmd()?
        .args(["--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
    assert!(!fixture.manifest_path().exists());
    Ok(())
}

#[test]
fn test_invalid_toml_fails() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fs::write(fixture.path().join("routegen.toml"), "[manifest\n")?;

    fixture
        .cmd()?
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
    Ok(())
}

#[test]
fn test_unknown_key_warns_but_succeeds() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fs::write(
        fixture.path().join("routegen.toml"),
        "[manifest]\nsorted = true\n",
    )?;

    fixture
        .cmd()?
        .assert()
        .success()
        .stderr(predicate::str::contains("manifest.sorted"));
    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("a.gpx")?;
    fs::write(
        fixture.path().join("routegen.toml"),
        "[manifest]\noutput = \"from_file.json\"\n",
    )?;

    fixture
        .cmd()?
        .args(["generate", "-o", "from_flag.json"])
        .assert()
        .success();

    assert!(fixture.path().join("from_flag.json").exists());
    assert!(!fixture.path().join("from_file.json").exists());
    Ok(())
}

#[test]
fn test_extension_with_leading_dot_accepted() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_file("a.kml", "")?;
    fixture.add_route("b.gpx")?;

    fixture
        .cmd()?
        .args(["list", "--extension", ".kml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A\troutes/a.kml"))
        .stdout(predicate::str::contains("b.gpx").not());
    Ok(())
}

#[test]
fn test_invalid_extension_rejected() -> Result<()> {
    let fixture = RoutesFixture::new()?;

    fixture
        .cmd()?
        .args(["generate", "--extension", "gpx.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bare suffix"));
    Ok(())
}

#[test]
fn test_ignore_pattern_with_inner_wildcard() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("wip_coast.gpx")?;
    fixture.add_route("coast.gpx")?;

    fixture
        .cmd()?
        .args(["list", "--ignore", "wip*.gpx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coast\troutes/coast.gpx"))
        .stdout(predicate::str::contains("wip_coast").not());
    Ok(())
}

#[test]
fn test_invalid_ignore_pattern_rejected() -> Result<()> {
    let fixture = RoutesFixture::new()?;

    fixture
        .cmd()?
        .args(["generate", "--ignore", "[draft"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ignore pattern"));
    assert!(!fixture.manifest_path().exists());
    Ok(())
}
