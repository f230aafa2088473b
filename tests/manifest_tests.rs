mod common;

use anyhow::Result;
use common::RoutesFixture;
use routegen::manifest::{Manifest, RouteEntry, display_name};
use routegen::{RoutegenError, commands};
use rstest::rstest;
use std::fs;

#[rstest]
#[case("morning_ride.gpx", "Morning Ride")]
#[case("trilha.gpx", "Trilha")]
#[case("volta_da_ilha_2024.gpx", "Volta Da Ilha 2024")]
#[case("UPPER_CASE.gpx", "Upper Case")]
#[case("ride2go.gpx", "Ride2Go")]
#[case("pico-do-jabre.gpx", "Pico-Do-Jabre")]
#[case("a__b.gpx", "A  B")]
#[case("loop.v2.gpx", "Loop.V2")]
#[case(".gpx", ".Gpx")]
#[case("ßig.gpx", "Ssig")]
#[case("ǆemal.gpx", "ǅemal")]
#[case("ǅx.gpx", "ǅx")]
#[case("são_joão.gpx", "São João")]
fn test_display_names(#[case] file_name: &str, #[case] expected: &str) {
    assert_eq!(display_name(file_name, "gpx"), expected);
}

#[rstest]
#[case("routes", "routes/a.gpx")]
#[case("routes/", "routes/a.gpx")]
#[case("site/data/routes", "site/data/routes/a.gpx")]
fn test_file_paths(#[case] routes_dir: &str, #[case] expected: &str) {
    let manifest = Manifest::from_file_names(routes_dir.as_ref(), ["a.gpx"], "gpx");
    assert_eq!(manifest.entries()[0].file, expected);
}

#[test]
fn test_generate_matches_directory() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("one.gpx")?;
    fixture.add_route("two.gpx")?;
    fixture.add_file("two.gpx.bak", "")?;
    fixture.add_file("three.GPX", "")?;

    let mut manifest = Manifest::generate(&fixture.config())?;
    manifest.sort_by_file();

    let expected_dir = routegen::utils::to_url_path(&fixture.routes_dir());
    assert_eq!(
        manifest.entries(),
        &[
            RouteEntry {
                name: "One".to_string(),
                file: format!("{expected_dir}/one.gpx"),
            },
            RouteEntry {
                name: "Two".to_string(),
                file: format!("{expected_dir}/two.gpx"),
            },
        ]
    );
    Ok(())
}

#[test]
fn test_every_entry_references_existing_file() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    for name in ["a.gpx", "b_c.gpx", "d.gpx"] {
        fixture.add_route(name)?;
    }

    let manifest = Manifest::generate(&fixture.config())?;
    for entry in &manifest {
        assert!(fixture.routes_dir().join(entry.file_name()).is_file());
    }
    Ok(())
}

#[test]
fn test_generate_errors_are_typed() -> Result<()> {
    let fixture = RoutesFixture::without_routes_dir()?;

    let err = Manifest::generate(&fixture.config()).unwrap_err();
    assert!(matches!(err, RoutegenError::SourceMissing { .. }));

    fs::write(fixture.routes_dir(), "not a dir")?;
    let err = Manifest::generate(&fixture.config()).unwrap_err();
    assert!(matches!(err, RoutegenError::NotADirectory { .. }));
    Ok(())
}

#[test]
fn test_generate_command_overwrites_previous_manifest() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    fixture.add_route("a.gpx")?;
    fixture.add_route("b.gpx")?;
    commands::generate::execute(&fixture.config(), false)?;
    assert_eq!(Manifest::load(&fixture.manifest_path())?.len(), 2);

    fs::remove_file(fixture.routes_dir().join("a.gpx"))?;
    commands::generate::execute(&fixture.config(), false)?;

    let manifest = Manifest::load(&fixture.manifest_path())?;
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.entries()[0].file_name(), "b.gpx");
    Ok(())
}

#[test]
fn test_sorted_generation_is_stable_across_runs() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    for i in 0..25 {
        fixture.add_route(&format!("route_{i:02}.gpx"))?;
    }

    let mut config = fixture.config();
    config.sort = true;

    let first = Manifest::generate(&config)?.to_json(true)?;
    let second = Manifest::generate(&config)?.to_json(true)?;
    assert_eq!(first, second);
    assert!(first.find("route_00").unwrap() < first.find("route_24").unwrap());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_route_is_listed() -> Result<()> {
    let fixture = RoutesFixture::new()?;
    let target = fixture.path().join("elsewhere.gpx");
    fs::write(&target, common::GPX_BODY)?;
    std::os::unix::fs::symlink(&target, fixture.routes_dir().join("linked_route.gpx"))?;

    let manifest = Manifest::generate(&fixture.config())?;
    assert_eq!(manifest.len(), 1);
    assert_eq!(manifest.entries()[0].name, "Linked Route");
    Ok(())
}
