#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use routegen::config::ManifestConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal GPX document; contents are never inspected
pub const GPX_BODY: &str = r#"<?xml version="1.0"?><gpx version="1.1" creator="test"></gpx>"#;

/// Invocation directory with a `routes/` folder, mirroring a site checkout
pub struct RoutesFixture {
    pub temp_dir: TempDir,
}

impl RoutesFixture {
    /// Create a fixture with an empty `routes/` directory
    pub fn new() -> Result<Self> {
        let fixture = Self::without_routes_dir()?;
        fs::create_dir(fixture.routes_dir())?;
        Ok(fixture)
    }

    /// Create a fixture where `routes/` does not exist
    pub fn without_routes_dir() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn routes_dir(&self) -> PathBuf {
        self.path().join("routes")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path().join("routes.json")
    }

    /// Add a route file to `routes/`
    pub fn add_route(&self, file_name: &str) -> Result<PathBuf> {
        self.add_file(file_name, GPX_BODY)
    }

    /// Add an arbitrary file to `routes/`
    pub fn add_file(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.routes_dir().join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_manifest(&self) -> Result<String> {
        Ok(fs::read_to_string(self.manifest_path())?)
    }

    /// Library configuration pointing at this fixture
    pub fn config(&self) -> ManifestConfig {
        ManifestConfig {
            routes_dir: self.routes_dir(),
            output: self.manifest_path(),
            ..ManifestConfig::default()
        }
    }

    /// The routegen binary, run from the fixture directory with a clean environment
    pub fn cmd(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("routegen")?;
        cmd.current_dir(self.path())
            .env_remove("ROUTEGEN_ROUTES_DIR")
            .env_remove("ROUTEGEN_OUTPUT")
            .env_remove("ROUTEGEN_CONFIG")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        Ok(cmd)
    }
}
