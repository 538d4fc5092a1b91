//! Shared testing harness for `stroll-story` integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Six points of a short walk through downtown Ottawa, ten minutes apart
/// except for the last leg.
pub(crate) const OTTAWA_POINTS: [(f64, f64, &str); 6] = [
    (45.43025807431552, -75.70863767151599, "2025-04-11T10:00:00Z"),
    (45.429000675621126, -75.70033355227784, "2025-04-11T10:05:00Z"),
    (45.427502301655224, -75.6970719860959, "2025-04-11T10:10:00Z"),
    (45.42494970371503, -75.69519443975263, "2025-04-11T10:15:00Z"),
    (45.42386537938022, -75.69826288691044, "2025-04-11T10:20:00Z"),
    (45.42600388793949, -75.69912655813056, "2025-04-11T10:30:00Z"),
];

/// Build a GPX document with one track segment holding `points`.
pub(crate) fn gpx_document(points: &[(f64, f64, &str)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <gpx version=\"1.1\" creator=\"tests\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n\
         <trk><name>Test walk</name><trkseg>\n",
    );
    for (lat, lon, time) in points {
        xml.push_str(&format!(
            "<trkpt lat=\"{lat}\" lon=\"{lon}\"><ele>70.0</ele><time>{time}</time></trkpt>\n"
        ));
    }
    xml.push_str("</trkseg></trk>\n</gpx>\n");
    xml
}

/// Testing harness providing an isolated working directory for CLI runs.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default output directory relative to the work directory.
    pub(crate) fn outputs_dir(&self) -> PathBuf {
        self.work_dir.join("outputs")
    }

    /// Build a command for invoking the compiled binary inside the work directory.
    ///
    /// The API key is always removed so no test can reach the real backend.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("stroll-story").expect("Failed to locate stroll-story binary");
        cmd.current_dir(&self.work_dir).env_remove("GEMINI_API_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Write the Ottawa walk to the default input location `inputs/ottawa.gpx`.
    pub(crate) fn write_default_gpx(&self) -> PathBuf {
        self.write_gpx("inputs/ottawa.gpx", &OTTAWA_POINTS)
    }

    /// Write a GPX file relative to the work directory.
    pub(crate) fn write_gpx(&self, relative: &str, points: &[(f64, f64, &str)]) -> PathBuf {
        self.write_file(relative, &gpx_document(points))
    }

    /// Write an arbitrary file relative to the work directory.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Every file in `dir`, sorted by name. Missing directories yield nothing.
    pub(crate) fn files_in(&self, dir: &Path) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .map(|entry| entry.expect("Failed to read directory entry").path())
            .filter(|path| path.is_file())
            .collect();
        files.sort();
        files
    }
}
