//! Shared fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Image stream fixture: 5 records over 4 distinct instants, two of them
/// sharing 15:53:39 and deliberately out of time order.
pub const IMAGE_CSV: &str = "\
time,x,y
2025-01-02 15:53:39,0,5
2025-01-02 15:53:39,1,4
2025-01-02 15:53:34,2,3
2025-01-02 15:53:40,3,2
2025-01-02 15:53:41,4,1
";

/// Radar stream fixture: 5 records, sharing 15:53:39 and 15:53:40 with the
/// image stream. The union holds 7 distinct instants.
pub const RADAR_CSV: &str = "\
time,x,y
2025-01-02 15:53:39,0,5
2025-01-02 15:53:33,-1,5
2025-01-02 15:53:31,-2,5
2025-01-02 15:53:35,-3,5
2025-01-02 15:53:40,-4,5
";

/// Number of distinct instants across both fixtures.
pub const FIXTURE_FRAMES: usize = 7;

/// Write a named CSV fixture into a temp dir, returning its path.
pub fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// Write both stream fixtures, returning (dir, image_path, radar_path).
/// The dir must stay alive for the paths to remain valid.
pub fn fixture_pair() -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let image = write_csv(&dir, "image.csv", IMAGE_CSV);
    let radar = write_csv(&dir, "radar.csv", RADAR_CSV);
    (dir, image, radar)
}
