//! Test helpers for writing fleet snapshots and building route arguments.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::route::RouteArgs;

/// Small fleet: two trucks in `centre`, one in `north`.
pub(super) const FLEET_JSON: &str = r#"{
  "trucks": [
    { "id": 1, "zone": "centre", "trash_type": "mixed", "capacity": 1000.0, "location": { "x": 0.0, "y": 0.0 } },
    { "id": 2, "zone": "centre", "trash_type": "glass", "capacity": 1000.0, "location": { "x": 5.0, "y": 5.0 } },
    { "id": 3, "zone": "north", "trash_type": "mixed", "capacity": 1000.0, "location": { "x": 0.0, "y": 20.0 } }
  ],
  "containers": [
    { "id": 10, "zone": "centre", "trash_type": "mixed", "capacity": 1000.0, "fill_percentage": 45.0, "location": { "x": 0.0, "y": 1.0 } },
    { "id": 11, "zone": "centre", "trash_type": "mixed", "capacity": 1000.0, "fill_percentage": 50.0, "location": { "x": 0.0, "y": 2.0 } },
    { "id": 12, "zone": "centre", "trash_type": "mixed", "capacity": 1000.0, "fill_percentage": 20.0, "location": { "x": 0.0, "y": 0.5 } },
    { "id": 13, "zone": "centre", "trash_type": "mixed", "capacity": 1000.0, "fill_percentage": 95.0, "status": "fire", "location": { "x": 0.0, "y": 3.0 } },
    { "id": 14, "zone": "centre", "trash_type": "glass", "capacity": 500.0, "fill_percentage": 80.0, "location": { "x": 5.0, "y": 6.0 } }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary workspace holding a snapshot file.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn with_fleet() -> Self {
        let workspace = Self::new();
        write_utf8(&workspace.snapshot(), FLEET_JSON.as_bytes());
        workspace
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn snapshot(&self) -> Utf8PathBuf {
        self.root.join("fleet.json")
    }
}

/// Arguments selecting truck 1 from `snapshot`.
pub(super) fn truck_args(snapshot: Utf8PathBuf) -> RouteArgs {
    RouteArgs {
        snapshot: Some(snapshot),
        truck: Some(1),
        ..RouteArgs::default()
    }
}
