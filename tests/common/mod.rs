#![allow(dead_code)]

pub mod snapshot_utils;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use urpx::document::{parse_document, ProgramDocument};

static TEMP_DIR_SEQUENCE: AtomicUsize = AtomicUsize::new(0);

/// A fresh, empty directory under the system temp dir, removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(test_name: &str) -> Self {
        let seq = TEMP_DIR_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos())
            .unwrap_or(0);
        let path = std::env::temp_dir().join(format!(
            "urpx-{}-{}-{}-{}",
            test_name,
            std::process::id(),
            now,
            seq
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `contents` to `name` inside the directory and return its path
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, contents).expect("fixture should be written");
        path
    }

    /// Create a subdirectory and return its path
    pub fn subdir(&self, name: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::create_dir_all(&path).expect("subdir should be created");
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Parse a JSON fixture, panicking with the error on failure
pub fn document(json: &str) -> ProgramDocument {
    parse_document(json).unwrap_or_else(|err| panic!("fixture should parse: {}", err))
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| panic!("{}: {}", path.display(), err))
}

/// A realistic archive: two variables and a small program under `ur-functions`
pub const PICK_AND_PLACE: &str = r#"{
  "application": {
    "applicationInfo": {"name": "PickAndPlace", "version": "1.0"},
    "urscript": {"script": "set_tcp(p[0,0,0.1,0,0,0])\nmovej([0,-1.57,0,-1.57,0,0])\n\ntextmsg(\"done\")"}
  },
  "program": {
    "variableDeclarations": [
      {"name": "counter", "type": "int"},
      {"name": "home_pose"}
    ],
    "programContent": {
      "children": [
        {"contributedNode": {"type": "ur-before-start"}, "children": [
          {"programLabel": "Ignored"}
        ]},
        {"contributedNode": {"type": "ur-functions"}, "children": [
          {"programLabel": [{"translationKey": "program-node-label.main"}], "children": [
            {"contributedNode": {"type": "ur-set-payload"}},
            {"programLabel": [
              {"translationKey": "program-node-label.move.linear"},
              {"value": "to"},
              {"value": "home_pose"}
            ], "contributedNode": {"type": "ur-move"}, "children": [
              {"programLabel": "Waypoint_1", "contributedNode": {"type": "ur-waypoint"}},
              {"programLabel": "", "contributedNode": {"type": "ur-waypoint"}}
            ]},
            {"programLabel": [], "contributedNode": {"type": "ur-loop"}, "children": [
              {"programLabel": [{"value": 3}, {"translationKey": "wait.seconds"}]},
              {"programLabel": []}
            ]},
            {"contributedNode": {"type": "ur-safety"}}
          ]},
          {"programLabel": "Helper", "children": [{"programLabel": "Not emitted"}]}
        ]}
      ]
    }
  }
}"#;
