#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway gamedex home: config file plus storage file in a temp dir.
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    /// Create a home whose config points the catalog at `api_url`.
    pub fn new(api_url: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp home");
        let storage = dir.path().join("storage.json");
        let config = format!(
            "[api]\nbase_url = \"{api_url}\"\ntimeout_secs = 5\n\n[storage]\npath = \"{}\"\n\n[assets]\n\"game-1\" = \"https://img.example/ocarina.png\"\n",
            storage.display()
        );
        std::fs::write(dir.path().join("config.toml"), config).expect("write config");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn storage_path(&self) -> PathBuf {
        self.dir.path().join("storage.json")
    }

    /// `gamedex -c <config>` running inside the temp home.
    pub fn gamedex(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gamedex");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("RUST_LOG")
            .arg("-c")
            .arg(self.config_path());
        cmd
    }

    pub fn login(&self) {
        self.gamedex()
            .args(["login", "-u", "admin", "-p", "password"])
            .assert()
            .success();
    }
}

/// JSON body for one catalog item.
pub fn game_json(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "developer": "Nintendo EAD",
        "publisher": "Nintendo",
        "released_date": " November 21, 1998",
    })
}

/// `GET /games` response body.
pub fn list_body(games: &[serde_json::Value]) -> String {
    serde_json::json!({
        "success": true,
        "count": games.len(),
        "data": games,
    })
    .to_string()
}

/// `GET /games/{id}` response body.
pub fn single_body(game: serde_json::Value) -> String {
    serde_json::json!({
        "success": true,
        "count": 1,
        "data": game,
    })
    .to_string()
}
