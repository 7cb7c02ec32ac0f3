use crate::common::file::{FileSpec, write_generated_files, write_list};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::{Path, PathBuf};

pub const LIST_FILE: &str = "critical_files.txt";

/// A project root with a few watched files listed in the default list
pub struct Project {
    pub dir: TempDir,
    pub files: Vec<FileSpec>,
}

impl Project {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn list_path(&self) -> PathBuf {
        self.root().join(LIST_FILE)
    }

    pub fn baseline_path(&self) -> PathBuf {
        self.root().join("db").join("baseline.sha256")
    }

    pub fn last_scan_path(&self) -> PathBuf {
        self.root().join("db").join("last_scan.sha256")
    }
}

#[fixture]
pub fn project_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn project(project_dir: TempDir) -> Project {
    let watched_dir = project_dir.path().join("watched");
    let files = write_generated_files(&watched_dir, 3);
    write_list(&project_dir.path().join(LIST_FILE), &files);

    Project {
        dir: project_dir,
        files,
    }
}

#[fixture]
pub fn initialized_project(project: Project) -> Project {
    run_fic_command(project.root(), &["init"])
        .assert()
        .success();

    project
}

pub fn run_fic_command(root: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fic").expect("Failed to find fic binary");
    cmd.env("FIC_ROOT", root);
    cmd.env("HOME", root);
    cmd.env_remove("FIC_ALGORITHM");
    cmd.current_dir(root);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
