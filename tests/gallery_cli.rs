use assert_cmd::Command;
use predicates::prelude::*;

fn shutterpad(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("shutterpad").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

#[test]
fn list_on_fresh_gallery_is_empty() {
    let temp = tempfile::tempdir().unwrap();

    shutterpad(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No photos yet"));
}

#[test]
fn bare_invocation_defaults_to_list() {
    let temp = tempfile::tempdir().unwrap();

    shutterpad(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("No photos yet"));
}

#[test]
fn delete_out_of_range_index_fails() {
    let temp = tempfile::tempdir().unwrap();

    shutterpad(temp.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("no photo at index 1"));
}

#[test]
fn snap_without_capture_command_fails() {
    let temp = tempfile::tempdir().unwrap();

    shutterpad(temp.path())
        .arg("snap")
        .assert()
        .failure()
        .stderr(predicates::str::contains("no capture command configured"));
}

#[test]
fn config_roundtrip() {
    let temp = tempfile::tempdir().unwrap();

    shutterpad(temp.path())
        .args(["config", "quality", "85"])
        .assert()
        .success();

    shutterpad(temp.path())
        .args(["config", "quality"])
        .assert()
        .success()
        .stdout(predicates::str::contains("quality = 85"));
}

#[cfg(unix)]
mod with_stub_camera {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// A capture program that writes a fixed payload to the output path it
    /// is handed, standing in for a real camera.
    fn write_stub_capture(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("fake-capture.sh");
        fs::write(&script, "#!/bin/sh\nprintf 'stub-jpeg-bytes' > \"$1\"\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[test]
    fn snap_list_delete_roundtrip() {
        let temp = tempfile::tempdir().unwrap();
        let script = write_stub_capture(temp.path());

        shutterpad(temp.path())
            .args(["config", "capture-command"])
            .arg(&script)
            .assert()
            .success();

        shutterpad(temp.path())
            .arg("snap")
            .assert()
            .success()
            .stdout(predicates::str::contains("Captured:"));

        shutterpad(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicates::str::contains(".jpeg"));

        shutterpad(temp.path())
            .args(["delete", "1", "--yes"])
            .assert()
            .success()
            .stdout(predicates::str::contains("Deleted:"));

        shutterpad(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicates::str::contains("No photos yet"));
    }

    #[test]
    fn delete_prompt_cancels_without_confirmation() {
        let temp = tempfile::tempdir().unwrap();
        let script = write_stub_capture(temp.path());

        shutterpad(temp.path())
            .args(["config", "capture-command"])
            .arg(&script)
            .assert()
            .success();

        shutterpad(temp.path()).arg("snap").assert().success();

        shutterpad(temp.path())
            .args(["delete", "1"])
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicates::str::contains("Operation cancelled."));

        shutterpad(temp.path())
            .arg("list")
            .assert()
            .success()
            .stdout(predicates::str::contains(".jpeg"));
    }
}
