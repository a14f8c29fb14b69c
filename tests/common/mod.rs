use assert_cmd::Command;
use std::path::Path;

pub fn devblog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("devblog").unwrap();
    cmd.env_remove("DEVBLOG_ROOT");
    cmd.env_remove("DEVBLOG_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a workspace at `root`
#[allow(dead_code)]
pub fn init_workspace(root: &Path) {
    devblog_cmd().arg("init").arg(root).assert().success();
}
