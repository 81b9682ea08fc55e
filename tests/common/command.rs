use assert_cmd::Command;
use std::path::Path;

pub fn run_packidx_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("packidx").expect("Failed to find packidx binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
