use assert_cmd::Command;

pub fn namedropper_cmd() -> Command {
    let mut cmd = Command::cargo_bin("namedropper").unwrap();
    cmd.env_remove("NAMEDROPPER_CONFIG");
    cmd.env_remove("NAMEDROPPER_FORMAT");
    cmd.env_remove("RUST_LOG");
    cmd
}
