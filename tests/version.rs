//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_bubblekit"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version '{}', but got: {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}
