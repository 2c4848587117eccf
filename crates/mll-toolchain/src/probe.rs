use std::process::{Command, Stdio};

use tracing::debug;

/// Reports whether the host toolchain is usable.
///
/// Launches `<clang> --version` and requires a clean exit. A missing
/// executable or a failed wait counts as unavailable rather than an
/// error; the answer only steers backend selection.
pub fn toolchain_available(clang: &str) -> bool {
    let status = Command::new(clang)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match status {
        Ok(status) => status.success(),
        Err(err) => {
            debug!(%err, clang, "toolchain probe did not launch");
            false
        }
    }
}
