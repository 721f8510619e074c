// crates/test-utils/src/stub_tools.rs

//! Stand-in producer/consumer executables written as small `sh` scripts.
//!
//! They accept the same arguments as the real tools (`--input <path> -b` and
//! `--config json://<locator> -b`) and print deterministic output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Write an executable script `name` into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> io::Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}"))?;

    #[cfg(unix)]
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;

    Ok(path)
}

/// Producer that logs its input on stderr and streams the input path to
/// stdout, one line.
pub fn echo_producer(dir: &Path) -> io::Result<PathBuf> {
    write_script(
        dir,
        "stub-producer",
        r#"input=""
while [ $# -gt 0 ]; do
  case "$1" in
    --input) input="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "producer: reading $input" >&2
echo "$input"
"#,
    )
}

/// Consumer that echoes every stdin line and exits 1 with a `FATAL` line on
/// stderr when any line contains `fail_token`.
pub fn qc_consumer(dir: &Path, fail_token: &str) -> io::Result<PathBuf> {
    let body = format!(
        r#"config=""
while [ $# -gt 0 ]; do
  case "$1" in
    --config) config="$2"; shift 2 ;;
    *) shift ;;
  esac
done
echo "qc: config $config"
status=0
while IFS= read -r line; do
  echo "qc: received $line"
  case "$line" in
    *{fail_token}*) status=1 ;;
  esac
done
if [ "$status" -ne 0 ]; then
  echo "FATAL: bad input" >&2
fi
exit $status
"#
    );
    write_script(dir, "stub-consumer", &body)
}

/// Consumer that drains stdin and ends its output without a trailing newline.
pub fn unterminated_consumer(dir: &Path) -> io::Result<PathBuf> {
    write_script(
        dir,
        "stub-consumer-unterminated",
        "cat > /dev/null\nprintf 'qc: partial line'\n",
    )
}

/// Consumer that ignores stdin and exits with `code`.
pub fn exiting_consumer(dir: &Path, code: i32) -> io::Result<PathBuf> {
    write_script(
        dir,
        &format!("stub-consumer-exit-{code}"),
        &format!("echo \"qc: exiting with {code}\"\nexit {code}\n"),
    )
}
