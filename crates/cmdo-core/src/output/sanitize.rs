//! Command to filename conversion.

/// Turn a command into a filename.
///
/// Slashes, backslashes and spaces become `-`, double quotes are dropped.
/// Everything else is kept as is, so characters such as `|` still reach the
/// filesystem.
pub fn sanitize_cmd(cmd: &str) -> String {
    let mut name = String::with_capacity(cmd.len());
    for c in cmd.chars() {
        match c {
            '/' | '\\' | ' ' => name.push('-'),
            '"' => {}
            other => name.push(other),
        }
    }
    name
}
