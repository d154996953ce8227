/// Prefixes every line of `s` with `padding`.
pub fn pad_str(s: &str, padding: &str) -> String {
    s.split('\n')
        .map(|line| format!("{}{}", padding, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits a script into tactic commands (separated by blank lines).
pub fn split_commands(script: &str) -> Vec<&str> {
    script
        .split("\n\n")
        .filter(|command| !command.trim().is_empty())
        .collect()
}
