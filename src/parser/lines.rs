/// Drop lines equal to the last kept line (renderer repeats lines across
/// page breaks and wrapped headers).
pub fn dedupe_lines(text: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    for line in text.split('\n') {
        if kept.last() != Some(&line) {
            kept.push(line);
        }
    }
    kept.join("\n")
}
