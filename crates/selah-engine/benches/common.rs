// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_message_content(size: usize) -> String {
    let base = "## Morning\n\nBe **still**, and *know* that I am `God`.\nRead [Psalm 46](https://example.com/ps46) today.\n\n- Give thanks\n- Pray for _family_\n\n1. Read\n2. Reflect\n\n> Cast all your anxiety on him\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(words: usize) -> String {
    let mut content = String::new();
    for i in 0..words {
        let word = match i % 5 {
            0 => format!("**w{i}**"),
            1 => format!("*w{i}*"),
            2 => format!("`w{i}`"),
            3 => format!("[w{i}](https://example.com/{i})"),
            _ => format!("w{i}"),
        };
        content.push_str(&word);
        content.push(' ');
    }
    content
}

#[allow(dead_code)]
pub fn generate_unclosed_markers(count: usize) -> String {
    "*a _b [c `d ".repeat(count)
}
