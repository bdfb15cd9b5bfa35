use std::io::{self, BufRead, Write};
use r_sha256::Digest;

pub fn read_input(prompt: &str) -> io::Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(strip_line_ending(input))
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

pub fn render(d: &Digest) -> String {
    hex::encode(d)
}

pub fn print_interactive(message: &str, d: &Digest) {
    let hashed = render(d);
    println!("The original message was {} with length {}", message, message.chars().count());
    println!("After hashing, it became {} with length {}", hashed, hashed.len());
}

pub fn print_digest(d: &Digest, label: &str) {
    println!("{}  {}", render(d), label);
}

pub fn print_success(message: &str) {
    println!("✓ {}", message);
}

pub fn print_error(message: &str) {
    eprintln!("✗ {}", message);
}
