//! Small terminal input/output helpers shared by the screens.

use std::io::{self, Write};

/// Prints a label, then reads one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

/// Shows a titled message and waits for the user to acknowledge it.
pub fn alert(title: &str, body: &str) -> io::Result<()> {
    println!();
    println!("[{title}] {body}");
    prompt("Press Enter to continue...")?;
    Ok(())
}

/// Prints a section heading.
pub fn heading(text: &str) {
    println!();
    println!("=== {text} ===");
}
