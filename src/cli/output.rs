//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the memograph-server CLI.

use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the Memograph banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
   {}
   {}
"#,
                " __  __ _____ __  __  ___   ____ ____      _    ____  _   _ ".bright_cyan().bold(),
                "|  \\/  | ____|  \\/  |/ _ \\ / ___|  _ \\    / \\  |  _ \\| | | |".bright_cyan().bold(),
                "| |\\/| |  _| | |\\/| | | | | |  _| |_) |  / _ \\ | |_) | |_| |".cyan().bold(),
                "| |  | | |___| |  | | |_| | |_| |  _ <  / ___ \\|  __/|  _  |".blue().bold(),
                "|_|  |_|_____|_|  |_|\\___/ \\____|_| \\_\\/_/   \\_\\_|   |_| |_|".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Company Research Memo Server".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                r#"
 __  __ _____ __  __  ___   ____ ____      _    ____  _   _
|  \/  | ____|  \/  |/ _ \ / ___|  _ \    / \  |  _ \| | | |
| |\/| |  _| | |\/| | | | | |  _| |_) |  / _ \ | |_) | |_| |
| |  | | |___| |  | | |_| | |_| |  _ <  / ___ \|  __/|  _  |
|_|  |_|_____|_|  |_|\___/ \____|_| \_\/_/   \_\_|   |_| |_|

   Company Research Memo Server v{}
"#,
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "⚠".yellow().bold(), message.yellow());
        } else {
            println!("  [WARN] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a key-value pair
    pub fn kv(&self, key: &str, value: &str) {
        if self.colored {
            println!("    {}: {}", key.dimmed(), value.bright_white());
        } else {
            println!("    {}: {}", key, value);
        }
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_new() {
        let output = Output::new();
        assert!(output.colored);
    }

    #[test]
    fn test_output_no_color() {
        let output = Output::no_color();
        assert!(!output.colored);
    }

    #[test]
    fn test_output_default() {
        let output = Output::default();
        assert!(output.colored);
    }

    #[test]
    fn test_output_methods_no_panic() {
        // Smoke test - ensure none of the output methods panic
        let output = Output::no_color();

        output.success("test success");
        output.info("test info");
        output.warning("test warning");
        output.error("test error");
        output.kv("key", "value");
        output.newline();
    }

    #[test]
    fn test_output_methods_colored_no_panic() {
        // Smoke test for colored output
        let output = Output::new();

        output.success("test success");
        output.info("test info");
        output.warning("test warning");
        output.error("test error");
        output.kv("key", "value");
        output.newline();
        output.banner();
    }
}
