//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the OmniRoute CLI.

use owo_colors::OwoColorize;
use std::io::{self, Write};

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

    /// Print the OmniRoute banner
    pub fn banner(&self) {
        let version = format!("v{}", env!("CARGO_PKG_VERSION"));
        if self.colored {
            println!(
                "\n   {}{}  {}",
                "Omni".bright_white().bold(),
                "Route".bright_blue().bold(),
                version.dimmed()
            );
            println!("   {}\n", "Logistics operations portal".dimmed());
        } else {
            println!("\n   OmniRoute {}\n   Logistics operations portal\n", version);
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

    /// Print a file creation message
    pub fn created(&self, file_type: &str, path: &str) {
        if self.colored {
            println!(
                "  {} {} {}",
                "✓".green().bold(),
                file_type.dimmed(),
                path.bright_white()
            );
        } else {
            println!("  [CREATED] {} {}", file_type, path);
        }
    }

    /// Print a file skipped message
    pub fn skipped(&self, path: &str, reason: &str) {
        if self.colored {
            println!(
                "  {} {} {}",
                "○".yellow(),
                path.dimmed(),
                format!("({})", reason).yellow()
            );
        } else {
            println!("  [SKIPPED] {} ({})", path, reason);
        }
    }

    /// Print a header for a section
    pub fn header(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.bright_white().bold().underline());
        } else {
            println!("\n  === {} ===", title);
        }
    }

    /// Print a subheader
    pub fn subheader(&self, title: &str) {
        if self.colored {
            println!("\n  {}", title.cyan().bold());
        } else {
            println!("\n  --- {} ---", title);
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

    /// Print a list item
    pub fn list_item(&self, item: &str) {
        if self.colored {
            println!("    {} {}", "•".blue(), item);
        } else {
            println!("    - {}", item);
        }
    }

    /// Print a hint/tip message
    pub fn hint(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "›".dimmed(), message.dimmed().italic());
        } else {
            println!("\n  [TIP] {}", message);
        }
    }

    /// Print a command suggestion
    pub fn command(&self, cmd: &str) {
        if self.colored {
            println!("     {}", format!("$ {}", cmd).bright_cyan());
        } else {
            println!("     $ {}", cmd);
        }
    }

    /// Print completion message
    pub fn complete(&self, message: &str) {
        if self.colored {
            println!("\n  {} {}", "✓".green(), message.bright_green().bold());
        } else {
            println!("\n  [DONE] {}", message);
        }
    }

    /// Tab strip with the active tab highlighted
    pub fn tabs(&self, tabs: &[&str], active: &str) {
        let rendered: Vec<String> = tabs
            .iter()
            .map(|tab| match (*tab == active, self.colored) {
                (true, true) => format!("[{}]", tab).bright_blue().bold().to_string(),
                (true, false) => format!("[{}]", tab),
                (false, true) => tab.dimmed().to_string(),
                (false, false) => tab.to_string(),
            })
            .collect();
        println!("    {}", rendered.join("  "));
    }

    /// Print a table header row; `widths` pads each column
    pub fn table_header(&self, columns: &[&str], widths: &[usize]) {
        let header = pad_row(columns, widths);
        let rule_len = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        if self.colored {
            println!("    {}", header.bright_white().bold());
            println!("    {}", "─".repeat(rule_len).dimmed());
        } else {
            println!("    {}", header);
            println!("    {}", "-".repeat(rule_len));
        }
    }

    /// Print a table row
    pub fn table_row(&self, values: &[&str], widths: &[usize]) {
        println!("    {}", pad_row(values, widths));
    }

    /// A line of the conversation transcript
    pub fn message(&self, from_assistant: bool, content: &str) {
        match (from_assistant, self.colored) {
            (true, true) => println!("  {} {}", "assistant ›".bright_blue().bold(), content),
            (true, false) => println!("  assistant > {}", content),
            (false, true) => println!("  {} {}", "you ›".bright_white().bold(), content.dimmed()),
            (false, false) => println!("  you > {}", content),
        }
    }

    /// Transient status line (login in progress, waiting for a reply)
    pub fn pending(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "…".dimmed(), message.dimmed().italic());
        } else {
            println!("  ... {}", message);
        }
    }

    /// Print the input prompt without a newline
    pub fn prompt(&self, label: &str) {
        if self.colored {
            print!("{} ", format!("{}>", label).bright_cyan().bold());
        } else {
            print!("{}> ", label);
        }
        io::stdout().flush().ok();
    }

    /// Print newline
    pub fn newline(&self) {
        println!();
    }
}

fn pad_row(values: &[&str], widths: &[usize]) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:<width$}", v, width = widths.get(i).copied().unwrap_or(15)))
        .collect::<Vec<_>>()
        .join(" ")
}
