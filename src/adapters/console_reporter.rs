use crate::ports::Reporter;

/// Console-backed reporter: progress to stdout, errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn success(&self, message: &str) {
        println!("✅ {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }
}
