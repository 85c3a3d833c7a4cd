use std::sync::Mutex;

/// Prints check output to stdout and keeps a copy of every line.
#[derive(Debug, Default)]
pub struct Console {
    lines: Mutex<Vec<String>>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&self, line: impl Into<String>) {
        let line = line.into();
        println!("{}", line);
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}
