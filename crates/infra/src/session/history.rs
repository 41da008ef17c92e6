use gobarber_core::Navigator;
use gobarber_domain::constants::ROOT_PATH;
use parking_lot::Mutex;
use tracing::debug;

/// Navigation history kept in memory; the last entry is the current path.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: Mutex<Vec<String>>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { entries: Mutex::new(vec![initial.into()]) }
    }

    pub fn location(&self) -> String {
        self.entries.lock().last().cloned().unwrap_or_else(|| ROOT_PATH.to_string())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

impl Navigator for MemoryHistory {
    fn navigate(&self, path: &str) {
        debug!(path, "navigating");
        self.entries.lock().push(path.to_string());
    }
}
