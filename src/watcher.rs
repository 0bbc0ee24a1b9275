//! File system watcher for watch mode

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

const DEBOUNCE_MS: u64 = 300;

/// Watches a file or directory for content file changes
pub struct ContentWatcher {
    _watcher: RecommendedWatcher,
    receiver: Receiver<notify::Result<notify::Event>>,
    /// File name suffixes that count as content
    patterns: Vec<String>,
}

fn is_create_or_modify(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

impl ContentWatcher {
    /// Start watching the given path (file or directory) for files ending in one of `patterns`
    pub fn watch(path: &Path, patterns: Vec<String>) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default().with_poll_interval(Duration::from_millis(DEBOUNCE_MS)),
        )?;

        if path.is_dir() {
            watcher.watch(path, RecursiveMode::Recursive)?;
        } else if let Some(parent) = path.parent() {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            watcher.watch(parent, RecursiveMode::NonRecursive)?;
        }

        Ok(Self {
            _watcher: watcher,
            receiver: rx,
            patterns,
        })
    }

    /// Check if the path is a content file we care about
    pub fn is_content_file(&self, p: &Path) -> bool {
        matches_patterns(p, &self.patterns)
    }

    /// Collect content paths from an event
    fn paths_from_event(&self, event: &notify::Event) -> Vec<PathBuf> {
        if !is_create_or_modify(&event.kind) {
            return vec![];
        }
        event
            .paths
            .iter()
            .filter(|p| self.is_content_file(p))
            .cloned()
            .collect()
    }

    /// Wait for the next batch of changes (debounced). Blocks until at least one change, then drains for DEBOUNCE_MS.
    pub fn next_changes(&self) -> Vec<PathBuf> {
        let mut all = std::collections::BTreeSet::new();

        match self.receiver.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) => all.extend(self.paths_from_event(&event)),
            Ok(Err(_)) | Err(_) => return vec![],
        }

        std::thread::sleep(Duration::from_millis(DEBOUNCE_MS));
        while let Ok(ev) = self.receiver.try_recv() {
            if let Ok(event) = ev {
                all.extend(self.paths_from_event(&event));
            }
        }

        all.into_iter().collect()
    }
}

fn matches_patterns(p: &Path, patterns: &[String]) -> bool {
    let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if p.components().any(|c| c.as_os_str() == "node_modules") {
        return false;
    }
    patterns.iter().any(|suffix| name.ends_with(suffix.as_str()))
}
