//! File watching for scan cache invalidation.

use std::path::{Path, PathBuf};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchEvent {
    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// File contents or name changed
    Modified(PathBuf),
}

impl WatchEvent {
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::Created(p) | WatchEvent::Deleted(p) | WatchEvent::Modified(p) => p,
        }
    }
}

/// Watches the site directory (not its subdirectories).
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for `dir`.
    ///
    /// Returns the watcher and a channel to receive events. Events are
    /// dropped while the channel is full; the ones already queued cover them.
    pub fn new(dir: &Path) -> Result<(Self, mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (tx, rx) = mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            let Ok(event) = res else {
                return;
            };
            for path in &event.paths {
                if let Some(e) = classify_event(path, &event.kind) {
                    let _ = tx.try_send(e);
                }
            }
        })
        .map_err(std::io::Error::other)?;

        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(std::io::Error::other)?;

        Ok((Self { _watcher: watcher }, rx))
    }
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) => Some(WatchEvent::Created(path.to_path_buf())),
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        EventKind::Modify(_) => Some(WatchEvent::Modified(path.to_path_buf())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn ignores_access_events() {
        let path = Path::new("trevarn-name.html");

        assert_eq!(
            classify_event(path, &notify::EventKind::Access(notify::event::AccessKind::Any)),
            None
        );
        assert_eq!(
            classify_event(path, &notify::EventKind::Create(notify::event::CreateKind::File)),
            Some(WatchEvent::Created(path.to_path_buf()))
        );
    }

    #[tokio::test]
    async fn reports_created_document() {
        let temp = tempdir().unwrap();
        let (_watcher, mut rx) = FileWatcher::new(temp.path()).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let document = temp.path().join("trevarn-name.html");
        fs::write(&document, "<title>Trevarn — Name</title>").unwrap();

        let event = tokio::time::timeout(Duration::from_secs(3), rx.recv())
            .await
            .expect("no watch event within 3s");

        assert_eq!(event, Some(WatchEvent::Created(document)));
    }
}
