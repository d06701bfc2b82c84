//! Dialogue watcher
//!
//! The runtime loop: capture a frame, locate the textbox, OCR its contents,
//! resolve the line against the catalog and play the matched audio. Runs on
//! its own worker thread; the locator instance lives inside the loop and is
//! never shared.

use super::{
    normalize_text, AudioSink, DialogueCatalog, DialogueEvent, FrameSource, PipelineError,
    TextExtractor,
};
use crate::locator::TextboxLocator;
use crate::profiles::GameProfile;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// State of the dialogue watcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatcherState {
    /// Not running
    Stopped,
    /// Capture source unavailable, retrying
    WaitingForSource,
    /// Capturing and processing frames
    Running,
}

/// Callback for resolved dialogue events
pub type DialogueCallback = Arc<dyn Fn(DialogueEvent) + Send + Sync>;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
const SOURCE_RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// Watches a capture target and plays voice lines for recognized dialogue
pub struct DialogueWatcher {
    running: Arc<AtomicBool>,
    state: Arc<Mutex<WatcherState>>,
    worker: Option<JoinHandle<()>>,
    callback: Option<DialogueCallback>,
    poll_interval: Duration,
}

impl DialogueWatcher {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            state: Arc::new(Mutex::new(WatcherState::Stopped)),
            worker: None,
            callback: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Set the callback fired on every resolved dialogue line
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: Fn(DialogueEvent) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
    }

    /// Set how often frames are polled
    pub fn set_poll_interval(&mut self, interval: Duration) {
        self.poll_interval = interval;
    }

    /// Start watching with the given profile and collaborators
    pub fn start(
        &mut self,
        profile: GameProfile,
        source: Box<dyn FrameSource>,
        ocr: Box<dyn TextExtractor>,
        catalog: Box<dyn DialogueCatalog>,
        sink: Box<dyn AudioSink>,
    ) -> Result<(), PipelineError> {
        if self.running.load(Ordering::SeqCst) {
            return Err(PipelineError::AlreadyRunning);
        }

        self.running.store(true, Ordering::SeqCst);
        *self.state.lock() = WatcherState::WaitingForSource;

        let running = self.running.clone();
        let state = self.state.clone();
        let callback = self.callback.clone();
        let interval = self.poll_interval;

        let spawned = thread::Builder::new()
            .name("dialogue-watcher".to_string())
            .spawn(move || {
                run_watch_loop(running, state, profile, source, ocr, catalog, sink, callback, interval);
            });
        let handle = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                // No worker exists; roll the flags back so start can be retried
                self.running.store(false, Ordering::SeqCst);
                *self.state.lock() = WatcherState::Stopped;
                return Err(PipelineError::Capture(format!("failed to spawn worker: {}", e)));
            }
        };

        self.worker = Some(handle);
        log::info!("dialogue watcher started");
        Ok(())
    }

    /// Stop the watcher and join the worker thread
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
        *self.state.lock() = WatcherState::Stopped;
        log::info!("dialogue watcher stopped");
    }

    /// Current state
    pub fn state(&self) -> WatcherState {
        self.state.lock().clone()
    }

    /// Whether the worker loop is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Default for DialogueWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DialogueWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[allow(clippy::too_many_arguments)]
fn run_watch_loop(
    running: Arc<AtomicBool>,
    state: Arc<Mutex<WatcherState>>,
    profile: GameProfile,
    mut source: Box<dyn FrameSource>,
    mut ocr: Box<dyn TextExtractor>,
    catalog: Box<dyn DialogueCatalog>,
    mut sink: Box<dyn AudioSink>,
    callback: Option<DialogueCallback>,
    interval: Duration,
) {
    log::info!("watching '{}' for dialogue", profile.name);

    let mut locator = TextboxLocator::new(profile.detection.clone());
    // The line currently on screen; suppresses replays while it stays up
    let mut current_line: Option<String> = None;

    while running.load(Ordering::SeqCst) {
        let frame_start = Instant::now();

        let frame = match source.capture() {
            Ok(f) => f,
            Err(e) => {
                log::debug!("capture unavailable: {}", e);
                *state.lock() = WatcherState::WaitingForSource;
                thread::sleep(SOURCE_RETRY_INTERVAL);
                continue;
            }
        };
        *state.lock() = WatcherState::Running;

        match locator.detect(&frame) {
            Some(region) => {
                if let Some(crop) = frame.crop(region) {
                    match ocr.extract_text(&crop) {
                        Ok(raw) => {
                            let text = normalize_text(&raw);
                            if !text.is_empty() && current_line.as_deref() != Some(&text) {
                                if let Some(line) = catalog.lookup(&text) {
                                    log::info!("dialogue line matched: {} ({})", text, line.speaker);
                                    if let Err(e) = sink.play(&line.audio_path) {
                                        log::warn!("playback failed: {}", e);
                                    }
                                    if let Some(ref cb) = callback {
                                        cb(DialogueEvent {
                                            text: text.clone(),
                                            speaker: line.speaker,
                                            audio_path: line.audio_path,
                                            region,
                                        });
                                    }
                                } else {
                                    log::debug!("no catalog entry for '{}'", text);
                                }
                                current_line = Some(text);
                            }
                        }
                        Err(e) => log::warn!("ocr failed: {}", e),
                    }
                }
            }
            None => {
                // Once the locator gives up on the cached position the box is
                // really gone; the next line may legitimately repeat
                if !locator.is_cached() {
                    current_line = None;
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
