use std::io;
use std::sync::Arc;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::info;
use tracing::warn;

use crate::world::World;

/// Background thread advancing a [`World`] on a fixed interval.
///
/// Whether a given interval actually advances the grid is up to [`World::step`], so pausing
/// and resuming is done on the world and takes effect at the next interval.
pub struct Ticker {
    stop: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(world: Arc<World>, interval: Duration) -> io::Result<Self> {
        let (stop, stopped) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("ticker".to_string())
            .spawn(move || {
                info!(?interval, "ticker started");

                // waiting on the channel doubles as our sleep, and lets us stop right away
                // instead of at the end of the interval
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            world.step();
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }

                info!("ticker stopped");
            })?;

        Ok(Self {
            stop,
            handle: Some(handle),
        })
    }

    /// Stop the thread and wait for it to finish. A tick in progress always completes.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        // the thread may already be gone, in which case there is nobody to tell
        let _ = self.stop.send(());

        if handle.join().is_err() {
            warn!("ticker thread panicked");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
