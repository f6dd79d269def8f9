//! # Path Publisher
//!
//! Runs path searches off the game tick and hands finished paths to the
//! renderer.
//!
//! Two pieces cooperate here:
//!
//! - [`PublishedPath`] is the shared slot. It holds the latest complete path
//!   and the in-flight flag behind a single lock. Nobody outside this module
//!   touches the lock.
//! - [`PathPublisher`] is the single-slot supervisor. It launches at most one
//!   worker thread at a time and ignores requests while that worker runs.
//!
//! A worker publishes its result and clears the in-flight flag in the same
//! critical section, so a new request can never overlap a finishing one.
//! There is no cancellation: a launched search always runs to completion,
//! even if its result is stale by the time it lands.

use crate::game::Position;
use crate::navigation::{find_path, LatticeGrid, ObstacleSnapshot};
use crate::CoinRushResult;
use log::{debug, error, trace};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Name given to search worker threads.
const WORKER_THREAD_NAME: &str = "path-search";

/// A path search strategy run on the worker thread.
///
/// Implemented for [`BfsSearch`] and for any matching closure.
pub trait PathSearch: Send + Sync + 'static {
    /// Computes a path from `start` toward `goal`. An empty path means the goal
    /// is unreachable.
    fn search(&self, start: Position, goal: Position, snapshot: &ObstacleSnapshot)
        -> Vec<Position>;
}

impl<F> PathSearch for F
where
    F: Fn(Position, Position, &ObstacleSnapshot) -> Vec<Position> + Send + Sync + 'static,
{
    fn search(
        &self,
        start: Position,
        goal: Position,
        snapshot: &ObstacleSnapshot,
    ) -> Vec<Position> {
        self(start, goal, snapshot)
    }
}

/// Breadth-first search over a [`LatticeGrid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BfsSearch {
    grid: LatticeGrid,
}

impl BfsSearch {
    pub fn new(grid: LatticeGrid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &LatticeGrid {
        &self.grid
    }
}

impl PathSearch for BfsSearch {
    fn search(
        &self,
        start: Position,
        goal: Position,
        snapshot: &ObstacleSnapshot,
    ) -> Vec<Position> {
        find_path(&self.grid, start, goal, snapshot)
    }
}

#[derive(Debug)]
struct PathSlot {
    path: Arc<[Position]>,
    in_flight: bool,
    completed: u64,
}

/// The shared slot holding the most recently completed path.
///
/// Cloning gives another handle to the same slot. Paths are replaced whole,
/// so a reader sees either the previous path or the new one, never a mix.
#[derive(Debug, Clone)]
pub struct PublishedPath {
    slot: Arc<Mutex<PathSlot>>,
}

impl Default for PublishedPath {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishedPath {
    /// Creates an empty slot with nothing in flight.
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(PathSlot {
                path: Arc::from(Vec::<Position>::new()),
                in_flight: false,
                completed: 0,
            })),
        }
    }

    /// Replaces the published path and marks the in-flight search as done.
    pub fn publish(&self, path: Vec<Position>) {
        let path: Arc<[Position]> = path.into();
        let mut slot = self.slot.lock();
        slot.path = path;
        slot.in_flight = false;
        slot.completed += 1;
    }

    /// Returns the latest complete path, start to goal.
    ///
    /// The lock is held only long enough to clone the reference.
    pub fn read(&self) -> Arc<[Position]> {
        Arc::clone(&self.slot.lock().path)
    }

    /// Whether a search has been claimed and not yet published.
    pub fn is_in_flight(&self) -> bool {
        self.slot.lock().in_flight
    }

    /// Number of paths published so far.
    pub fn completed(&self) -> u64 {
        self.slot.lock().completed
    }

    /// Marks a search as in flight. Returns false if one already is.
    fn try_claim(&self) -> bool {
        let mut slot = self.slot.lock();
        if slot.in_flight {
            return false;
        }
        slot.in_flight = true;
        true
    }

    /// Clears the in-flight flag without publishing.
    fn release(&self) {
        self.slot.lock().in_flight = false;
    }
}

/// Launches path searches on a worker thread, one at a time.
///
/// # Examples
///
/// ```
/// use coinrush::{LatticeGrid, ObstacleSnapshot, PathPublisher, Position};
///
/// let mut publisher = PathPublisher::for_grid(LatticeGrid::arena());
/// let launched = publisher
///     .request_path_if_idle(Position::new(400, 300), Position::new(450, 300), ObstacleSnapshot::empty())
///     .unwrap();
/// assert!(launched);
///
/// publisher.wait_idle();
/// let path = publisher.read_current_path();
/// assert_eq!(path.last(), Some(&Position::new(450, 300)));
/// ```
pub struct PathPublisher<S: PathSearch = BfsSearch> {
    search: Arc<S>,
    published: PublishedPath,
    worker: Option<JoinHandle<()>>,
}

impl PathPublisher<BfsSearch> {
    /// Creates a publisher running breadth-first search over `grid`.
    pub fn for_grid(grid: LatticeGrid) -> Self {
        Self::new(BfsSearch::new(grid))
    }
}

impl<S: PathSearch> PathPublisher<S> {
    /// Creates a publisher around a search strategy.
    pub fn new(search: S) -> Self {
        Self {
            search: Arc::new(search),
            published: PublishedPath::new(),
            worker: None,
        }
    }

    /// Starts a search from `start` to `goal` unless one is already running.
    ///
    /// Returns `Ok(true)` if a worker was launched and `Ok(false)` if the
    /// request was dropped because a search is in flight. Fails only if the
    /// worker thread cannot be spawned.
    pub fn request_path_if_idle(
        &mut self,
        start: Position,
        goal: Position,
        snapshot: ObstacleSnapshot,
    ) -> CoinRushResult<bool> {
        self.reap_crashed_worker();

        if !self.published.try_claim() {
            trace!("path search already in flight, skipping request");
            return Ok(false);
        }

        // The previous worker has published; it is exiting or gone. Its flag
        // is already clear, so a late panic must not release the new claim.
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("path search worker panicked after publishing its result");
            }
        }

        let search = Arc::clone(&self.search);
        let published = self.published.clone();
        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let started = Instant::now();
                let path = search.search(start, goal, &snapshot);
                debug!(
                    "path search ({}, {}) -> ({}, {}) finished in {:?}, {} cells",
                    start.x,
                    start.y,
                    goal.x,
                    goal.y,
                    started.elapsed(),
                    path.len()
                );
                published.publish(path);
            });

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(true)
            }
            Err(e) => {
                self.published.release();
                Err(e.into())
            }
        }
    }

    /// Returns the latest complete path for rendering.
    pub fn read_current_path(&self) -> Arc<[Position]> {
        self.published.read()
    }

    /// Whether a search is currently running.
    pub fn is_in_flight(&self) -> bool {
        self.published.is_in_flight()
    }

    /// Number of searches that have published a result.
    pub fn completed_searches(&self) -> u64 {
        self.published.completed()
    }

    /// Another handle to the slot this publisher writes into.
    pub fn published(&self) -> PublishedPath {
        self.published.clone()
    }

    /// Blocks until the in-flight search, if any, has finished.
    pub fn wait_idle(&mut self) {
        if let Some(handle) = self.worker.take() {
            self.join_worker(handle);
        }
    }

    /// Clears the in-flight flag left behind by a worker that died early.
    fn reap_crashed_worker(&mut self) {
        if self.worker.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = self.worker.take() {
                self.join_worker(handle);
            }
        }
    }

    fn join_worker(&self, handle: JoinHandle<()>) {
        if handle.join().is_err() {
            error!("path search worker panicked before publishing a result");
            self.published.release();
        }
    }
}

impl<S: PathSearch> Drop for PathPublisher<S> {
    fn drop(&mut self) {
        self.wait_idle();
    }
}
