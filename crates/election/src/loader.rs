//! Year selection and asynchronous dataset loading.
//!
//! Selecting a year spawns a load on the async task pool and moves the app
//! to [`LoadPhase::Loading`]; the poll system applies the result when it
//! completes. A selection made while a load is in flight supersedes it:
//! the old task is dropped (which cancels it) and a monotonic generation
//! counter guards against a stale result slipping through, so the most
//! recently requested year always wins. A failed load keeps the previous
//! render intact and surfaces the error through [`LoadStatus`].

use std::path::PathBuf;

use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task};

use crate::dataset::{ElectionDataset, LoadedElection, YearEntry};
use crate::error::DataError;
use crate::ingest;

/// Top-level phase of the dashboard.
///
/// `Idle` until the first year is picked, `Loading` while a year's file is
/// being read, `Rendered` once a dataset is on screen.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Rendered,
}

/// A year circle was clicked.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSelected(pub u16);

/// Where the election data files live.
#[derive(Resource, Debug, Clone)]
pub struct DataPaths {
    pub dir: PathBuf,
}

impl DataPaths {
    /// Resolve the data directory from `ELECTION_DATA_DIR`, defaulting to
    /// `data/` next to the working directory.
    pub fn from_env() -> Self {
        let dir = std::env::var("ELECTION_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));
        Self { dir }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// All available election years, loaded once at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct YearIndex(pub Vec<YearEntry>);

/// Selection and error state shown by the year selector.
#[derive(Resource, Debug, Clone, Default)]
pub struct LoadStatus {
    /// The most recently requested year.
    pub selected: Option<u16>,
    /// Error from the most recent failed load, cleared on the next request.
    pub error: Option<String>,
}

/// Monotonic counter of load requests; the newest request owns the render.
#[derive(Resource, Debug, Default)]
pub struct LoadGeneration(pub u64);

pub(crate) struct InFlightLoad {
    year: u16,
    generation: u64,
    task: Task<Result<ElectionDataset, DataError>>,
}

/// The load currently in flight, if any. Replacing the value drops the old
/// task, cancelling it.
#[derive(Resource, Default)]
pub struct ActiveLoad(pub(crate) Option<InFlightLoad>);

/// What to do with a completed load.
#[derive(Debug)]
pub(crate) enum LoadOutcome {
    Apply(ElectionDataset),
    Stale { year: u16 },
    Failed { year: u16, message: String },
}

/// Decide the fate of a completed load: results carrying a generation older
/// than the latest request are stale and must not be rendered, regardless
/// of success.
pub(crate) fn classify_result(
    year: u16,
    generation: u64,
    latest: u64,
    result: Result<ElectionDataset, DataError>,
) -> LoadOutcome {
    if generation != latest {
        return LoadOutcome::Stale { year };
    }
    match result {
        Ok(dataset) => LoadOutcome::Apply(dataset),
        Err(e) => LoadOutcome::Failed {
            year,
            message: e.to_string(),
        },
    }
}

/// Apply an outcome to the rendered dataset and status line. Returns the
/// phase to transition to, or `None` to stay put. Failures never touch the
/// previously rendered dataset.
pub(crate) fn apply_outcome(
    outcome: LoadOutcome,
    loaded: &mut LoadedElection,
    status: &mut LoadStatus,
) -> Option<LoadPhase> {
    match outcome {
        LoadOutcome::Apply(dataset) => {
            info!("rendering election year {}", dataset.year);
            status.error = None;
            loaded.0 = Some(dataset);
            Some(LoadPhase::Rendered)
        }
        LoadOutcome::Stale { year } => {
            info!("discarding stale load for {year}");
            None
        }
        LoadOutcome::Failed { year, message } => {
            warn!("failed to load election year {year}: {message}");
            status.error = Some(format!("{year}: {message}"));
            Some(if loaded.0.is_some() {
                LoadPhase::Rendered
            } else {
                LoadPhase::Idle
            })
        }
    }
}

/// Startup: read the year index so the selector has circles to draw.
pub fn load_year_index(
    paths: Res<DataPaths>,
    mut index: ResMut<YearIndex>,
    mut status: ResMut<LoadStatus>,
) {
    match ingest::load_year_index(&paths.dir) {
        Ok(years) => {
            info!(
                "loaded year index from {:?}: {} elections",
                paths.dir,
                years.len()
            );
            index.0 = years;
        }
        Err(e) => {
            warn!("could not load year index from {:?}: {e}", paths.dir);
            status.error = Some(e.to_string());
        }
    }
}

/// Start a load for the most recently clicked year, superseding any load
/// already in flight.
pub fn begin_year_load(
    mut events: EventReader<YearSelected>,
    paths: Res<DataPaths>,
    mut active: ResMut<ActiveLoad>,
    mut generation: ResMut<LoadGeneration>,
    mut status: ResMut<LoadStatus>,
    mut next: ResMut<NextState<LoadPhase>>,
) {
    // Several clicks in one frame collapse to the newest.
    let Some(&YearSelected(year)) = events.read().last() else {
        return;
    };

    generation.0 += 1;
    status.selected = Some(year);
    status.error = None;

    let dir = paths.dir.clone();
    let task = AsyncComputeTaskPool::get().spawn(async move { ingest::load_year(&dir, year) });
    active.0 = Some(InFlightLoad {
        year,
        generation: generation.0,
        task,
    });

    info!("loading election year {year}");
    next.set(LoadPhase::Loading);
}

/// Poll the in-flight load and apply its result when ready.
pub fn poll_year_load(
    mut active: ResMut<ActiveLoad>,
    generation: Res<LoadGeneration>,
    mut loaded: ResMut<LoadedElection>,
    mut status: ResMut<LoadStatus>,
    mut next: ResMut<NextState<LoadPhase>>,
) {
    let Some(load) = active.0.as_mut() else {
        return;
    };
    let Some(result) = block_on(futures_lite::future::poll_once(&mut load.task)) else {
        return;
    };

    let outcome = classify_result(load.year, load.generation, generation.0, result);
    active.0 = None;
    if let Some(phase) = apply_outcome(outcome, &mut loaded, &mut status) {
        next.set(phase);
    }
}
