//! Incremental asset loading.
//!
//! The loading screen drains an [`AssetQueue`] one job per frame, so the
//! window keeps redrawing and the progress bar moves while assets load.

use bevy_ecs::prelude::Resource;
use std::collections::VecDeque;
use std::path::PathBuf;

/// One asset to load.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetJob {
    /// Level file; becomes the tile grid and the pickup spawn list.
    Level { path: PathBuf },
    Texture { key: String, path: PathBuf },
    Music { id: String, path: PathBuf },
    Fx { id: String, path: PathBuf },
}

/// Pending asset jobs and how many have been completed.
#[derive(Resource, Debug, Default)]
pub struct AssetQueue {
    pending: VecDeque<AssetJob>,
    done: usize,
}

impl AssetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: AssetJob) {
        self.pending.push_back(job);
    }

    /// Take the next job. It counts as done once taken.
    pub fn next_job(&mut self) -> Option<AssetJob> {
        let job = self.pending.pop_front()?;
        self.done += 1;
        Some(job)
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Fraction of jobs completed, in `[0, 1]`. An empty queue is complete.
    pub fn progress(&self) -> f32 {
        let total = self.done + self.pending.len();
        if total == 0 {
            1.0
        } else {
            self.done as f32 / total as f32
        }
    }
}
