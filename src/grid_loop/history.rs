use tracing::trace;

use super::{Edge, EdgeId, GridLoop, GridLoopItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flag {
    Inconsistent,
    FullySolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum HistoryEntry {
    /// `prior` is the content of the edge record before it was overwritten.
    Edge { id: EdgeId, prior: GridLoopItem },
    RestorePoint,
    Flag { flag: Flag, prior: bool },
}

impl GridLoop {
    /// Starts a new speculation scope; recording stays on while any scope is open.
    pub fn add_restore_point(&mut self) {
        self.history.push(HistoryEntry::RestorePoint);
        self.restore_points += 1;
    }
    /// Undoes everything done since the latest restore point, and removes that
    /// restore point. Does nothing if there is no open restore point.
    pub fn rollback(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let mut n_undone = 0;
        while let Some(entry) = self.history.pop() {
            match entry {
                HistoryEntry::RestorePoint => {
                    self.restore_points -= 1;
                    break;
                }
                HistoryEntry::Edge { id, prior } => {
                    let current = self[id].edge_status;
                    if current != prior.edge_status {
                        self.decided_edge -= 1;
                        if current == Edge::Line {
                            self.decided_line -= 1;
                        }
                    }
                    self[id] = prior;
                }
                HistoryEntry::Flag { flag, prior } => match flag {
                    Flag::Inconsistent => self.inconsistent = prior,
                    Flag::FullySolved => self.fully_solved = prior,
                },
            }
            n_undone += 1;
        }
        trace!(
            entries = n_undone,
            restore_points = self.restore_points,
            "rolled back grid loop"
        );
    }
    pub fn is_recording(&self) -> bool {
        !self.history.is_empty()
    }
    pub fn num_restore_points(&self) -> usize {
        self.restore_points
    }
    /// Commits the current state: drops every restore point and stops recording.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.restore_points = 0;
    }

    pub(super) fn record(&mut self, entry: HistoryEntry) {
        if self.is_recording() {
            self.history.push(entry);
        }
    }
}
