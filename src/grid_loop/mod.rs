use std::fmt;
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use tracing::{debug, trace};

use crate::common::{FiniteSearchQueue, FixVec, Grid, D, FOUR_NEIGHBOURS, LP};

mod history;
mod topology;

use self::history::{Flag, HistoryEntry};
pub use self::topology::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Undecided,
    Line,
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct EdgeId(usize);
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct VtxId(usize);

/// Optional inference rules of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technique {
    /// A vertex with 2 lines has all other edges blank.
    pub two_lines_blank: bool,
    /// A vertex with 1 line never extends it so that a sub-loop closes while other lines exist.
    pub avoid_cycle: bool,
    /// A closed chain of undecided edges is blank as soon as any line exists.
    pub eliminate_closed_chain: bool,
    /// Blank an edge at a 1-line vertex if every way on from its far end is a
    /// chain back to the line's other end, closing a loop that misses some line.
    pub hourglass: bool,
}

impl Technique {
    /// Every rule except `hourglass`.
    pub fn new() -> Technique {
        Technique {
            hourglass: false,
            ..Technique::with_all(true)
        }
    }
    pub fn disabled_all() -> Technique {
        Technique::with_all(false)
    }
    pub fn with_all(val: bool) -> Technique {
        Technique {
            two_lines_blank: val,
            avoid_cycle: val,
            eliminate_closed_chain: val,
            hourglass: val,
        }
    }
}

impl Default for Technique {
    fn default() -> Technique {
        Technique::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridLoopItem {
    edge_status: Edge,
    chain_end_points: (VtxId, VtxId),
    chain_next: EdgeId,
    chain_another_end_edge: EdgeId,
    chain_size: i32,
}

/// Edge states of a loop on a grid of H x W cells, addressed by `LP` on the
/// (2H+1) x (2W+1) doubled grid.
///
/// Edges known to share their eventual state are kept in chains: circular
/// lists threaded through `chain_next`, whose two end edges point at each
/// other through `chain_another_end_edge`.
#[derive(Clone)]
pub struct GridLoop {
    grid: Grid<GridLoopItem>,
    inconsistent: bool,
    fully_solved: bool,
    decided_line: i32,
    decided_edge: i32,
    queue: FiniteSearchQueue,
    history: Vec<HistoryEntry>,
    restore_points: usize,
    technique: Technique,
}
impl Index<EdgeId> for GridLoop {
    type Output = GridLoopItem;
    fn index(&self, index: EdgeId) -> &GridLoopItem {
        &self.grid[index.0]
    }
}
impl IndexMut<EdgeId> for GridLoop {
    fn index_mut(&mut self, index: EdgeId) -> &mut GridLoopItem {
        &mut self.grid[index.0]
    }
}
impl GridLoop {
    pub fn new(height: i32, width: i32) -> GridLoop {
        GridLoop::with_technique(height, width, Technique::new())
    }
    pub fn with_technique(height: i32, width: i32, technique: Technique) -> GridLoop {
        let mut grid = Grid::new(
            height * 2 + 1,
            width * 2 + 1,
            GridLoopItem {
                edge_status: Edge::Undecided,
                chain_end_points: (VtxId(0), VtxId(0)),
                chain_next: EdgeId(0),
                chain_another_end_edge: EdgeId(0),
                chain_size: 0,
            },
        );

        for y in 0..(height * 2 + 1) {
            for x in 0..(width * 2 + 1) {
                let pos = LP(y, x);
                if !pos.is_edge() {
                    continue;
                }
                let id = grid.index_lp(pos);
                let (v1, v2) = pos.end_vertices();
                let ends = (VtxId(grid.index_lp(v1)), VtxId(grid.index_lp(v2)));
                grid[pos] = GridLoopItem {
                    edge_status: Edge::Undecided,
                    chain_end_points: ends,
                    chain_next: EdgeId(id),
                    chain_another_end_edge: EdgeId(id),
                    chain_size: 1,
                };
            }
        }

        let mut ret = GridLoop {
            grid,
            inconsistent: false,
            fully_solved: false,
            decided_line: 0,
            decided_edge: 0,
            queue: FiniteSearchQueue::new(((height * 2 + 1) * (width * 2 + 1)) as usize),
            history: vec![],
            restore_points: 0,
            technique,
        };

        // a corner vertex has exactly two edges, so they always agree
        {
            let mut handle = GridLoop::get_handle(&mut ret);
            for &(corner, d1, d2) in &[
                (LP(0, 0), D(0, 1), D(1, 0)),
                (LP(0, width * 2), D(0, -1), D(1, 0)),
                (LP(height * 2, 0), D(-1, 0), D(0, 1)),
                (LP(height * 2, width * 2), D(-1, 0), D(0, -1)),
            ] {
                let gl = handle.grid_loop();
                let vtx = VtxId(gl.grid.index_lp(corner));
                let edge1 = EdgeId(gl.grid.index_lp(corner + d1));
                let edge2 = EdgeId(gl.grid.index_lp(corner + d2));
                GridLoop::join(&mut *handle, vtx, edge1, edge2);
            }
        }

        ret
    }

    // public accessor
    pub fn height(&self) -> i32 {
        self.grid.height() / 2
    }
    pub fn width(&self) -> i32 {
        self.grid.width() / 2
    }
    pub fn inconsistent(&self) -> bool {
        self.inconsistent
    }
    pub fn fully_solved(&self) -> bool {
        self.fully_solved
    }
    pub fn technique(&self) -> Technique {
        self.technique
    }
    pub fn set_technique(&mut self, technique: Technique) {
        self.technique = technique;
    }
    pub fn get_edge(&self, pos: LP) -> Edge {
        self.grid[pos].edge_status
    }
    /// Like `get_edge`, but positions outside the grid read as `Blank`.
    pub fn get_edge_safe(&self, pos: LP) -> Edge {
        if self.is_valid_lp(pos) {
            self.get_edge(pos)
        } else {
            Edge::Blank
        }
    }
    pub fn is_valid_lp(&self, pos: LP) -> bool {
        self.grid.is_valid_lp(pos)
    }
    pub fn is_vertex(&self, pos: LP) -> bool {
        pos.is_vertex()
    }
    pub fn is_edge(&self, pos: LP) -> bool {
        pos.is_edge()
    }
    pub fn num_decided_edges(&self) -> i32 {
        self.decided_edge
    }
    pub fn num_decided_lines(&self) -> i32 {
        self.decided_line
    }
    /// Numbers of lines and undecided edges around a vertex.
    pub fn neighbor_summary(&self, pos: LP) -> (i32, i32) {
        let mut n_line = 0;
        let mut n_undecided = 0;
        for &d in &FOUR_NEIGHBOURS {
            let e = self.get_edge_safe(pos + d);
            if e == Edge::Line {
                n_line += 1;
            } else if e == Edge::Undecided {
                n_undecided += 1;
            }
        }
        (n_line, n_undecided)
    }

    // chain accessor
    /// The far vertex of the chain leaving `vertex` in direction `d`.
    ///
    /// Returns `None` if there is no edge in that direction or if the chain
    /// passes through `vertex` instead of ending there.
    pub fn another_end(&self, vertex: LP, d: D) -> Option<LP> {
        let edge = vertex + d;
        if !self.is_valid_lp(edge) {
            return None;
        }
        let vid = VtxId(self.grid.index_lp(vertex));
        let eid = EdgeId(self.grid.index_lp(edge));
        if !self.is_end_of_chain(eid) || !self.is_end_of_chain_vertex(eid, vid) {
            return None;
        }
        Some(self.grid.lp(self.another_end_id(vid, eid).0))
    }
    pub fn chain_size(&self, edge: LP) -> i32 {
        self.grid[edge].chain_size
    }
    /// Both end vertices of the chain containing `edge`.
    /// They coincide if the chain is closed.
    pub fn chain_ends(&self, edge: LP) -> (LP, LP) {
        let end = self.chain_end_edge(EdgeId(self.grid.index_lp(edge)));
        let (v1, v2) = self[end].chain_end_points;
        (self.grid.lp(v1.0), self.grid.lp(v2.0))
    }
    /// Identifier of the chain containing `edge`, stable until the chain is merged.
    pub fn chain_id(&self, edge: LP) -> usize {
        let end = self.chain_end_edge(EdgeId(self.grid.index_lp(edge)));
        let end2 = self[end].chain_another_end_edge;
        end.0.min(end2.0)
    }
    /// Whether `edge` represents its chain; true for exactly one edge per chain.
    pub fn is_root(&self, edge: LP) -> bool {
        let id = EdgeId(self.grid.index_lp(edge));
        let id2 = self[id].chain_another_end_edge;
        self[id2].chain_another_end_edge == id && id.0 <= id2.0
    }

    // public modifier
    pub fn set_inconsistent(&mut self) {
        if self.inconsistent {
            return;
        }
        trace!(
            decided_edges = self.decided_edge,
            decided_lines = self.decided_line,
            "grid loop became inconsistent"
        );
        self.record(HistoryEntry::Flag {
            flag: Flag::Inconsistent,
            prior: false,
        });
        self.inconsistent = true;
    }
    pub fn decide_edge<T: GridLoopField>(field: &mut T, pos: LP, status: Edge) {
        if !pos.is_edge() {
            field.grid_loop().set_inconsistent();
            return;
        }
        if !field.grid_loop().is_valid_lp(pos) {
            if status != Edge::Blank {
                field.grid_loop().set_inconsistent();
            }
            return;
        }

        let id = field.grid_loop().grid.index_lp(pos);
        let current_status = field.grid_loop().grid[id].edge_status;

        if current_status == status {
            return;
        }
        if current_status != Edge::Undecided {
            field.grid_loop().set_inconsistent();
            return;
        }

        let mut handle = GridLoop::get_handle(field);
        GridLoop::decide_edge_internal(&mut *handle, EdgeId(id), status);
    }
    /// Schedules `pos` for inspection.
    pub fn check<T: GridLoopField>(field: &mut T, pos: LP) {
        if !field.grid_loop().is_valid_lp(pos) {
            return;
        }

        let id = field.grid_loop().grid.index_lp(pos);
        let mut handle = GridLoop::get_handle(field);
        handle.grid_loop().queue.push(id);
    }
    /// Schedules both end vertices of the edge `pos`.
    pub fn check_edge_ends<T: GridLoopField>(field: &mut T, pos: LP) {
        let (v1, v2) = pos.end_vertices();
        GridLoop::check(field, v1);
        GridLoop::check(field, v2);
    }
    /// Runs a batch of operations under one queue activation.
    ///
    /// The queue is drained when the returned handle is dropped, unless it was
    /// already active when the handle was created.
    pub fn get_handle<T: GridLoopField>(field: &mut T) -> QueueActiveGridLoopField<'_, T> {
        QueueActiveGridLoopField::new(field)
    }

    // private accessor
    fn another_end_id(&self, origin: VtxId, edge: EdgeId) -> VtxId {
        let edge_data = self[edge];
        VtxId((edge_data.chain_end_points.0).0 + (edge_data.chain_end_points.1).0 - origin.0)
    }
    fn is_end_of_chain(&self, id: EdgeId) -> bool {
        let id2 = self[id].chain_another_end_edge;
        self[id2].chain_another_end_edge == id
    }
    fn is_end_of_chain_vertex(&self, edge: EdgeId, vtx: VtxId) -> bool {
        let ends = self[edge].chain_end_points;
        ends.0 == vtx || ends.1 == vtx
    }
    fn chain_end_edge(&self, edge: EdgeId) -> EdgeId {
        let mut pt = edge;
        while !self.is_end_of_chain(pt) {
            pt = self[pt].chain_next;
        }
        pt
    }

    // private modifier
    fn update(&mut self, id: EdgeId, item: GridLoopItem) {
        if self.is_recording() {
            let prior = self[id];
            self.history.push(HistoryEntry::Edge { id, prior });
        }
        self[id] = item;
    }
    fn set_fully_solved(&mut self) {
        if self.fully_solved {
            return;
        }
        debug!(lines = self.decided_line, "loop closed");
        self.record(HistoryEntry::Flag {
            flag: Flag::FullySolved,
            prior: false,
        });
        self.fully_solved = true;
    }
    fn queue_pop_all<T: GridLoopField>(field: &mut T) {
        while !field.grid_loop().queue.empty() {
            let id = field.grid_loop().queue.pop();
            if field.grid_loop().inconsistent() {
                continue;
            }
            let pos = field.grid_loop().grid.lp(id);
            field.inspect(pos);
            if pos.is_vertex() {
                GridLoop::inspect_vertex(field, pos);
            }
        }
    }
    fn decide_edge_internal<T: GridLoopField>(field: &mut T, id: EdgeId, status: Edge) {
        let current_status = field.grid_loop()[id].edge_status;

        if current_status == status {
            return;
        }
        if current_status != Edge::Undecided {
            field.grid_loop().set_inconsistent();
            return;
        }

        GridLoop::decide_chain_and_check(field, id, status);
    }
    fn decide_chain_and_check<T: GridLoopField>(field: &mut T, id: EdgeId, status: Edge) {
        field.grid_loop().decide_chain(id, status);
        GridLoop::check_chain_neighborhood(field, id);

        if status != Edge::Line {
            return;
        }
        // a closed chain of undecided edges has just become a loop
        let gl = field.grid_loop();
        let end = gl.chain_end_edge(id);
        let (v1, v2) = gl[end].chain_end_points;
        if v1 != v2 {
            return;
        }
        if gl.decided_line == gl[id].chain_size {
            gl.set_fully_solved();
            GridLoop::has_fully_solved(field);
        } else {
            gl.set_inconsistent();
        }
    }
    fn decide_chain(&mut self, edge: EdgeId, status: Edge) {
        let mut pt = edge;
        let mut sz = 0;
        loop {
            let mut item = self[pt];
            item.edge_status = status;
            self.update(pt, item);
            pt = item.chain_next;
            sz += 1;
            if pt == edge {
                break;
            }
        }
        self.decided_edge += sz;
        if status == Edge::Line {
            self.decided_line += sz;
        }
    }
    fn check_chain_neighborhood<T: GridLoopField>(field: &mut T, edge: EdgeId) {
        let mut pt = edge;
        loop {
            let pos = field.grid_loop().grid.lp(pt.0);
            field.has_decided(pos);
            field.check_neighborhood(pos);
            pt = field.grid_loop()[pt].chain_next;
            if pt == edge {
                break;
            }
        }
    }
    fn has_fully_solved<T: GridLoopField>(field: &mut T) {
        let height = field.grid_loop().height();
        let width = field.grid_loop().width();
        for y in 0..(2 * height + 1) {
            for x in 0..(2 * width + 1) {
                let pos = LP(y, x);
                if pos.is_edge() && field.grid_loop().get_edge(pos) == Edge::Undecided {
                    GridLoop::decide_edge(field, pos, Edge::Blank);
                }
            }
        }
    }
    /// Merges the chains ending at `vtx` with the end edges `edge1` and `edge2`.
    fn join<T: GridLoopField>(field: &mut T, vtx: VtxId, edge1: EdgeId, edge2: EdgeId) {
        {
            let gl = field.grid_loop();
            if edge1 == edge2 {
                return;
            }
            if !gl.is_end_of_chain(edge1)
                || !gl.is_end_of_chain(edge2)
                || !gl.is_end_of_chain_vertex(edge1, vtx)
                || !gl.is_end_of_chain_vertex(edge2, vtx)
            {
                return;
            }
            if gl[edge1].chain_another_end_edge == edge2 {
                return;
            }
        }

        let status = match (
            field.grid_loop()[edge1].edge_status,
            field.grid_loop()[edge2].edge_status,
        ) {
            (status1, status2) if status1 == status2 => status1,
            (Edge::Undecided, status2) => {
                GridLoop::decide_chain_and_check(field, edge1, status2);
                GridLoop::join(field, vtx, edge1, edge2);
                return;
            }
            (status1, Edge::Undecided) => {
                GridLoop::decide_chain_and_check(field, edge2, status1);
                GridLoop::join(field, vtx, edge1, edge2);
                return;
            }
            _ => {
                field.grid_loop().set_inconsistent();
                return;
            }
        };

        let gl = field.grid_loop();
        let end1_vertex = gl.another_end_id(vtx, edge1);
        let end2_vertex = gl.another_end_id(vtx, edge2);
        let new_size = gl[edge1].chain_size + gl[edge2].chain_size;
        let mut closes_loop = false;

        if end1_vertex == end2_vertex {
            match status {
                Edge::Undecided => {
                    if gl.technique.eliminate_closed_chain && gl.decided_line != 0 {
                        gl.decide_chain(edge1, Edge::Blank);
                        gl.decide_chain(edge2, Edge::Blank);
                        GridLoop::check_chain_neighborhood(field, edge1);
                        GridLoop::check_chain_neighborhood(field, edge2);
                        return;
                    }
                }
                Edge::Line => {
                    if gl.decided_line != new_size {
                        gl.set_inconsistent();
                        return;
                    }
                    closes_loop = true;
                }
                Edge::Blank => (),
            }
        }

        let end1_edge = gl[edge1].chain_another_end_edge;
        let end2_edge = gl[edge2].chain_another_end_edge;

        let mut end1_item = gl[end1_edge];
        let mut end2_item = gl[end2_edge];

        // concatenate 2 lists
        mem::swap(&mut end1_item.chain_next, &mut end2_item.chain_next);

        end1_item.chain_end_points = (end1_vertex, end2_vertex);
        end2_item.chain_end_points = (end1_vertex, end2_vertex);
        end1_item.chain_another_end_edge = end2_edge;
        end2_item.chain_another_end_edge = end1_edge;

        gl.update(end1_edge, end1_item);
        gl.update(end2_edge, end2_item);

        let mut pt = end1_edge;
        loop {
            let mut item = gl[pt];
            item.chain_size = new_size;
            gl.update(pt, item);
            pt = item.chain_next;
            if pt == end1_edge {
                break;
            }
        }

        gl.queue.push(end1_vertex.0);
        gl.queue.push(end2_vertex.0);

        if closes_loop {
            gl.set_fully_solved();
            GridLoop::has_fully_solved(field);
        }
    }
    fn inspect_vertex<T: GridLoopField>(field: &mut T, pos: LP) {
        let mut line = FixVec::<EdgeId, 4>::new();
        let mut undecided = FixVec::<EdgeId, 4>::new();

        for &d in &FOUR_NEIGHBOURS {
            let pos_edge = pos + d;
            if field.grid_loop().is_valid_lp(pos_edge) {
                let id = field.grid_loop().grid.index_lp(pos_edge);
                let status = field.grid_loop().grid[id].edge_status;
                if status == Edge::Line {
                    line.push(EdgeId(id));
                } else if status == Edge::Undecided {
                    undecided.push(EdgeId(id));
                }
            }
        }

        let vid = VtxId(field.grid_loop().grid.index_lp(pos));
        let technique = field.grid_loop().technique;

        if line.len() >= 3 {
            field.grid_loop().set_inconsistent();
            return;
        }

        if line.len() == 2 {
            if technique.two_lines_blank {
                for &e in &undecided {
                    GridLoop::decide_edge_internal(field, e, Edge::Blank);
                }
            }
            GridLoop::join(field, vid, line[0], line[1]);
            return;
        }

        if line.len() == 1 {
            GridLoop::inspect_vertex_one_line(field, vid, line[0], &undecided);
            return;
        }

        if undecided.len() == 2 {
            GridLoop::join(field, vid, undecided[0], undecided[1]);
        } else if undecided.len() == 1 {
            GridLoop::decide_edge_internal(field, undecided[0], Edge::Blank);
        }
    }
    fn inspect_vertex_one_line<T: GridLoopField>(
        field: &mut T,
        vid: VtxId,
        eid: EdgeId,
        undecided: &FixVec<EdgeId, 4>,
    ) {
        let mut cand = FixVec::<EdgeId, 4>::new();
        let mut blank = FixVec::<EdgeId, 4>::new();
        {
            let gl = field.grid_loop();
            let line_size = gl[eid].chain_size;
            let another_end = gl.another_end_id(vid, eid);
            let can_close = !gl.technique.avoid_cycle || line_size == gl.decided_line;

            for &ud in undecided {
                if !gl.is_end_of_chain(ud) || !gl.is_end_of_chain_vertex(ud, vid) {
                    continue;
                }
                let ud_another_end = gl.another_end_id(vid, ud);
                if ud_another_end == vid {
                    // this chain would come back to `vid` and make its degree 3
                    blank.push(ud);
                } else if ud_another_end == another_end && !can_close {
                    blank.push(ud);
                } else if gl.technique.hourglass
                    && gl.only_closes_short_cycles(vid, ud, another_end, line_size)
                {
                    blank.push(ud);
                } else {
                    cand.push(ud);
                }
            }
        }

        for &e in &blank {
            GridLoop::decide_edge_internal(field, e, Edge::Blank);
        }
        if field.grid_loop().inconsistent() {
            return;
        }

        match cand.len() {
            0 => field.grid_loop().set_inconsistent(),
            1 => GridLoop::join(field, vid, eid, cand[0]),
            _ => (),
        }
    }
    /// Whether making `ud` a line leaves its far end no way on except chains
    /// back to `line_end`, each of which closes a loop that misses some line.
    fn only_closes_short_cycles(
        &self,
        vid: VtxId,
        ud: EdgeId,
        line_end: VtxId,
        line_size: i32,
    ) -> bool {
        let far = self.another_end_id(vid, ud);
        if far == line_end {
            return false;
        }
        let far_edge = self[ud].chain_another_end_edge;
        let far_pos = self.grid.lp(far.0);

        let mut n_exit = 0;
        for &d in &FOUR_NEIGHBOURS {
            let e = far_pos + d;
            if !self.is_valid_lp(e) {
                continue;
            }
            let id = EdgeId(self.grid.index_lp(e));
            if id == far_edge || self[id].edge_status == Edge::Blank {
                continue;
            }
            if !self.is_end_of_chain(id) || !self.is_end_of_chain_vertex(id, far) {
                return false;
            }
            if self.another_end_id(far, id) != line_end {
                return false;
            }
            let mut lines_on_cycle = line_size;
            if self[id].edge_status == Edge::Line {
                lines_on_cycle += self[id].chain_size;
            }
            if lines_on_cycle >= self.decided_line {
                return false;
            }
            n_exit += 1;
        }
        // a dead end is left to the degree rule at `far`
        n_exit > 0
    }
}

/// A puzzle field built on top of a `GridLoop`.
///
/// The engine calls back into the field whenever a position is dequeued
/// (`inspect`) or an edge gets decided (`has_decided`, then
/// `check_neighborhood`). Callbacks may freely query and decide edges: the
/// consequences are queued and processed after the callback returns.
pub trait GridLoopField: Sized {
    fn grid_loop(&mut self) -> &mut GridLoop;
    fn inspect(&mut self, pos: LP);
    /// Schedules the positions to re-examine after the edge `pos` was decided.
    fn check_neighborhood(&mut self, pos: LP) {
        GridLoop::check_edge_ends(self, pos);
    }
    fn has_decided(&mut self, _pos: LP) {}
}
impl GridLoopField for GridLoop {
    fn grid_loop(&mut self) -> &mut GridLoop {
        self
    }
    fn inspect(&mut self, _: LP) {}
}

pub struct QueueActiveGridLoopField<'a, T: GridLoopField + 'a> {
    field: &'a mut T,
    finalize_required: bool,
}
impl<'a, T: GridLoopField> Deref for QueueActiveGridLoopField<'a, T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.field
    }
}
impl<'a, T: GridLoopField> DerefMut for QueueActiveGridLoopField<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.field
    }
}
impl<'a, T: GridLoopField> QueueActiveGridLoopField<'a, T> {
    fn new(field: &'a mut T) -> QueueActiveGridLoopField<'a, T> {
        if field.grid_loop().queue.is_started() {
            QueueActiveGridLoopField {
                field,
                finalize_required: false,
            }
        } else {
            field.grid_loop().queue.start();
            QueueActiveGridLoopField {
                field,
                finalize_required: true,
            }
        }
    }
}
impl<'a, T: GridLoopField> Drop for QueueActiveGridLoopField<'a, T> {
    fn drop(&mut self) {
        if self.finalize_required {
            GridLoop::queue_pop_all(self.field);
            self.field.grid_loop().queue.finish();
        }
    }
}

impl fmt::Display for GridLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let pos = LP(y, x);
                let c = if pos.is_vertex() {
                    '+'
                } else if pos.is_cell() {
                    ' '
                } else {
                    match self.get_edge(pos) {
                        Edge::Line if y % 2 == 0 => '-',
                        Edge::Line => '|',
                        Edge::Blank => 'x',
                        Edge::Undecided => ' ',
                    }
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
