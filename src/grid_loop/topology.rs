use tracing::debug;

use super::{Edge, GridLoop, GridLoopField};
use crate::common::{UnionFind, LP, P};

fn for_each_edge<F: FnMut(LP)>(height: i32, width: i32, mut f: F) {
    for y in 0..(height * 2 + 1) {
        for x in 0..(width * 2 + 1) {
            let pos = LP(y, x);
            if pos.is_edge() {
                f(pos);
            }
        }
    }
}

/// Decides edges from the parity of the cells on both sides.
///
/// Every cell is either inside or outside the loop, and crossing a line flips
/// the side. Cells are 2-coloured with a union-find where node `2c` stands for
/// "cell `c` is inside" and `2c + 1` for its complement; id `height * width` is
/// the virtual cell surrounding the grid, which is always outside.
pub fn apply_inout_rule<T: GridLoopField>(field: &mut T) {
    let height = field.grid_loop().height();
    let width = field.grid_loop().width();
    let outside = (height * width) as usize;

    let cell_id = |c: P| {
        if 0 <= c.0 && c.0 < height && 0 <= c.1 && c.1 < width {
            (c.0 * width + c.1) as usize
        } else {
            outside
        }
    };

    let mut union_find = UnionFind::new(outside * 2 + 2);
    let mut undecided = vec![];
    {
        let gl = field.grid_loop();
        for_each_edge(height, width, |pos| {
            let (c1, c2) = pos.separated_cells();
            let (u, v) = (cell_id(c1), cell_id(c2));
            match gl.get_edge(pos) {
                Edge::Line => {
                    union_find.join(u * 2, v * 2 + 1);
                    union_find.join(u * 2 + 1, v * 2);
                }
                Edge::Blank => {
                    union_find.join(u * 2, v * 2);
                    union_find.join(u * 2 + 1, v * 2 + 1);
                }
                Edge::Undecided => undecided.push((pos, u, v)),
            }
        });
    }

    for c in 0..=outside {
        if union_find.same(c * 2, c * 2 + 1) {
            field.grid_loop().set_inconsistent();
            return;
        }
    }

    let mut handle = GridLoop::get_handle(field);
    for (pos, u, v) in undecided {
        if union_find.same(u * 2, v * 2) {
            GridLoop::decide_edge(&mut *handle, pos, Edge::Blank);
        } else if union_find.same(u * 2, v * 2 + 1) {
            GridLoop::decide_edge(&mut *handle, pos, Edge::Line);
        }
    }
}

/// Marks the field inconsistent if its lines can no longer be joined into one
/// loop, i.e. two lines lie in different components of the non-blank edges.
pub fn check_connectability<T: GridLoopField>(field: &mut T) {
    let gl = field.grid_loop();
    let height = gl.height();
    let width = gl.width();
    let vertex_id = |v: LP| ((v.0 / 2) * (width + 1) + v.1 / 2) as usize;

    let mut union_find = UnionFind::new(((height + 1) * (width + 1)) as usize);
    let mut line_vertex = None;
    for_each_edge(height, width, |pos| {
        let status = gl.get_edge(pos);
        if status == Edge::Blank {
            return;
        }
        let (v1, v2) = pos.end_vertices();
        union_find.join(vertex_id(v1), vertex_id(v2));
        if status == Edge::Line && line_vertex.is_none() {
            line_vertex = Some(vertex_id(v1));
        }
    });

    let line_vertex = match line_vertex {
        Some(v) => v,
        None => return,
    };
    let mut connected = true;
    for_each_edge(height, width, |pos| {
        if connected && gl.get_edge(pos) == Edge::Line {
            let (v1, _) = pos.end_vertices();
            connected = union_find.same(line_vertex, vertex_id(v1));
        }
    });
    if !connected {
        gl.set_inconsistent();
    }
}

/// One-step lookahead: an undecided chain is committed to one state if
/// assuming the other one leads to an inconsistency. Repeated until nothing
/// changes; each chain is tried once per pass through its representative edge.
pub fn assume<T: GridLoopField + Clone>(field: &mut T) {
    let height = field.grid_loop().height();
    let width = field.grid_loop().width();

    loop {
        let mut n_committed = 0;
        for y in 0..(height * 2 + 1) {
            for x in 0..(width * 2 + 1) {
                let pos = LP(y, x);
                if !pos.is_edge() {
                    continue;
                }
                {
                    let gl = field.grid_loop();
                    if gl.inconsistent() || gl.fully_solved() {
                        return;
                    }
                    if gl.get_edge(pos) != Edge::Undecided || !gl.is_root(pos) {
                        continue;
                    }
                }

                let mut field_line = field.clone();
                GridLoop::decide_edge(&mut field_line, pos, Edge::Line);
                let line_fails = field_line.grid_loop().inconsistent();

                let mut field_blank = field.clone();
                GridLoop::decide_edge(&mut field_blank, pos, Edge::Blank);
                let blank_fails = field_blank.grid_loop().inconsistent();

                match (line_fails, blank_fails) {
                    (true, true) => {
                        field.grid_loop().set_inconsistent();
                        return;
                    }
                    (true, false) => {
                        GridLoop::decide_edge(field, pos, Edge::Blank);
                        n_committed += 1;
                    }
                    (false, true) => {
                        GridLoop::decide_edge(field, pos, Edge::Line);
                        n_committed += 1;
                    }
                    (false, false) => (),
                }
            }
        }
        debug!(
            committed = n_committed,
            decided_edges = field.grid_loop().num_decided_edges(),
            "assumption pass"
        );
        if n_committed == 0 {
            break;
        }
    }
}

/// Applies the whole-grid rules until they stop deciding edges.
pub fn solve<T: GridLoopField>(field: &mut T) {
    loop {
        let current_decided_edges = field.grid_loop().num_decided_edges();
        apply_inout_rule(field);
        check_connectability(field);

        let gl = field.grid_loop();
        if gl.inconsistent() || gl.fully_solved() {
            break;
        }
        if current_decided_edges == gl.num_decided_edges() {
            break;
        }
    }
}
