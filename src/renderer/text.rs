//! Character-cell renderer
//!
//! Rasterises a snapshot onto a `cols` x `rows` grid plus one status line.
//! Each cell samples the playfield at its centre; the bird is drawn over
//! pipes and always covers at least one cell while on screen.

use crate::sim::{GamePhase, Snapshot};

const SKY: char = ' ';
const PIPE: char = '#';
const BIRD: char = '@';

pub fn render(snapshot: &Snapshot, cols: usize, rows: usize) -> String {
    let mut out = String::with_capacity((cols + 1) * (rows + 1));

    if cols > 0 && rows > 0 {
        let mut grid = vec![SKY; cols * rows];
        let cell_w = snapshot.playfield.width / cols as f32;
        let cell_h = snapshot.playfield.height / rows as f32;

        for row in 0..rows {
            let y = (row as f32 + 0.5) * cell_h;
            for col in 0..cols {
                let x = (col as f32 + 0.5) * cell_w;
                let solid = snapshot.pipes.iter().any(|p| {
                    x >= p.x
                        && x < p.x + p.width
                        && (y < p.gap_center_y - p.gap_half_height
                            || y >= p.gap_center_y + p.gap_half_height)
                });
                if solid {
                    grid[row * cols + col] = PIPE;
                }
            }
        }

        let bird = &snapshot.bird;
        let cols_hit = cell_span(bird.x, bird.x + bird.size, cell_w, cols);
        let rows_hit = cell_span(bird.y, bird.y + bird.size, cell_h, rows);
        if let (Some((c0, c1)), Some((r0, r1))) = (cols_hit, rows_hit) {
            for row in r0..=r1 {
                for col in c0..=c1 {
                    grid[row * cols + col] = BIRD;
                }
            }
        }

        for line in grid.chunks(cols) {
            out.extend(line.iter());
            out.push('\n');
        }
    }

    out.push_str(&status_line(snapshot));
    out
}

/// Cells covered by `lo..=hi` along one axis, clipped to the grid
fn cell_span(lo: f32, hi: f32, cell: f32, count: usize) -> Option<(usize, usize)> {
    let first = (lo / cell).floor();
    let last = (hi / cell).floor();
    if last < 0.0 || first >= count as f32 {
        return None;
    }
    Some((first.max(0.0) as usize, (last as usize).min(count - 1)))
}

fn status_line(snapshot: &Snapshot) -> String {
    match snapshot.phase {
        GamePhase::Countdown => match snapshot.countdown_display() {
            Some(n) => format!("GET READY {n}"),
            None => "GET READY".to_string(),
        },
        GamePhase::Playing => format!("SCORE {}", snapshot.score),
        GamePhase::GameOver => format!(
            "GAME OVER  score {}  [space] restart  [esc] quit",
            snapshot.score
        ),
    }
}
