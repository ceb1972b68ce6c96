use crate::mapping::{SurfaceSize, ToneMapping};

pub const DEFAULT_DIVISIONS: u32 = 10;

/// A vertical line at a fixed frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct FreqLine {
    pub x_px: i32,
    pub freq_hz: f64,
}

impl FreqLine {
    pub fn label(&self) -> String {
        format!("{}Hz", self.freq_hz.round())
    }
}

/// A horizontal line at a fixed volume.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeLine {
    pub y_px: i32,
    pub volume: f64,
}

impl VolumeLine {
    pub fn label(&self) -> String {
        format!("{}%", (self.volume * 100.0).round())
    }
}

/// Reference grid drawn behind the surface, with lines evenly spaced in device space and
/// labelled with the values that the mapping assigns to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub freq_lines: Vec<FreqLine>,
    pub volume_lines: Vec<VolumeLine>,
}

impl Grid {
    pub fn new(mapping: &ToneMapping, size: SurfaceSize, divisions: u32) -> Self {
        let divisions = divisions.max(1);
        let width = size.width_px() as u64;
        let height = size.height_px() as u64;
        let mut freq_lines = Vec::with_capacity(divisions as usize);
        let mut volume_lines = Vec::with_capacity(divisions as usize);
        for i in 0..divisions {
            let norm = i as f64 / divisions as f64;
            // integer arithmetic keeps the lines exactly evenly spaced
            let x_px = (divisions - i) as u64 * width / divisions as u64;
            let y_px = i as u64 * height / divisions as u64;
            freq_lines.push(FreqLine {
                x_px: x_px as i32,
                freq_hz: mapping.freq_hz.value_at(1.0 - norm),
            });
            volume_lines.push(VolumeLine {
                y_px: y_px as i32,
                volume: mapping.volume.value_at(1.0 - norm),
            });
        }
        Self {
            freq_lines,
            volume_lines,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn default_grid() -> Grid {
        Grid::new(
            &ToneMapping::default(),
            SurfaceSize::new(500, 400),
            DEFAULT_DIVISIONS,
        )
    }

    #[test]
    fn one_line_per_division() {
        let grid = default_grid();
        assert_eq!(grid.freq_lines.len(), 10);
        assert_eq!(grid.volume_lines.len(), 10);
    }

    #[test]
    fn freq_lines_run_right_to_left() {
        let grid = default_grid();
        let xs = grid.freq_lines.iter().map(|l| l.x_px).collect::<Vec<_>>();
        assert_eq!(xs, vec![500, 450, 400, 350, 300, 250, 200, 150, 100, 50]);
    }

    #[test]
    fn volume_lines_run_top_to_bottom() {
        let grid = default_grid();
        let ys = grid.volume_lines.iter().map(|l| l.y_px).collect::<Vec<_>>();
        assert_eq!(ys, vec![0, 40, 80, 120, 160, 200, 240, 280, 320, 360]);
    }

    #[test]
    fn labels() {
        let grid = default_grid();
        assert_eq!(grid.freq_lines[0].label(), "10000Hz");
        assert_eq!(grid.freq_lines[5].label(), "1000Hz");
        assert_eq!(grid.freq_lines[9].label(), "158Hz");
        assert_eq!(grid.volume_lines[0].label(), "100%");
        assert_eq!(grid.volume_lines[5].label(), "10%");
        assert_eq!(grid.volume_lines[9].label(), "2%");
    }

    #[test]
    fn zero_divisions_is_one_division() {
        let grid =
            Grid::new(&ToneMapping::default(), SurfaceSize::new(10, 10), 0);
        assert_eq!(grid.freq_lines.len(), 1);
        assert_eq!(grid.volume_lines.len(), 1);
    }
}
