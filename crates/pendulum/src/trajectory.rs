use serde::{Deserialize, Serialize};

use crate::{Frame, IndexError, Point, TrajectoryError};

/// Recorded knee and ankle coordinates, one entry per frame.
///
/// Coordinates are kept in four parallel buffers that always have the same
/// length. Frames can only be appended or cleared all at once, and
/// deserialization rejects buffers of unequal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Buffers")]
pub struct Trajectory {
    knee_x: Vec<f64>,
    knee_y: Vec<f64>,
    ankle_x: Vec<f64>,
    ankle_y: Vec<f64>,
}

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one frame.
    pub fn push(&mut self, frame: Frame) {
        self.knee_x.push(frame.knee.x);
        self.knee_y.push(frame.knee.y);
        self.ankle_x.push(frame.ankle.x);
        self.ankle_y.push(frame.ankle.y);
    }

    /// Number of recorded frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.knee_x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.knee_x.is_empty()
    }

    /// Removes every recorded frame.
    pub fn clear(&mut self) {
        self.knee_x.clear();
        self.knee_y.clear();
        self.ankle_x.clear();
        self.ankle_y.clear();
    }

    /// Knee x coordinate at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn knee_x(&self, index: usize) -> Result<f64, IndexError> {
        lookup(&self.knee_x, index)
    }

    /// Knee y coordinate at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn knee_y(&self, index: usize) -> Result<f64, IndexError> {
        lookup(&self.knee_y, index)
    }

    /// Ankle x coordinate at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn ankle_x(&self, index: usize) -> Result<f64, IndexError> {
        lookup(&self.ankle_x, index)
    }

    /// Ankle y coordinate at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn ankle_y(&self, index: usize) -> Result<f64, IndexError> {
        lookup(&self.ankle_y, index)
    }

    /// Knee position at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn knee(&self, index: usize) -> Result<Point, IndexError> {
        Ok(Point::new(self.knee_x(index)?, self.knee_y(index)?))
    }

    /// Ankle position at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn ankle(&self, index: usize) -> Result<Point, IndexError> {
        Ok(Point::new(self.ankle_x(index)?, self.ankle_y(index)?))
    }

    /// Both joint positions at a frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfRange`] if `index >= self.len()`.
    pub fn frame(&self, index: usize) -> Result<Frame, IndexError> {
        Ok(Frame {
            knee: self.knee(index)?,
            ankle: self.ankle(index)?,
        })
    }

    /// Iterates over recorded frames in order.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame> + '_ {
        (0..self.len()).map(|i| Frame {
            knee: Point::new(self.knee_x[i], self.knee_y[i]),
            ankle: Point::new(self.ankle_x[i], self.ankle_y[i]),
        })
    }
}

impl Extend<Frame> for Trajectory {
    fn extend<T: IntoIterator<Item = Frame>>(&mut self, iter: T) {
        for frame in iter {
            self.push(frame);
        }
    }
}

/// Unchecked wire form of a [`Trajectory`].
#[derive(Deserialize)]
struct Buffers {
    knee_x: Vec<f64>,
    knee_y: Vec<f64>,
    ankle_x: Vec<f64>,
    ankle_y: Vec<f64>,
}

impl TryFrom<Buffers> for Trajectory {
    type Error = TrajectoryError;

    fn try_from(buffers: Buffers) -> Result<Self, Self::Error> {
        let Buffers {
            knee_x,
            knee_y,
            ankle_x,
            ankle_y,
        } = buffers;

        let len = knee_x.len();
        if [knee_y.len(), ankle_x.len(), ankle_y.len()] != [len; 3] {
            return Err(TrajectoryError::UnequalLengths {
                knee_x: knee_x.len(),
                knee_y: knee_y.len(),
                ankle_x: ankle_x.len(),
                ankle_y: ankle_y.len(),
            });
        }

        Ok(Self {
            knee_x,
            knee_y,
            ankle_x,
            ankle_y,
        })
    }
}

fn lookup(buffer: &[f64], index: usize) -> Result<f64, IndexError> {
    buffer.get(index).copied().ok_or(IndexError::OutOfRange {
        index,
        len: buffer.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(i: f64) -> Frame {
        Frame {
            knee: Point::new(i, -i),
            ankle: Point::new(10.0 * i, -10.0 * i),
        }
    }

    #[test]
    fn starts_empty() {
        let trajectory = Trajectory::new();

        assert!(trajectory.is_empty());
        assert_eq!(trajectory.len(), 0);
        assert_eq!(
            trajectory.knee_x(0),
            Err(IndexError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn push_grows_every_buffer_by_one() {
        let mut trajectory = Trajectory::new();

        trajectory.push(frame(1.0));
        trajectory.push(frame(2.0));

        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.knee_x(1), Ok(2.0));
        assert_eq!(trajectory.knee_y(1), Ok(-2.0));
        assert_eq!(trajectory.ankle_x(1), Ok(20.0));
        assert_eq!(trajectory.ankle_y(1), Ok(-20.0));
        assert_eq!(trajectory.frame(0), Ok(frame(1.0)));
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let mut trajectory = Trajectory::new();
        trajectory.extend([frame(1.0), frame(2.0), frame(3.0)]);

        let err = IndexError::OutOfRange { index: 3, len: 3 };
        assert_eq!(trajectory.knee_x(3), Err(err));
        assert_eq!(trajectory.knee_y(3), Err(err));
        assert_eq!(trajectory.ankle_x(3), Err(err));
        assert_eq!(trajectory.ankle_y(3), Err(err));
        assert_eq!(
            trajectory.frame(7).unwrap_err().to_string(),
            "frame index 7 is out of range for a trajectory of 3 frames"
        );
    }

    #[test]
    fn clear_empties_every_buffer() {
        let mut trajectory = Trajectory::new();
        trajectory.extend((1..=4).map(f64::from).map(frame));

        trajectory.clear();

        assert!(trajectory.is_empty());
        assert!(trajectory.ankle_y(0).is_err());
        assert_eq!(trajectory.frames().count(), 0);
    }

    #[test]
    fn deserializes_recorded_buffers() {
        let mut trajectory = Trajectory::new();
        trajectory.extend([frame(1.0), frame(2.0)]);

        let text = toml::to_string(&trajectory).expect("should serialize");
        let parsed: Trajectory = toml::from_str(&text).expect("should parse");

        assert_eq!(parsed, trajectory);
    }

    #[test]
    fn deserialization_rejects_unequal_buffers() {
        let err = toml::from_str::<Trajectory>(
            r#"
            knee_x = [1.0, 2.0]
            knee_y = [-1.0, -2.0]
            ankle_x = [10.0]
            ankle_y = [-10.0, -20.0]
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains(
            "trajectory buffers differ in length \
             (knee_x 2, knee_y 2, ankle_x 1, ankle_y 2)"
        ));
    }

    #[test]
    fn frames_iterates_in_recording_order() {
        let mut trajectory = Trajectory::new();
        trajectory.extend([frame(1.0), frame(2.0)]);

        let frames: Vec<_> = trajectory.frames().collect();

        assert_eq!(frames, vec![frame(1.0), frame(2.0)]);
    }
}
