//! Run scoring rules

/// Line directions scanned from every stone.
/// Each undirected line is checked once, extending forward only.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Run scoring constants
pub struct RunScore;

impl RunScore {
    /// Shortest run that scores
    pub const MIN_LENGTH: usize = 3;
    /// Points for a run of exactly `MIN_LENGTH`
    pub const BASE: i32 = 1;
    /// Points for each cell beyond `MIN_LENGTH`
    pub const PER_EXTRA: i32 = 1;
}

/// Points awarded for one maximal run of `len` marks.
///
/// ```
/// use runline::eval::run_points;
///
/// assert_eq!(run_points(2), 0);
/// assert_eq!(run_points(3), 1);
/// assert_eq!(run_points(5), 3);
/// ```
#[inline]
pub fn run_points(len: usize) -> i32 {
    if len < RunScore::MIN_LENGTH {
        0
    } else {
        RunScore::BASE + (len - RunScore::MIN_LENGTH) as i32 * RunScore::PER_EXTRA
    }
}
