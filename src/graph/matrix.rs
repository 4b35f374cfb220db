//! Dense Euclidean distance matrix over the loaded stops.

use crate::models::Stop;

/// Pairwise straight-line distances between every loaded stop.
///
/// Rows and columns follow the order in which stops were handed to the
/// graph; [`crate::graph::LocationGraph`] translates stop ids to these
/// positions before looking anything up.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Stop;
/// use u_dispatch::graph::DistanceMatrix;
///
/// let stops = vec![
///     Stop::depot(0, 0.0, 0.0),
///     Stop::customer(1, 3.0, 4.0, 10.0, 3.0),
///     Stop::customer(2, 6.0, 8.0, 12.0, 2.0),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes pairwise Euclidean distances between stop coordinates.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = stops[i].distance_to(&stops[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Distance between the stops loaded at positions `from` and `to`.
    ///
    /// Both positions must be below [`DistanceMatrix::size`].
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of stops covered.
    pub fn size(&self) -> usize {
        self.size
    }
}
