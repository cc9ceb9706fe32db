/// A single sound arrival at the receiver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    /// Arrival time in seconds after emission.
    pub time: f64,
    /// Sound pressure level in dB re 20 µPa.
    pub spl: f64,
    /// Reflection order of the path (0 = direct sound).
    pub order: usize,
    /// Path length in meters.
    pub distance: f64,
    /// Combined reflection attenuation of the path.
    pub alpha_factor: f64,
}

/// The ordered sequence of arrivals at the receiver.
///
/// Arrivals follow image-source order: the direct sound first, then each
/// reflection order in turn. Use [`Echogram::sorted_by_time`] for a
/// chronological view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Echogram {
    arrivals: Vec<Arrival>,
}

impl Echogram {
    pub(crate) fn new(arrivals: Vec<Arrival>) -> Self {
        Self { arrivals }
    }

    /// Returns the arrivals in image-source order.
    #[must_use]
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    /// Iterates the arrivals in image-source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arrival> {
        self.arrivals.iter()
    }

    /// Yields `(arrival_time_seconds, spl_db)` pairs in image-source order.
    pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.arrivals.iter().map(|a| (a.time, a.spl))
    }

    /// Returns the number of arrivals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Returns `true` if there are no arrivals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Returns the direct-sound arrival.
    #[must_use]
    pub fn direct(&self) -> Option<&Arrival> {
        self.arrivals.iter().find(|a| a.order == 0)
    }

    /// Iterates the arrivals of one reflection order.
    pub fn of_order(&self, order: usize) -> impl Iterator<Item = &Arrival> {
        self.arrivals.iter().filter(move |a| a.order == order)
    }

    /// Returns the arrival with the highest level.
    #[must_use]
    pub fn strongest(&self) -> Option<&Arrival> {
        self.arrivals.iter().max_by(|a, b| a.spl.total_cmp(&b.spl))
    }

    /// Returns the arrivals sorted by arrival time (stable for equal times).
    #[must_use]
    pub fn sorted_by_time(&self) -> Vec<Arrival> {
        let mut sorted = self.arrivals.clone();
        sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
        sorted
    }
}

impl<'a> IntoIterator for &'a Echogram {
    type Item = &'a Arrival;
    type IntoIter = std::slice::Iter<'a, Arrival>;

    fn into_iter(self) -> Self::IntoIter {
        self.arrivals.iter()
    }
}
