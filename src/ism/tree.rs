use super::ImageSource;

/// Image sources grouped by reflection order.
///
/// `generation(0)` holds only the true source; `generation(n)` holds every
/// image of order `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSourceTree {
    generations: Vec<Vec<ImageSource>>,
}

impl ImageSourceTree {
    pub(crate) fn new(generations: Vec<Vec<ImageSource>>) -> Self {
        Self { generations }
    }

    /// Returns the highest reflection order held by the tree.
    #[must_use]
    pub fn max_order(&self) -> usize {
        self.generations.len().saturating_sub(1)
    }

    /// Returns the sources of order `order`, if built.
    #[must_use]
    pub fn generation(&self, order: usize) -> Option<&[ImageSource]> {
        self.generations.get(order).map(Vec::as_slice)
    }

    /// Returns all generations in order.
    #[must_use]
    pub fn generations(&self) -> &[Vec<ImageSource>] {
        &self.generations
    }

    /// Returns the total number of sources across all generations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generations.iter().map(Vec::len).sum()
    }

    /// Returns `true` if the tree holds no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates all sources, order 0 first.
    pub fn iter(&self) -> impl Iterator<Item = &ImageSource> {
        self.generations.iter().flatten()
    }

    /// Flattens the tree into a single list, order 0 first.
    #[must_use]
    pub fn into_sources(self) -> Vec<ImageSource> {
        self.generations.into_iter().flatten().collect()
    }
}
