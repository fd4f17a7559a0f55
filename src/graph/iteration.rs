/// A single-pass sequence over a snapshot of vertices or edges.
///
/// Every enumeration of a [Graph](super::Graph) returns one of these.
/// The snapshot is taken when the iteration is created.
/// Adding or removing vertices or edges afterwards does not change what it yields,
/// but what it yields may then no longer be in the graph:
/// further use of such an iteration is undefined with respect to the graph's contents.
#[derive(Debug, Clone)]
pub struct Iteration<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Iteration<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new().into_iter(),
        }
    }
}

impl<T> Default for Iteration<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Iteration<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> FromIterator<T> for Iteration<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items.into()
    }
}

impl<T> Iterator for Iteration<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Iteration<T> {}

impl<T> DoubleEndedIterator for Iteration<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.items.next_back()
    }
}

impl<T> std::iter::FusedIterator for Iteration<T> {}
