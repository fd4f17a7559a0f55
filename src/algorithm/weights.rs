use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A heuristic distance between two vertex labels,
/// a lower bound of the length of any path between them.
pub trait Distancer<V: ?Sized> {
    fn dist(&self, a: &V, b: &V) -> f64;
}

impl<V, F> Distancer<V> for F
where
    V: ?Sized,
    F: Fn(&V, &V) -> f64,
{
    fn dist(&self, a: &V, b: &V) -> f64 {
        self(a, b)
    }
}

/// The heuristic under which A* degenerates into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroDistancer;

impl<V: ?Sized> Distancer<V> for ZeroDistancer {
    fn dist(&self, _: &V, _: &V) -> f64 {
        0.0
    }
}

/// A mutable store of vertex weights, keyed by vertex label.
pub trait Weighter<V: ?Sized> {
    fn weight(&self, label: &V) -> f64;
    fn set_weight(&mut self, label: &V, weight: f64);
}

/// Labels never weighted weigh infinity.
impl<V, S> Weighter<V> for HashMap<V, f64, S>
where
    V: Hash + Eq + Clone,
    S: BuildHasher,
{
    fn weight(&self, label: &V) -> f64 {
        self.get(label).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, label: &V, weight: f64) {
        self.insert(label.clone(), weight);
    }
}

/// The weight of an edge, by its label.
pub trait Weighting<E: ?Sized> {
    fn weight(&self, label: &E) -> f64;
}

impl<E, F> Weighting<E> for F
where
    E: ?Sized,
    F: Fn(&E) -> f64,
{
    fn weight(&self, label: &E) -> f64 {
        self(label)
    }
}

/// A vertex label carrying its own weight.
pub trait Weightable {
    fn weight(&self) -> f64;
    fn set_weight(&mut self, weight: f64);
}

/// An edge label carrying its own weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

impl Weighted for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_weighter() {
        let mut weights: HashMap<&str, f64> = HashMap::new();
        assert_eq!(Weighter::weight(&weights, &"a"), f64::INFINITY);
        weights.set_weight(&"a", 1.5);
        assert_eq!(Weighter::weight(&weights, &"a"), 1.5);
        weights.set_weight(&"a", 0.5);
        assert_eq!(Weighter::weight(&weights, &"a"), 0.5);
        assert_eq!(weights.len(), 1);
    }

    #[test]
    fn closures_as_accessors() {
        let h = |a: &i32, b: &i32| f64::from((a - b).abs());
        assert_eq!(h.dist(&1, &4), 3.0);
        assert_eq!(ZeroDistancer.dist(&1, &4), 0.0);
        let w = |e: &(char, f64)| e.1;
        assert_eq!(Weighting::weight(&w, &('x', 2.0)), 2.0);
    }
}
