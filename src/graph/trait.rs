/// Directedness of a graph, fixed at compile time.
pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

/// Marker for graphs whose edges leave their source and enter their sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for graphs whose edges can be walked either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl DirectedOrNot for Directed {
    const DIRECTED_OR_NOT: bool = true;
}

impl DirectedOrNot for Undirected {
    const DIRECTED_OR_NOT: bool = false;
}
