use crate::graph::*;

/// Inspects a labeled graph with customized indentation.
///
/// Every vertex is on its own line, followed by its out-edges one level deeper.
pub struct GraphDebug<'a, V, E, D> {
    graph: &'a Graph<V, E, D>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, V, E, D> GraphDebug<'a, V, E, D>
where
    D: DirectedOrNot,
{
    pub fn new(graph: &'a Graph<V, E, D>) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, V, E, D> std::fmt::Debug for GraphDebug<'a, V, E, D>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    D: DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if D::DIRECTED_OR_NOT { "->" } else { "--" };
        for v in self.graph.vertices() {
            self.display_indent(f, 0)?;
            match self.graph.vertex_label(v) {
                Some(label) => writeln!(f, "{:?}({:?})", v, label)?,
                None => writeln!(f, "{:?}", v)?,
            }
            for e in self.graph.out_edges(v) {
                self.display_indent(f, 1)?;
                match self.graph.edge_label(e.id) {
                    Some(label) => writeln!(f, "--{:?}({:?}){} {:?}", e.id, label, arrow, e.sink)?,
                    None => writeln!(f, "--{:?}{} {:?}", e.id, arrow, e.sink)?,
                }
            }
        }
        Ok(())
    }
}

impl<V, E, D> Graph<V, E, D>
where
    D: DirectedOrNot,
{
    pub fn debug(&self) -> GraphDebug<'_, V, E, D> {
        GraphDebug::new(self)
    }
}

impl<V, E, D> std::fmt::Debug for Graph<V, E, D>
where
    V: std::fmt::Debug,
    E: std::fmt::Debug,
    D: DirectedOrNot,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
