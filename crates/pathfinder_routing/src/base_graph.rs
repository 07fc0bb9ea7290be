use crate::{
    error::GraphError,
    graph::Graph,
    node::{AdjacentNodes, Node},
    position::GridPosition,
    types::{Cost, NodeId},
};

/// Owning node store. Ids are issued sequentially from 0 by each graph and are
/// never reused, so they double as indices into `nodes`.
#[derive(Default, Debug, Clone)]
pub struct BaseGraph {
    nodes: Vec<Node>,
    connections: usize,
}

impl BaseGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        BaseGraph {
            nodes: Vec::with_capacity(nodes),
            connections: 0,
        }
    }

    pub fn add_node(&mut self, x: i32, y: i32) -> NodeId {
        let node_id = self.nodes.len();
        self.nodes.push(Node::new(node_id, GridPosition::new(x, y)));
        node_id
    }

    /// Appends a directed connection `from -> to`. The reverse direction is not added.
    pub fn add_connection(
        &mut self,
        from_node: NodeId,
        to_node: NodeId,
        cost: Cost,
    ) -> Result<(), GraphError> {
        if !self.contains_node(to_node) {
            return Err(GraphError::NodeNotFound(to_node));
        }

        let node = self
            .nodes
            .get_mut(from_node)
            .ok_or(GraphError::NodeNotFound(from_node))?;

        node.add_connection(to_node, cost);
        self.connections += 1;

        Ok(())
    }

    pub fn node(&self, node_id: NodeId) -> Result<&Node, GraphError> {
        self.nodes
            .get(node_id)
            .ok_or(GraphError::NodeNotFound(node_id))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl Graph for BaseGraph {
    type AdjacentIterator<'a> = AdjacentNodes<'a>;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn connection_count(&self) -> usize {
        self.connections
    }

    fn contains_node(&self, node_id: NodeId) -> bool {
        node_id < self.nodes.len()
    }

    fn node_position(&self, node_id: NodeId) -> GridPosition {
        self.nodes[node_id].position()
    }

    fn adjacent_nodes(&self, node_id: NodeId) -> Self::AdjacentIterator<'_> {
        self.nodes[node_id].adjacent_nodes()
    }

    fn cost_to_travel(&self, from: NodeId, to: NodeId) -> Cost {
        self.nodes[from].cost_to_travel(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node() {
        let mut graph = BaseGraph::new();

        let first = graph.add_node(1, 2);
        let second = graph.add_node(1, 2);

        assert_ne!(first, second);
        assert_eq!(graph.node_count(), 2);

        let node = graph.node(first).unwrap();
        assert_eq!(node.id(), first);
        assert_eq!((node.x(), node.y()), (1, 2));
        assert_eq!(graph.node(second).unwrap().id(), second);
    }

    #[test]
    fn test_ids_are_scoped_to_graph() {
        let mut graph_a = BaseGraph::new();
        let mut graph_b = BaseGraph::with_capacity(4);

        assert_eq!(graph_a.add_node(0, 0), 0);
        assert_eq!(graph_a.add_node(0, 1), 1);
        assert_eq!(graph_b.add_node(5, 5), 0);
    }

    #[test]
    fn test_node_not_found() {
        let graph = BaseGraph::new();

        assert_eq!(graph.node(0).unwrap_err(), GraphError::NodeNotFound(0));
        assert!(!graph.contains_node(0));
    }

    #[test]
    fn test_add_connection() {
        let mut graph = BaseGraph::new();
        let a = graph.add_node(0, 0);
        let b = graph.add_node(1, 0);

        assert!(graph.add_connection(a, b, 3).is_ok());

        assert_eq!(graph.cost_to_travel(a, b), 3);
        // Connections are directed
        assert_eq!(graph.cost_to_travel(b, a), 0);
        assert_eq!(graph.adjacent_nodes(a).collect::<Vec<_>>(), vec![b]);
        assert_eq!(graph.adjacent_nodes(b).count(), 0);
        assert_eq!(graph.connection_count(), 1);
    }

    #[test]
    fn test_add_connection_unknown_node() {
        let mut graph = BaseGraph::new();
        let a = graph.add_node(0, 0);

        assert_eq!(
            graph.add_connection(a, 7, 1),
            Err(GraphError::NodeNotFound(7))
        );
        assert_eq!(
            graph.add_connection(9, a, 1),
            Err(GraphError::NodeNotFound(9))
        );

        assert!(graph.node(a).unwrap().connections().is_empty());
        assert_eq!(graph.connection_count(), 0);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_zero_cost_connection_is_not_adjacent() {
        let mut graph = BaseGraph::new();
        let a = graph.add_node(0, 0);
        let b = graph.add_node(1, 0);
        let c = graph.add_node(2, 0);

        graph.add_connection(a, b, 0).unwrap();
        graph.add_connection(a, c, 2).unwrap();

        assert_eq!(graph.adjacent_nodes(a).collect::<Vec<_>>(), vec![c]);
        assert_eq!(graph.cost_to_travel(a, b), 0);
    }
}
