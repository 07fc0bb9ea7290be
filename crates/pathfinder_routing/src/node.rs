use std::{iter::FilterMap, slice};

use crate::{
    connection::Connection,
    position::GridPosition,
    types::{Cost, NodeId},
};

pub type AdjacentNodes<'a> =
    FilterMap<slice::Iter<'a, Connection>, fn(&Connection) -> Option<NodeId>>;

fn traversable_target(connection: &Connection) -> Option<NodeId> {
    connection.is_traversable().then_some(connection.target())
}

#[derive(Clone, Debug)]
pub struct Node {
    id: NodeId,
    position: GridPosition,
    connections: Vec<Connection>,
}

impl Node {
    pub(crate) fn new(id: NodeId, position: GridPosition) -> Self {
        Node {
            id,
            position,
            connections: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x()
    }

    pub fn y(&self) -> i32 {
        self.position.y()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub(crate) fn add_connection(&mut self, target: NodeId, cost: Cost) {
        self.connections.push(Connection::new(target, cost));
    }

    /// Cost of the first outgoing connection to `target`, or 0 when there is none.
    pub fn cost_to_travel(&self, target: NodeId) -> Cost {
        self.connections
            .iter()
            .find(|connection| connection.target() == target)
            .map_or(0, Connection::cost)
    }

    /// Targets of the outgoing connections with a non-zero cost, in insertion order.
    pub fn adjacent_nodes(&self) -> AdjacentNodes<'_> {
        self.connections
            .iter()
            .filter_map(traversable_target as fn(&Connection) -> Option<NodeId>)
    }
}
