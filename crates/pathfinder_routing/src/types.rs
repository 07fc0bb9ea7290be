pub type NodeId = usize;

/// Cost of travelling along a connection. Zero marks a connection that cannot be travelled.
pub type Cost = u32;

/// Sum of connection costs along a route.
pub type PathCost = u64;
