use crate::graph::{GraphInner, NodeId};

/// Builds a topological order of the nodes reachable from `root` through
/// parent edges, via depth-first post-order traversal.
///
/// Every node appears after all of its parents, so walking the result in
/// reverse guarantees that a node's backward rule runs only after every one
/// of its consumers has contributed its gradient. The visited table is keyed
/// by node index, so deduplication is unaffected by nodes holding equal data,
/// and the order is deterministic for a fixed graph.
pub(crate) fn topological_sort(inner: &GraphInner, root: NodeId) -> Vec<NodeId> {
    let mut visited = vec![false; inner.len()];
    let mut order = Vec::new();
    visit(inner, root, &mut visited, &mut order);
    order
}

fn visit(inner: &GraphInner, id: NodeId, visited: &mut [bool], order: &mut Vec<NodeId>) {
    if visited[id.index()] {
        return;
    }
    visited[id.index()] = true;
    for parent in inner.node(id).op.parents() {
        visit(inner, parent, visited, order);
    }
    order.push(id);
}
