use node_readiness_gate::core::node::{ConditionStatus, Node, NodeConditionType};

pub fn create_node(
    name: &str,
    conditions: &[(NodeConditionType, ConditionStatus)],
    unschedulable: bool,
) -> Node {
    let mut node = Node::new(name.to_string()).with_unschedulable(unschedulable);
    for (condition_type, status) in conditions.iter() {
        node = node.with_condition(condition_type.clone(), *status);
    }
    node
}

// All orderings of the node's conditions, the original one included.
pub fn condition_permutations(node: &Node) -> Vec<Node> {
    fn permute(rest: &mut Vec<usize>, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if rest.is_empty() {
            out.push(current.clone());
            return;
        }
        for i in 0..rest.len() {
            let idx = rest.remove(i);
            current.push(idx);
            permute(rest, current, out);
            current.pop();
            rest.insert(i, idx);
        }
    }

    let mut indices: Vec<usize> = (0..node.status.conditions.len()).collect();
    let mut orders: Vec<Vec<usize>> = vec![];
    permute(&mut indices, &mut vec![], &mut orders);

    orders
        .into_iter()
        .map(|order| {
            let mut permuted = node.clone();
            permuted.status.conditions = order
                .into_iter()
                .map(|idx| node.status.conditions[idx].clone())
                .collect();
            permuted
        })
        .collect()
}
