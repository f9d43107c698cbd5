/// Binary tree node with owned children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }
}

/// Iterative in-order traversal (left, node, right) using an explicit stack
/// instead of recursion. O(n) time, O(h) stack space for tree height h.
pub fn inorder_traversal(root: Option<&TreeNode>) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        // Walk to the leftmost node, remembering the path.
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        if let Some(node) = stack.pop() {
            values.push(node.val);
            current = node.right.as_deref();
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(val: i32, left: Option<Box<TreeNode>>, right: Option<Box<TreeNode>>) -> Option<Box<TreeNode>> {
        Some(Box::new(TreeNode { val, left, right }))
    }

    fn leaf(val: i32) -> Option<Box<TreeNode>> {
        node(val, None, None)
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(inorder_traversal(None), Vec::<i32>::new());
    }

    #[test]
    fn test_single_node() {
        let root = TreeNode::new(1);
        assert_eq!(inorder_traversal(Some(&root)), vec![1]);
    }

    #[test]
    fn test_right_child_with_left_grandchild() {
        // 1 -> right: 2 -> left: 3, the classic [1, null, 2, 3] shape.
        let tree = node(1, None, node(2, leaf(3), None));
        assert_eq!(inorder_traversal(tree.as_deref()), vec![1, 3, 2]);
    }

    #[test]
    fn test_full_tree_visits_left_node_right() {
        let tree = node(4, node(2, leaf(1), leaf(3)), node(6, leaf(5), leaf(7)));
        assert_eq!(inorder_traversal(tree.as_deref()), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_left_skewed_tree() {
        let tree = node(3, node(2, leaf(1), None), None);
        assert_eq!(inorder_traversal(tree.as_deref()), vec![1, 2, 3]);
    }
}
