//! Exhaustive dispatch over node variants.

use crate::{ArrayNode, BooleanNode, Node, NullNode, NumberNode, ObjectNode, StringNode};

/// Visitor over the six node variants.
///
/// Implementors must handle every variant; there is no fallback case.
pub trait NodeVisitor {
    type Output;

    fn visit_null(&mut self, node: &NullNode) -> Self::Output;
    fn visit_boolean(&mut self, node: &BooleanNode) -> Self::Output;
    fn visit_number(&mut self, node: &NumberNode) -> Self::Output;
    fn visit_string(&mut self, node: &StringNode) -> Self::Output;
    fn visit_array(&mut self, node: &ArrayNode) -> Self::Output;
    fn visit_object(&mut self, node: &ObjectNode) -> Self::Output;
}

impl Node {
    /// Dispatch to the visitor method matching this node's variant.
    pub fn accept<V: NodeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Null(n) => visitor.visit_null(n),
            Node::Boolean(n) => visitor.visit_boolean(n),
            Node::Number(n) => visitor.visit_number(n),
            Node::String(n) => visitor.visit_string(n),
            Node::Array(n) => visitor.visit_array(n),
            Node::Object(n) => visitor.visit_object(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts string leaves anywhere in a tree.
    struct StringCounter;

    impl NodeVisitor for StringCounter {
        type Output = usize;

        fn visit_null(&mut self, _: &NullNode) -> usize {
            0
        }
        fn visit_boolean(&mut self, _: &BooleanNode) -> usize {
            0
        }
        fn visit_number(&mut self, _: &NumberNode) -> usize {
            0
        }
        fn visit_string(&mut self, _: &StringNode) -> usize {
            1
        }
        fn visit_array(&mut self, node: &ArrayNode) -> usize {
            node.iter().map(|n| n.accept(self)).sum()
        }
        fn visit_object(&mut self, node: &ObjectNode) -> usize {
            node.iter().map(|(_, n)| n.accept(self)).sum()
        }
    }

    #[test]
    fn visits_nested_values() {
        let node = Node::object([
            ("a", Node::from("x")),
            ("b", Node::array([Node::from("y"), Node::from(1), Node::null()])),
            ("c", Node::object([("d", "z")])),
        ]);
        assert_eq!(node.accept(&mut StringCounter), 3);
    }
}
