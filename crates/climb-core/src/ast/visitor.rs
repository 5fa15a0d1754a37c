//! Visitor pattern for traversing expression trees

use super::nodes::{Expression, Operator};
use serde::Serialize;

/// Visitor trait for read-only tree traversal
pub trait Visitor: Sized {
    /// Visit an expression
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    /// Visit a constant
    fn visit_constant(&mut self, _value: f64) {
        // Leaf node, no children
    }

    /// Visit a unary expression
    fn visit_unary(&mut self, _op: Operator, operand: &Expression) {
        self.visit_expression(operand);
    }

    /// Visit a binary expression
    fn visit_binary(&mut self, left: &Expression, _op: Operator, right: &Expression) {
        self.visit_expression(left);
        self.visit_expression(right);
    }
}

/// Walk an expression
pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Constant(value) => visitor.visit_constant(*value),
        Expression::Unary { op, operand } => visitor.visit_unary(*op, operand),
        Expression::Binary { left, op, right } => visitor.visit_binary(left, *op, right),
    }
}

/// Shape summary of an expression tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NodeStats {
    pub constants: usize,
    pub unary: usize,
    pub binary: usize,
    /// Longest root-to-leaf path, counted in nodes
    pub depth: usize,
    #[serde(skip)]
    current: usize,
}

impl NodeStats {
    /// Collect statistics for a tree
    pub fn of(expr: &Expression) -> Self {
        let mut stats = Self::default();
        stats.visit_expression(expr);
        stats
    }

    /// Total number of nodes
    pub fn nodes(&self) -> usize {
        self.constants + self.unary + self.binary
    }
}

impl Visitor for NodeStats {
    fn visit_expression(&mut self, expr: &Expression) {
        self.current += 1;
        self.depth = self.depth.max(self.current);
        walk_expression(self, expr);
        self.current -= 1;
    }

    fn visit_constant(&mut self, _value: f64) {
        self.constants += 1;
    }

    fn visit_unary(&mut self, _op: Operator, operand: &Expression) {
        self.unary += 1;
        self.visit_expression(operand);
    }

    fn visit_binary(&mut self, left: &Expression, _op: Operator, right: &Expression) {
        self.binary += 1;
        self.visit_expression(left);
        self.visit_expression(right);
    }
}
