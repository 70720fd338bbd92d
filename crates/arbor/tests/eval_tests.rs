use arbor::*;
use pretty_assertions::assert_eq;

fn leaf(v: i64) -> Node {
    Node::leaf(v)
}

// ═══════════════════════════════════════════════════════════════════════
// Leaves and Single Operations
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_leaf() {
    for v in [0, 1, -1, 42, i64::MIN, i64::MAX] {
        assert_eq!(evaluate(&leaf(v)), Ok(v));
    }
}

#[test]
fn test_eval_add() {
    assert_eq!(evaluate(&Node::add(leaf(2), leaf(3))), Ok(5));
    assert_eq!(evaluate(&Node::add(leaf(-2), leaf(3))), Ok(1));
}

#[test]
fn test_eval_subtract_is_left_minus_right() {
    assert_eq!(evaluate(&Node::subtract(leaf(5), leaf(3))), Ok(2));
    assert_eq!(evaluate(&Node::subtract(leaf(3), leaf(5))), Ok(-2));
}

#[test]
fn test_eval_multiply() {
    assert_eq!(evaluate(&Node::multiply(leaf(6), leaf(7))), Ok(42));
    assert_eq!(evaluate(&Node::multiply(leaf(-6), leaf(0))), Ok(0));
}

#[test]
fn test_eval_divide_truncates() {
    assert_eq!(evaluate(&Node::divide(leaf(10), leaf(3))), Ok(3));
    assert_eq!(evaluate(&Node::divide(leaf(-10), leaf(3))), Ok(-3));
    assert_eq!(evaluate(&Node::divide(leaf(10), leaf(-3))), Ok(-3));
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_divide_by_zero() {
    for a in [0, 1, -1, 99, i64::MIN] {
        assert_eq!(
            evaluate(&Node::divide(leaf(a), leaf(0))),
            Err(EvalError::DivisionByZero { dividend: a })
        );
    }
}

#[test]
fn test_eval_divide_by_zero_subtree() {
    // right subtree evaluates to zero
    let tree = Node::divide(leaf(8), Node::subtract(leaf(4), leaf(4)));
    assert!(matches!(
        evaluate(&tree),
        Err(EvalError::DivisionByZero { dividend: 8 })
    ));
}

#[test]
fn test_eval_error_propagates_from_nested_node() {
    let tree = Node::add(leaf(1), Node::multiply(leaf(2), Node::divide(leaf(3), leaf(0))));
    assert_eq!(
        evaluate(&tree),
        Err(EvalError::DivisionByZero { dividend: 3 })
    );
}

#[test]
fn test_eval_left_error_wins() {
    let tree = Node::add(
        Node::divide(leaf(1), leaf(0)),
        Node::add(leaf(i64::MAX), leaf(1)),
    );
    assert_eq!(
        evaluate(&tree),
        Err(EvalError::DivisionByZero { dividend: 1 })
    );
}

#[test]
fn test_eval_overflow() {
    let tree = Node::multiply(leaf(i64::MAX), leaf(2));
    assert!(matches!(
        evaluate(&tree),
        Err(EvalError::IntegerOverflow {
            op: OpKind::Multiply,
            ..
        })
    ));
    assert!(matches!(
        evaluate(&Node::divide(leaf(i64::MIN), leaf(-1))),
        Err(EvalError::IntegerOverflow { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Nested Trees
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_nested_example() {
    let tree = Node::divide(
        Node::multiply(
            Node::add(leaf(2), leaf(3)),
            Node::subtract(leaf(77), leaf(55)),
        ),
        leaf(2),
    );
    assert_eq!(evaluate(&tree), Ok(55));
}

#[test]
fn test_eval_skew_matters_for_subtract() {
    let left = Node::left_skewed(OpKind::Subtract, [10, 4, 3]).unwrap();
    let right = Node::right_skewed(OpKind::Subtract, [10, 4, 3]).unwrap();
    // (10 - 4) - 3 vs 10 - (4 - 3)
    assert_eq!(evaluate(&left), Ok(3));
    assert_eq!(evaluate(&right), Ok(9));
}

#[test]
fn test_eval_skew_matters_for_divide() {
    let left = Node::left_skewed(OpKind::Divide, [64, 8, 2]).unwrap();
    let right = Node::right_skewed(OpKind::Divide, [64, 8, 2]).unwrap();
    assert_eq!(evaluate(&left), Ok(4));
    assert_eq!(evaluate(&right), Ok(16));
}

#[test]
fn test_eval_skew_irrelevant_for_add_and_multiply() {
    let values = [3, -7, 11, 5];
    for op in [OpKind::Add, OpKind::Multiply] {
        let left = Node::left_skewed(op, values).unwrap();
        let right = Node::right_skewed(op, values).unwrap();
        assert_eq!(evaluate(&left), evaluate(&right));
    }
}

#[test]
fn test_eval_subtree_independently() {
    let tree = Node::multiply(Node::add(leaf(1), leaf(2)), leaf(4));
    let Node::Operation(root) = &tree else {
        panic!("expected an operation node");
    };
    let ctx = EvalContext::default();
    assert_eq!(root.left.eval(&ctx), Ok(3));
    assert_eq!(root.eval(&ctx), Ok(12));
}

#[test]
fn test_eval_does_not_mutate_tree() {
    let tree = Node::subtract(Node::multiply(leaf(3), leaf(3)), leaf(1));
    let before = tree.clone();
    assert_eq!(evaluate(&tree), Ok(8));
    assert_eq!(evaluate(&tree), Ok(8));
    assert_eq!(tree, before);
}

// ═══════════════════════════════════════════════════════════════════════
// Context
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_depth_limit() {
    let tree = Node::left_skewed(OpKind::Add, 1..=50).unwrap();
    assert_eq!(tree.depth(), 50);
    assert_eq!(evaluate(&tree), Ok(1275));
    assert_eq!(
        evaluate_with(&tree, &EvalContext::with_max_depth(10)),
        Err(EvalError::DepthLimitExceeded { limit: 10 })
    );
}

#[test]
fn test_eval_deep_tree_default_context() {
    let tree = Node::left_skewed(OpKind::Add, 1..=1001).unwrap();
    assert_eq!(evaluate(&tree), Ok(501501));
}

#[test]
fn test_eval_very_deep_trees_both_directions() {
    let left = Node::left_skewed(OpKind::Add, 1..=5000).unwrap();
    let right = Node::right_skewed(OpKind::Subtract, 1..=5000).unwrap();
    assert_eq!(evaluate(&left), Ok(12_502_500));
    // 1 - (2 - (3 - ... (4999 - 5000))) alternates to -2500
    assert_eq!(evaluate(&right), Ok(-2500));
}

#[test]
fn test_eval_deep_tree_error_still_surfaces() {
    let tree = Node::divide(Node::left_skewed(OpKind::Add, 1..=2000).unwrap(), leaf(0));
    assert_eq!(
        evaluate(&tree),
        Err(EvalError::DivisionByZero { dividend: 2_001_000 })
    );
}

#[test]
fn test_eval_interrupted() {
    let ctx = EvalContext::new();
    ctx.interrupt();
    assert_eq!(evaluate_with(&leaf(1), &ctx), Err(EvalError::Interrupted));
    ctx.reset_interrupt();
    assert_eq!(evaluate_with(&leaf(1), &ctx), Ok(1));
}

#[test]
fn test_eval_with_trace_matches_untraced() {
    let tree = Node::right_skewed(OpKind::Subtract, [9, 5, 2, 1]).unwrap();
    let traced = evaluate_with(&tree, &EvalContext::new().with_trace(true));
    assert_eq!(traced, evaluate(&tree));
}
