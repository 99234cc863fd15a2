use astquery::{Content, Expr, NodeKind, Operator, Query, QueryError, verify_expression};

fn num(n: f64) -> Expr {
    Expr::Number(n)
}

fn boolean(b: bool) -> Expr {
    Expr::Boolean(b)
}

fn plus(left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op: Operator::Plus,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn negate(operand: Expr) -> Expr {
    Expr::Unary {
        op: Operator::Minus,
        operand: Box::new(operand),
        postfix: false,
    }
}

// ============================================================================
// Depth Budget
// ============================================================================

#[test]
fn test_nested_sum_needs_three_levels() {
    // 1 + (2 + 2)
    let expr = plus(num(1.0), plus(num(2.0), num(2.0)));

    assert!(!Query::new().accept_numbers(1).run(&expr).is_match());
    assert!(!Query::new().accept_numbers(2).run(&expr).is_match());
    assert!(Query::new().accept_numbers(3).run(&expr).is_match());
    assert!(Query::new().accept_numbers(10).run(&expr).is_match());
}

#[test]
fn test_zero_budget() {
    assert_eq!(
        verify_expression(&num(1.0), 0, Content::Numbers),
        Err(QueryError::DepthExceeded)
    );
}

#[test]
fn test_literal_needs_one_level() {
    assert_eq!(verify_expression(&num(1.0), 1, Content::Numbers), Ok(()));
    assert_eq!(verify_expression(&boolean(true), 1, Content::Booleans), Ok(()));
}

#[test]
fn test_exhausted_budget_reports_depth() {
    let expr = negate(negate(num(1.0)));
    assert_eq!(
        verify_expression(&expr, 2, Content::Numbers),
        Err(QueryError::DepthExceeded)
    );
    assert_eq!(verify_expression(&expr, 3, Content::Numbers), Ok(()));
}

// ============================================================================
// Content Predicates
// ============================================================================

#[test]
fn test_numbers_reject_strings_and_booleans() {
    let with_string = plus(num(1.0), Expr::String("1".to_string()));
    let with_boolean = plus(num(1.0), boolean(true));

    assert_eq!(
        verify_expression(&with_string, 5, Content::Numbers),
        Err(QueryError::ContentMismatch {
            content: Content::Numbers,
            kind: NodeKind::String,
        })
    );
    assert!(verify_expression(&with_boolean, 5, Content::Numbers).is_err());
}

#[test]
fn test_booleans_reject_strings_and_numbers() {
    let expr = Expr::Binary {
        op: Operator::LogicalAnd,
        left: Box::new(boolean(true)),
        right: Box::new(num(2.0)),
    };

    assert_eq!(
        verify_expression(&expr, 5, Content::Booleans),
        Err(QueryError::ContentMismatch {
            content: Content::Booleans,
            kind: NodeKind::Number,
        })
    );
}

#[test]
fn test_string_literal_is_a_leaf_for_neither_mode() {
    let expr = Expr::String("x".to_string());
    assert!(verify_expression(&expr, 1, Content::Numbers).is_err());
    assert!(verify_expression(&expr, 1, Content::Booleans).is_err());
}

// ============================================================================
// Supported Shapes
// ============================================================================

#[test]
fn test_identifier_is_unsupported() {
    let expr = plus(num(1.0), Expr::Identifier("x".to_string()));
    assert_eq!(
        verify_expression(&expr, 5, Content::Numbers),
        Err(QueryError::StructureMismatch(NodeKind::Identifier))
    );
}

#[test]
fn test_assign_is_unsupported() {
    let expr = Expr::Assign {
        op: Operator::Assign,
        left: Box::new(num(1.0)),
        right: Box::new(num(2.0)),
    };
    assert_eq!(
        verify_expression(&expr, 5, Content::Numbers),
        Err(QueryError::StructureMismatch(NodeKind::Assign))
    );
}

#[test]
fn test_declarator_initializer_is_verified() {
    let declared = Expr::VariableDecl {
        name: "x".to_string(),
        initializer: Some(Box::new(negate(num(3.0)))),
    };
    let bare = Expr::VariableDecl {
        name: "y".to_string(),
        initializer: None,
    };

    assert!(Query::new().accept_numbers(3).run(&declared).is_match());
    assert_eq!(
        verify_expression(&bare, 3, Content::Numbers),
        Err(QueryError::StructureMismatch(NodeKind::VariableDecl))
    );
}

#[test]
fn test_left_failure_short_circuits() {
    // "a" + x: the string is reported, the identifier is never reached
    let expr = plus(Expr::String("a".to_string()), Expr::Identifier("x".to_string()));
    assert!(matches!(
        verify_expression(&expr, 5, Content::Numbers),
        Err(QueryError::ContentMismatch { .. })
    ));
}

#[test]
fn test_deep_tree_does_not_overflow() {
    let mut expr = num(1.0);
    for _ in 0..200_000 {
        expr = negate(expr);
    }

    assert!(Query::new().accept_numbers(usize::MAX).run(&expr).is_match());
    assert_eq!(
        verify_expression(&expr, 1_000, Content::Numbers),
        Err(QueryError::DepthExceeded)
    );

    // dropping a tree this deep recurses in Box's destructor, so leak it
    std::mem::forget(expr);
}

#[test]
fn test_right_operand_keeps_its_own_budget() {
    // (1 + 2) + (3 + 4): both operands sit two levels down
    let expr = plus(plus(num(1.0), num(2.0)), plus(num(3.0), num(4.0)));
    assert_eq!(verify_expression(&expr, 3, Content::Numbers), Ok(()));
    assert_eq!(
        verify_expression(&expr, 2, Content::Numbers),
        Err(QueryError::DepthExceeded)
    );
}
