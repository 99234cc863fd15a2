// Property tests for the matching combinators.

use astquery::{Expr, Operator, Query, Statement};
use proptest::prelude::*;

const BINARY_OPERATORS: [Operator; 8] = [
    Operator::Plus,
    Operator::Minus,
    Operator::Multiply,
    Operator::LogicalAnd,
    Operator::LogicalOr,
    Operator::Equal,
    Operator::Less,
    Operator::ShiftLeft,
];

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i32>().prop_map(|n| Expr::Number(n as f64)),
        any::<bool>().prop_map(Expr::Boolean),
        "[a-z]{1,4}".prop_map(Expr::String),
        "[a-z]{1,4}".prop_map(Expr::Identifier),
        Just(Expr::This),
    ]
}

fn tree() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(5, 32, 3, |inner| {
        prop_oneof![
            (0..BINARY_OPERATORS.len(), inner.clone(), inner.clone()).prop_map(|(i, l, r)| {
                Expr::Binary {
                    op: BINARY_OPERATORS[i],
                    left: Box::new(l),
                    right: Box::new(r),
                }
            }),
            inner.clone().prop_map(|operand| Expr::Unary {
                op: Operator::Not,
                operand: Box::new(operand),
                postfix: false,
            }),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3)).prop_map(
                |(callee, args)| Expr::Call {
                    callee: Box::new(callee),
                    args,
                }
            ),
            (inner.clone(), "[a-z]{1,4}").prop_map(|(left, member)| Expr::Dot {
                left: Box::new(left),
                member: Box::new(Expr::Identifier(member)),
            }),
            prop::collection::vec(inner, 0..3).prop_map(Expr::Array),
        ]
    })
}

/// Nests `levels` additions of number literals, right-leaning.
fn nested_sum(levels: usize) -> Expr {
    let mut expr = Expr::Number(2.0);
    for _ in 0..levels {
        expr = Expr::Binary {
            op: Operator::Plus,
            left: Box::new(Expr::Number(1.0)),
            right: Box::new(expr),
        };
    }
    expr
}

fn contains_this(expr: &Expr) -> bool {
    match expr {
        Expr::This => true,
        Expr::Binary { left, right, .. } => contains_this(left) || contains_this(right),
        Expr::Unary { operand, .. } => contains_this(operand),
        Expr::Call { callee, args } => contains_this(callee) || args.iter().any(contains_this),
        Expr::Dot { left, member } => contains_this(left) || contains_this(member),
        Expr::Array(items) => items.iter().any(contains_this),
        _ => false,
    }
}

proptest! {
    #[test]
    fn operator_filter_is_set_membership(
        op_index in 0..BINARY_OPERATORS.len(),
        allowed in prop::collection::vec(0..BINARY_OPERATORS.len(), 0..4),
        left in tree(),
        right in tree(),
    ) {
        let op = BINARY_OPERATORS[op_index];
        let set: Vec<Operator> = allowed.iter().map(|&i| BINARY_OPERATORS[i]).collect();
        let expr = Expr::Binary { op, left: Box::new(left), right: Box::new(right) };

        let outcome = Query::new().must_be_binary().has_operator(set.clone()).run(&expr);
        prop_assert_eq!(outcome.is_match(), set.contains(&op));
    }

    #[test]
    fn one_side_other_side_is_order_independent(left in tree(), right in tree()) {
        let one = Query::new().accept_boolean(4);
        let other = Query::new().accept_numbers(4);
        let query = Query::new().one_side_other_side(one.clone(), other.clone());

        let forward = Expr::Binary {
            op: Operator::LogicalOr,
            left: Box::new(left.clone()),
            right: Box::new(right.clone()),
        };
        let backward = Expr::Binary {
            op: Operator::LogicalOr,
            left: Box::new(right.clone()),
            right: Box::new(left.clone()),
        };

        let expected = (one.run(&left).is_match() && other.run(&right).is_match())
            || (one.run(&right).is_match() && other.run(&left).is_match());
        prop_assert_eq!(query.run(&forward).is_match(), expected);
        prop_assert_eq!(query.run(&backward).is_match(), expected);
    }

    #[test]
    fn number_budget_must_exceed_nesting(levels in 0usize..12, budget in 0usize..16) {
        let expr = nested_sum(levels);
        let outcome = Query::new().accept_numbers(budget).run(&expr);
        prop_assert_eq!(outcome.is_match(), budget > levels);
    }

    #[test]
    fn contains_this_matches_presence(expr in tree()) {
        let outcome = Query::new().contains_this().run(&expr);
        prop_assert_eq!(outcome.is_match(), contains_this(&expr));
    }

    #[test]
    fn either_takes_first_success(expr in tree()) {
        let failing = Query::new().must_be_function_literal();
        let passing = Query::new().empty();
        let outcome = Query::new().either([failing, passing]).run(&expr);
        prop_assert!(outcome.is_match());
    }

    #[test]
    fn unsupported_statements_never_match(expr in tree()) {
        let statements = [
            Statement::Throw(expr.clone()),
            Statement::Block(vec![Statement::Expression(expr.clone())]),
            Statement::While { test: expr, body: Box::new(Statement::Empty) },
        ];
        for statement in &statements {
            prop_assert!(!Query::new().empty().run_statement(statement).is_match());
        }
    }
}
