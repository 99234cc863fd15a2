use astquery::{Capture, Expr, NodeKind, Query, QueryError, Statement, StatementKind};

fn ident(name: &str) -> Expr {
    Expr::Identifier(name.to_string())
}

fn call(name: &str) -> Expr {
    Expr::Call {
        callee: Box::new(ident(name)),
        args: vec![],
    }
}

fn declarator(name: &str, initializer: Expr) -> Expr {
    Expr::VariableDecl {
        name: name.to_string(),
        initializer: Some(Box::new(initializer)),
    }
}

// ============================================================================
// Statement Adapter
// ============================================================================

#[test]
fn test_expression_statement() {
    let statement = Statement::Expression(call("f"));
    assert!(Query::new().must_be_call().run_statement(&statement).is_match());
}

#[test]
fn test_return_statement() {
    let statement = Statement::Return(Some(call("f")));
    assert!(Query::new().must_be_call().run_statement(&statement).is_match());
}

#[test]
fn test_bare_return() {
    let statement = Statement::Return(None);

    assert_eq!(
        Query::new().must_be_call().run_statement(&statement).result,
        Err(QueryError::MissingNode)
    );

    let outcome = Query::new().run_statement(&statement);
    assert!(outcome.is_match());
    assert_eq!(outcome.collected, None);
}

#[test]
fn test_variable_statement_checks_every_declarator() {
    let statement = Statement::Variable(vec![
        declarator("a", call("f")),
        declarator("b", call("g")),
    ]);
    let query = Query::new().right_side(Query::new().must_be_call());

    assert!(query.run_statement(&statement).is_match());
}

#[test]
fn test_variable_statement_stops_at_first_failure() {
    let statement = Statement::Variable(vec![
        declarator("a", call("f")),
        declarator("b", ident("x")),
        declarator("c", Expr::This),
    ]);
    let outcome = Query::new()
        .right_side(Query::new().must_be_call())
        .run_statement(&statement);

    assert_eq!(
        outcome.result,
        Err(QueryError::TypeMismatch {
            expected: &[NodeKind::Call],
            actual: NodeKind::Identifier,
        })
    );
}

#[test]
fn test_variable_statement_keeps_first_capture() {
    let statement = Statement::Variable(vec![
        declarator("a", call("f")),
        declarator("b", call("g")),
    ]);
    let Statement::Variable(declarators) = &statement else {
        unreachable!()
    };

    let outcome = Query::new().must_be_call_d(true).run_statement(&statement);
    let Expr::VariableDecl {
        initializer: Some(first),
        ..
    } = &declarators[0]
    else {
        unreachable!()
    };
    assert!(std::ptr::eq(outcome.collected.unwrap(), first.as_ref()));
}

#[test]
fn test_empty_variable_statement() {
    let statement = Statement::Variable(vec![]);
    assert!(Query::new().must_be_call().run_statement(&statement).is_match());
}

#[test]
fn test_unsupported_statements() {
    let statements = vec![
        Statement::Block(vec![Statement::Expression(call("f"))]),
        Statement::If {
            test: ident("x"),
            consequent: Box::new(Statement::Expression(call("f"))),
            alternate: None,
        },
        Statement::While {
            test: ident("x"),
            body: Box::new(Statement::Empty),
        },
        Statement::Throw(call("f")),
        Statement::Empty,
    ];

    for statement in &statements {
        // even a query without operations rejects these
        let outcome = Query::new().run_statement(statement);
        assert_eq!(
            outcome.result,
            Err(QueryError::UnsupportedStatement(statement.kind()))
        );
    }
}

#[test]
fn test_unsupported_statement_message() {
    let err = Query::new()
        .run_statement(&Statement::Empty)
        .result
        .unwrap_err();
    assert_eq!(err.to_string(), "unsupported statement: empty_statement");
    assert_eq!(Statement::Empty.kind(), StatementKind::Empty);
}

// ============================================================================
// Capture
// ============================================================================

#[test]
fn test_capture_is_sticky_across_runs() {
    let first = call("f");
    let second = call("g");
    let query = Query::new().must_be_call();

    let mut capture = Capture::new();
    query.run_with(&first, &mut capture).unwrap();
    query.run_with(&second, &mut capture).unwrap();

    assert!(std::ptr::eq(capture.collected().unwrap(), &first));
}

#[test]
fn test_capture_reset() {
    let first = call("f");
    let second = call("g");
    let query = Query::new().must_be_call();

    let mut capture = Capture::new();
    query.run_with(&first, &mut capture).unwrap();
    capture.reset();
    assert_eq!(capture.collected(), None);

    query.run_with(&second, &mut capture).unwrap();
    assert!(std::ptr::eq(capture.collected().unwrap(), &second));
}

#[test]
fn test_run_starts_fresh_each_time() {
    let first = call("f");
    let second = call("g");
    let query = Query::new().must_be_call();

    let a = query.run(&first);
    let b = query.run(&second);

    assert!(std::ptr::eq(a.collected.unwrap(), &first));
    assert!(std::ptr::eq(b.collected.unwrap(), &second));
}

#[test]
fn test_run_statement_with_shared_capture() {
    let statements = vec![
        Statement::Expression(call("f")),
        Statement::Return(Some(call("g"))),
    ];
    let query = Query::new().must_be_call();

    let mut capture = Capture::new();
    for statement in &statements {
        query.run_statement_with(statement, &mut capture).unwrap();
    }

    assert_eq!(capture.collected(), Some(&call("f")));
}
