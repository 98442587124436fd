//! Integration tests for the full pipeline.
//!
//! These drive the public `parse` entry point over multi-statement
//! programs and compare the whole returned tree, the way a downstream
//! consumer (interpreter, printer) would observe it.

use sapling::{parse, Error, Expr, Program, Stmt, SyntaxError, VariableDeclaration};

fn boxed(expr: Expr) -> Box<Expr> {
    Box::new(expr)
}

#[test]
fn test_parse_program_with_comments() {
    let source = r#"
        /**
         * Leading doc comment.
         */
        "hello";

        // Line comment
        42;
    "#;

    let ast = parse(source).unwrap();

    assert_eq!(
        ast,
        Program {
            body: vec![
                Stmt::Expression {
                    expression: Expr::String {
                        value: "hello".to_string(),
                    },
                },
                Stmt::Expression {
                    expression: Expr::Number { value: 42.0 },
                },
            ],
        }
    );
}

#[test]
fn test_parse_full_program() {
    let source = r#"
        let total = 0, enabled;

        if (count > 10 && enabled) {
            total += base * 2;
        } else {
            total = items[0].price;
        }
    "#;

    let ast = parse(source).unwrap();

    assert_eq!(
        ast,
        Program {
            body: vec![
                Stmt::Variable {
                    declarations: vec![
                        VariableDeclaration {
                            id: "total".to_string(),
                            init: Some(Expr::Number { value: 0.0 }),
                        },
                        VariableDeclaration {
                            id: "enabled".to_string(),
                            init: None,
                        },
                    ],
                },
                Stmt::If {
                    test: Expr::Logical {
                        operator: "&&".to_string(),
                        left: boxed(Expr::Binary {
                            operator: ">".to_string(),
                            left: boxed(Expr::Identifier {
                                name: "count".to_string(),
                            }),
                            right: boxed(Expr::Number { value: 10.0 }),
                        }),
                        right: boxed(Expr::Identifier {
                            name: "enabled".to_string(),
                        }),
                    },
                    consequent: Box::new(Stmt::Block {
                        body: vec![Stmt::Expression {
                            expression: Expr::Assignment {
                                operator: "+=".to_string(),
                                left: boxed(Expr::Identifier {
                                    name: "total".to_string(),
                                }),
                                right: boxed(Expr::Binary {
                                    operator: "*".to_string(),
                                    left: boxed(Expr::Identifier {
                                        name: "base".to_string(),
                                    }),
                                    right: boxed(Expr::Number { value: 2.0 }),
                                }),
                            },
                        }],
                    }),
                    alternate: Some(Box::new(Stmt::Block {
                        body: vec![Stmt::Expression {
                            expression: Expr::Assignment {
                                operator: "=".to_string(),
                                left: boxed(Expr::Identifier {
                                    name: "total".to_string(),
                                }),
                                right: boxed(Expr::Member {
                                    object: boxed(Expr::Member {
                                        object: boxed(Expr::Identifier {
                                            name: "items".to_string(),
                                        }),
                                        property: boxed(Expr::Number { value: 0.0 }),
                                        computed: true,
                                    }),
                                    property: boxed(Expr::Identifier {
                                        name: "price".to_string(),
                                    }),
                                    computed: false,
                                }),
                            },
                        }],
                    })),
                },
            ],
        }
    );
}

#[test]
fn test_parse_call_heavy_program() {
    let source = "console.log(greet(name), 1 + 2);";

    let ast = parse(source).unwrap();

    assert_eq!(
        ast,
        Program {
            body: vec![Stmt::Expression {
                expression: Expr::Call {
                    callee: boxed(Expr::Member {
                        object: boxed(Expr::Identifier {
                            name: "console".to_string(),
                        }),
                        property: boxed(Expr::Identifier {
                            name: "log".to_string(),
                        }),
                        computed: false,
                    }),
                    arguments: vec![
                        Expr::Call {
                            callee: boxed(Expr::Identifier {
                                name: "greet".to_string(),
                            }),
                            arguments: vec![Expr::Identifier {
                                name: "name".to_string(),
                            }],
                        },
                        Expr::Binary {
                            operator: "+".to_string(),
                            left: boxed(Expr::Number { value: 1.0 }),
                            right: boxed(Expr::Number { value: 2.0 }),
                        },
                    ],
                },
            }],
        }
    );
}

#[test]
fn test_rejected_inputs_produce_no_tree() {
    assert!(parse("let 5 = x;").is_err());
    assert!(parse("(1 + 2;").is_err());
    assert!(parse("a.;").is_err());
    assert!(parse("{ 1; 2 }").is_err());
}

#[test]
fn test_first_failure_aborts() {
    // The invalid assignment is reported even though later statements
    // are themselves malformed; the parse never reaches them.
    assert_eq!(
        parse("1 = 2; @"),
        Err(Error::Syntax(SyntaxError::InvalidAssignmentTarget))
    );
}

#[test]
fn test_independent_parses_share_no_state() {
    let first = parse("let a = 1;").unwrap();
    let second = parse("let a = 1;").unwrap();

    assert_eq!(first, second);
    assert!(parse("let a = ;").is_err());
    // A failed parse leaves nothing behind that affects the next call
    assert_eq!(parse("let a = 1;").unwrap(), first);
}
