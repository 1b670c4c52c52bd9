//! Tests for the JSON form of the tree consumed from the front end.

use mlang_ast::{Declaration, Expression, Operator, Program, Statement};
use mlang_core::Type;

#[test]
fn test_deserialize_program() {
    let json = r#"
    {
        "imports": [{ "path": "system" }],
        "nodes": [
            {
                "kind": "object",
                "name": "Point",
                "properties": [{ "name": "x", "type": { "name": "int32" } }]
            },
            {
                "kind": "function",
                "exported": true,
                "name": "main",
                "type": { "name": "void" },
                "params": [{ "name": "xs", "type": { "name": "int32", "isArray": true } }],
                "body": {
                    "lines": [
                        {
                            "kind": "let",
                            "name": "b",
                            "type": { "name": "bool" },
                            "assignment": {
                                "kind": "arithmetic",
                                "operator": "<",
                                "left": { "kind": "intValue", "value": 1 },
                                "right": {
                                    "kind": "indexing",
                                    "from": { "kind": "variable", "name": "xs" },
                                    "index": { "kind": "intValue", "value": 0 }
                                }
                            }
                        },
                        {
                            "kind": "methodCall",
                            "from": { "kind": "variable", "name": "log" },
                            "args": [{ "kind": "stringValue", "value": "hi" }]
                        }
                    ]
                }
            }
        ]
    }"#;

    let program: Program = serde_json::from_str(json).unwrap();
    assert_eq!(program.imports[0].path, "system");
    assert!(program.imports[0].program.is_none());

    let Declaration::Function(main) = &program.nodes[1] else {
        panic!("expected function");
    };
    assert!(main.exported);
    assert_eq!(main.params[0].ty, Type::array("int32"));
    assert_eq!(main.body.lines[0].to_string(), "bool b = (1 < xs[0])");
    assert_eq!(main.body.lines[1].to_string(), "log(\"hi\")");
}

#[test]
fn test_decorations_are_serialized() {
    let mut expr = Expression::arithmetic(Operator::Add, Expression::int(1), Expression::int(2));
    let before = serde_json::to_value(&expr).unwrap();
    assert!(before.get("type").is_none());

    expr.decorate(Type::int32());
    let after = serde_json::to_value(&expr).unwrap();
    assert_eq!(after["type"]["name"], "int32");
    assert_eq!(after["kind"], "arithmetic");
    assert_eq!(after["operator"], "+");
}

#[test]
fn test_statement_tags() {
    let stmt = Statement::if_then(Expression::boolean(true), Statement::scope(vec![]), None);
    let value = serde_json::to_value(&stmt).unwrap();
    assert_eq!(value["kind"], "if");
    assert_eq!(value["then"]["kind"], "scope");
    assert!(value.get("elseThen").is_none());
}
