//! Tests for declarations visible through imports.

mod common;
use common::{check, main_with};

use std::rc::Rc;

use mlang_ast::{Declaration, Expression, ImportDeclaration, Parameter, Program, Property, Statement};
use mlang_core::{Error, Problem, Type};

fn main_importing(imports: Vec<ImportDeclaration>, lines: Vec<Statement>) -> Program {
    let main = Declaration::function("main", Type::void(), vec![], lines);
    Program::new(vec![main]).with_imports(imports)
}

fn library() -> Rc<Program> {
    Rc::new(Program::new(vec![
        Declaration::object("Vec2", vec![Property::new("x", Type::int32())]).export(),
        Declaration::function(
            "length",
            Type::int32(),
            vec![Parameter::new("v", Type::new("Vec2"))],
            vec![],
        )
        .export(),
        Declaration::function("hidden", Type::void(), vec![], vec![]),
    ]))
}

#[test]
fn test_log_requires_system_import() {
    let call = Statement::call(Expression::variable("log"), vec![Expression::string("hi")]);
    let result = check(main_importing(vec![], vec![call.clone()]));
    assert!(matches!(
        result,
        Err(Error::Semantic(Problem::MissingVariable { name })) if name == "log"
    ));

    assert!(check(main_with(vec![call])).is_ok());
}

#[test]
fn test_exported_declarations_are_visible() {
    let lines = vec![
        Statement::declare("v", Type::new("Vec2")),
        Statement::define(
            "n",
            Type::int32(),
            Expression::call(Expression::variable("length"), vec![Expression::variable("v")]),
        ),
        Statement::assign(
            Expression::property(Expression::variable("v"), "x"),
            Expression::variable("n"),
        ),
    ];
    let source = main_importing(vec![ImportDeclaration::resolved("lib", library())], lines);
    assert!(check(source).is_ok());
}

#[test]
fn test_private_declarations_are_hidden() {
    let lines = vec![Statement::call(Expression::variable("hidden"), vec![])];
    let source = main_importing(vec![ImportDeclaration::resolved("lib", library())], lines);
    assert!(matches!(
        check(source),
        Err(Error::Semantic(Problem::MissingVariable { name })) if name == "hidden"
    ));
}

#[test]
fn test_imported_bodies_are_checked() {
    let broken = Rc::new(Program::new(vec![
        Declaration::function(
            "broken",
            Type::void(),
            vec![],
            vec![Statement::assign(Expression::variable("nope"), Expression::int(1))],
        )
        .export(),
    ]));
    let source = main_importing(vec![ImportDeclaration::resolved("broken", broken)], vec![]);
    assert!(matches!(
        check(source),
        Err(Error::Semantic(Problem::MissingVariable { name })) if name == "nope"
    ));
}

#[test]
fn test_unresolved_import() {
    let source = main_importing(vec![ImportDeclaration::unresolved("lib")], vec![]);
    assert!(matches!(check(source), Err(Error::UnresolvedImport(path)) if path == "lib"));
}

#[test]
fn test_imports_are_kept_after_check() {
    let source = main_importing(vec![ImportDeclaration::resolved("lib", library())], vec![]);
    let checked = check(source).unwrap();
    let imported = checked.imports[0].program.as_ref().unwrap();
    assert_eq!(imported.nodes.len(), 3);
}

#[test]
fn test_shared_imports_stay_shared_after_check() {
    let shared = library();
    let middle = Rc::new(
        Program::new(vec![]).with_imports(vec![ImportDeclaration::resolved(
            "lib",
            Rc::clone(&shared),
        )]),
    );
    let source = main_importing(
        vec![
            ImportDeclaration::resolved("lib", Rc::clone(&shared)),
            ImportDeclaration::resolved("middle", middle),
            ImportDeclaration::resolved("again", shared),
        ],
        vec![],
    );

    let checked = check(source).unwrap();
    let direct = checked.imports[0].program.as_ref().unwrap();
    let again = checked.imports[2].program.as_ref().unwrap();
    let through_middle = checked.imports[1].program.as_ref().unwrap().imports[0]
        .program
        .as_ref()
        .unwrap();
    assert!(Rc::ptr_eq(direct, again));
    assert!(Rc::ptr_eq(direct, through_middle));
}

#[test]
fn test_diamond_imports_check_in_linear_time() {
    // Each module imports the previous one twice.
    let mut previous = library();
    for depth in 0..40 {
        previous = Rc::new(Program::new(vec![]).with_imports(vec![
            ImportDeclaration::resolved(format!("left{depth}"), Rc::clone(&previous)),
            ImportDeclaration::resolved(format!("right{depth}"), previous),
        ]));
    }
    let source = main_importing(vec![ImportDeclaration::resolved("top", previous)], vec![]);
    assert!(check(source).is_ok());
}
