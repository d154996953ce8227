//! # Code generation
//!
//! Renders a resolved program as a Python-like listing. Open holes are shown
//! as `[i]`, or `[i*]` for the selected hole.

use crate::ir::*;
use crate::util::pad_str;

fn hole_string(program: &Program, h: HoleName) -> String {
    let hole = program.hole(h);
    match hole.index {
        Some(i) => format!("[{}{}]", i, if hole.selected { "*" } else { "" }),
        None => panic!("invariant violated: rendering unresolved hole {}", h),
    }
}

fn python_identifier(program: &Program, id: &Identifier) -> String {
    match id {
        Identifier::Name(name) => name.clone(),
        Identifier::Hole(h) => hole_string(program, *h),
    }
}

/// Translate a type into a Python type annotation
pub fn python_type(program: &Program, t: &Type) -> String {
    match t {
        Type::Primitive(p) => p.keyword().to_owned(),
        Type::Function(ft) => format!(
            "Callable[[{}], {}]",
            ft.params
                .iter()
                .map(|t| python_type(program, t))
                .collect::<Vec<_>>()
                .join(", "),
            python_type(program, &ft.ret)
        ),
        Type::Hole(h) => hole_string(program, *h),
    }
}

fn python_expression(program: &Program, e: &Expression) -> String {
    match e {
        Expression::Injected(src) => src.clone(),
        Expression::Hole(h) => hole_string(program, *h),
    }
}

/// Translate a statement into (possibly multi-line) Python
pub fn python_statement(program: &Program, s: &Statement) -> String {
    match s {
        Statement::Empty => "".to_owned(),
        Statement::Description(text) => pad_str(text, "# "),
        Statement::Composite(first, second) => format!(
            "{}\n{}",
            python_statement(program, first),
            python_statement(program, second)
        ),
        Statement::FunctionDeclaration {
            name,
            signature,
            params,
            body,
        } => {
            let params = params
                .iter()
                .zip(signature.params.iter())
                .map(|(p, t)| {
                    format!(
                        "{}: {}",
                        python_identifier(program, p),
                        python_type(program, t)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "def {}({}) -> {}:\n{}",
                python_identifier(program, name),
                params,
                python_type(program, &signature.ret),
                pad_str(&python_statement(program, body), "    ")
            )
        }
        Statement::VariableDeclaration { name, typ, value } => format!(
            "{}: {} = {}",
            python_identifier(program, name),
            python_type(program, typ),
            python_expression(program, value)
        ),
        Statement::Return(value) => {
            format!("return {}", python_expression(program, value))
        }
        Statement::Hole(h) => hole_string(program, *h),
    }
}

/// Translate a whole program into Python
pub fn python(program: &Program) -> String {
    python_statement(program, &program.root)
}

////////////////////////////////////////////////////////////////////////////////
// Structural view

fn leaf(label: String) -> termtree::Tree<String> {
    termtree::Tree::new(label)
}

fn hole_leaf(program: &Program, h: HoleName) -> termtree::Tree<String> {
    let tactics = program
        .hole(h)
        .tactics
        .iter()
        .map(|k| k.keyword())
        .collect::<Vec<_>>()
        .join(", ");
    leaf(format!("Hole {} {{{}}}", hole_string(program, h), tactics))
}

fn identifier_tree(program: &Program, id: &Identifier) -> termtree::Tree<String> {
    match id {
        Identifier::Name(name) => leaf(format!("Identifier {}", name)),
        Identifier::Hole(h) => hole_leaf(program, *h),
    }
}

fn type_tree(program: &Program, t: &Type) -> termtree::Tree<String> {
    match t {
        Type::Primitive(p) => leaf(format!("Primitive {}", p.keyword())),
        Type::Function(ft) => function_type_tree(program, ft),
        Type::Hole(h) => hole_leaf(program, *h),
    }
}

fn function_type_tree(
    program: &Program,
    ft: &FunctionType,
) -> termtree::Tree<String> {
    leaf("Function".to_owned()).with_leaves(
        ft.params
            .iter()
            .chain(std::iter::once(ft.ret.as_ref()))
            .map(|t| type_tree(program, t)),
    )
}

fn expression_tree(program: &Program, e: &Expression) -> termtree::Tree<String> {
    match e {
        Expression::Injected(src) => leaf(format!("Injected {}", src)),
        Expression::Hole(h) => hole_leaf(program, *h),
    }
}

fn statement_tree(program: &Program, s: &Statement) -> termtree::Tree<String> {
    match s {
        Statement::Empty => leaf("Empty".to_owned()),
        Statement::Description(text) => leaf(format!("Description {:?}", text)),
        Statement::Composite(first, second) => leaf("Composite".to_owned())
            .with_leaves([
                statement_tree(program, first),
                statement_tree(program, second),
            ]),
        Statement::FunctionDeclaration {
            name,
            signature,
            params,
            body,
        } => leaf("FunctionDeclaration".to_owned())
            .with_leaves(
                std::iter::once(identifier_tree(program, name))
                    .chain(std::iter::once(function_type_tree(
                        program, signature,
                    )))
                    .chain(params.iter().map(|p| identifier_tree(program, p)))
                    .chain(std::iter::once(statement_tree(program, body))),
            ),
        Statement::VariableDeclaration { name, typ, value } => {
            leaf("VariableDeclaration".to_owned()).with_leaves([
                identifier_tree(program, name),
                type_tree(program, typ),
                expression_tree(program, value),
            ])
        }
        Statement::Return(value) => leaf("Return".to_owned())
            .with_leaves([expression_tree(program, value)]),
        Statement::Hole(h) => hole_leaf(program, *h),
    }
}

/// A structural view of the program tree
pub fn tree(program: &Program) -> termtree::Tree<String> {
    statement_tree(program, &program.root)
}
