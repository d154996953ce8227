//! # Parsing tactic payloads
//!
//! Types are parsed with a small chumsky grammar: primitive keywords,
//! parenthesized comma-separated tuples, and right-associative `->` arrows.
//! Identifiers, integers and expressions are borrowed from the Python grammar
//! (via rustpython-parser): the text must parse as a standalone Python
//! expression of the right shape. Expressions are otherwise left opaque.

use crate::error::{Subject, SyntaxError};
use crate::ir::*;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use rustpython_ast as ast;

// Shorthand

trait P<T>: Parser<char, T, Error = Simple<char>> {}
impl<S, T> P<T> for S where S: Parser<char, T, Error = Simple<char>> {}

// Errors

fn error(subject: Subject, src: &str, err: &Simple<char>) -> SyntaxError {
    let message = match err.reason() {
        SimpleReason::Custom(msg) => msg.clone(),
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("Unclosed {:?}", delimiter)
        }
        SimpleReason::Unexpected => match err.found() {
            Some(_) => "Unexpected character".to_owned(),
            None => "Unexpected end of input".to_owned(),
        },
    };
    SyntaxError::new(subject, src, message, err.span(), err.found().copied())
}

fn python_error(
    subject: Subject,
    src: &str,
    err: &rustpython_parser::ParseError,
) -> SyntaxError {
    let offset = u32::from(err.offset) as usize;
    let start = src.get(..offset).map_or(0, |s| s.chars().count());
    SyntaxError::new(
        subject,
        src,
        format!("Invalid {} ({})", subject.name(), err.error),
        start..start + 1,
        src.chars().nth(start),
    )
}

// Types

fn primitive() -> impl P<Primitive> {
    choice((
        just("bool").to(Primitive::Bool),
        just("int").to(Primitive::Int),
        just("float").to(Primitive::Float),
        just("complex").to(Primitive::Complex),
        just("str").to(Primitive::Str),
    ))
}

fn typ() -> impl P<Type> {
    recursive(|typ| {
        let tuple = typ
            .clone()
            .padded()
            .separated_by(just(','))
            .padded()
            .delimited_by(just('('), just(')'));

        choice((primitive().map(|p| vec![Type::Primitive(p)]), tuple))
            .padded()
            .then(just("->").padded().ignore_then(typ).or_not())
            .try_map(|(mut left, right), span| match right {
                Some(ret) => Ok(Type::Function(FunctionType {
                    params: left,
                    ret: Box::new(ret),
                })),
                None if left.len() == 1 => Ok(left.remove(0)),
                None => Err(Simple::custom(span, "Unexpected tuple type")),
            })
    })
}

// Python fragments

fn python_expression(
    subject: Subject,
    src: &str,
) -> Result<ast::Expr, SyntaxError> {
    use rustpython_parser::Mode;

    match rustpython_parser::parse(src, Mode::Expression, "<payload>") {
        Ok(ast::Mod::Expression(ast::ModExpression { body, .. })) => Ok(*body),
        Ok(_) => Err(SyntaxError::invalid(subject, src)),
        Err(e) => Err(python_error(subject, src, &e)),
    }
}

// Top-level functions

/// Parse a type
pub fn type_str(src: &str) -> Result<Type, SyntaxError> {
    typ()
        .then_ignore(end())
        .parse(src)
        .map_err(|errs| match errs.first() {
            Some(err) => error(Subject::Type, src, err),
            None => SyntaxError::invalid(Subject::Type, src),
        })
}

/// Parse an identifier (a Python name)
pub fn identifier(src: &str) -> Result<Identifier, SyntaxError> {
    let src = src.trim();
    match python_expression(Subject::Identifier, src)? {
        ast::Expr::Name(ast::ExprName { id, .. }) => {
            Ok(Identifier::Name(id.as_str().to_owned()))
        }
        _ => Err(SyntaxError::invalid(Subject::Identifier, src)),
    }
}

/// Parse a non-negative integer literal
pub fn integer(src: &str) -> Result<usize, SyntaxError> {
    let src = src.trim();
    match python_expression(Subject::Integer, src)? {
        ast::Expr::Constant(ast::ExprConstant {
            value: ast::Constant::Int(i),
            ..
        }) => i
            .to_string()
            .parse()
            .map_err(|_| SyntaxError::invalid(Subject::Integer, src)),
        _ => Err(SyntaxError::invalid(Subject::Integer, src)),
    }
}

/// Accept an expression verbatim if it is a well-formed Python expression
pub fn expression(src: &str) -> Result<Expression, SyntaxError> {
    let src = src.trim();
    let _ = python_expression(Subject::Expression, src)?;
    Ok(Expression::Injected(src.to_owned()))
}
