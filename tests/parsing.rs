use tacsyn::error::*;
use tacsyn::ir::*;
use tacsyn::parse;
use tacsyn::tactic::Tactic;

fn prim(p: Primitive) -> Type {
    Type::Primitive(p)
}

fn fun(params: Vec<Type>, ret: Type) -> Type {
    Type::Function(FunctionType {
        params,
        ret: Box::new(ret),
    })
}

#[test]
fn primitive_types() {
    for p in Primitive::all() {
        assert_eq!(parse::type_str(p.keyword()), Ok(prim(p)));
    }
    assert_eq!(parse::type_str("  str \n"), Ok(prim(Primitive::Str)));
}

#[test]
fn function_types() {
    assert_eq!(
        parse::type_str(" ( int , str ) -> bool "),
        Ok(fun(
            vec![prim(Primitive::Int), prim(Primitive::Str)],
            prim(Primitive::Bool)
        ))
    );
    assert_eq!(
        parse::type_str("() -> complex"),
        Ok(fun(vec![], prim(Primitive::Complex)))
    );
    assert_eq!(
        parse::type_str("float->float"),
        Ok(fun(vec![prim(Primitive::Float)], prim(Primitive::Float)))
    );
}

#[test]
fn arrows_associate_to_the_right() {
    assert_eq!(
        parse::type_str("int -> int -> int"),
        Ok(fun(
            vec![prim(Primitive::Int)],
            fun(vec![prim(Primitive::Int)], prim(Primitive::Int))
        ))
    );
    assert_eq!(
        parse::type_str("(int -> int) -> int"),
        Ok(fun(
            vec![fun(vec![prim(Primitive::Int)], prim(Primitive::Int))],
            prim(Primitive::Int)
        ))
    );
}

#[test]
fn parenthesized_single_type() {
    assert_eq!(parse::type_str("(int)"), Ok(prim(Primitive::Int)));
    assert_eq!(parse::type_str("((str))"), Ok(prim(Primitive::Str)));
}

#[test]
fn bare_tuples_are_rejected() {
    let e = parse::type_str("(int, str)").unwrap_err();
    assert_eq!(e.subject, Subject::Type);
    assert_eq!(e.message, "Unexpected tuple type");

    assert!(parse::type_str("()").is_err());
}

#[test]
fn type_errors_locate_offending_character() {
    let e = parse::type_str("intx").unwrap_err();
    assert_eq!(e.span.start, 3);
    assert_eq!(e.found, Some('x'));
    assert!(e.to_string().contains("position 3"));

    let e = parse::type_str("").unwrap_err();
    assert_eq!(e.found, None);

    assert!(parse::type_str("int ->").is_err());
    assert!(parse::type_str("(int, str").is_err());
    assert!(parse::type_str("list").is_err());
}

#[test]
fn syntax_error_report_mentions_subject() {
    let e = parse::type_str("(int, ?) -> int").unwrap_err();
    assert!(e.report().contains("type parse error"));
}

#[test]
fn identifiers() {
    assert_eq!(
        parse::identifier("  foo_bar1 "),
        Ok(Identifier::Name("foo_bar1".to_owned()))
    );
    for bad in ["1x", "x y", "True", "x.y", "", "f(x)"] {
        let e = parse::identifier(bad).unwrap_err();
        assert_eq!(e.subject, Subject::Identifier, "accepted {:?}", bad);
    }
}

#[test]
fn integers() {
    assert_eq!(parse::integer("0"), Ok(0));
    assert_eq!(parse::integer(" 12 "), Ok(12));
    for bad in ["-1", "1.5", "x", "", "99999999999999999999999999"] {
        let e = parse::integer(bad).unwrap_err();
        assert_eq!(e.subject, Subject::Integer, "accepted {:?}", bad);
    }
}

#[test]
fn expressions_are_kept_verbatim() {
    for src in ["x + 1", "f(x, y)", "lambda a: a", "[i * i for i in range(3)]"] {
        assert_eq!(
            parse::expression(&format!("  {}  ", src)),
            Ok(Expression::Injected(src.to_owned()))
        );
    }
    for bad in ["x +", "x = 1", "def", ")"] {
        let e = parse::expression(bad).unwrap_err();
        assert_eq!(e.subject, Subject::Expression, "accepted {:?}", bad);
    }
}

#[test]
fn commands() {
    assert_eq!(
        Tactic::parse("description: adds two numbers "),
        Ok(Tactic::Description("adds two numbers".to_owned()))
    );
    assert_eq!(
        Tactic::parse(" signature : add : int -> int"),
        Ok(Tactic::Signature(
            Identifier::Name("add".to_owned()),
            FunctionType {
                params: vec![prim(Primitive::Int)],
                ret: Box::new(prim(Primitive::Int)),
            }
        ))
    );
    assert_eq!(
        Tactic::parse("let: z : str"),
        Ok(Tactic::Let(
            Identifier::Name("z".to_owned()),
            prim(Primitive::Str)
        ))
    );
    assert_eq!(Tactic::parse("return: ignored"), Ok(Tactic::Return));
    assert_eq!(Tactic::parse("finish:"), Ok(Tactic::Finish));
    assert_eq!(Tactic::parse("switch: 2"), Ok(Tactic::Switch(2)));
    assert_eq!(
        Tactic::parse("fill: a: b"),
        Err(Error::Syntax(parse::expression("a: b").unwrap_err()))
    );
}

#[test]
fn multi_line_descriptions() {
    assert_eq!(
        Tactic::parse("description: first line\nsecond line"),
        Ok(Tactic::Description("first line\nsecond line".to_owned()))
    );
}
