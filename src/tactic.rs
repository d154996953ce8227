//! # Tactic commands
//!
//! A command is a keyword, a `:` separator, and a payload whose shape depends
//! on the keyword. Parsing a command never touches the program.

use crate::error::{Error, TacticError};
use crate::ir::*;
use crate::parse;

/// A fully parsed tactic command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tactic {
    Description(String),
    Signature(Identifier, FunctionType),
    Intro(Identifier),
    Let(Identifier, Type),
    Fill(Expression),
    Return,
    Switch(usize),
    Finish,
}

fn nonempty<'a>(data: &'a str, what: &'static str) -> Result<&'a str, Error> {
    let data = data.trim();
    if data.is_empty() {
        return Err(TacticError::MissingPayload { what }.into());
    }
    Ok(data)
}

/// Splits `name : rest` at the first `:`.
fn annotated<'a>(
    data: &'a str,
    name_what: &'static str,
    rest_what: &'static str,
) -> Result<(&'a str, &'a str), Error> {
    let data = nonempty(data, name_what)?;
    let (name, rest) = data
        .split_once(':')
        .ok_or(TacticError::MissingSeparator { after: name_what })?;
    if rest.trim().is_empty() {
        return Err(TacticError::MissingPayload { what: rest_what }.into());
    }
    Ok((name, rest))
}

impl Tactic {
    /// Parses a `keyword: payload` command.
    pub fn parse(command: &str) -> Result<Self, Error> {
        if command.trim().is_empty() {
            return Err(TacticError::NoKeyword.into());
        }
        let (keyword, data) = command.split_once(':').ok_or(
            TacticError::MissingSeparator {
                after: "tactic keyword",
            },
        )?;
        let keyword = keyword.trim();
        let kind: TacticKind = keyword
            .parse()
            .map_err(|_| TacticError::UnknownKeyword(keyword.to_owned()))?;
        Self::parse_payload(kind, data)
    }

    /// Parses the payload of a command whose keyword is already known.
    pub fn parse_payload(kind: TacticKind, data: &str) -> Result<Self, Error> {
        match kind {
            TacticKind::Description => {
                let text = nonempty(data, "description")?;
                Ok(Tactic::Description(text.to_owned()))
            }
            TacticKind::Signature => {
                let (name, typ) =
                    annotated(data, "signature name", "function type")?;
                let name = parse::identifier(name)?;
                match parse::type_str(typ)? {
                    Type::Function(ft) => Ok(Tactic::Signature(name, ft)),
                    _ => Err(TacticError::NotFunctionType.into()),
                }
            }
            TacticKind::Intro => {
                let name = nonempty(data, "variable name")?;
                Ok(Tactic::Intro(parse::identifier(name)?))
            }
            TacticKind::Let => {
                let (name, typ) =
                    annotated(data, "variable name", "variable type")?;
                let name = parse::identifier(name)?;
                Ok(Tactic::Let(name, parse::type_str(typ)?))
            }
            TacticKind::Fill => {
                let src = nonempty(data, "expression")?;
                Ok(Tactic::Fill(parse::expression(src)?))
            }
            TacticKind::Return => Ok(Tactic::Return),
            TacticKind::Switch => {
                let index = nonempty(data, "index")?;
                Ok(Tactic::Switch(parse::integer(index)?))
            }
            TacticKind::Finish => Ok(Tactic::Finish),
        }
    }

    pub fn kind(&self) -> TacticKind {
        match self {
            Tactic::Description(_) => TacticKind::Description,
            Tactic::Signature(..) => TacticKind::Signature,
            Tactic::Intro(_) => TacticKind::Intro,
            Tactic::Let(..) => TacticKind::Let,
            Tactic::Fill(_) => TacticKind::Fill,
            Tactic::Return => TacticKind::Return,
            Tactic::Switch(_) => TacticKind::Switch,
            Tactic::Finish => TacticKind::Finish,
        }
    }
}
