//! # Tactic-driven synthesis
//!
//! The synthesizer owns a program and applies one tactic command at a time.
//! A command is fully validated (payload syntax, tactic vocabulary, and the
//! permissions of the selected hole) before the program is touched, so a
//! rejected command leaves the program exactly as it was.
//!
//! | Tactic        | Replacement for the selected hole                  |
//! |---------------|----------------------------------------------------|
//! | `description` | `Composite(Description, [signature])`              |
//! | `signature`   | `FunctionDeclaration` with `[intro]` parameters and a `[let, return]` body |
//! | `intro`       | the identifier                                     |
//! | `let`         | `Composite(VariableDeclaration(.., [fill]), [same as replaced])` |
//! | `fill`        | the expression                                     |
//! | `return`      | `Return([fill])`                                   |
//!
//! `switch` and `finish` do not edit the tree.

use crate::error::{Error, TacticError};
use crate::ir::*;
use crate::resolution;
use crate::tactic::Tactic;

use indexmap::IndexSet;

/// The result of a successfully applied command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Stepped { status: &'static str },
    Finished { program: String },
}

pub struct Synthesizer {
    pub program: Program,
}

fn tactics(kinds: &[TacticKind]) -> TacticSet {
    kinds.iter().copied().collect()
}

impl Synthesizer {
    pub fn new() -> Synthesizer {
        let mut program = Program::blank(tactics(&[TacticKind::Description]));
        resolution::resolve(&mut program);
        Synthesizer { program }
    }

    /// The rendered program.
    pub fn rendered(&self) -> &str {
        &self.program.rendered
    }

    /// The tactics that may currently be applied.
    pub fn options(&self) -> IndexSet<TacticKind> {
        let mut options = IndexSet::new();
        if self.program.open.is_empty() {
            options.insert(TacticKind::Finish);
        }
        if self.program.open.len() > 1 {
            options.insert(TacticKind::Switch);
        }
        if let Some(hole) = self.program.selected_hole() {
            options.extend(hole.tactics.iter().copied());
        }
        options
    }

    /// Parses and applies a `keyword: payload` command.
    pub fn step(&mut self, command: &str) -> Result<Outcome, Error> {
        let tactic = Tactic::parse(command)?;
        self.apply(tactic)
    }

    fn check_selected_hole(&self, kind: TacticKind) -> Result<HoleName, Error> {
        let h = self.program.selected.ok_or(TacticError::NoHoleSelected)?;
        if !self.program.hole(h).tactics.contains(&kind) {
            return Err(TacticError::NotAllowed(kind).into());
        }
        Ok(h)
    }

    /// Applies an already parsed tactic.
    pub fn apply(&mut self, tactic: Tactic) -> Result<Outcome, Error> {
        let kind = tactic.kind();
        match tactic {
            Tactic::Switch(index) => {
                let h = *self
                    .program
                    .open
                    .get(index)
                    .ok_or(TacticError::NoSuchHole(index))?;
                if self.program.selected == Some(h) {
                    return Err(TacticError::AlreadySelected.into());
                }
                log::debug!("switching to hole {}", index);
                self.program.selected = Some(h);
                resolution::resolve(&mut self.program);
                Ok(Outcome::Stepped {
                    status: "Switched hole",
                })
            }
            Tactic::Finish => {
                if !self.program.open.is_empty() {
                    return Err(
                        TacticError::UnfilledHoles(self.program.open.len())
                            .into(),
                    );
                }
                log::info!("synthesis complete");
                Ok(Outcome::Finished {
                    program: self.program.rendered.clone(),
                })
            }
            tactic => {
                let h = self.check_selected_hole(kind)?;
                let (filler, status) = self.replacement(h, tactic);
                log::debug!("applying {} to hole {}", kind, h);
                self.program.fill(h, filler);
                resolution::resolve(&mut self.program);
                Ok(Outcome::Stepped { status })
            }
        }
    }

    /// Builds the subtree installed into hole `h`, allocating its new holes.
    fn replacement(
        &mut self,
        h: HoleName,
        tactic: Tactic,
    ) -> (Node, &'static str) {
        let program = &mut self.program;
        match tactic {
            Tactic::Description(text) => {
                let tail = program.fresh(tactics(&[TacticKind::Signature]));
                (
                    Node::Statement(Statement::Composite(
                        Box::new(Statement::Description(text)),
                        Box::new(Statement::Hole(tail)),
                    )),
                    "Added description",
                )
            }
            Tactic::Signature(name, signature) => {
                let params = signature
                    .params
                    .iter()
                    .map(|_| {
                        Identifier::Hole(
                            program.fresh(tactics(&[TacticKind::Intro])),
                        )
                    })
                    .collect();
                let body = program
                    .fresh(tactics(&[TacticKind::Let, TacticKind::Return]));
                (
                    Node::Statement(Statement::FunctionDeclaration {
                        name,
                        signature,
                        params,
                        body: Box::new(Statement::Hole(body)),
                    }),
                    "Added signature",
                )
            }
            Tactic::Intro(name) => (Node::Identifier(name), "Introduced name"),
            Tactic::Let(name, typ) => {
                let value = program.fresh(tactics(&[TacticKind::Fill]));
                let tail = program.fresh(program.hole(h).tactics.clone());
                (
                    Node::Statement(Statement::Composite(
                        Box::new(Statement::VariableDeclaration {
                            name,
                            typ,
                            value: Expression::Hole(value),
                        }),
                        Box::new(Statement::Hole(tail)),
                    )),
                    "Added variable declaration",
                )
            }
            Tactic::Fill(e) => (Node::Expression(e), "Added expression"),
            Tactic::Return => {
                let value = program.fresh(tactics(&[TacticKind::Fill]));
                (
                    Node::Statement(Statement::Return(Expression::Hole(value))),
                    "Added return statement",
                )
            }
            Tactic::Switch(_) | Tactic::Finish => {
                panic!("invariant violated: {} has no replacement", tactic.kind())
            }
        }
    }
}
