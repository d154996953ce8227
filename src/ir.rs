//! # Syntax of synthesized programs
//!
//! This module defines the tree that tactics build up. Each syntactic category
//! (types, identifiers, expressions, statements) is its own sum type with a
//! `Hole` variant, so any slot of the tree may hold a placeholder that is yet
//! to be decided.
//!
//! Holes do not carry their own data. They are names into an arena owned by
//! the [`Program`], which records what tactics may resolve each hole and, once
//! a tactic has been applied, the node that fills it.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
// Tactics

/// The fixed vocabulary of tactic keywords.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TacticKind {
    Description,
    Signature,
    Intro,
    Let,
    Fill,
    Return,
    Switch,
    Finish,
}

impl TacticKind {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Description,
            Self::Signature,
            Self::Intro,
            Self::Let,
            Self::Fill,
            Self::Return,
            Self::Switch,
            Self::Finish,
        ]
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Signature => "signature",
            Self::Intro => "intro",
            Self::Let => "let",
            Self::Fill => "fill",
            Self::Return => "return",
            Self::Switch => "switch",
            Self::Finish => "finish",
        }
    }
}

impl std::fmt::Display for TacticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl std::str::FromStr for TacticKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all().into_iter().find(|k| k.keyword() == s).ok_or(())
    }
}

/// The set of tactics that may be applied to a hole.
pub type TacticSet = IndexSet<TacticKind>;

////////////////////////////////////////////////////////////////////////////////
// Holes

/// The type of hole names (indices into the hole arena of a program).
pub type HoleName = usize;

/// The arena entry for a hole.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hole {
    /// The tactics that may resolve this hole
    pub tactics: TacticSet,

    /// The node installed into this hole, if any (never removed once set)
    pub filler: Option<Node>,

    /// Rank in the left-to-right enumeration of open holes (recomputed on
    /// every resolution pass)
    pub index: Option<usize>,

    /// Whether this hole is the focused one (recomputed on every resolution
    /// pass)
    pub selected: bool,
}

impl Hole {
    pub fn new(tactics: TacticSet) -> Self {
        Hole {
            tactics,
            filler: None,
            index: None,
            selected: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.filler.is_none()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Bool,
    Int,
    Float,
    Complex,
    Str,
}

impl Primitive {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Bool,
            Self::Int,
            Self::Float,
            Self::Complex,
            Self::Str,
        ]
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::Str => "str",
        }
    }
}

/// The type of function types.
///
/// Kept as its own struct (rather than only a [`Type`] variant) because
/// function declarations require their signature to be a function type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FunctionType {
    pub params: Vec<Type>,
    pub ret: Box<Type>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Type {
    Primitive(Primitive),
    Function(FunctionType),
    Hole(HoleName),
}

////////////////////////////////////////////////////////////////////////////////
// Identifiers and expressions

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Identifier {
    Name(String),
    Hole(HoleName),
}

/// The type of expressions.
///
/// Expressions are opaque: the source text is accepted verbatim once it is
/// known to be a well-formed expression.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Expression {
    Injected(String),
    Hole(HoleName),
}

////////////////////////////////////////////////////////////////////////////////
// Statements

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Statement {
    Empty,
    Description(String),
    // Left-anchored, right-open: statements are appended through `second`
    Composite(Box<Statement>, Box<Statement>),
    FunctionDeclaration {
        name: Identifier,
        signature: FunctionType,
        params: Vec<Identifier>,
        body: Box<Statement>,
    },
    VariableDeclaration {
        name: Identifier,
        typ: Type,
        value: Expression,
    },
    Return(Expression),
    Hole(HoleName),
}

////////////////////////////////////////////////////////////////////////////////
// Nodes

/// A node of any syntactic category; the type of hole fillers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Node {
    Type(Type),
    Identifier(Identifier),
    Expression(Expression),
    Statement(Statement),
}

impl Node {
    pub fn category(&self) -> &'static str {
        match self {
            Node::Type(_) => "type",
            Node::Identifier(_) => "identifier",
            Node::Expression(_) => "expression",
            Node::Statement(_) => "statement",
        }
    }
}

/// The uniform shape of every syntactic category.
///
/// Each category can tell whether a value is a bare hole and can be recovered
/// from a [`Node`] of the same category. Walking into the child slots of a
/// category is done by the resolution engine and the code generator.
pub trait Syntax: Sized {
    const CATEGORY: &'static str;

    fn hole(&self) -> Option<HoleName>;
    fn from_node(node: Node) -> Result<Self, Node>;
}

impl Syntax for Type {
    const CATEGORY: &'static str = "type";

    fn hole(&self) -> Option<HoleName> {
        match self {
            Type::Hole(h) => Some(*h),
            _ => None,
        }
    }

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Type(t) => Ok(t),
            other => Err(other),
        }
    }
}

impl Syntax for Identifier {
    const CATEGORY: &'static str = "identifier";

    fn hole(&self) -> Option<HoleName> {
        match self {
            Identifier::Hole(h) => Some(*h),
            _ => None,
        }
    }

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Identifier(id) => Ok(id),
            other => Err(other),
        }
    }
}

impl Syntax for Expression {
    const CATEGORY: &'static str = "expression";

    fn hole(&self) -> Option<HoleName> {
        match self {
            Expression::Hole(h) => Some(*h),
            _ => None,
        }
    }

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Expression(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl Syntax for Statement {
    const CATEGORY: &'static str = "statement";

    fn hole(&self) -> Option<HoleName> {
        match self {
            Statement::Hole(h) => Some(*h),
            _ => None,
        }
    }

    fn from_node(node: Node) -> Result<Self, Node> {
        match node {
            Node::Statement(s) => Ok(s),
            other => Err(other),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Programs

/// The root aggregate: the statement tree plus the hole arena.
///
/// `selected` and `open` refer to holes by name and are only meaningful
/// directly after a resolution pass; `rendered` is likewise derived.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Program {
    pub root: Statement,
    pub holes: Vec<Hole>,
    pub selected: Option<HoleName>,
    pub open: Vec<HoleName>,
    #[serde(skip)]
    pub rendered: String,
}

impl Program {
    /// Creates an unresolved program consisting of a single root hole.
    pub fn blank(tactics: TacticSet) -> Self {
        Program {
            root: Statement::Hole(0),
            holes: vec![Hole::new(tactics)],
            selected: None,
            open: vec![],
            rendered: String::new(),
        }
    }

    /// Allocates a fresh open hole in the arena.
    pub fn fresh(&mut self, tactics: TacticSet) -> HoleName {
        self.holes.push(Hole::new(tactics));
        self.holes.len() - 1
    }

    pub fn hole(&self, h: HoleName) -> &Hole {
        &self.holes[h]
    }

    pub fn selected_hole(&self) -> Option<&Hole> {
        self.selected.map(|h| &self.holes[h])
    }

    /// Installs a filler into a hole. The tree itself is only updated by the
    /// next resolution pass.
    pub fn fill(&mut self, h: HoleName, filler: Node) {
        if self.holes[h].filler.is_some() {
            panic!("invariant violated: hole {} filled twice", h)
        }
        self.holes[h].filler = Some(filler);
    }

    pub fn complete(&self) -> bool {
        self.open.is_empty()
    }
}
