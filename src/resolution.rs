//! # Hole resolution
//!
//! After every edit the program tree is normalized by a single walk that
//! (i) replaces filled holes by (the resolution of) their fillers, (ii)
//! numbers the remaining open holes in pre-order, left-to-right, and (iii)
//! re-derives which open hole is selected.
//!
//! If the previously selected hole was filled during the edit, the last open
//! hole in traversal order becomes selected: holes introduced by the most
//! recent edit tend to come last, so focus stays on the newest branch.

use crate::codegen;
use crate::ir::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    /// The program had no selection before this pass
    Unset,
    Tracking(HoleName),
    /// The selection was filled during the last edit
    Lost,
}

struct Resolver<'a> {
    holes: &'a mut Vec<Hole>,
    focus: Focus,
    open: Vec<HoleName>,
}

impl<'a> Resolver<'a> {
    fn visit<T: Syntax + Walk>(&mut self, x: T) -> T {
        let h = match x.hole() {
            Some(h) => h,
            None => return x.walk(self),
        };

        match self.holes[h].filler.clone() {
            Some(filler) => {
                if self.focus == Focus::Tracking(h) {
                    self.focus = Focus::Lost;
                }
                log::trace!("substituting hole {} ({})", h, T::CATEGORY);
                match T::from_node(filler) {
                    Ok(x) => self.visit(x),
                    Err(node) => panic!(
                        "invariant violated: {} hole {} filled with {}",
                        T::CATEGORY,
                        h,
                        node.category()
                    ),
                }
            }
            None => {
                if self.focus == Focus::Unset {
                    self.focus = Focus::Tracking(h);
                }
                self.holes[h].index = Some(self.open.len());
                self.holes[h].selected = false;
                self.open.push(h);
                x
            }
        }
    }

    fn visit_all<T: Syntax + Walk>(&mut self, xs: Vec<T>) -> Vec<T> {
        xs.into_iter().map(|x| self.visit(x)).collect()
    }

    fn visit_box<T: Syntax + Walk>(&mut self, x: Box<T>) -> Box<T> {
        Box::new(self.visit(*x))
    }
}

/// Structural recursion into the child slots of a non-hole node.
trait Walk: Sized {
    fn walk(self, r: &mut Resolver) -> Self;
}

impl Walk for Type {
    fn walk(self, r: &mut Resolver) -> Self {
        match self {
            Type::Primitive(_) => self,
            Type::Function(ft) => Type::Function(ft.walk(r)),
            Type::Hole(_) => {
                panic!("invariant violated: hole reached structural walk")
            }
        }
    }
}

impl Walk for FunctionType {
    fn walk(self, r: &mut Resolver) -> Self {
        FunctionType {
            params: r.visit_all(self.params),
            ret: r.visit_box(self.ret),
        }
    }
}

impl Walk for Identifier {
    fn walk(self, _r: &mut Resolver) -> Self {
        match self {
            Identifier::Name(_) => self,
            Identifier::Hole(_) => {
                panic!("invariant violated: hole reached structural walk")
            }
        }
    }
}

impl Walk for Expression {
    fn walk(self, _r: &mut Resolver) -> Self {
        match self {
            Expression::Injected(_) => self,
            Expression::Hole(_) => {
                panic!("invariant violated: hole reached structural walk")
            }
        }
    }
}

impl Walk for Statement {
    fn walk(self, r: &mut Resolver) -> Self {
        match self {
            Statement::Empty | Statement::Description(_) => self,
            Statement::Composite(first, second) => {
                let first = r.visit_box(first);
                let second = r.visit_box(second);
                Statement::Composite(first, second)
            }
            Statement::FunctionDeclaration {
                name,
                signature,
                params,
                body,
            } => {
                let name = r.visit(name);
                let signature = signature.walk(r);
                let params = r.visit_all(params);
                let body = r.visit_box(body);
                Statement::FunctionDeclaration {
                    name,
                    signature,
                    params,
                    body,
                }
            }
            Statement::VariableDeclaration { name, typ, value } => {
                let name = r.visit(name);
                let typ = r.visit(typ);
                let value = r.visit(value);
                Statement::VariableDeclaration { name, typ, value }
            }
            Statement::Return(value) => Statement::Return(r.visit(value)),
            Statement::Hole(_) => {
                panic!("invariant violated: hole reached structural walk")
            }
        }
    }
}

/// Runs a resolution pass over the program and re-renders it.
pub fn resolve(program: &mut Program) {
    let root = std::mem::replace(&mut program.root, Statement::Empty);

    let mut resolver = Resolver {
        holes: &mut program.holes,
        focus: match program.selected {
            Some(h) => Focus::Tracking(h),
            None => Focus::Unset,
        },
        open: vec![],
    };

    let root = resolver.visit(root);

    let selected = match resolver.focus {
        Focus::Tracking(h) if resolver.open.contains(&h) => Some(h),
        Focus::Tracking(_) | Focus::Unset | Focus::Lost => resolver.open.last().copied(),
    };
    let open = resolver.open;

    for hole in program.holes.iter_mut() {
        if hole.filler.is_some() {
            hole.index = None;
            hole.selected = false;
        }
    }
    if let Some(h) = selected {
        program.holes[h].selected = true;
    }

    log::debug!(
        "resolved program: {} open hole(s), selected {:?}",
        open.len(),
        selected.and_then(|h| program.holes[h].index)
    );

    program.root = root;
    program.selected = selected;
    program.open = open;
    program.rendered = codegen::python(program);
}
