//! Shapes a program document into the fixed two-section outline tree.
//!
//! The tree is synthetic: a "Variables Setup" section with one leaf per
//! variable declaration, followed by a "Robot Program" section holding the
//! body of the program's entry-point function. Rendering lives in
//! `codegen::outline`.

use crate::document::{Node, ProgramDocument};
use std::borrow::Cow;

pub const VARIABLES_SECTION: &str = "Variables Setup";
pub const ROBOT_PROGRAM_SECTION: &str = "Robot Program";

/// A titled top-level section of the outline
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSection<'a> {
    pub title: &'static str,
    /// Synthetic leaves are owned, nodes from the document are borrowed
    pub entries: Vec<Cow<'a, Node>>,
}

/// The non-emitted root: always exactly two sections, variables first
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineTree<'a> {
    pub sections: [OutlineSection<'a>; 2],
}

impl<'a> OutlineTree<'a> {
    pub fn from_document(document: &'a ProgramDocument) -> Self {
        let variables = document
            .program
            .variable_declarations
            .iter()
            .map(|declaration| Cow::Owned(declaration.label_node()))
            .collect();

        let program = document
            .program
            .entry_point_body()
            .iter()
            .map(Cow::Borrowed)
            .collect();

        Self {
            sections: [
                OutlineSection {
                    title: VARIABLES_SECTION,
                    entries: variables,
                },
                OutlineSection {
                    title: ROBOT_PROGRAM_SECTION,
                    entries: program,
                },
            ],
        }
    }

    pub fn variables(&self) -> &OutlineSection<'a> {
        &self.sections[0]
    }

    pub fn robot_program(&self) -> &OutlineSection<'a> {
        &self.sections[1]
    }
}
