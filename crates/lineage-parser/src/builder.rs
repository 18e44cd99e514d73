//! Applies parsed statements to a [`FamilyTree`] and forwards each applied
//! statement to a [`ParseObserver`].

use log::{debug, trace};

use lineage_core::{FamilyTree, ModelError, PersonId, identifier::Id};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    observer::{DeclarationEvent, FamilialLinkEvent, MaritalLinkEvent, ParseObserver},
    parser_types::{Declaration, FamilialLink, MaritalLink, Statement},
    span::{Span, Spanned},
};

/// Incrementally builds the model, one statement at a time.
pub(crate) struct TreeBuilder<'o, O: ParseObserver + ?Sized> {
    tree: FamilyTree,
    /// Span of each person's declaration, indexed by [`PersonId::index`].
    declared_at: Vec<Span>,
    observer: &'o mut O,
}

impl<'o, O: ParseObserver + ?Sized> TreeBuilder<'o, O> {
    pub(crate) fn new(observer: &'o mut O) -> Self {
        Self {
            tree: FamilyTree::new(),
            declared_at: Vec::new(),
            observer,
        }
    }

    pub(crate) fn apply(&mut self, statement: Spanned<Statement<'_>>) -> Result<()> {
        match statement.into_inner() {
            Statement::Declaration(declaration) => self.declare(declaration),
            Statement::MaritalLink(link) => self.marry(link),
            Statement::FamilialLink(link) => self.add_child(link),
        }
    }

    pub(crate) fn finish(self) -> FamilyTree {
        self.tree
    }

    fn declare(&mut self, declaration: Declaration<'_>) -> Result<()> {
        let name = Id::new(*declaration.name);
        let birthdate = declaration.birthdate.into_inner();
        let deathdate = declaration.deathdate.map(Spanned::into_inner);

        let id = self
            .tree
            .declare(name, birthdate, deathdate)
            .map_err(|err| self.model_error(err, declaration.name.span()))?;
        self.declared_at.push(declaration.name.span());

        let is_root = self.tree.root() == Some(id);
        trace!(name:% = name, id:% = id, is_root; "Declared person");

        self.observer.declaration(&DeclarationEvent {
            name,
            birthdate,
            deathdate,
            is_root,
        });
        Ok(())
    }

    fn marry(&mut self, link: MaritalLink<'_>) -> Result<()> {
        let left = self.resolve(&link.left)?;
        let right = self.resolve(&link.right)?;
        let wedding_date = link.wedding_date.map(Spanned::into_inner);

        self.tree
            .link_spouses(left, right, wedding_date)
            .map_err(|err| self.model_error(err, link.left.span().union(link.right.span())))?;
        trace!(left:% = *link.left, right:% = *link.right; "Linked spouses");

        let (left, right) = (self.tree.person(left), self.tree.person(right));
        self.observer.marital_link(&MaritalLinkEvent {
            left: left.name(),
            left_birthdate: left.birthdate(),
            right: right.name(),
            right_birthdate: right.birthdate(),
            wedding_date,
        });
        Ok(())
    }

    fn add_child(&mut self, link: FamilialLink<'_>) -> Result<()> {
        let parent = self.resolve(&link.parent)?;
        let child = self.resolve(&link.child)?;

        self.tree
            .link_child(parent, child)
            .map_err(|err| self.model_error(err, link.parent.span().union(link.child.span())))?;
        trace!(parent:% = *link.parent, child:% = *link.child; "Linked child");

        let (parent, child) = (self.tree.person(parent), self.tree.person(child));
        self.observer.familial_link(&FamilialLinkEvent {
            parent: parent.name(),
            parent_birthdate: parent.birthdate(),
            child: child.name(),
            child_birthdate: child.birthdate(),
        });
        Ok(())
    }

    /// Looks up a previously declared name.
    fn resolve(&self, name: &Spanned<&str>) -> Result<PersonId> {
        self.tree.find(**name).ok_or_else(|| {
            debug!(name = **name; "Reference to undeclared person");
            Diagnostic::new(
                ErrorCode::E200,
                format!("person `{name}` is not declared"),
                name.span(),
            )
            .with_help(format!("declare `{name}` before linking it"))
        })
    }

    fn model_error(&self, err: ModelError, span: Span) -> Diagnostic {
        let message = err.to_string();
        match err {
            ModelError::DuplicatePerson { name } => {
                let diagnostic = Diagnostic::new(ErrorCode::E201, message, span);
                match self.first_declaration(name) {
                    Some(first) => diagnostic.with_context(first, "first declared here"),
                    None => diagnostic,
                }
            }
            ModelError::SelfLink { .. } => Diagnostic::new(ErrorCode::E202, message, span),
            ModelError::TooManyParents { child } => Diagnostic::new(ErrorCode::E203, message, span)
                .with_help(format!("remove one of the links that give `{child}` a parent")),
        }
    }

    fn first_declaration(&self, name: Id) -> Option<Span> {
        let id = self.tree.find(&name.to_name())?;
        self.declared_at.get(id.index()).copied()
    }
}
