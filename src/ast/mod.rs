/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression node variants
/// - statements: Definitions for the program and statement node variants
pub mod expressions;
pub mod statements;
