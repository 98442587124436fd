/// Expression node.
///
/// Operators are stored as their source text (`"+"`, `"&&"`, `"+="`).
/// `Logical` is tagged distinctly from `Binary` so `&&`/`||` chains are
/// distinguishable from arithmetic, relational and equality chains.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Right-associative assignment. `left` is always an `Identifier` or
    /// `Member` node; the parser rejects anything else.
    Assignment {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Logical {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Binary {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        operator: String,
        argument: Box<Expr>,
    },
    /// `object.property` (`computed: false`, property is an `Identifier`)
    /// or `object[property]` (`computed: true`, property is arbitrary).
    Member {
        object: Box<Expr>,
        property: Box<Expr>,
        computed: bool,
    },
    Call {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
    },
    /// `super` as a call head. Never appears outside a `Call` callee.
    Super,
    Identifier {
        name: String,
    },
    Number {
        value: f64,
    },
    String {
        value: String,
    },
    Boolean {
        value: bool,
    },
    Null,
}
