//! Builtin primitive identification enum.
//!
//! A `Builtin` is the identity of a native primitive. It carries no state,
//! so a builtin function value is `Copy` and copying it never allocates.
//! The evaluator maps each variant to its implementation with an exhaustive
//! `match`; this crate only knows names.

/// Every native primitive the interpreter registers in the global scope.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    // List primitives
    List,
    Head,
    Tail,
    Join,
    Eval,
    Init,
    Cons,
    Len,
    Rev,

    // Control
    If,
    Bool,

    // Arithmetic and bitwise
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    Not,
    BitNot,
    BitXor,
    Pow,
    ShiftRight,
    ShiftLeft,
    Min,
    Max,

    // Binding and introspection
    Def,
    Put,
    Lambda,
    Env,
    Quit,
}

impl Builtin {
    /// All builtins, in global-scope registration order.
    pub const ALL: [Builtin; 31] = [
        Builtin::List,
        Builtin::Tail,
        Builtin::Head,
        Builtin::Join,
        Builtin::Eval,
        Builtin::Init,
        Builtin::Cons,
        Builtin::Len,
        Builtin::Rev,
        Builtin::If,
        Builtin::Bool,
        Builtin::Def,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::BitAnd,
        Builtin::BitOr,
        Builtin::Not,
        Builtin::BitNot,
        Builtin::BitXor,
        Builtin::Pow,
        Builtin::ShiftRight,
        Builtin::ShiftLeft,
        Builtin::Min,
        Builtin::Max,
        Builtin::Env,
        Builtin::Quit,
        Builtin::Lambda,
        Builtin::Put,
    ];

    /// The symbol the builtin is bound to.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Init => "init",
            Builtin::Cons => "cons",
            Builtin::Len => "len",
            Builtin::Rev => "rev",
            Builtin::If => "?",
            Builtin::Bool => "bool",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::BitAnd => "&",
            Builtin::BitOr => "|",
            Builtin::Not => "!",
            Builtin::BitNot => "~",
            Builtin::BitXor => "^",
            Builtin::Pow => "**",
            Builtin::ShiftRight => ">>",
            Builtin::ShiftLeft => "<<",
            Builtin::Min => "min",
            Builtin::Max => "max",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Lambda => "\\",
            Builtin::Env => "env",
            Builtin::Quit => "quit",
        }
    }
}
