//! Operator binding strength

use super::token::TokenKind;

/// Binding strength, ordered from loosest to tightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Sentinel for tokens with no infix meaning
    Lowest,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix operators such as unary `-`
    Prefix,
    /// `^`
    Power,
    /// `(` in infix position (reserved)
    Call,
}

impl Precedence {
    /// Rank used for the operand of a prefix operator
    pub const PREFIX: Precedence = Precedence::Prefix;

    /// Rank a top-level parse starts at
    pub const ENTRY: Precedence = Precedence::Sum;

    /// The next tighter rank, saturating at `Call`
    pub const fn tighter(self) -> Precedence {
        match self {
            Precedence::Lowest => Precedence::Sum,
            Precedence::Sum => Precedence::Product,
            Precedence::Product => Precedence::Prefix,
            Precedence::Prefix => Precedence::Power,
            Precedence::Power | Precedence::Call => Precedence::Call,
        }
    }
}

/// Grouping rule for a run of equal-precedence operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Precedence of a token when it appears after a complete operand
pub const fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Multiply | TokenKind::Divide => Precedence::Product,
        TokenKind::Power => Precedence::Power,
        TokenKind::LParen => Precedence::Call,
        TokenKind::Number | TokenKind::RParen | TokenKind::Eof | TokenKind::Illegal => {
            Precedence::Lowest
        }
    }
}

/// Associativity of a token used as an infix operator
pub const fn associativity(kind: TokenKind) -> Associativity {
    match kind {
        TokenKind::Power => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Minimum rank for the right operand of an infix operator.
///
/// The infix loop continues while `min <= precedence_of(current)`, so a
/// left-associative operator raises the bar by one rank to stop at its own
/// level, while a right-associative one keeps its own rank and absorbs the
/// next same-level operator into the right operand.
pub const fn right_binding(kind: TokenKind) -> Precedence {
    let own = precedence_of(kind);
    match associativity(kind) {
        Associativity::Left => own.tighter(),
        Associativity::Right => own,
    }
}
