use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    VReg(u32),
    PReg(String),
    Int(i64),
    At(u32),
    Function,
    Block,
    Live,
    Persistent,
    Dbg,
    Arrow,
    Comma,
    Equal,
    Colon,
    LBracket,
    RPar,
    Newline,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Token::*;
        match self {
            Ident(x) => write!(f, "{x}"),
            VReg(n) => write!(f, "%{n}"),
            PReg(x) => write!(f, "${x}"),
            Int(i) => write!(f, "{i}"),
            At(n) => write!(f, "@{n}"),
            Function => write!(f, "function"),
            Block => write!(f, "block"),
            Live => write!(f, "live"),
            Persistent => write!(f, "persistent"),
            Dbg => write!(f, "dbg"),
            Arrow => write!(f, "->"),
            Comma => write!(f, ","),
            Equal => write!(f, "="),
            Colon => write!(f, ":"),
            LBracket => write!(f, "["),
            RPar => write!(f, ")"),
            Newline => write!(f, "newline"),
        }
    }
}
