//! Token definitions for the WGSL lexer.
//!
//! A [`Token`] is a [`TokenKind`], the [`Span`] it was read from, and a
//! payload whose category is fixed by the kind:
//!
//! | kind                          | payload                   |
//! |-------------------------------|---------------------------|
//! | integer literals              | [`TokenValue::Int`]       |
//! | float literals                | [`TokenValue::Float`]     |
//! | identifiers, keywords, errors | [`TokenValue::Text`]      |
//! | everything else               | [`TokenValue::None`]      |
//!
//! Each payload category has its own constructor, so a token can only be
//! built with the payload its kind expects.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use wgslc_util::{FxHashMap, SourceLocation, SourceRange, Span};

/// The kind of a token.
///
/// Punctuation and keyword variants are declared in contiguous blocks so that
/// category checks are range comparisons.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Lexing failed; the token text is the message
    Error,
    /// Scanner "no match" result; never handed to a parser
    Uninitialized,
    /// Stand-in a parser leaves behind after splitting a token
    Placeholder,
    /// End of input
    Eof,
    /// An identifier
    Identifier,
    /// An unsuffixed float literal
    FloatLiteral,
    /// An `f`-suffixed float literal
    FloatLiteralF,
    /// An `h`-suffixed float literal
    FloatLiteralH,
    /// An unsuffixed integer literal
    IntLiteral,
    /// An `i`-suffixed integer literal
    IntLiteralI,
    /// A `u`-suffixed integer literal
    IntLiteralU,

    // ========================================================================
    // Punctuation
    // ========================================================================
    /// `&`
    And,
    /// `&&`
    AndAnd,
    /// `->`
    Arrow,
    /// `@`
    Attr,
    /// `/`
    ForwardSlash,
    /// `!`
    Bang,
    /// `[`
    BracketLeft,
    /// `]`
    BracketRight,
    /// `{`
    BraceLeft,
    /// `}`
    BraceRight,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
    /// `>>`
    ShiftRight,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `<<`
    ShiftLeft,
    /// `%`
    Mod,
    /// `-`
    Minus,
    /// `--`
    MinusMinus,
    /// `!=`
    NotEqual,
    /// `.`
    Period,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `|`
    Or,
    /// `||`
    OrOr,
    /// `(`
    ParenLeft,
    /// `)`
    ParenRight,
    /// `;`
    Semicolon,
    /// `*`
    Star,
    /// `~`
    Tilde,
    /// `_`
    Underscore,
    /// `^`
    Xor,
    /// `+=`
    PlusEqual,
    /// `-=`
    MinusEqual,
    /// `*=`
    TimesEqual,
    /// `/=`
    DivisionEqual,
    /// `%=`
    ModuloEqual,
    /// `&=`
    AndEqual,
    /// `|=`
    OrEqual,
    /// `^=`
    XorEqual,
    /// `>>=`, never produced by the lexer, which yields `>>` then `=`
    ShiftRightEqual,
    /// `<<=`, never produced by the lexer, which yields `<<` then `=`
    ShiftLeftEqual,

    // ========================================================================
    // Keywords
    // ========================================================================
    /// `array`
    Array,
    /// `atomic`
    Atomic,
    /// `bitcast`
    Bitcast,
    /// `bool`
    Bool,
    /// `break`
    Break,
    /// `case`
    Case,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `continuing`
    Continuing,
    /// `discard`
    Discard,
    /// `default`
    Default,
    /// `else`
    Else,
    /// `enable`
    Enable,
    /// `f16`
    F16,
    /// `f32`
    F32,
    /// `fallthrough`
    Fallthrough,
    /// `false`
    False,
    /// `fn`
    Fn,
    /// `for`
    For,
    /// `function`
    Function,
    /// `i32`
    I32,
    /// `if`
    If,
    /// `import`
    Import,
    /// `let`
    Let,
    /// `loop`
    Loop,
    /// `mat2x2`
    Mat2x2,
    /// `mat2x3`
    Mat2x3,
    /// `mat2x4`
    Mat2x4,
    /// `mat3x2`
    Mat3x2,
    /// `mat3x3`
    Mat3x3,
    /// `mat3x4`
    Mat3x4,
    /// `mat4x2`
    Mat4x2,
    /// `mat4x3`
    Mat4x3,
    /// `mat4x4`
    Mat4x4,
    /// `override`
    Override,
    /// `private`
    Private,
    /// `ptr`
    Ptr,
    /// `return`
    Return,
    /// `sampler`
    Sampler,
    /// `sampler_comparison`
    ComparisonSampler,
    /// `static_assert`
    StaticAssert,
    /// `storage` (also spelled `storage_buffer`)
    Storage,
    /// `struct`
    Struct,
    /// `switch`
    Switch,
    /// `texture_1d`
    TextureSampled1d,
    /// `texture_2d`
    TextureSampled2d,
    /// `texture_2d_array`
    TextureSampled2dArray,
    /// `texture_3d`
    TextureSampled3d,
    /// `texture_cube`
    TextureSampledCube,
    /// `texture_cube_array`
    TextureSampledCubeArray,
    /// `texture_depth_2d`
    TextureDepth2d,
    /// `texture_depth_2d_array`
    TextureDepth2dArray,
    /// `texture_depth_cube`
    TextureDepthCube,
    /// `texture_depth_cube_array`
    TextureDepthCubeArray,
    /// `texture_depth_multisampled_2d`
    TextureDepthMultisampled2d,
    /// `texture_external`
    TextureExternal,
    /// `texture_multisampled_2d`
    TextureMultisampled2d,
    /// `texture_storage_1d`
    TextureStorage1d,
    /// `texture_storage_2d`
    TextureStorage2d,
    /// `texture_storage_2d_array`
    TextureStorage2dArray,
    /// `texture_storage_3d`
    TextureStorage3d,
    /// `true`
    True,
    /// `type`
    Type,
    /// `u32`
    U32,
    /// `uniform`
    Uniform,
    /// `var`
    Var,
    /// `vec2`
    Vec2,
    /// `vec3`
    Vec3,
    /// `vec4`
    Vec4,
    /// `while`
    While,
    /// `workgroup`
    Workgroup,
}

/// Every keyword kind. The spelling of each is its [`TokenKind::name`].
pub const KEYWORDS: &[TokenKind] = &[
    TokenKind::Array,
    TokenKind::Atomic,
    TokenKind::Bitcast,
    TokenKind::Bool,
    TokenKind::Break,
    TokenKind::Case,
    TokenKind::Const,
    TokenKind::Continue,
    TokenKind::Continuing,
    TokenKind::Discard,
    TokenKind::Default,
    TokenKind::Else,
    TokenKind::Enable,
    TokenKind::F16,
    TokenKind::F32,
    TokenKind::Fallthrough,
    TokenKind::False,
    TokenKind::Fn,
    TokenKind::For,
    TokenKind::Function,
    TokenKind::I32,
    TokenKind::If,
    TokenKind::Import,
    TokenKind::Let,
    TokenKind::Loop,
    TokenKind::Mat2x2,
    TokenKind::Mat2x3,
    TokenKind::Mat2x4,
    TokenKind::Mat3x2,
    TokenKind::Mat3x3,
    TokenKind::Mat3x4,
    TokenKind::Mat4x2,
    TokenKind::Mat4x3,
    TokenKind::Mat4x4,
    TokenKind::Override,
    TokenKind::Private,
    TokenKind::Ptr,
    TokenKind::Return,
    TokenKind::Sampler,
    TokenKind::ComparisonSampler,
    TokenKind::StaticAssert,
    TokenKind::Storage,
    TokenKind::Struct,
    TokenKind::Switch,
    TokenKind::TextureSampled1d,
    TokenKind::TextureSampled2d,
    TokenKind::TextureSampled2dArray,
    TokenKind::TextureSampled3d,
    TokenKind::TextureSampledCube,
    TokenKind::TextureSampledCubeArray,
    TokenKind::TextureDepth2d,
    TokenKind::TextureDepth2dArray,
    TokenKind::TextureDepthCube,
    TokenKind::TextureDepthCubeArray,
    TokenKind::TextureDepthMultisampled2d,
    TokenKind::TextureExternal,
    TokenKind::TextureMultisampled2d,
    TokenKind::TextureStorage1d,
    TokenKind::TextureStorage2d,
    TokenKind::TextureStorage2dArray,
    TokenKind::TextureStorage3d,
    TokenKind::True,
    TokenKind::Type,
    TokenKind::U32,
    TokenKind::Uniform,
    TokenKind::Var,
    TokenKind::Vec2,
    TokenKind::Vec3,
    TokenKind::Vec4,
    TokenKind::While,
    TokenKind::Workgroup,
];

/// Spellings that lex as an existing keyword.
const KEYWORD_ALIASES: &[(&str, TokenKind)] = &[("storage_buffer", TokenKind::Storage)];

static KEYWORD_MAP: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|&kind| (kind.name(), kind))
        .chain(KEYWORD_ALIASES.iter().copied())
        .collect()
});

static_assertions::assert_eq_size!(TokenKind, u8);
static_assertions::assert_impl_all!(Token<'static>: Send, Sync, Clone);

impl TokenKind {
    /// Looks up a reserved word. Case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use wgslc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_keyword("f32"), Some(TokenKind::F32));
    /// assert_eq!(TokenKind::from_keyword("storage_buffer"), Some(TokenKind::Storage));
    /// assert_eq!(TokenKind::from_keyword("F32"), None);
    /// ```
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        KEYWORD_MAP.get(text).copied()
    }

    /// Display name of the kind.
    ///
    /// Punctuation is named by its lexeme and keywords by their spelling.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Error => "error",
            TokenKind::Uninitialized => "uninitialized",
            TokenKind::Placeholder => "placeholder",
            TokenKind::Eof => "end of file",
            TokenKind::Identifier => "identifier",
            TokenKind::FloatLiteral => "abstract float literal",
            TokenKind::FloatLiteralF => "'f'-suffixed float literal",
            TokenKind::FloatLiteralH => "'h'-suffixed float literal",
            TokenKind::IntLiteral => "abstract int literal",
            TokenKind::IntLiteralI => "'i'-suffixed integer literal",
            TokenKind::IntLiteralU => "'u'-suffixed integer literal",

            TokenKind::And => "&",
            TokenKind::AndAnd => "&&",
            TokenKind::Arrow => "->",
            TokenKind::Attr => "@",
            TokenKind::ForwardSlash => "/",
            TokenKind::Bang => "!",
            TokenKind::BracketLeft => "[",
            TokenKind::BracketRight => "]",
            TokenKind::BraceLeft => "{",
            TokenKind::BraceRight => "}",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Equal => "=",
            TokenKind::EqualEqual => "==",
            TokenKind::GreaterThan => ">",
            TokenKind::GreaterThanEqual => ">=",
            TokenKind::ShiftRight => ">>",
            TokenKind::LessThan => "<",
            TokenKind::LessThanEqual => "<=",
            TokenKind::ShiftLeft => "<<",
            TokenKind::Mod => "%",
            TokenKind::Minus => "-",
            TokenKind::MinusMinus => "--",
            TokenKind::NotEqual => "!=",
            TokenKind::Period => ".",
            TokenKind::Plus => "+",
            TokenKind::PlusPlus => "++",
            TokenKind::Or => "|",
            TokenKind::OrOr => "||",
            TokenKind::ParenLeft => "(",
            TokenKind::ParenRight => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Star => "*",
            TokenKind::Tilde => "~",
            TokenKind::Underscore => "_",
            TokenKind::Xor => "^",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::TimesEqual => "*=",
            TokenKind::DivisionEqual => "/=",
            TokenKind::ModuloEqual => "%=",
            TokenKind::AndEqual => "&=",
            TokenKind::OrEqual => "|=",
            TokenKind::XorEqual => "^=",
            TokenKind::ShiftRightEqual => ">>=",
            TokenKind::ShiftLeftEqual => "<<=",

            TokenKind::Array => "array",
            TokenKind::Atomic => "atomic",
            TokenKind::Bitcast => "bitcast",
            TokenKind::Bool => "bool",
            TokenKind::Break => "break",
            TokenKind::Case => "case",
            TokenKind::Const => "const",
            TokenKind::Continue => "continue",
            TokenKind::Continuing => "continuing",
            TokenKind::Discard => "discard",
            TokenKind::Default => "default",
            TokenKind::Else => "else",
            TokenKind::Enable => "enable",
            TokenKind::F16 => "f16",
            TokenKind::F32 => "f32",
            TokenKind::Fallthrough => "fallthrough",
            TokenKind::False => "false",
            TokenKind::Fn => "fn",
            TokenKind::For => "for",
            TokenKind::Function => "function",
            TokenKind::I32 => "i32",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::Let => "let",
            TokenKind::Loop => "loop",
            TokenKind::Mat2x2 => "mat2x2",
            TokenKind::Mat2x3 => "mat2x3",
            TokenKind::Mat2x4 => "mat2x4",
            TokenKind::Mat3x2 => "mat3x2",
            TokenKind::Mat3x3 => "mat3x3",
            TokenKind::Mat3x4 => "mat3x4",
            TokenKind::Mat4x2 => "mat4x2",
            TokenKind::Mat4x3 => "mat4x3",
            TokenKind::Mat4x4 => "mat4x4",
            TokenKind::Override => "override",
            TokenKind::Private => "private",
            TokenKind::Ptr => "ptr",
            TokenKind::Return => "return",
            TokenKind::Sampler => "sampler",
            TokenKind::ComparisonSampler => "sampler_comparison",
            TokenKind::StaticAssert => "static_assert",
            TokenKind::Storage => "storage",
            TokenKind::Struct => "struct",
            TokenKind::Switch => "switch",
            TokenKind::TextureSampled1d => "texture_1d",
            TokenKind::TextureSampled2d => "texture_2d",
            TokenKind::TextureSampled2dArray => "texture_2d_array",
            TokenKind::TextureSampled3d => "texture_3d",
            TokenKind::TextureSampledCube => "texture_cube",
            TokenKind::TextureSampledCubeArray => "texture_cube_array",
            TokenKind::TextureDepth2d => "texture_depth_2d",
            TokenKind::TextureDepth2dArray => "texture_depth_2d_array",
            TokenKind::TextureDepthCube => "texture_depth_cube",
            TokenKind::TextureDepthCubeArray => "texture_depth_cube_array",
            TokenKind::TextureDepthMultisampled2d => "texture_depth_multisampled_2d",
            TokenKind::TextureExternal => "texture_external",
            TokenKind::TextureMultisampled2d => "texture_multisampled_2d",
            TokenKind::TextureStorage1d => "texture_storage_1d",
            TokenKind::TextureStorage2d => "texture_storage_2d",
            TokenKind::TextureStorage2dArray => "texture_storage_2d_array",
            TokenKind::TextureStorage3d => "texture_storage_3d",
            TokenKind::True => "true",
            TokenKind::Type => "type",
            TokenKind::U32 => "u32",
            TokenKind::Uniform => "uniform",
            TokenKind::Var => "var",
            TokenKind::Vec2 => "vec2",
            TokenKind::Vec3 => "vec3",
            TokenKind::Vec4 => "vec4",
            TokenKind::While => "while",
            TokenKind::Workgroup => "workgroup",
        }
    }

    /// Returns true for punctuation and operators
    #[inline]
    pub fn is_punctuation(self) -> bool {
        (TokenKind::And as u8..=TokenKind::ShiftLeftEqual as u8).contains(&(self as u8))
    }

    /// Returns true for reserved words, including `true` and `false`
    #[inline]
    pub fn is_keyword(self) -> bool {
        (TokenKind::Array as u8..=TokenKind::Workgroup as u8).contains(&(self as u8))
    }

    /// Returns true for integer and float literals and `true`/`false`
    pub fn is_literal(self) -> bool {
        self.is_int_literal() || self.is_float_literal() || matches!(self, TokenKind::True | TokenKind::False)
    }

    fn is_int_literal(self) -> bool {
        matches!(self, TokenKind::IntLiteral | TokenKind::IntLiteralI | TokenKind::IntLiteralU)
    }

    fn is_float_literal(self) -> bool {
        matches!(
            self,
            TokenKind::FloatLiteral | TokenKind::FloatLiteralF | TokenKind::FloatLiteralH
        )
    }

    /// Shape of a `matCxR` keyword as `(columns, rows)`
    ///
    /// # Example
    ///
    /// ```
    /// use wgslc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Mat2x3.matrix_shape(), Some((2, 3)));
    /// assert_eq!(TokenKind::Vec3.matrix_shape(), None);
    /// ```
    pub fn matrix_shape(self) -> Option<(u32, u32)> {
        let shape = match self {
            TokenKind::Mat2x2 => (2, 2),
            TokenKind::Mat2x3 => (2, 3),
            TokenKind::Mat2x4 => (2, 4),
            TokenKind::Mat3x2 => (3, 2),
            TokenKind::Mat3x3 => (3, 3),
            TokenKind::Mat3x4 => (3, 4),
            TokenKind::Mat4x2 => (4, 2),
            TokenKind::Mat4x3 => (4, 3),
            TokenKind::Mat4x4 => (4, 4),
            _ => return None,
        };
        Some(shape)
    }

    /// Returns true for any `matCxR` keyword
    #[inline]
    pub fn is_matrix(self) -> bool {
        self.matrix_shape().is_some()
    }

    /// Returns true for `mat3x2`, `mat3x3` and `mat3x4`
    pub fn is_mat3xn(self) -> bool {
        matches!(self.matrix_shape(), Some((3, _)))
    }

    /// Returns true for `mat4x2`, `mat4x3` and `mat4x4`
    pub fn is_mat4xn(self) -> bool {
        matches!(self.matrix_shape(), Some((4, _)))
    }

    /// Returns true for `mat2x3`, `mat3x3` and `mat4x3`
    pub fn is_matnx3(self) -> bool {
        matches!(self.matrix_shape(), Some((_, 3)))
    }

    /// Returns true for `mat2x4`, `mat3x4` and `mat4x4`
    pub fn is_matnx4(self) -> bool {
        matches!(self.matrix_shape(), Some((_, 4)))
    }

    /// Width of a `vecN` keyword
    pub fn vector_width(self) -> Option<u32> {
        match self {
            TokenKind::Vec2 => Some(2),
            TokenKind::Vec3 => Some(3),
            TokenKind::Vec4 => Some(4),
            _ => None,
        }
    }

    /// Returns true for `vec2`, `vec3` and `vec4`
    #[inline]
    pub fn is_vector(self) -> bool {
        self.vector_width().is_some()
    }

    /// The two kinds a parser may split this kind into.
    ///
    /// Used when one lexeme closes two constructs, as in `vec2<vec2<f32>>`.
    pub fn split(self) -> Option<(TokenKind, TokenKind)> {
        match self {
            TokenKind::ShiftRight => Some((TokenKind::GreaterThan, TokenKind::GreaterThan)),
            TokenKind::GreaterThanEqual => Some((TokenKind::GreaterThan, TokenKind::Equal)),
            TokenKind::AndAnd => Some((TokenKind::And, TokenKind::And)),
            TokenKind::MinusMinus => Some((TokenKind::Minus, TokenKind::Minus)),
            _ => None,
        }
    }

    /// Returns true if [`TokenKind::split`] applies
    #[inline]
    pub fn is_splittable(self) -> bool {
        self.split().is_some()
    }

    /// Returns true for tokens that can join two expressions
    pub fn is_binary_operator(self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::AndAnd
                | TokenKind::EqualEqual
                | TokenKind::ForwardSlash
                | TokenKind::GreaterThan
                | TokenKind::GreaterThanEqual
                | TokenKind::LessThan
                | TokenKind::LessThanEqual
                | TokenKind::Minus
                | TokenKind::Mod
                | TokenKind::NotEqual
                | TokenKind::Or
                | TokenKind::OrOr
                | TokenKind::Plus
                | TokenKind::ShiftLeft
                | TokenKind::ShiftRight
                | TokenKind::Star
                | TokenKind::Xor
        )
    }

    /// Whether tokens of this kind carry a text payload
    fn carries_text(self) -> bool {
        self.is_keyword() || matches!(self, TokenKind::Identifier | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload of a token
#[derive(Clone, Debug, Default, PartialEq)]
pub enum TokenValue<'a> {
    /// No payload
    #[default]
    None,
    /// Integer literal value
    Int(i64),
    /// Float literal value
    Float(f64),
    /// Identifier or keyword text, or an error message
    Text(Cow<'a, str>),
}

/// A lexical token.
///
/// Identifier tokens borrow their text from the [`SourceFile`] they were read
/// from; [`Token::into_owned`] detaches a token from that lifetime.
///
/// [`SourceFile`]: wgslc_util::SourceFile
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    kind: TokenKind,
    span: Span,
    value: TokenValue<'a>,
}

impl Default for Token<'_> {
    /// The uninitialized token
    fn default() -> Self {
        Self {
            kind: TokenKind::Uninitialized,
            span: Span::default(),
            value: TokenValue::None,
        }
    }
}

impl<'a> Token<'a> {
    /// Creates a token with no payload (punctuation, end of file)
    pub fn new(kind: TokenKind, span: Span) -> Self {
        debug_assert!(
            !kind.carries_text() && !kind.is_int_literal() && !kind.is_float_literal(),
            "{kind:?} requires a payload"
        );
        Self {
            kind,
            span,
            value: TokenValue::None,
        }
    }

    /// Creates an integer literal token
    pub fn int(kind: TokenKind, span: Span, value: i64) -> Self {
        debug_assert!(kind.is_int_literal(), "{kind:?} is not an integer literal");
        Self {
            kind,
            span,
            value: TokenValue::Int(value),
        }
    }

    /// Creates a float literal token
    pub fn float(kind: TokenKind, span: Span, value: f64) -> Self {
        debug_assert!(kind.is_float_literal(), "{kind:?} is not a float literal");
        Self {
            kind,
            span,
            value: TokenValue::Float(value),
        }
    }

    /// Creates an identifier token borrowing its text
    pub fn identifier(span: Span, text: &'a str) -> Self {
        Self {
            kind: TokenKind::Identifier,
            span,
            value: TokenValue::Text(Cow::Borrowed(text)),
        }
    }

    /// Creates a keyword token carrying the keyword's canonical spelling
    pub fn keyword(kind: TokenKind, span: Span) -> Self {
        debug_assert!(kind.is_keyword(), "{kind:?} is not a keyword");
        Self {
            kind,
            span,
            value: TokenValue::Text(Cow::Borrowed(kind.name())),
        }
    }

    /// Creates an error token
    pub fn error(span: Span, message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind: TokenKind::Error,
            span,
            value: TokenValue::Text(message.into()),
        }
    }

    /// Creates a placeholder token
    pub fn placeholder(span: Span) -> Self {
        Self::new(TokenKind::Placeholder, span)
    }

    /// Returns the kind
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the span
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the source range
    #[inline]
    pub fn range(&self) -> SourceRange {
        self.span.range
    }

    /// Returns the payload
    #[inline]
    pub fn value(&self) -> &TokenValue<'a> {
        &self.value
    }

    /// Returns true if the token is of kind `kind`
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true at end of input
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.is(TokenKind::Eof)
    }

    /// Returns true for error tokens
    #[inline]
    pub fn is_error(&self) -> bool {
        self.is(TokenKind::Error)
    }

    /// Returns true for identifiers
    #[inline]
    pub fn is_identifier(&self) -> bool {
        self.is(TokenKind::Identifier)
    }

    /// Returns true for the uninitialized token
    #[inline]
    pub fn is_uninitialized(&self) -> bool {
        self.is(TokenKind::Uninitialized)
    }

    /// Returns true for placeholders
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.is(TokenKind::Placeholder)
    }

    /// See [`TokenKind::is_literal`]
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// See [`TokenKind::is_matrix`]
    #[inline]
    pub fn is_matrix(&self) -> bool {
        self.kind.is_matrix()
    }

    /// See [`TokenKind::is_mat3xn`]
    #[inline]
    pub fn is_mat3xn(&self) -> bool {
        self.kind.is_mat3xn()
    }

    /// See [`TokenKind::is_mat4xn`]
    #[inline]
    pub fn is_mat4xn(&self) -> bool {
        self.kind.is_mat4xn()
    }

    /// See [`TokenKind::is_matnx3`]
    #[inline]
    pub fn is_matnx3(&self) -> bool {
        self.kind.is_matnx3()
    }

    /// See [`TokenKind::is_matnx4`]
    #[inline]
    pub fn is_matnx4(&self) -> bool {
        self.kind.is_matnx4()
    }

    /// See [`TokenKind::is_vector`]
    #[inline]
    pub fn is_vector(&self) -> bool {
        self.kind.is_vector()
    }

    /// See [`TokenKind::is_splittable`]
    #[inline]
    pub fn is_splittable(&self) -> bool {
        self.kind.is_splittable()
    }

    /// See [`TokenKind::is_binary_operator`]
    #[inline]
    pub fn is_binary_operator(&self) -> bool {
        self.kind.is_binary_operator()
    }

    /// The token's text.
    ///
    /// Numeric payloads are rendered in decimal; tokens without a payload
    /// give an empty string.
    pub fn to_str(&self) -> Cow<'_, str> {
        match &self.value {
            TokenValue::None => Cow::Borrowed(""),
            TokenValue::Int(v) => Cow::Owned(v.to_string()),
            TokenValue::Float(v) => Cow::Owned(v.to_string()),
            TokenValue::Text(text) => Cow::Borrowed(text),
        }
    }

    /// Float payload, or 0.0 if there is none
    pub fn to_f64(&self) -> f64 {
        match self.value {
            TokenValue::Float(v) => v,
            _ => 0.0,
        }
    }

    /// Integer payload, or 0 if there is none
    pub fn to_i64(&self) -> i64 {
        match self.value {
            TokenValue::Int(v) => v,
            _ => 0,
        }
    }

    /// Changes the kind, keeping the span.
    ///
    /// Parsers use this to turn a split token into a placeholder. The payload
    /// is dropped when the new kind carries none; otherwise it must already be
    /// of the category the new kind expects.
    pub fn set_kind(&mut self, kind: TokenKind) {
        let keeps_payload = match self.value {
            TokenValue::None => false,
            TokenValue::Int(_) => kind.is_int_literal(),
            TokenValue::Float(_) => kind.is_float_literal(),
            TokenValue::Text(_) => kind.carries_text(),
        };
        if !keeps_payload {
            debug_assert!(
                !kind.carries_text() && !kind.is_int_literal() && !kind.is_float_literal(),
                "{kind:?} requires a payload the token does not have"
            );
            self.value = TokenValue::None;
        }
        self.kind = kind;
    }

    /// Copies any borrowed text so the token outlives its source file
    pub fn into_owned(self) -> Token<'static> {
        let value = match self.value {
            TokenValue::None => TokenValue::None,
            TokenValue::Int(v) => TokenValue::Int(v),
            TokenValue::Float(v) => TokenValue::Float(v),
            TokenValue::Text(text) => TokenValue::Text(Cow::Owned(text.into_owned())),
        };
        Token {
            kind: self.kind,
            span: self.span,
            value,
        }
    }

    /// The two tokens a splittable token stands for.
    ///
    /// The first covers the first byte of the lexeme and the second covers
    /// the rest.
    ///
    /// # Example
    ///
    /// ```
    /// use wgslc_lex::{Token, TokenKind};
    /// use wgslc_util::{FileId, SourceLocation, Span};
    ///
    /// let span = Span::new(FileId(0), SourceLocation::new(1, 9), SourceLocation::new(1, 11));
    /// let (first, second) = Token::new(TokenKind::ShiftRight, span).split_token().unwrap();
    /// assert_eq!(first.kind(), TokenKind::GreaterThan);
    /// assert_eq!(first.range().end, SourceLocation::new(1, 10));
    /// assert_eq!(second.range().begin, SourceLocation::new(1, 10));
    /// ```
    pub fn split_token(&self) -> Option<(Token<'static>, Token<'static>)> {
        let (first, second) = self.kind.split()?;
        let begin = self.span.begin();
        let middle = SourceLocation::new(begin.line, begin.column + 1);
        let file_id = self.span.file_id;
        Some((
            Token::new(first, Span::new(file_id, begin, middle)),
            Token::new(second, Span::new(file_id, middle, self.span.end())),
        ))
    }
}
