/// The evaluator module computes the value of an AST.
///
/// The evaluator walks the tree produced by the parser, resolves variables
/// against the locals of one evaluation and the registry, applies operators
/// and calls registered functions.
///
/// # Responsibilities
/// - Evaluates every AST node to an `f64`.
/// - Resolves names: locals first, then registered constants.
/// - Provides the builtin function library.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// identifiers, numbers, operator runs and single punctuation characters.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with class, text and byte offset.
/// - Reports lexical errors for characters outside every token class.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser consumes the token sequence produced by the lexer and builds a
/// tree following eleven levels of binary precedence, prefix operators and the
/// conditional operator.
///
/// # Responsibilities
/// - Converts tokens into owned AST nodes.
/// - Rejects malformed input with the offending token and its position.
pub mod parser;
/// The registry of named constants and functions shared by evaluations.
pub mod registry;
/// The expression handle: source text, locals and a lazily parsed tree.
pub mod expression;
/// Fixed-size groups of expressions evaluated together, one per axis.
pub mod vector;
