//! Edge case tests for hilite-lex
