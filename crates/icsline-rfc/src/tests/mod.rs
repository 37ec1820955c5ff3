//! Cross-module tests exercising the unfold-then-parse pipeline on whole
//! documents.
