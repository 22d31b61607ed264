//! The intermediate token stream passed from the scanner to the recognizer.
//!
//! One token per line, the kind name padded to 17 columns followed by the
//! lexeme. A lexical diagnostic is written as its message line followed by
//! a marker line reading `Error`; readers drop both.

pub mod stream;
