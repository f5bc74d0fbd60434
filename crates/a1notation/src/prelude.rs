//! Prelude module - common imports for a1notation users
//!
//! ```rust
//! use a1notation::prelude::*;
//! ```

pub use crate::{
    Column,
    Error,
    Notation,
    NotationBuilder,
    NotationKind,
    Result,
    Row,
    SheetName,
};
