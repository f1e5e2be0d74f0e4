pub mod context;
pub mod error;
pub mod primitives;
pub mod terminal;
pub mod theme;
