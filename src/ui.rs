//! iced integration for the seek bar
//!
//! - **Primitives** (`primitives`): Canvas program hosting the control
//! - **Theme** (`theme`): Default colors and demo container styles

pub mod primitives;
pub mod theme;
