pub mod paint;
pub mod surface;

pub use paint::{Pen, paint_drawing};
pub use surface::{LineCap, LineJoin, RecordingSurface, Surface};
