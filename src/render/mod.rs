pub mod renderer;

pub use renderer::{render, render_line, RenderError};
