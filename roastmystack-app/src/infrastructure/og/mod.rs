mod icons;
mod image;

pub use icons::{lookup_tech_icon, TechIcon};
pub use image::{render_preview_svg, PREVIEW_HEIGHT, PREVIEW_WIDTH};
