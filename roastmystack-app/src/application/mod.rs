mod ports;
mod render_roast;
mod submit_roast;

pub use ports::{RoastGenerator, RoastStore, StackStore};
pub use render_roast::RenderRoast;
pub use submit_roast::SubmitRoast;
