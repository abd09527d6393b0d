mod roast;
mod roast_content;
mod stack_selection;

pub use roast::RoastWithStack;
pub use roast_content::{format_roast_content, preview_excerpt, FormattedRoast};
pub use stack_selection::{Category, StackSelection};
