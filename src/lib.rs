//! Work out the naming template behind numbered frame files, group arbitrary
//! filename collections into imagesets sharing a template, and expand one
//! representative frame into the full ordered sequence present on disk.

mod consts;
pub mod fs;
pub mod group;
pub mod name;
pub mod template;

pub use fs::find_matching_frames;
pub use group::{ImageSet, group_by_template};
pub use name::infer_template;
pub use template::Template;
