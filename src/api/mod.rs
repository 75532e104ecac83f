// HTTP surface: analysis pipeline, monitoring, and the static site.

pub mod analysis;
pub mod monitoring;
pub mod site;
