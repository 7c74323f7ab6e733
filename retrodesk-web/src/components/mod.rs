pub mod content_blocks;
pub mod dialog;
pub mod easy_read_toggle;
pub mod folder_grid;
pub mod icon;
pub mod roving;
pub mod section_nav;
pub mod skip_link;
pub mod theme_switcher;
