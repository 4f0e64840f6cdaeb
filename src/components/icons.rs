//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDownload as Download, LuEllipsisVertical as More, LuEye as View, LuFileText as FilePdf,
        LuShare2 as Share, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDownload as Download, BsEye as View, BsFileEarmarkPdf as FilePdf, BsShare as Share,
        BsThreeDotsVertical as More, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE_PDF, FilePdf);
themed_icon!(MORE, More);
themed_icon!(VIEW, View);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SHARE, Share);
themed_icon!(CLOSE, Close);
