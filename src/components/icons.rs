//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use explorer_core::IconKind;
use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDown as SortDescending, LuArrowUp as SortAscending, LuBookOpen as FilePdf,
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuFile as File,
        LuFileText as FileText, LuFilm as FileVideo, LuFolder as Folder, LuImage as FileImage,
        LuMusic as FileAudio,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCaretDownFill as SortDescending, BsCaretUpFill as SortAscending,
        BsChevronDown as ChevronDown, BsChevronRight as ChevronRight, BsFileEarmark as File,
        BsFileEarmarkImage as FileImage, BsFileEarmarkMusic as FileAudio,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlay as FileVideo,
        BsFileEarmarkText as FileText, BsFolderFill as Folder,
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

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(SORT_ASCENDING, SortAscending);
themed_icon!(SORT_DESCENDING, SortDescending);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_AUDIO, FileAudio);
themed_icon!(FILE_VIDEO, FileVideo);

/// Icon for an entry's icon role.
pub fn for_kind(kind: IconKind) -> Icon {
    match kind {
        IconKind::Folder => FOLDER,
        IconKind::File => FILE,
        IconKind::Text => FILE_TEXT,
        IconKind::Pdf => FILE_PDF,
        IconKind::Image => FILE_IMAGE,
        IconKind::Audio => FILE_AUDIO,
        IconKind::Video => FILE_VIDEO,
    }
}
