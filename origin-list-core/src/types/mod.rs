//! Type definition module

mod action;
mod origin;
mod sort_key;
mod view;

pub use action::{ActionKind, ParsedAction, ToggleStyle};
pub use origin::{
    marker_of, ActionMarkers, DomainList, OriginRecord, OriginState, ACTION_MARKERS, ALLOW_MARKER,
    BLOCK_MARKER, COOKIEBLOCK_MARKER, NOACTION_MARKER, USER_OVERRIDE_MARKER,
};
pub use sort_key::SortKey;
pub use view::{OriginView, ROW_CLASS};
