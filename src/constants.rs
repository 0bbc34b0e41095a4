// DOM hooks and front-end tuning used by the web mount code.

// Markup
pub const MARQUEE_SELECTOR: &str = "[data-marquee]";
pub const MOUNT_ID_ATTR: &str = "data-marquee-id"; // set on mounted hosts
pub const FIT_ATTR: &str = "data-fit"; // "fixed" (default) or "viewport"

// Generated structure
pub const TRACK_CLASS: &str = "marquee-track";
pub const TILE_CLASS: &str = "marquee-tile";
pub const TRACK_STYLE: &str = "display:flex;width:max-content;will-change:transform";
pub const TILE_STYLE: &str = "display:flex;flex:none";

// The wrap shifts the track by up to one whole tile, so a single copy
// always leaves a gap at the trailing edge.
pub const MIN_FIT_COPIES: usize = 2;

// Transform output precision (px decimals)
pub const TRANSFORM_DECIMALS: usize = 3;
