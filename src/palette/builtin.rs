//! The palettes a [`PaletteManager`](super::PaletteManager) falls back to
//! when it is given none.

use crate::color::ColorLike;

pub const BUILTIN_PALETTES: [[&str; 5]; 15] = [
    ["#8386f5", "#3d43b4", "#04134b", "#083e12", "#1afe49"],
    ["#f887ff", "#de004e", "#860029", "#321450", "#29132e"],
    ["#e96d5e", "#ff9760", "#ffe69d", "#6a7e6a", "#393f5f"],
    ["#ff124f", "#ff00a0", "#fe75fe", "#7a04eb", "#120458"],
    ["#ff6e27", "#fbf665", "#73fffe", "#6287f8", "#383e65"],
    ["#7700a6", "#fe00fe", "#defe47", "#00b3fe", "#0016ee"],
    ["#63345e", "#ac61b9", "#b7c1de", "#0b468c", "#092047"],
    ["#af43be", "#fd8090", "#c4ffff", "#08deea", "#1261d1"],
    ["#a0ffe3", "#65dc98", "#8d8980", "#575267", "#222035"],
    ["#ff2a6d", "#d1f7ff", "#f5d9e8", "#005678", "#01012b"],
    ["#490109", "#d40011", "#fd7495", "#5e4ef8", "#14029a"],
    ["#8f704b", "#daae6d", "#89e3f6", "#4d9e9b", "#44786a"],
    ["#fff69f", "#fdd870", "#d0902f", "#a15501", "#351409"],
    ["#b0acb0", "#e2dddf", "#85ebd9", "#3d898d", "#2f404d"],
    ["#ff184c", "#ff577d", "#ffccdc", "#0a9cf5", "#003062"],
];

/// The built-in palettes as a palette set.
pub fn default_palettes() -> Vec<Vec<ColorLike>> {
    BUILTIN_PALETTES
        .iter()
        .map(|palette| palette.iter().copied().map(ColorLike::from).collect())
        .collect()
}
