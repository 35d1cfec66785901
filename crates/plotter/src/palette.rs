//! Fixed cyclic trail palette

use image::Rgb;

/// Twenty distinct trail colors.
///
/// Body `i` of a selection draws with `PALETTE[i % 20]`; wrap-around is the
/// intended policy once a selection exceeds the palette size, so colors
/// repeat rather than degrade.
pub const PALETTE: [Rgb<u8>; 20] = [
    Rgb([31, 119, 180]),
    Rgb([174, 199, 232]),
    Rgb([255, 127, 14]),
    Rgb([255, 187, 120]),
    Rgb([44, 160, 44]),
    Rgb([152, 223, 138]),
    Rgb([214, 39, 40]),
    Rgb([255, 152, 150]),
    Rgb([148, 103, 189]),
    Rgb([197, 176, 213]),
    Rgb([140, 86, 75]),
    Rgb([196, 156, 148]),
    Rgb([227, 119, 194]),
    Rgb([247, 182, 210]),
    Rgb([127, 127, 127]),
    Rgb([199, 199, 199]),
    Rgb([188, 189, 34]),
    Rgb([219, 219, 141]),
    Rgb([23, 190, 207]),
    Rgb([158, 218, 229]),
];

/// Trail color for the body at `index` within the selection.
pub fn color_for(index: usize) -> Rgb<u8> {
    PALETTE[index % PALETTE.len()]
}
