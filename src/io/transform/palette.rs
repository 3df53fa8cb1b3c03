//! Colour and line-type palette mapping (§4.4)

/// Maps a source pen-colour code to a target colour index. The mapping is
/// not a clean arithmetic transform below 100 — it was reverse-engineered
/// table entry by table entry — so it stays a literal `match` rather than
/// a formula (§4.4).
pub fn map_color(source: u16) -> i32 {
    match source {
        0 => 0,
        1 => 4,
        2 => 7,
        3 => 3,
        4 => 2,
        5 => 6,
        6 => 5,
        7 => 7,
        8 => 1,
        9 => 8,
        n if n >= 100 => (n as i32) - 100 + 10,
        other => other as i32,
    }
}

/// Maps a source pen-style byte to a target line-type name (§4.4).
pub fn map_line_type(pen_style: u8) -> &'static str {
    match pen_style {
        0 | 1 => "CONTINUOUS",
        2 => "DASHED",
        3 => "DASHDOT",
        4 => "CENTER",
        5 => "DOT",
        6 => "DASHEDX2",
        7 => "DASHDOTX2",
        8 => "CENTERX2",
        9 => "DOTX2",
        _ => "CONTINUOUS",
    }
}
