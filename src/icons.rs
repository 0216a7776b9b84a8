//! Static icon registry. Every icon is a set of stroke primitives drawn
//! on a 24x24 reference box; the render pass scales them to the target
//! size with a group transform. Unknown names return `None` and the
//! caller simply draws no icon.

/// One vector primitive of an icon: an SVG tag name plus its attributes.
#[derive(Debug, Clone, Copy)]
pub struct IconShape {
    pub tag: &'static str,
    pub attrs: &'static [(&'static str, &'static str)],
}

macro_rules! shape {
    ($tag:literal, $($k:literal = $v:literal),* $(,)?) => {
        IconShape { tag: $tag, attrs: &[$(($k, $v)),*] }
    };
}

/// Look up an icon's primitives by name.
pub fn get_icon_data(name: &str) -> Option<&'static [IconShape]> {
    let shapes: &'static [IconShape] = match name {
        "search" => &[
            shape!("circle", "cx" = "11", "cy" = "11", "r" = "8"),
            shape!("line", "x1" = "21", "y1" = "21", "x2" = "16.65", "y2" = "16.65"),
        ],
        "menu" => &[
            shape!("line", "x1" = "3", "y1" = "6", "x2" = "21", "y2" = "6"),
            shape!("line", "x1" = "3", "y1" = "12", "x2" = "21", "y2" = "12"),
            shape!("line", "x1" = "3", "y1" = "18", "x2" = "21", "y2" = "18"),
        ],
        "user" => &[
            shape!("path", "d" = "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"),
            shape!("circle", "cx" = "12", "cy" = "7", "r" = "4"),
        ],
        "home" => &[
            shape!("path", "d" = "M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
            shape!("polyline", "points" = "9 22 9 12 15 12 15 22"),
        ],
        "settings" => &[
            shape!("circle", "cx" = "12", "cy" = "12", "r" = "3"),
            shape!(
                "path",
                "d" = "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"
            ),
        ],
        "plus" => &[
            shape!("line", "x1" = "12", "y1" = "5", "x2" = "12", "y2" = "19"),
            shape!("line", "x1" = "5", "y1" = "12", "x2" = "19", "y2" = "12"),
        ],
        "x" => &[
            shape!("line", "x1" = "18", "y1" = "6", "x2" = "6", "y2" = "18"),
            shape!("line", "x1" = "6", "y1" = "6", "x2" = "18", "y2" = "18"),
        ],
        "check" => &[shape!("polyline", "points" = "20 6 9 17 4 12")],
        "chevron-down" => &[shape!("polyline", "points" = "6 9 12 15 18 9")],
        "chevron-right" => &[shape!("polyline", "points" = "9 18 15 12 9 6")],
        "arrow-right" => &[
            shape!("line", "x1" = "5", "y1" = "12", "x2" = "19", "y2" = "12"),
            shape!("polyline", "points" = "12 5 19 12 12 19"),
        ],
        "bell" => &[
            shape!("path", "d" = "M18 8A6 6 0 0 0 6 8c0 7-3 9-3 9h18s-3-2-3-9"),
            shape!("path", "d" = "M13.73 21a2 2 0 0 1-3.46 0"),
        ],
        "heart" => &[shape!(
            "path",
            "d" = "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"
        )],
        "star" => &[shape!(
            "polygon",
            "points" = "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26"
        )],
        "trash" => &[
            shape!("polyline", "points" = "3 6 5 6 21 6"),
            shape!(
                "path",
                "d" = "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"
            ),
        ],
        "edit" => &[
            shape!("path", "d" = "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"),
            shape!("path", "d" = "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"),
        ],
        "calendar" => &[
            shape!("rect", "x" = "3", "y" = "4", "width" = "18", "height" = "18", "rx" = "2"),
            shape!("line", "x1" = "16", "y1" = "2", "x2" = "16", "y2" = "6"),
            shape!("line", "x1" = "8", "y1" = "2", "x2" = "8", "y2" = "6"),
            shape!("line", "x1" = "3", "y1" = "10", "x2" = "21", "y2" = "10"),
        ],
        "mail" => &[
            shape!("path", "d" = "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"),
            shape!("polyline", "points" = "22 6 12 13 2 6"),
        ],
        _ => return None,
    };
    Some(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_icon_has_shapes() {
        let shapes = get_icon_data("search").unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].tag, "circle");
    }

    #[test]
    fn unknown_icon_is_none() {
        assert!(get_icon_data("definitely-not-an-icon").is_none());
    }
}
