//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme: blue to purple, like the portfolio's gradients
pub fn folio() -> Theme {
    Theme {
        name: "folio".into(),
        display_name: "Folio".into(),
        bg_color: Color::Rgb(17, 24, 39),
        text_color: Color::Rgb(229, 231, 235),
        dim_color: Color::Rgb(156, 163, 175),
        accent_color: Color::Rgb(96, 165, 250),
        secondary_color: Color::Rgb(168, 85, 247),
        title_color: Color::Rgb(147, 197, 253),
        border_color: Color::Rgb(55, 65, 81),
        success_color: Color::Rgb(34, 197, 94),
        error_color: Color::Rgb(239, 68, 68),
        warning_color: Color::Rgb(234, 179, 8),
        nav_solid_bg_color: Color::Rgb(31, 41, 55),
        status_bar_bg_color: Color::Rgb(31, 41, 55),
        scrollbar_bg_color: Color::Rgb(55, 65, 81),
    }
}

/// Uses the terminal's own palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".into(),
        display_name: "Terminal".into(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        accent_color: Color::Blue,
        secondary_color: Color::Magenta,
        title_color: Color::Cyan,
        border_color: Color::DarkGray,
        success_color: Color::Green,
        error_color: Color::Red,
        warning_color: Color::Yellow,
        nav_solid_bg_color: Color::Black,
        status_bar_bg_color: Color::Reset,
        scrollbar_bg_color: Color::DarkGray,
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".into(),
        display_name: "Nord".into(),
        bg_color: Color::Rgb(46, 52, 64),
        text_color: Color::Rgb(236, 239, 244),
        dim_color: Color::Rgb(129, 161, 193),
        accent_color: Color::Rgb(136, 192, 208),
        secondary_color: Color::Rgb(180, 142, 173),
        title_color: Color::Rgb(143, 188, 187),
        border_color: Color::Rgb(76, 86, 106),
        success_color: Color::Rgb(163, 190, 140),
        error_color: Color::Rgb(191, 97, 106),
        warning_color: Color::Rgb(235, 203, 139),
        nav_solid_bg_color: Color::Rgb(59, 66, 82),
        status_bar_bg_color: Color::Rgb(59, 66, 82),
        scrollbar_bg_color: Color::Rgb(67, 76, 94),
    }
}

pub fn dracula() -> Theme {
    Theme {
        name: "dracula".into(),
        display_name: "Dracula".into(),
        bg_color: Color::Rgb(40, 42, 54),
        text_color: Color::Rgb(248, 248, 242),
        dim_color: Color::Rgb(98, 114, 164),
        accent_color: Color::Rgb(139, 233, 253),
        secondary_color: Color::Rgb(255, 121, 198),
        title_color: Color::Rgb(189, 147, 249),
        border_color: Color::Rgb(68, 71, 90),
        success_color: Color::Rgb(80, 250, 123),
        error_color: Color::Rgb(255, 85, 85),
        warning_color: Color::Rgb(241, 250, 140),
        nav_solid_bg_color: Color::Rgb(68, 71, 90),
        status_bar_bg_color: Color::Rgb(33, 34, 44),
        scrollbar_bg_color: Color::Rgb(68, 71, 90),
    }
}

pub fn tokyo_night() -> Theme {
    Theme {
        name: "tokyo_night".into(),
        display_name: "Tokyo Night".into(),
        bg_color: Color::Rgb(26, 27, 38),
        text_color: Color::Rgb(192, 202, 245),
        dim_color: Color::Rgb(86, 95, 137),
        accent_color: Color::Rgb(122, 162, 247),
        secondary_color: Color::Rgb(187, 154, 247),
        title_color: Color::Rgb(125, 207, 255),
        border_color: Color::Rgb(41, 46, 66),
        success_color: Color::Rgb(158, 206, 106),
        error_color: Color::Rgb(247, 118, 142),
        warning_color: Color::Rgb(224, 175, 104),
        nav_solid_bg_color: Color::Rgb(36, 40, 59),
        status_bar_bg_color: Color::Rgb(22, 22, 30),
        scrollbar_bg_color: Color::Rgb(41, 46, 66),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".into(),
        display_name: "Gruvbox Dark".into(),
        bg_color: Color::Rgb(40, 40, 40),
        text_color: Color::Rgb(235, 219, 178),
        dim_color: Color::Rgb(146, 131, 116),
        accent_color: Color::Rgb(131, 165, 152),
        secondary_color: Color::Rgb(211, 134, 155),
        title_color: Color::Rgb(250, 189, 47),
        border_color: Color::Rgb(80, 73, 69),
        success_color: Color::Rgb(184, 187, 38),
        error_color: Color::Rgb(251, 73, 52),
        warning_color: Color::Rgb(254, 128, 25),
        nav_solid_bg_color: Color::Rgb(60, 56, 54),
        status_bar_bg_color: Color::Rgb(50, 48, 47),
        scrollbar_bg_color: Color::Rgb(80, 73, 69),
    }
}
