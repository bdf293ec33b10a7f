use iced::widget::{button, container, pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

pub const BG: Color = rgb(0.071, 0.082, 0.106);
pub const SURFACE_0: Color = rgb(0.078, 0.094, 0.125);
pub const SURFACE_1: Color = rgb(0.098, 0.118, 0.149);
pub const SURFACE_2: Color = rgb(0.122, 0.145, 0.180);
pub const SURFACE_3: Color = rgb(0.145, 0.176, 0.220);
pub const BORDER: Color = rgb(0.188, 0.227, 0.275);
pub const TEXT: Color = rgb(0.902, 0.925, 0.957);
pub const TEXT_MUTED: Color = rgb(0.518, 0.569, 0.627);
pub const PRIMARY: Color = rgb(0.388, 0.400, 0.945);
pub const PRIMARY_HOVER: Color = rgb(0.506, 0.549, 0.973);
pub const SUCCESS: Color = rgb(0.227, 0.788, 0.435);
pub const DANGER: Color = rgb(0.886, 0.361, 0.361);

const SELECTION: Color = Color { a: 0.35, ..PRIMARY };

pub fn app_theme() -> Theme {
    Theme::custom(
        "FormCraft".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: SUCCESS,
            danger: DANGER,
        },
    )
}

pub fn surface_style(color: Color, border_radius: f32) -> container::Style {
    flat_surface_style(color).border(Border {
        radius: border_radius.into(),
        width: 1.0,
        color: BORDER,
    })
}

pub fn flat_surface_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
}

/// Card around one field on the builder canvas.
pub fn field_card_style(selected: bool) -> container::Style {
    let style = surface_style(if selected { SURFACE_2 } else { SURFACE_1 }, 8.0);
    if selected {
        style.border(Border {
            radius: 8.0.into(),
            width: 2.0,
            color: PRIMARY,
        })
    } else {
        style
    }
}

/// Dashed-looking drop zone of a file field.
pub fn upload_box_style() -> container::Style {
    surface_style(SURFACE_0, 8.0).border(Border {
        radius: 8.0.into(),
        width: 1.0,
        color: TEXT_MUTED,
    })
}

pub fn badge_style() -> container::Style {
    container::Style::default()
        .background(Background::Color(Color { a: 0.15, ..SUCCESS }))
        .color(SUCCESS)
        .border(Border {
            radius: 10.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        })
}

pub fn bar_track_style() -> container::Style {
    flat_surface_style(SURFACE_2).border(Border {
        radius: 4.0.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    })
}

pub fn bar_fill_style() -> container::Style {
    flat_surface_style(PRIMARY).border(Border {
        radius: 4.0.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    })
}

pub fn backdrop_style() -> container::Style {
    container::Style::default().background(Background::Color(Color { a: 0.7, ..Color::BLACK }))
}

pub fn toast_style() -> container::Style {
    surface_style(SURFACE_3, 8.0).shadow(Shadow {
        color: Color { a: 0.4, ..Color::BLACK },
        offset: iced::Vector::new(0.0, 4.0),
        blur_radius: 12.0,
    })
}

fn filled_button(bg: Color, text_color: Color, border: Color, radius: f32) -> button::Style {
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            radius: radius.into(),
            width: 1.0,
            color: border,
        },
        shadow: Shadow::default(),
    }
}

pub fn nav_tab_button(active: bool, _theme: &Theme, status: button::Status) -> button::Style {
    let bg = match (status, active) {
        (button::Status::Hovered, _) | (button::Status::Active, true) => SURFACE_1,
        (button::Status::Pressed, _) => SURFACE_2,
        _ => SURFACE_0,
    };
    let mut style = filled_button(bg, if active { TEXT } else { TEXT_MUTED }, Color::TRANSPARENT, 0.0);
    style.border.width = 0.0;
    style
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => filled_button(PRIMARY_HOVER, TEXT, PRIMARY_HOVER, 8.0),
        button::Status::Disabled => filled_button(SURFACE_3, TEXT_MUTED, SURFACE_3, 8.0),
        button::Status::Active | button::Status::Pressed => filled_button(PRIMARY, TEXT, PRIMARY, 8.0),
    }
}

pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_3,
        button::Status::Active => SURFACE_2,
        button::Status::Disabled => SURFACE_1,
    };
    filled_button(bg, TEXT, BORDER, 8.0)
}

pub fn danger_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => DANGER,
        _ => Color { a: 0.15, ..DANGER },
    };
    filled_button(bg, TEXT, DANGER, 8.0)
}

pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => SURFACE_2,
        _ => Color::TRANSPARENT,
    };
    filled_button(bg, TEXT_MUTED, Color::TRANSPARENT, 6.0)
}

/// Entry of the field-type palette.
pub fn palette_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, border) = match status {
        button::Status::Hovered => (SURFACE_2, PRIMARY),
        button::Status::Pressed => (SURFACE_3, PRIMARY),
        _ => (SURFACE_1, BORDER),
    };
    filled_button(bg, TEXT, border, 6.0)
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused => PRIMARY,
        text_input::Status::Hovered => SURFACE_3,
        text_input::Status::Active | text_input::Status::Disabled => BORDER,
    };

    text_input::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: if matches!(status, text_input::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        selection: SELECTION,
    }
}

pub fn editor_style(_theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let border_color = match status {
        text_editor::Status::Focused => PRIMARY,
        text_editor::Status::Hovered => SURFACE_3,
        text_editor::Status::Active | text_editor::Status::Disabled => BORDER,
    };

    text_editor::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    }
}

pub fn pick_list_style(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let border_color = match status {
        pick_list::Status::Active => BORDER,
        pick_list::Status::Hovered | pick_list::Status::Opened => PRIMARY,
    };

    pick_list::Style {
        text_color: TEXT,
        background: Background::Color(SURFACE_1),
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_MUTED,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color,
        },
    }
}
