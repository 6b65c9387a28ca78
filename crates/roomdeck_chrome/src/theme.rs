use egui::{Color32, Stroke, Visuals};

const SKY: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8);
const BLUE_800: Color32 = Color32::from_rgb(0x1e, 0x40, 0xaf);
const RED_700: Color32 = Color32::from_rgb(0xC7, 0x37, 0x5A);
const ORANGE_700: Color32 = Color32::from_rgb(0xF6, 0xB1, 0x4A);

// slate backgrounds
const SLATE_950: Color32 = Color32::from_rgb(0x0b, 0x11, 0x20);
const SLATE_900: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a);
const SLATE_800: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
const SLATE_700: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
const SLATE_400: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);
const SLATE_200: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0);
const SLATE_50: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);

pub struct ColorTheme {
    pub panel_fill: Color32,
    pub extreme_bg_color: Color32,
    pub text_color: Color32,
    pub err_fg_color: Color32,
    pub warn_fg_color: Color32,
    pub hyperlink_color: Color32,
    pub selection_color: Color32,

    pub window_fill: Color32,
    pub window_stroke_color: Color32,

    pub noninteractive_bg_fill: Color32,
    pub noninteractive_weak_bg_fill: Color32,
    pub noninteractive_fg_stroke_color: Color32,

    pub inactive_bg_fill: Color32,
    pub inactive_weak_bg_fill: Color32,
}

pub fn dark_color_theme() -> ColorTheme {
    ColorTheme {
        // VISUALS
        panel_fill: SLATE_900,
        extreme_bg_color: SLATE_950,
        text_color: SLATE_200,
        err_fg_color: RED_700,
        warn_fg_color: ORANGE_700,
        hyperlink_color: SKY,
        selection_color: BLUE_800,

        // WINDOW
        window_fill: SLATE_900,
        window_stroke_color: SLATE_800,

        // NONINTERACTIVE WIDGET
        noninteractive_bg_fill: SLATE_900,
        noninteractive_weak_bg_fill: SLATE_800,
        noninteractive_fg_stroke_color: SLATE_400,

        // INACTIVE WIDGET
        inactive_bg_fill: SLATE_800,
        inactive_weak_bg_fill: SLATE_700,
    }
}

pub fn light_color_theme() -> ColorTheme {
    ColorTheme {
        panel_fill: Color32::WHITE,
        extreme_bg_color: SLATE_50,
        text_color: SLATE_950,
        window_fill: Color32::WHITE,
        window_stroke_color: SLATE_400,
        noninteractive_bg_fill: Color32::WHITE,
        noninteractive_weak_bg_fill: SLATE_50,
        noninteractive_fg_stroke_color: SLATE_700,
        inactive_bg_fill: SLATE_50,
        inactive_weak_bg_fill: SLATE_200,
        ..dark_color_theme()
    }
}

pub fn create_themed_visuals(theme: ColorTheme, default: Visuals) -> Visuals {
    let mut widgets = default.widgets.clone();
    widgets.noninteractive.bg_fill = theme.noninteractive_bg_fill;
    widgets.noninteractive.weak_bg_fill = theme.noninteractive_weak_bg_fill;
    widgets.noninteractive.fg_stroke =
        Stroke::new(widgets.noninteractive.fg_stroke.width, theme.noninteractive_fg_stroke_color);
    widgets.inactive.bg_fill = theme.inactive_bg_fill;
    widgets.inactive.weak_bg_fill = theme.inactive_weak_bg_fill;

    Visuals {
        panel_fill: theme.panel_fill,
        extreme_bg_color: theme.extreme_bg_color,
        override_text_color: Some(theme.text_color),
        error_fg_color: theme.err_fg_color,
        warn_fg_color: theme.warn_fg_color,
        hyperlink_color: theme.hyperlink_color,
        selection: egui::style::Selection {
            bg_fill: theme.selection_color,
            ..default.selection
        },
        window_fill: theme.window_fill,
        window_stroke: Stroke::new(default.window_stroke.width, theme.window_stroke_color),
        widgets,
        ..default
    }
}

pub fn light_mode() -> Visuals {
    create_themed_visuals(light_color_theme(), Visuals::light())
}

pub fn dark_mode() -> Visuals {
    create_themed_visuals(dark_color_theme(), Visuals::dark())
}
