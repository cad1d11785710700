use eframe::egui::{
    self,
    Color32,
    RichText,
    Stroke,
    Visuals,
};
use egui::style::{
    Selection,
    WidgetVisuals,
    Widgets,
};

/// Backdrop of the 3D view in both variants.
pub const CLOUD_BACKGROUND: Color32 = Color32::from_rgb(0x02, 0x06, 0x17);

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Theme { dark: ThemeDetails::midnight(), light: ThemeDetails::daylight() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).foreground).strong()
    }

    pub fn comment(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).comment
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).error
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).success
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    pub fn busy(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).busy
    }
}

#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    surface: Color32,
    input: Color32,
    border: Color32,
    foreground: Color32,
    comment: Color32,
    accent: Color32,
    success: Color32,
    busy: Color32,
    error: Color32,
}

impl ThemeDetails {
    fn midnight() -> Self {
        Self {
            background: Color32::from_rgb(0x05, 0x08, 0x16),
            surface: Color32::from_rgb(0x0b, 0x11, 0x24),
            input: Color32::from_rgb(0x0a, 0x0f, 0x1f),
            border: Color32::from_rgb(0x22, 0x22, 0x22),
            foreground: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            comment: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            accent: Color32::from_rgb(0x1d, 0x4e, 0xd8),
            success: Color32::from_rgb(0x22, 0xc5, 0x5e),
            busy: Color32::from_rgb(0x6b, 0x72, 0x80),
            error: Color32::from_rgb(0xf9, 0x73, 0x73),
        }
    }

    fn daylight() -> Self {
        Self {
            background: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            input: Color32::from_rgb(0xf1, 0xf5, 0xf9),
            border: Color32::from_rgb(0xcb, 0xd5, 0xe1),
            foreground: Color32::from_rgb(0x11, 0x18, 0x27),
            comment: Color32::from_rgb(0x64, 0x74, 0x8b),
            accent: Color32::from_rgb(0x1d, 0x4e, 0xd8),
            success: Color32::from_rgb(0x16, 0xa3, 0x4a),
            busy: Color32::from_rgb(0x9c, 0xa3, 0xaf),
            error: Color32::from_rgb(0xdc, 0x26, 0x26),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Linear mix of two colors; `t = 0` gives `color_a`.
pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    let widget = |base: WidgetVisuals, fill: Color32, stroke: Color32| WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..base.bg_stroke },
        fg_stroke: Stroke { color: theme.foreground, ..base.fg_stroke },
        ..base
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    theme.surface,
                    theme.border,
                ),
                inactive: widget(default.widgets.inactive, theme.input, theme.border),
                hovered: widget(default.widgets.hovered, theme.input, theme.accent),
                active: widget(default.widgets.active, theme.input, theme.accent),
                open: widget(default.widgets.open, theme.surface, theme.accent),
            },
            selection: Selection {
                bg_fill: theme.accent,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            extreme_bg_color: theme.input,
            error_fg_color: theme.error,
            window_fill: theme.surface,
            window_stroke: Stroke { color: theme.border, ..default.window_stroke },
            panel_fill: theme.background,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}
