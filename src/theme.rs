#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Class names each component picks from for the active theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    pub nav: &'static str,
    pub brand: &'static str,
    pub nav_active: &'static str,
    pub nav_idle: &'static str,
    pub toggle: &'static str,
    pub muted: &'static str,
    pub icon_button: &'static str,
}

const DARK_PALETTE: Palette = Palette {
    page: "page page-dark",
    nav: "site-nav nav-dark",
    brand: "brand brand-dark",
    nav_active: "nav-link is-active accent-pink",
    nav_idle: "nav-link text-soft",
    toggle: "theme-toggle toggle-dark",
    muted: "text-soft",
    icon_button: "icon-button icon-button-dark",
};

const LIGHT_PALETTE: Palette = Palette {
    page: "page page-light",
    nav: "site-nav nav-light",
    brand: "brand brand-light",
    nav_active: "nav-link is-active accent-pink-deep",
    nav_idle: "nav-link text-dim",
    toggle: "theme-toggle toggle-light",
    muted: "text-dim",
    icon_button: "icon-button icon-button-light",
};

/// Colors for the particle canvas, as CSS color strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleColors {
    pub dot: &'static str,
    pub link_rgb: (u8, u8, u8),
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        self.is_dark()
    }

    /// Shows the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    pub fn particle_colors(self) -> ParticleColors {
        match self {
            Self::Light => ParticleColors {
                dot: "rgba(126, 34, 206, 0.35)",
                link_rgb: (147, 51, 234),
            },
            Self::Dark => ParticleColors {
                dot: "rgba(236, 72, 153, 0.55)",
                link_rgb: (168, 85, 247),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn toggling_twice_restores_theme() {
        let theme = Theme::default();
        assert_eq!(theme.toggled(), Theme::Light);
        assert!(!theme.toggled().is_dark());
        assert_eq!(theme.toggled().toggled(), theme);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
        assert_ne!(Theme::Dark.particle_colors(), Theme::Light.particle_colors());
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
