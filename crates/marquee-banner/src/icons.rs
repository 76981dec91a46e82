//! Inline vector glyphs used by the banner.

/// Glyphs the banner draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Play,
    Info,
    Star,
    Clock,
    Monitor,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Play => "play",
            Icon::Info => "info",
            Icon::Star => "star",
            Icon::Clock => "clock",
            Icon::Monitor => "monitor",
        }
    }

    fn body(&self) -> &'static str {
        match self {
            Icon::Play => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            Icon::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Icon::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Icon::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Icon::Monitor => {
                r#"<rect width="20" height="14" x="2" y="3" rx="2"/><line x1="8" x2="16" y1="21" y2="21"/><line x1="12" x2="12" y1="17" y2="21"/>"#
            }
        }
    }

    /// Render as an inline `<svg>` element.
    pub fn svg(&self, size: u32, fill: Option<&str>, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="{fill}" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{class}" data-icon="{name}" aria-hidden="true">{body}</svg>"#,
            size = size,
            fill = fill.unwrap_or("none"),
            class = class,
            name = self.name(),
            body = self.body(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_attributes() {
        let svg = Icon::Star.svg(12, Some("#FFD700"), "text-gold");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="12""#));
        assert!(svg.contains(r##"fill="#FFD700""##));
        assert!(svg.contains(r#"data-icon="star""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_unfilled_icons() {
        assert!(Icon::Clock.svg(10, None, "").contains(r#"fill="none""#));
    }
}
