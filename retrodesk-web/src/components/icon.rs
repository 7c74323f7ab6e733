use retrodesk_core::theme::Theme;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
    Contrast,
    Book,
    Section,
}

impl Glyph {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Sun,
            Theme::Dark => Self::Moon,
            Theme::HighContrast => Self::Contrast,
        }
    }

    fn paths(self) -> Html {
        match self {
            Self::Sun => html! {
                <>
                    <circle cx="12" cy="12" r="4" />
                    <path d="M12 2v2M12 20v2M2 12h2M20 12h2M5 5l1.5 1.5M17.5 17.5L19 19M5 19l1.5-1.5M17.5 6.5L19 5" />
                </>
            },
            Self::Moon => html! { <path d="M20 14.5A8 8 0 1 1 9.5 4a6.5 6.5 0 0 0 10.5 10.5z" /> },
            Self::Contrast => html! {
                <>
                    <circle cx="12" cy="12" r="9" />
                    <path d="M12 3a9 9 0 0 1 0 18z" />
                </>
            },
            Self::Book => html! {
                <path d="M4 5a2 2 0 0 1 2-2h13v16H6a2 2 0 0 0-2 2zM4 21V5M8 7h7M8 11h7" />
            },
            Self::Section => html! {
                <>
                    <rect x="3" y="4" width="18" height="16" rx="2" />
                    <path d="M7 9h10M7 13h6" />
                </>
            },
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub glyph: Glyph,
    /// Inline colour override from the palette.
    #[prop_or_default]
    pub style: Option<String>,
}

#[function_component(Icon)]
pub fn icon(p: &Props) -> Html {
    html! {
        <svg
            class="icon"
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
            focusable="false"
            style={p.style.clone()}
        >
            { p.glyph.paths() }
        </svg>
    }
}
