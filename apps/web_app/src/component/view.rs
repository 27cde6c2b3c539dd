//! Pure mapping from [`ComponentState`] to the page's visual tree.

use crate::component::state::{ComponentState, FetchPhase};
use crate::controller::events::category_label;

pub const INTRO_TEXT: &str = "Chops example web application.";

/// Assets fixed for the component's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    pub logo_src: &'static str,
    pub logo_alt: &'static str,
    pub intro: &'static str,
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self {
            logo_src: "logo.png",
            logo_alt: "logo",
            intro: INTRO_TEXT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleTone {
    Pending,
    Normal,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Page {
        class: &'static str,
        children: Vec<ViewNode>,
    },
    Header {
        class: &'static str,
        children: Vec<ViewNode>,
    },
    Image {
        class: &'static str,
        src: &'static str,
        alt: &'static str,
    },
    Title {
        class: &'static str,
        text: String,
        tone: TitleTone,
        hint: Option<String>,
    },
    Paragraph {
        class: &'static str,
        text: &'static str,
    },
}

impl ViewNode {
    #[cfg(test)]
    pub(crate) fn title(&self) -> Option<(&str, TitleTone)> {
        match self {
            Self::Title { text, tone, .. } => Some((text.as_str(), *tone)),
            Self::Page { children, .. } | Self::Header { children, .. } => {
                children.iter().find_map(ViewNode::title)
            }
            Self::Image { .. } | Self::Paragraph { .. } => None,
        }
    }
}

pub fn render(state: &ComponentState, assets: &StaticAssets) -> ViewNode {
    let tone = match state.phase() {
        FetchPhase::Awaiting => TitleTone::Pending,
        FetchPhase::Loaded => TitleTone::Normal,
        FetchPhase::Failed(_) => TitleTone::Error,
    };
    let hint = state.failure().map(|failure| {
        format!(
            "{} error: {}",
            category_label(failure.category()),
            failure.message()
        )
    });

    ViewNode::Page {
        class: "App",
        children: vec![
            ViewNode::Header {
                class: "App-header",
                children: vec![
                    ViewNode::Image {
                        class: "App-logo",
                        src: assets.logo_src,
                        alt: assets.logo_alt,
                    },
                    ViewNode::Title {
                        class: "App-title",
                        text: state.app_name().to_string(),
                        tone,
                        hint,
                    },
                ],
            },
            ViewNode::Paragraph {
                class: "App-intro",
                text: assets.intro,
            },
        ],
    }
}
